// Bounded discovery queue.
//
// A fixed-capacity channel between the directory walker (producer) and the
// corpus builder (consumer). Producers block while the queue is full; the
// consumer waits while it is empty. Today there is exactly one producer and
// one consumer, but `PathProducer` is cheaply cloneable so a parallel walker
// can be added without touching the consuming side.

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::error::{Error, Result};

/// Default capacity of the discovery queue.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Anything that accepts discovered paths.
///
/// The walker only depends on this trait, so tests can collect paths into a
/// plain vector and the production path can feed the bounded queue.
pub trait PathSink {
    fn submit(&self, path: PathBuf) -> Result<()>;
}

/// Sending half of the queue.
#[derive(Debug, Clone)]
pub struct PathProducer {
    tx: mpsc::Sender<PathBuf>,
}

/// Receiving half of the queue.
#[derive(Debug)]
pub struct PathConsumer {
    rx: mpsc::Receiver<PathBuf>,
}

/// Create a queue holding at most `capacity` pending paths.
///
/// A zero capacity is raised to 1.
pub fn bounded(capacity: usize) -> (PathProducer, PathConsumer) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (PathProducer { tx }, PathConsumer { rx })
}

impl PathSink for PathProducer {
    /// Enqueue from a blocking thread, waiting while the queue is full.
    ///
    /// Must not be called from inside an async task.
    fn submit(&self, path: PathBuf) -> Result<()> {
        self.tx.blocking_send(path).map_err(|_| Error::QueueClosed)
    }
}

impl PathConsumer {
    /// Dequeue the next path, waiting while the queue is empty.
    ///
    /// Returns `None` once every producer has been dropped and the queue is
    /// drained.
    pub async fn pop(&mut self) -> Option<PathBuf> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fifo_order() {
        let (producer, mut consumer) = bounded(4);
        tokio::task::spawn_blocking(move || {
            producer.submit(PathBuf::from("a.txt"))?;
            producer.submit(PathBuf::from("b.txt"))
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(consumer.pop().await, Some(PathBuf::from("a.txt")));
        assert_eq!(consumer.pop().await, Some(PathBuf::from("b.txt")));
        assert_eq!(consumer.pop().await, None);
    }

    #[tokio::test]
    async fn test_blocking_producer_waits_for_room() {
        // Capacity 1 forces the producer to block until the consumer drains.
        let (producer, mut consumer) = bounded(1);
        let walker = tokio::task::spawn_blocking(move || {
            for i in 0..50 {
                producer.submit(PathBuf::from(format!("{i}.txt")))?;
            }
            Ok::<_, Error>(())
        });

        let mut received = Vec::new();
        while let Some(path) = consumer.pop().await {
            received.push(path);
        }
        walker.await.unwrap().unwrap();

        assert_eq!(received.len(), 50);
        assert_eq!(received[0], PathBuf::from("0.txt"));
        assert_eq!(received[49], PathBuf::from("49.txt"));
    }

    #[tokio::test]
    async fn test_submit_after_consumer_dropped() {
        let (producer, consumer) = bounded(2);
        drop(consumer);
        let err = tokio::task::spawn_blocking(move || producer.submit(PathBuf::from("late.txt")))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, Error::QueueClosed));
    }
}
