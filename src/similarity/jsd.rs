// Jensen-Shannon distance between two word-frequency distributions.
//
// For every word w with frequencies a(w), b(w) the reference distribution is
//
//   m(w) = (a(w) + b(w)) / 2   when w appears in both documents
//   m(w) = p(w) / 2            when w appears in only one of them
//
// and the distance is
//
//   sqrt(0.5 * KLD(A || M) + 0.5 * KLD(B || M)),  KLD(P || M) = sum p * log2(p / m)
//
// taken over the words present in each side. Base-2 logs keep the result in
// [0, 1]: 0 for identical distributions, 1 for disjoint vocabularies.

use crate::error::{Error, Result};
use crate::text::frequency::WordFrequencies;

/// Square-rooted Jensen-Shannon divergence of `a` and `b`.
///
/// Both distributions must be non-empty. Runs in O(|A| + |B|) using keyed
/// lookups into the other side; neither input is modified.
pub fn distance(a: &WordFrequencies, b: &WordFrequencies) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyDistribution);
    }

    let kld_a = kld_against_midpoint(a, b)?;
    let kld_b = kld_against_midpoint(b, a)?;
    let divergence = 0.5 * kld_a + 0.5 * kld_b;

    if !divergence.is_finite() {
        return Err(Error::ArithmeticInvariantViolation {
            word: String::new(),
            detail: format!("divergence evaluated to {divergence}"),
        });
    }

    // Rounding can leave a tiny negative residue when both sides are equal.
    Ok(divergence.max(0.0).sqrt())
}

/// KLD(P || M) summed over the words present in `p`.
fn kld_against_midpoint(p: &WordFrequencies, other: &WordFrequencies) -> Result<f64> {
    let mut total = 0.0;
    for entry in p.entries() {
        let m = match other.get(&entry.word) {
            Some(shared) => (entry.frequency + shared.frequency) / 2.0,
            None => entry.frequency / 2.0,
        };
        total += contribution(&entry.word, entry.frequency, m)?;
    }
    Ok(total)
}

/// `p * log2(p / m)`, refusing a zero reference probability.
fn contribution(word: &str, p: f64, m: f64) -> Result<f64> {
    if p <= 0.0 {
        return Ok(0.0);
    }
    if m <= 0.0 {
        return Err(Error::ArithmeticInvariantViolation {
            word: word.to_string(),
            detail: format!("reference probability {m} for observed frequency {p}"),
        });
    }
    Ok(p * (p / m).log2())
}
