// Output formatting: the pair report and terminal display.

pub mod report;
pub mod terminal;
