//! cmdic library exports for testing

pub mod core;
pub mod dict;
pub mod launcher;
pub mod runner;
pub mod tui;

#[cfg(test)]
pub mod test_support;
