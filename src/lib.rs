/// Legal AI Clause Assistant (TUI Edition)
///
/// Terminal demo of a contract clause reviewer: submit a contract, browse
/// its risk-rated clauses and ask a mock assistant about them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
