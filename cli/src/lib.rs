pub mod browse;
pub mod commands;
pub mod context;
pub mod dialog;
pub mod logging;

pub use context::CliContext;
