// Handler modules
pub mod lint;
pub mod plugin;

// Re-export all handler functions
pub use lint::{LintArgs, handle_lint};
pub use plugin::handle_plugin;
