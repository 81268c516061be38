//! CLI command implementations for errwrap.
//!
//! - **check**: analyze Go files and optionally apply the suggested fixes
//! - **init**: write a default configuration file

pub mod check;
pub mod init;

pub use check::{check_file, handle_check, run_check, CheckConfig, CheckOutcome};
pub use init::{init_config, init_config_in};
