//! Command implementations for the CLI.
//!
//! [`dispatch`] parses the command line and routes each verb to the
//! module implementing it.

pub mod completions;
pub mod dispatch;
pub mod report_cmd;
pub mod trade;
