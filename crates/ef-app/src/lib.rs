//! Application service layer for escapeflow.
//!
//! This crate owns everything between a line of user input and the flow
//! engine: command parsing and validation, the network registry, textual
//! reports, session configuration and the interactive session loop. The CLI
//! is a thin shell around it.

pub mod command;
pub mod config;
pub mod error;
pub mod network;
pub mod registry;
pub mod session;

// Re-export key types for convenience
pub use command::{Command, parse_section, parse_sections};
pub use config::SessionConfig;
pub use error::{AppError, AppResult};
pub use network::Network;
pub use registry::{NetworkRegistry, NetworkSummary};
pub use session::{EMPTY_REPORT, Session};
