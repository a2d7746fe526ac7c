//! Integration Hub Core Library
//!
//! Platform-independent logic of the Integration Hub dashboard:
//! - [`PollingListController`]: polling, selection and detail expansion of
//!   one remote list, safe against out-of-order responses
//! - command services for deals, ERP documents, the ERP connection,
//!   diagnostics and login
//! - configuration, notifications and client-side search
//!
//! Storage and delivery are abstracted through traits ([`TokenStore`],
//! [`Notifier`]); the terminal client provides the implementations.

pub mod config;
pub mod controller;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{EndpointsConfig, HubConfig};
pub use controller::{ControllerOptions, ControllerState, PollingListController};
pub use error::{CoreError, CoreResult};
pub use services::{ServiceContext, Session};
pub use traits::{Notifier, TokenStore};
