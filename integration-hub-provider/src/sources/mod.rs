//! reqwest-backed implementations of the source traits.

mod command;
mod detail;
mod list;

pub use command::HttpCommandSink;
pub use detail::{DetailEndpoint, DetailStyle, HttpDetailSource, extract_detail};
pub use list::{FilterForwarding, HttpListSource, ListEndpoint, extract_records};
