//! Storage and delivery abstraction trait definition

mod notifier;
mod token_store;

pub use notifier::{ChannelNotifier, LogNotifier, Notifier};
pub use token_store::{AUTH_TOKEN_KEY, InMemoryTokenStore, TokenStore};

// Remote source traits live in the provider crate
pub use integration_hub_provider::{CommandSink, DetailSource, ListSource};
