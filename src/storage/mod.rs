//! Local persistent state
//!
//! The only thing this client persists is the session token.

mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
