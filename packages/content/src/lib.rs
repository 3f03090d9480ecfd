// ABOUTME: Content lifecycle controller for Copydeck
// ABOUTME: Owns the generated draft and every transition it goes through

pub mod error;
pub mod gateway;
pub mod manager;
pub mod notifier;

pub use error::{ContentError, Result};
pub use gateway::ContentGateway;
pub use manager::ContentManager;
pub use notifier::{Notice, NoticeLevel, Notifier, NullNotifier};
