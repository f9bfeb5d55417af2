//! Notifications.
//!
//! Defines the fire-and-forget `Notifier` trait and the Telegram
//! implementation. Delivery failures are logged and swallowed: a dead
//! messaging endpoint must never block or abort candidate evaluation.

pub mod telegram;

use async_trait::async_trait;

/// Fire-and-forget message sink.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a buy-signal message. Never fails from the caller's view.
    async fn notify(&self, message: &str);

    /// Send an operational alert (separate channel where configured).
    async fn alert(&self, message: &str);
}
