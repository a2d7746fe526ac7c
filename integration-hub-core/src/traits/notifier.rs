//! Notification sink Trait

use tokio::sync::mpsc;

use crate::types::{Notification, NotificationLevel};

/// Notification sink
///
/// Receives transient user-facing messages (toasts). Delivery is fire and
/// forget: a sink that cannot deliver drops the message.
pub trait Notifier: Send + Sync {
    /// Push a notification
    fn notify(&self, notification: Notification);
}

/// Forwards notifications into an unbounded channel drained by the view.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            log::debug!("Notification dropped: receiver closed");
        }
    }
}

/// Writes notifications to the log. Used when there is no view attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { title, message, .. } = &notification;
        match notification.level {
            NotificationLevel::Error => log::warn!("[notify] {title}: {message}"),
            NotificationLevel::Info | NotificationLevel::Success => {
                log::info!("[notify] {title}: {message}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        notifier.notify(Notification::info("a", "1"));
        notifier.notify(Notification::error("b", "2"));

        assert_eq!(rx.try_recv().unwrap().title, "a");
        let second = rx.try_recv().unwrap();
        assert!(second.is_error());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);
        notifier.notify(Notification::info("a", "1"));
    }
}
