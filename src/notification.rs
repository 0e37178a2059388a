//! Conversion notification / diagnostic system.
//!
//! Non-fatal issues met while converting a deck (a solid that cannot be
//! reconstructed, an ident that matches no group, an alias region) are
//! collected as `Notification` items instead of aborting the run.
//!
//! After a conversion the caller can inspect
//! [`ConversionSummary::notifications`](crate::io::comgeom::ConversionSummary)
//! to see what was encountered. Each notification is also emitted as a
//! `tracing` event when it is recorded.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Record type the converter does not support.
    NotSupported,
    /// Non-fatal warning (e.g., unmatched ident, alias region).
    Warning,
    /// Error that was recovered from (e.g., a solid that was skipped).
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during a conversion.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
    /// Deck line the issue was found on, when known.
    pub line: Option<usize>,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            line: None,
        }
    }

    /// Builder: attach the deck line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.notification_type, line, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a conversion.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    /// Record a notification tied to a deck line.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        line: usize,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(notification_type, message).at_line(line));
    }

    fn push(&mut self, notification: Notification) {
        match notification.notification_type {
            NotificationType::Error => tracing::error!("{}", notification),
            NotificationType::Warning | NotificationType::NotSupported => {
                tracing::warn!("{}", notification)
            }
        }
        self.items.push(notification);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Check whether any notification message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.items.iter().any(|n| n.message.contains(needle))
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
