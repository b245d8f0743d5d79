// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::info;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Icon shown next to a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Bell,
}

/// Screen position of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "topR")]
    TopRight,
}

/// A transient toast acknowledging the outcome of a user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: Icon,
    pub position: Position,
}

impl Notification {
    /// The toast dispatched after an entry transaction reaches one
    /// confirmation.
    pub fn transaction_complete() -> Self {
        Notification {
            severity: Severity::Info,
            title: "Tx Notification".to_string(),
            message: "Transaction Complete!".to_string(),
            icon: Icon::Bell,
            position: Position::TopRight,
        }
    }
}

/// Where the view sends its notifications.
///
/// A trait rather than a concrete widget so the view can be exercised
/// without a display surface.
pub trait NotificationSink: Send + Sync {
    fn dispatch(&self, notification: Notification);
}

/// Delivers notifications to the log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn dispatch(&self, notification: Notification) {
        info!(
            title = %notification.title,
            message = %notification.message,
            "notification"
        );
    }
}
