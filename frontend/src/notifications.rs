use crate::components::common_toast::{Toast, ToastType};
use crate::config::Config;
use log::{error, info, warn};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "EXITO",
            NotificationKind::Error => "ERROR",
        }
    }
}

/// Outcome report for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Receives exactly one notification per mutating outcome
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Blocking interactions that go beyond a notification
pub trait Prompt {
    /// Modal message the user has to acknowledge
    fn alert(&self, message: &str);

    /// Leaves the panel for the sign-in page
    fn go_to_sign_in(&self);
}

/// Shows notifications as toasts and mirrors them to the log
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    add_toast: Callback<Toast>,
}

impl ToastNotifier {
    pub fn new(add_toast: Callback<Toast>) -> Self {
        Self { add_toast }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let label = notification.kind.label();
        let toast = match notification.kind {
            NotificationKind::Success => {
                info!("[{}] {}", label, notification.message);
                Toast::new(notification.message, ToastType::Success)
            }
            NotificationKind::Error => {
                error!("[{}] {}", label, notification.message);
                // Errors stay up longer
                Toast::new(notification.message, ToastType::Error).with_duration(8000)
            }
        };
        self.add_toast.emit(toast);
    }
}

/// `window.alert` and a full navigation to the sign-in page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowPrompt;

impl Prompt for WindowPrompt {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window to show alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!("Failed to show alert: {:?}", e);
        }
    }

    fn go_to_sign_in(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(Config::sign_in_path()) {
            error!("Failed to redirect to sign-in: {:?}", e);
        }
    }
}
