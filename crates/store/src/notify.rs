//! Confirmation notices surfaced to the user after successful writes.
//!
//! Showing them is the host's job (a toast, a status line, a log entry); the
//! store only decides *when* and *which*.

use std::time::Duration;

/// How long a notice stays on screen before it dismisses itself.
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticePosition {
    Top,
}

/// One notice per kind of successful write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notice {
    ItemAdded,
    ItemUpdated,
    ItemDeleted,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ItemAdded => "Item agregado",
            Notice::ItemUpdated => "Item actualizado",
            Notice::ItemDeleted => "Item eliminado",
        }
    }

    pub fn position(&self) -> NoticePosition {
        NoticePosition::Top
    }

    pub fn duration(&self) -> Duration {
        NOTICE_DURATION
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Host capability: present a transient notice to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that only records notices in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(
            message = notice.message(),
            duration_ms = notice.duration().as_millis() as u64,
            "notice"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages() {
        assert_eq!(Notice::ItemAdded.message(), "Item agregado");
        assert_eq!(Notice::ItemUpdated.message(), "Item actualizado");
        assert_eq!(Notice::ItemDeleted.to_string(), "Item eliminado");
    }

    #[test]
    fn notices_are_short_and_on_top() {
        for notice in [Notice::ItemAdded, Notice::ItemUpdated, Notice::ItemDeleted] {
            assert_eq!(notice.position(), NoticePosition::Top);
            assert_eq!(notice.duration(), Duration::from_millis(1500));
        }
    }
}
