//! Toast notifications
//!
//! Transient, self-dismissing feedback messages. Toasts stack without limit
//! and carry no identity beyond their id.

use crate::consts::cli_consts::timers::notification_ttl;
use ratatui::prelude::Color;
use std::str::FromStr;
use std::time::Instant;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parses a kind name; unknown names fall back to info.
    pub fn parse_lenient(kind: &str) -> Self {
        Self::from_str(kind).unwrap_or_default()
    }

    /// Icon name of the kind.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-triangle",
            NotificationKind::Warning => "exclamation-circle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Glyph drawn in the terminal for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "▲",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "ℹ",
        }
    }

    pub fn hex_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Warning => "#f59e0b",
            NotificationKind::Info => "#111111",
        }
    }

    pub fn color(&self) -> Color {
        Color::from_str(self.hex_color()).unwrap_or(Color::DarkGray)
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.created_at + notification_ttl()
    }
}

/// Owns the live toasts, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl NotificationCenter {
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        let toast = Toast {
            id,
            message: message.into(),
            kind,
            created_at: now,
        };
        log::debug!("Toast {} [{}]: {}", id, kind, toast.message);
        self.toasts.push(toast);
        id
    }

    /// Manual close. Returns false when the toast is already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Closes the most recent toast, if any.
    pub fn dismiss_latest(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    /// Drops every toast whose lifetime has elapsed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at() > now);
        before - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn success_toast_maps_icon_and_color_and_expires_after_ttl() {
        let start = Instant::now();
        let mut center = NotificationCenter::default();
        let id = center.notify("Item 5 excluído", NotificationKind::Success, start);

        let toast = &center.toasts()[0];
        assert_eq!(toast.id, id);
        assert_eq!(toast.kind.icon(), "check-circle");
        assert_eq!(toast.kind.hex_color(), "#10b981");
        assert_eq!(toast.kind.color(), Color::Rgb(0x10, 0xb9, 0x81));

        assert_eq!(center.expire(start + Duration::from_millis(4999)), 0);
        assert_eq!(center.len(), 1);
        assert_eq!(center.expire(start + Duration::from_millis(5000)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn manual_dismissal_before_timeout() {
        let start = Instant::now();
        let mut center = NotificationCenter::default();
        let id = center.notify("Dados salvos com sucesso!", NotificationKind::Success, start);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert_eq!(center.expire(start + Duration::from_secs(6)), 0);
    }

    #[test]
    fn toasts_stack_without_deduplication() {
        let start = Instant::now();
        let mut center = NotificationCenter::default();
        for _ in 0..25 {
            center.notify("Editando item 7", NotificationKind::Info, start);
        }
        assert_eq!(center.len(), 25);
        let ids: std::collections::HashSet<_> = center.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn unknown_kind_defaults_to_info() {
        assert_eq!(NotificationKind::parse_lenient("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::parse_lenient("bogus"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse_lenient("bogus").icon(), "info-circle");
    }
}
