//! Notification severity, rendered as the `alert-<kind>` class suffix.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Parse a kind forwarded from the page; anything unknown is Info.
    pub fn from_value(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_suffix_round_trips() {
        for kind in [
            NotificationKind::Success,
            NotificationKind::Info,
            NotificationKind::Error,
        ] {
            assert_eq!(NotificationKind::from_value(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_values_fall_back_to_info() {
        assert_eq!(NotificationKind::from_value("warning"), NotificationKind::Info);
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
