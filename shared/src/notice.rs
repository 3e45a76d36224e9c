/// Whether a notification reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient on-screen notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Unique per screen; used to dismiss exactly this notice
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

/// Holds the current notice of a screen and hands out ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u32,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replace the current notice, returning the new notice's id
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.current = Some(Notice { id, kind, text: text.into() });
        id
    }

    /// Dismiss the notice with `id`; a newer notice is left alone
    pub fn dismiss(&mut self, id: u32) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_only_matching_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(NoticeKind::Success, "ok");
        let second = slot.show(NoticeKind::Error, "failed");
        assert_ne!(first, second);

        slot.dismiss(first);
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some("failed"));

        slot.dismiss(second);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_css_class_by_kind() {
        let mut slot = NoticeSlot::default();
        slot.show(NoticeKind::Error, "x");
        assert_eq!(slot.current().unwrap().css_class(), "notice notice-error");
    }
}
