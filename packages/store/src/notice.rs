//! User-facing notifications derived from slice state.

/// Visual treatment of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Error,
    Success,
}

/// A notification title and body ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn loading(title: &str, message: &str) -> Self {
        Self::new(NoticeKind::Loading, title, message)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    fn new(kind: NoticeKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
