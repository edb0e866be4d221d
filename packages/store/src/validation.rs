//! # Form state and field validation
//!
//! Validators return `None` when the value is acceptable and `Some(message)`
//! otherwise, so the view can render the message under the offending input.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | email | one `@` with non-whitespace on both sides, no whitespace anywhere | "Invalid email" |
//! | password | at least 6 characters | "Password should include at least 6 characters" |
//! | name | at least 2 characters, register mode only | "Name must have at least 2 characters" |
//! | task title | not blank | "Title is required" |
//!
//! Lengths are UTF-16 code units and whitespace is the JavaScript `\s` class, so
//! the rules accept exactly what the browser-side form used to accept.
//!
//! The name field shows "Invalid name" rather than the validator's message.

use crate::models::{Credentials, NewTask, Registration};

/// Which of the two authentication forms is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }

    /// Submit button label.
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Text of the link that switches to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }
}

/// Length as JavaScript's `String.length` counts it.
fn js_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Membership in JavaScript's `\s` class.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    // ^\S+@\S+$
    let valid = !email.chars().any(is_js_whitespace)
        && email
            .char_indices()
            .any(|(i, c)| c == '@' && i > 0 && i + 1 < email.len());
    if valid {
        None
    } else {
        Some("Invalid email")
    }
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if js_length(password) < 6 {
        Some("Password should include at least 6 characters")
    } else {
        None
    }
}

pub fn validate_name(name: &str, mode: AuthMode) -> Option<&'static str> {
    if mode == AuthMode::Register && js_length(name) < 2 {
        Some("Name must have at least 2 characters")
    } else {
        None
    }
}

/// Values of the authentication form.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub terms: bool,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            password: String::new(),
            terms: true,
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub name: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none()
    }

    /// Text rendered under the name input.
    pub fn name_message(&self) -> Option<&'static str> {
        self.name.map(|_| "Invalid name")
    }
}

impl AuthForm {
    pub fn validate(&self, mode: AuthMode) -> FieldErrors {
        FieldErrors {
            email: validate_email(&self.email),
            name: validate_name(&self.name, mode),
            password: validate_password(&self.password),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Values of the task creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskErrors {
    pub title: Option<&'static str>,
}

impl TaskErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

impl TaskDraft {
    pub fn validate(&self) -> TaskErrors {
        TaskErrors {
            title: self
                .title
                .trim()
                .is_empty()
                .then_some("Title is required"),
        }
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert_eq!(validate_email("ada@example.com"), None);
        assert_eq!(validate_email("a@b"), None);
        assert_eq!(validate_email("a@b@c"), None);
        assert_eq!(validate_email(""), Some("Invalid email"));
        assert_eq!(validate_email("ada"), Some("Invalid email"));
        assert_eq!(validate_email("@example.com"), Some("Invalid email"));
        assert_eq!(validate_email("ada@"), Some("Invalid email"));
        assert_eq!(validate_email("ada @example.com"), Some("Invalid email"));
        assert_eq!(validate_email("ada@example.com "), Some("Invalid email"));
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_some());
        assert!(validate_password("123456").is_none());
        assert_eq!(
            validate_password(""),
            Some("Password should include at least 6 characters")
        );
    }

    #[test]
    fn test_name_only_checked_when_registering() {
        assert_eq!(validate_name("", AuthMode::Login), None);
        assert_eq!(
            validate_name("A", AuthMode::Register),
            Some("Name must have at least 2 characters")
        );
        assert_eq!(validate_name("Al", AuthMode::Register), None);
    }

    #[test]
    fn test_lengths_count_like_the_browser() {
        assert!(validate_name("é", AuthMode::Register).is_some());
        assert!(validate_name("éé", AuthMode::Register).is_none());
        assert!(validate_password("ééééé").is_some());
        assert!(validate_password("éééééé").is_none());
        // Each emoji is two UTF-16 units.
        assert!(validate_password("😀😀😀").is_none());
        assert!(validate_password("😀😀").is_some());
        assert!(validate_name("😀", AuthMode::Register).is_none());
    }

    #[test]
    fn test_email_whitespace_matches_browser_class() {
        assert_eq!(validate_email("\u{feff}a@b"), Some("Invalid email"));
        assert_eq!(validate_email("a@b\u{a0}"), Some("Invalid email"));
        assert_eq!(validate_email("a\u{2003}@b"), Some("Invalid email"));
        // U+0085 is not in the class.
        assert_eq!(validate_email("a\u{85}@b"), None);
        assert_eq!(validate_email("é@ü"), None);
    }

    #[test]
    fn test_name_error_text() {
        let form = AuthForm {
            name: "A".to_string(),
            ..Default::default()
        };
        let errors = form.validate(AuthMode::Register);
        assert_eq!(errors.name, Some("Name must have at least 2 characters"));
        assert_eq!(errors.name_message(), Some("Invalid name"));
        assert_eq!(FieldErrors::default().name_message(), None);
    }

    #[test]
    fn test_mode_toggle_and_labels() {
        let mode = AuthMode::default();
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(mode.label(), "Login");
        assert_eq!(mode.switch_prompt(), "Don't have an account? Register");

        let mode = mode.toggle();
        assert_eq!(mode.as_str(), "register");
        assert_eq!(mode.label(), "Register");
        assert_eq!(mode.switch_prompt(), "Already have an account? Login");
        assert_eq!(mode.toggle(), AuthMode::Login);
    }

    #[test]
    fn test_form_validation() {
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            name: String::new(),
            password: "secret1".to_string(),
            ..Default::default()
        };
        assert!(form.terms);
        assert!(form.validate(AuthMode::Login).is_empty());

        let errors = form.validate(AuthMode::Register);
        assert!(!errors.is_empty());
        assert_eq!(errors.name, Some("Name must have at least 2 characters"));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_form_payloads() {
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            password: "secret1".to_string(),
            terms: false,
        };
        assert_eq!(form.credentials().email, "ada@example.com");
        let reg = form.registration();
        assert_eq!(reg.name, "Ada");
        assert_eq!(reg.password, "secret1");
    }

    #[test]
    fn test_task_draft() {
        let draft = TaskDraft {
            title: "   ".to_string(),
            description: String::new(),
        };
        assert_eq!(draft.validate().title, Some("Title is required"));

        let draft = TaskDraft {
            title: "  Write report ".to_string(),
            description: " by friday ".to_string(),
        };
        assert!(draft.validate().is_empty());
        let task = draft.to_new_task();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "by friday");
    }
}
