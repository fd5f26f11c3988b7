//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! Every attempt checks all four fields in a fixed order without stopping at
//! the first failure. A rejected attempt marks each bad field with a red
//! border and lists every message; an accepted attempt thanks the sender by
//! name and resets the form. Nothing leaves the page.
//!
//! The email check is the minimal `^\S+@\S+\.\S+$` shape test and accepts
//! addresses such as `a@b..c`. Whitespace, both there and when trimming, is
//! the browser's set: ASCII space and controls plus the Unicode space
//! separators, line/paragraph separators and the BOM.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::config::FormConfig;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Non-ASCII whitespace in a browser's `\s`. regex-lite's `\s` is ASCII-only.
const UNICODE_SPACE: &str = r"\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}";

fn email_pattern() -> String {
    let word = format!(r"[^\s{UNICODE_SPACE}]+");
    format!(r"^{word}@{word}\.{word}$")
}

// A constant pattern always compiles; `Option` only avoids an `expect` here.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(&email_pattern()) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("form: email pattern rejected: {err}");
        None
    }
});

/// The four tracked inputs, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Element id of this field's input.
    #[must_use]
    pub fn element_id(self, config: &FormConfig) -> &str {
        match self {
            Self::Name => &config.name_id,
            Self::Email => &config.email_id,
            Self::Subject => &config.subject_id,
            Self::Message => &config.message_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// All four located field elements, or `None` if any is missing.
pub fn all_fields<T>(found: [Option<T>; 4]) -> Option<[T; 4]> {
    let [name, email, subject, message] = found;
    Some([name?, email?, subject?, message?])
}

/// Raw field values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Capture the current values from a form view.
    pub fn read<V: FormView + ?Sized>(view: &V) -> Self {
        Self {
            name: view.value(Field::Name),
            email: view.value(Field::Email),
            subject: view.value(Field::Subject),
            message: view.value(Field::Message),
        }
    }
}

/// Whitespace as a browser's `String.prototype.trim` sees it. Unlike
/// `char::is_whitespace` this includes the BOM and excludes U+0085.
fn is_space(ch: char) -> bool {
    matches!(
        ch,
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

/// Trim a field value before checking it.
#[must_use]
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(is_space)
}

/// Loose email shape check: `something@something.something`, no whitespace.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Validate every field. An empty result means the submission is accepted.
#[must_use]
pub fn validate(submission: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if trim_field(&submission.name).is_empty() {
        errors.push(FieldError::new(Field::Name, "El nombre es obligatorio."));
    }
    let email = trim_field(&submission.email);
    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, "El correo electrónico es obligatorio."));
    } else if !is_plausible_email(email) {
        errors.push(FieldError::new(Field::Email, "Ingrese un correo electrónico válido."));
    }
    if trim_field(&submission.subject).is_empty() {
        errors.push(FieldError::new(Field::Subject, "El asunto es obligatorio."));
    }
    if trim_field(&submission.message).is_empty() {
        errors.push(FieldError::new(Field::Message, "El mensaje es obligatorio."));
    }
    errors
}

/// Content written to the feedback region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Plain text, styled as an error.
    Error { text: String, class: String },
    /// Trusted markup, styled as a success.
    Success { html: String, class: String },
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rejected(Vec<FieldError>),
    Accepted { name: String },
}

/// Everything the validator needs from the page.
pub trait FormView {
    fn value(&self, field: Field) -> String;
    /// Set the field's border color. An empty color clears it.
    fn set_border(&self, field: Field, color: &str);
    fn show_feedback(&self, feedback: &Feedback);
    fn reset(&self);
}

pub struct ContactForm {
    config: FormConfig,
}

impl ContactForm {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Handle one submit event against `view`.
    pub fn submit<V: FormView + ?Sized>(&self, view: &V) -> Outcome {
        for field in Field::ALL {
            view.set_border(field, "");
        }

        let submission = ContactSubmission::read(view);
        let errors = validate(&submission);

        if errors.is_empty() {
            log::info!("form: submission accepted");
            view.show_feedback(&Feedback::Success {
                html: success_html(&submission.name),
                class: self.config.success_class.clone(),
            });
            view.reset();
            return Outcome::Accepted { name: submission.name };
        }

        log::debug!("form: rejected with {} error(s)", errors.len());
        for error in &errors {
            view.set_border(error.field, &self.config.error_border_color);
        }
        let text = errors.iter().map(|e| e.message).collect::<Vec<_>>().join(" ");
        view.show_feedback(&Feedback::Error { text, class: self.config.error_class.clone() });
        Outcome::Rejected(errors)
    }
}

fn success_html(name: &str) -> String {
    format!(
        "¡Gracias por su contacto, <span class='text-pink-500'>{}</span>!<br>En breve le estaré respondiendo.",
        escape_html(name)
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
