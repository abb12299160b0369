use serde::Serialize;
use std::collections::BTreeMap;

pub const TITLE_FIELD: &str = "title";
pub const BODY_FIELD: &str = "body";

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 40;
pub const BODY_MIN_CHARS: usize = 10;

/// Per-field error messages produced by form validation. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check submitted article fields. Lengths are counted in characters, not bytes.
pub fn validate_article_form(title: &str, body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let title_chars = title.chars().count();
    if title.is_empty() {
        errors.insert(TITLE_FIELD, "title cannot be empty");
    } else if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_chars) {
        errors.insert(
            TITLE_FIELD,
            format!("title length must be between {TITLE_MIN_CHARS}-{TITLE_MAX_CHARS} characters"),
        );
    }

    if body.is_empty() {
        errors.insert(BODY_FIELD, "body cannot be empty");
    } else if body.chars().count() < BODY_MIN_CHARS {
        errors.insert(
            BODY_FIELD,
            format!("body length must be at least {BODY_MIN_CHARS} characters"),
        );
    }

    errors
}
