//! Declarative per-field form validation.
//!
//! Each form declares a static table of `FieldSpec`s; `validate` walks the
//! table and records the first failing rule's message for every field.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Same shape as the browser form library's email check: a plain or quoted
/// local part, then a bracketed IPv4 address or a domain that may contain
/// non-ASCII letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@"#,
        r#"((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|"#,
        r#"(([a-zA-Z\-0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+\.)+"#,
        r#"[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}))$"#,
    ))
    .expect("email pattern is a valid regex")
});

/// A single constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required(&'static str),
    /// Value, when present, must look like an email address
    Email(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        match *self {
            Rule::Required(message) if value.is_empty() => Err(message),
            Rule::Email(message) if !value.is_empty() && !is_valid_email(value) => Err(message),
            _ => Ok(()),
        }
    }
}

/// The rules that apply to one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<F: 'static> {
    pub field: F,
    pub rules: &'static [Rule],
}

/// Field-level validation messages, at most one per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    errors: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Drop the message for a field once the user edits it
    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    fn insert(&mut self, field: F, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }
}

/// Evaluate every spec against the values supplied by `value_of`.
pub fn validate<'a, F, V>(specs: &[FieldSpec<F>], value_of: V) -> FormErrors<F>
where
    F: Ord + Copy,
    V: Fn(F) -> &'a str,
{
    let mut errors = FormErrors::default();
    for spec in specs {
        let value = value_of(spec.field);
        if let Some(message) = spec.rules.iter().find_map(|rule| rule.check(value).err()) {
            errors.insert(spec.field, message);
        }
    }
    errors
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Email,
        Note,
    }

    const SPECS: &[FieldSpec<Field>] = &[
        FieldSpec { field: Field::Name, rules: &[Rule::Required("name required")] },
        FieldSpec {
            field: Field::Email,
            rules: &[Rule::Required("email required"), Rule::Email("email invalid")],
        },
        FieldSpec { field: Field::Note, rules: &[] },
    ];

    fn run(name: &str, email: &str) -> FormErrors<Field> {
        validate(SPECS, |field| match field {
            Field::Name => name,
            Field::Email => email,
            Field::Note => "",
        })
    }

    #[test]
    fn test_required_fields_report_their_message() {
        let errors = run("", "");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some("name required"));
        assert_eq!(errors.get(Field::Email), Some("email required"));
        assert_eq!(errors.get(Field::Note), None);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let errors = run("A", "not-an-email");
        assert_eq!(errors.get(Field::Email), Some("email invalid"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(run("A", "a@school.edu.vn").is_empty());
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = run("", "");
        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("example@school.edu.vn"));
        assert!(is_valid_email("first.last@domain.io"));
        assert!(!is_valid_email("no-at-sign.vn"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@school.vn"));
        assert!(!is_valid_email("@school.vn"));
    }

    #[test]
    fn test_email_accepts_quoted_local_part_and_unicode_domain() {
        assert!(is_valid_email("a@trường.vn"));
        assert!(is_valid_email("giáo.viên@trường-thpt.edu.vn"));
        assert!(is_valid_email(r#""nguyen van a"@school.vn"#));
        assert!(is_valid_email("admin@[192.168.1.10]"));
        assert!(!is_valid_email("a@trường"));
        assert!(!is_valid_email("a@@school.vn"));
    }
}
