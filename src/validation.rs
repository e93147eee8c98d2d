//! Form Validation
//!
//! Declarative per-field rules. Each field keeps at most one message:
//! the first rule that fails.

/// Image file extensions accepted for asset URLs
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "gif", "png", "jpeg"];

/// Field-scoped validation messages, in field declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.has(field) {
            self.errors.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(value)` when no field failed
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Rule chain for a single field
pub struct FieldCheck<'a> {
    field: &'static str,
    value: &'a str,
    error: Option<String>,
}

impl<'a> FieldCheck<'a> {
    pub fn new(field: &'static str, value: &'a str) -> Self {
        Self { field, value, error: None }
    }

    fn rule(mut self, passes: impl FnOnce(&str) -> bool, message: &str) -> Self {
        if self.error.is_none() && !passes(self.value) {
            self.error = Some(message.to_string());
        }
        self
    }

    /// Non-blank: whitespace alone does not count
    pub fn required(self, message: &str) -> Self {
        self.rule(is_present, message)
    }

    /// At least one character, whitespace included
    pub fn non_empty(self, message: &str) -> Self {
        self.rule(|v| !v.is_empty(), message)
    }

    pub fn max_len(self, max: usize, message: &str) -> Self {
        self.rule(|v| v.chars().count() <= max, message)
    }

    pub fn email(self, message: &str) -> Self {
        self.rule(is_email, message)
    }

    pub fn image_url(self, message: &str) -> Self {
        self.rule(is_image_url, message)
    }

    pub fn positive_number(self, message: &str) -> Self {
        self.rule(|v| parse_positive(v).is_some(), message)
    }

    /// Write the outcome into `errors`
    pub fn finish(self, errors: &mut ValidationErrors) {
        if let Some(message) = self.error {
            errors.add(self.field, message);
        }
    }
}

/// Cross-field equality. The error lands on `field` (the confirmation),
/// and only if that field passed its own rules.
pub fn must_equal(errors: &mut ValidationErrors, field: &'static str, original: &str, confirmation: &str, message: &str) {
    if !errors.has(field) && original != confirmation {
        errors.add(field, message);
    }
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Matches `.*\.(jpg|gif|png|jpeg)$`, case-sensitive
pub fn is_image_url(value: &str) -> bool {
    match value.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Coerce form text to a strictly positive finite number
pub fn parse_positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
