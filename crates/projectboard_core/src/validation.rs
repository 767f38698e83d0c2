//! Pure input validation for form fields.
//!
//! # Responsibility
//! - Check one field value against its configured constraints.
//! - Keep form-wide constraint defaults in a single policy struct.
//!
//! # Invariants
//! - `validate` has no side effects.
//! - Absent constraints are vacuously true; configured constraints AND
//!   together.
//! - Length bounds apply to text values only, numeric bounds to numbers only.

/// Raw field value as read from the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    /// Renders the value as the text a user would see in the field.
    fn rendered(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Ephemeral constraint descriptor for one field value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Checks all configured constraints on one field value.
///
/// `required` looks at the rendered text after trimming, so a numeric zero
/// still counts as present and only fails its `min` bound. NaN fails every
/// configured numeric bound, which makes unparsable numeric input invalid
/// without a separate error path.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.rendered().trim().is_empty();
    }

    if let FieldValue::Text(value) = &input.value {
        let length = value.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && length >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && length <= max_length;
        }
    }

    if let FieldValue::Number(value) = &input.value {
        if let Some(min) = input.min {
            is_valid = is_valid && *value >= min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && *value <= max;
        }
    }

    is_valid
}

/// Form-wide constraint policy.
///
/// The historical board variants disagree on the description maximum (80 vs
/// 10 characters), so the limits are configuration rather than constants.
/// The default reproduces the 80-character variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputPolicy {
    pub description_min_length: usize,
    pub description_max_length: usize,
    pub people_min: f64,
    pub people_max: f64,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            description_min_length: 4,
            description_max_length: 80,
            people_min: 1.0,
            people_max: 10.0,
        }
    }
}

/// Coerces the raw people field into a number.
///
/// Empty input coerces to 0 and unparsable input to NaN, so both fail the
/// form's minimum bound instead of raising an error.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
