// Form field extraction and numeric parsing
use crate::error::{AppError, AppResult};
use std::collections::HashMap;

pub const NUM_FEATURES: usize = 8;

/// Form field names, in the positional order the model was fitted on.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Relative_Compactness",
    "Surface_Area",
    "Wall_Area",
    "Roof_Area",
    "Overall_Height",
    "Orientation",
    "Glazing_Area",
    "Glazing_Area_Distribution",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVector([f64; NUM_FEATURES]);

impl InputVector {
    pub fn new(values: [f64; NUM_FEATURES]) -> Self {
        Self(values)
    }

    /// Builds the vector from submitted form fields. Fails on the first field
    /// that is absent or not a finite number; nothing partial is returned.
    pub fn from_form(fields: &HashMap<String, String>) -> AppResult<Self> {
        let mut values = [0.0; NUM_FEATURES];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = fields
                .get(name)
                .ok_or_else(|| AppError::validation(name, "missing"))?;
            *slot = parse_number(name, raw)?;
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.0
    }
}

fn parse_number(field: &'static str, raw: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("{raw:?} is not a number")))?;
    if !value.is_finite() {
        return Err(AppError::validation(field, format!("{raw:?} is not finite")));
    }
    Ok(value)
}
