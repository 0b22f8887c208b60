use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidRequest;

/// Inclusive bounds, in years, for the age of generated employees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub min_age: f64,
    pub max_age: f64,
}

/// Input to the record generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub count: usize,
    pub age_range: AgeRange,
}

impl GenerationRequest {
    pub fn new(count: usize, min_age: f64, max_age: f64) -> Self {
        Self {
            count,
            age_range: AgeRange { min_age, max_age },
        }
    }

    /// Checks the count and age bounds.
    ///
    /// Whether `max_age` maps to a representable birth date depends on the
    /// evaluation instant and is checked by the generator.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.count == 0 {
            return Err(InvalidRequest::Count(self.count.to_string()));
        }

        let AgeRange { min_age, max_age } = self.age_range;
        if !min_age.is_finite() {
            return Err(InvalidRequest::AgeBound { field: "minAge" });
        }
        if !max_age.is_finite() {
            return Err(InvalidRequest::AgeBound { field: "maxAge" });
        }
        if min_age < 0.0 {
            return Err(InvalidRequest::NegativeMinAge(min_age));
        }
        if max_age < min_age {
            return Err(InvalidRequest::InvertedAgeRange {
                min: min_age,
                max: max_age,
            });
        }
        Ok(())
    }
}

/// Structural validation of an untyped JSON request.
impl TryFrom<&Value> for GenerationRequest {
    type Error = InvalidRequest;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value.as_object().ok_or(InvalidRequest::NotAnObject)?;

        let count = match object.get("count") {
            Some(raw) => parse_count(raw)?,
            None => return Err(InvalidRequest::Count("missing".into())),
        };

        let range = object
            .get("ageRange")
            .and_then(Value::as_object)
            .ok_or(InvalidRequest::MissingAgeRange)?;
        let min_age = range
            .get("minAge")
            .and_then(Value::as_f64)
            .ok_or(InvalidRequest::AgeBound { field: "minAge" })?;
        let max_age = range
            .get("maxAge")
            .and_then(Value::as_f64)
            .ok_or(InvalidRequest::AgeBound { field: "maxAge" })?;

        let request = GenerationRequest::new(count, min_age, max_age);
        request.validate()?;
        Ok(request)
    }
}

// Accepts integral JSON numbers only; `5.0` counts as an integer, `5.5` does not.
fn parse_count(raw: &Value) -> Result<usize, InvalidRequest> {
    let invalid = || InvalidRequest::Count(raw.to_string());

    if let Some(n) = raw.as_u64() {
        let n = usize::try_from(n).map_err(|_| invalid())?;
        return if n > 0 { Ok(n) } else { Err(invalid()) };
    }

    match raw.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= usize::MAX as f64 => Ok(f as usize),
        _ => Err(invalid()),
    }
}
