/// A parameter failed a local check before any request was sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The value must be strictly greater than the threshold.
    #[error("{field} debe ser mayor a {threshold}")]
    GreaterThan {
        /// Name of the offending parameter.
        field: &'static str,
        /// Exclusive lower bound.
        threshold: f64,
        /// Rejected value.
        value: f64,
    },
    /// The value must not be empty or blank.
    #[error("{field} no puede estar vacio")]
    Empty {
        /// Name of the offending parameter.
        field: &'static str,
    },
}

/// Local checks run by the client before a request is dispatched.
pub trait Validate {
    /// Returns the first failed check, if any.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Fails unless `value > threshold`.
pub fn greater_than<T>(field: &'static str, value: T, threshold: T) -> Result<(), ValidationError>
where
    T: Into<f64> + PartialOrd + Copy,
{
    if value > threshold {
        Ok(())
    } else {
        Err(ValidationError::GreaterThan {
            field,
            threshold: threshold.into(),
            value: value.into(),
        })
    }
}

/// Fails if `value` is empty or only whitespace.
pub fn not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}
