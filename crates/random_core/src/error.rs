//! Error types for random value generation.
//!
//! Every variant is a caller-input validation failure, raised before any
//! distribution adapter touches the generator. The one exception is
//! [`RandomError::SamplingTimeout`], raised when a bounded rejection loop
//! runs out of attempts, and [`RandomError::GeneratorBusy`], raised when the
//! thread generator is requested while already lent out.

use thiserror::Error;

/// Errors returned by the sampling operations.
///
/// # Examples
/// ```
/// use random_core::RandomError;
///
/// let err = RandomError::InvalidRange { min: "10".to_string(), max: "1".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid range [10, 1]: bounds must be ordered and finite"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Lower bound above upper bound, or bounds that describe no usable range.
    #[error("Invalid range [{min}, {max}]: bounds must be ordered and finite")]
    InvalidRange {
        /// Lower bound as supplied.
        min: String,
        /// Upper bound as supplied.
        max: String,
    },

    /// Distribution parameter outside its domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Empty sequence supplied to an index operation.
    #[error("Empty input: sequence must contain at least one element")]
    EmptyInput,

    /// Rejection sampling exhausted its attempt budget.
    #[error("Sampling timed out after {attempts} rejected draws")]
    SamplingTimeout {
        /// Number of draws rejected before giving up.
        attempts: u64,
    },

    /// The thread generator is already lent out by `with_generator`.
    #[error("Generator busy: the thread generator is already borrowed by with_generator")]
    GeneratorBusy,
}

impl RandomError {
    /// Creates an [`RandomError::InvalidRange`] from any debuggable bounds.
    pub fn invalid_range<T: std::fmt::Debug>(min: T, max: T) -> Self {
        Self::InvalidRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }

    /// Creates an [`RandomError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
