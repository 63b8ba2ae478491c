//! Errors raised by the smoother, the problem containers and the solver

/// Errors from evaluating the smoothed objective or driving the solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SfistaError {
    /// The residual sits exactly on the Huber breakpoint, where the
    /// derivative has no unique value.
    ///
    /// This is rare but real: callers stepping the solver must expect it
    /// rather than assume every gradient evaluation succeeds.
    #[error("huber derivative is undefined where |a.x - b| == mu (residual {residual})")]
    UndefinedDerivative {
        /// The residual `a.x - b` that hit the breakpoint.
        residual: f64,
    },
    /// Two vectors or a vector and a matrix have incompatible shapes.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which operand had the wrong shape.
        what: &'static str,
        /// The length implied by the other operand.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
    /// A parameter that must be strictly positive and finite was not.
    #[error("parameter {name} must be positive and finite, got {value}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, SfistaError>;

/// Reject `value` unless it is strictly positive and finite.
pub(crate) fn check_positive<S: num_traits::Float>(name: &'static str, value: S) -> Result<S> {
    if value > S::zero() && value.is_finite() {
        Ok(value)
    } else {
        Err(SfistaError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(std::f64::NAN),
        })
    }
}

/// Reject a length that does not match the expected one.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SfistaError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}
