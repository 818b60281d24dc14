//! Input validation for decomposition requests.
//!
//! All checks run eagerly before any contraction work begins. Every public
//! function returns [`ValidationError`] on failure, which converts into
//! [`MkecsError::InvalidInput`](crate::error::MkecsError::InvalidInput) via
//! `From`.

use crate::error::ValidationError;
use crate::types::{Edge, MkecsConfig, VertexId};

/// Maximum number of refinement rounds accepted in one run.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Validate the required connectivity `k`.
///
/// # Errors
///
/// Returns [`ValidationError::ParameterOutOfRange`] when `k == 0`.
pub fn validate_k(k: usize) -> Result<(), ValidationError> {
    if k == 0 {
        return Err(ValidationError::ParameterOutOfRange {
            name: "k".into(),
            value: k.to_string(),
            expected: ">= 1".into(),
        });
    }
    Ok(())
}

/// Validate the round budget.
///
/// Zero rounds is accepted (and yields no components); a budget above
/// [`MAX_ITERATIONS`] is rejected.
pub fn validate_iterations(num_iterations: usize) -> Result<(), ValidationError> {
    if num_iterations > MAX_ITERATIONS {
        return Err(ValidationError::ParameterOutOfRange {
            name: "num_iterations".into(),
            value: num_iterations.to_string(),
            expected: format!("<= {MAX_ITERATIONS}"),
        });
    }
    if num_iterations == 0 {
        tracing::warn!("num_iterations is 0; decomposition will return no components");
    }
    Ok(())
}

/// Validate a full configuration.
pub fn validate_config(config: &MkecsConfig) -> Result<(), ValidationError> {
    validate_k(config.k)?;
    validate_iterations(config.num_iterations)
}

/// Convert an edge list read from a signed source into vertex ids.
///
/// # Errors
///
/// Returns [`ValidationError::NegativeVertex`] for the first edge carrying a
/// negative endpoint.
///
/// # Example
///
/// ```rust
/// use ruvector_mkecs::validation::edges_from_signed;
///
/// assert_eq!(edges_from_signed(&[(0, 1), (1, 2)]).unwrap(), vec![(0, 1), (1, 2)]);
/// assert!(edges_from_signed(&[(0, -1)]).is_err());
/// ```
pub fn edges_from_signed(edges: &[(i64, i64)]) -> Result<Vec<Edge>, ValidationError> {
    edges
        .iter()
        .enumerate()
        .map(|(index, &(v, w))| Ok((to_vertex(index, v)?, to_vertex(index, w)?)))
        .collect()
}

fn to_vertex(index: usize, raw: i64) -> Result<VertexId, ValidationError> {
    VertexId::try_from(raw).map_err(|_| ValidationError::NegativeVertex { index, vertex: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_zero_rejected() {
        assert!(validate_k(0).is_err());
        assert!(validate_k(1).is_ok());
        assert!(validate_k(1000).is_ok());
    }

    #[test]
    fn iteration_budget_limits() {
        assert!(validate_iterations(0).is_ok());
        assert!(validate_iterations(MAX_ITERATIONS).is_ok());
        assert!(validate_iterations(MAX_ITERATIONS + 1).is_err());
    }

    #[test]
    fn config_validation_checks_k() {
        assert!(validate_config(&MkecsConfig::new(0)).is_err());
        assert!(validate_config(&MkecsConfig::new(2)).is_ok());
    }

    #[test]
    fn negative_vertex_reports_position() {
        let err = edges_from_signed(&[(0, 1), (2, 3), (-4, 5)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeVertex {
                index: 2,
                vertex: -4
            }
        );
    }
}
