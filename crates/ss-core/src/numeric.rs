use crate::{SsError, SsResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> SsResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SsError::NonFinite { what, value: v })
    }
}

/// Finite and within `[lo, hi]` (inclusive).
pub fn ensure_within(v: Real, lo: Real, hi: Real, what: &'static str) -> SsResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < lo || v > hi {
        return Err(SsError::InvalidArg { what });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_within_is_inclusive() {
        assert_eq!(ensure_within(0.0, 0.0, 200.0, "p").unwrap(), 0.0);
        assert_eq!(ensure_within(200.0, 0.0, 200.0, "p").unwrap(), 200.0);
        assert!(matches!(
            ensure_within(-0.5, 0.0, 200.0, "p"),
            Err(SsError::InvalidArg { what: "p" })
        ));
        assert!(matches!(
            ensure_within(Real::INFINITY, 0.0, 200.0, "p"),
            Err(SsError::NonFinite { .. })
        ));
    }
}
