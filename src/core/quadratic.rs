use crate::domain::model::{Coefficients, Roots};
use crate::utils::error::{AddonError, Result};
use crate::utils::validation::validate_finite;

/// Real roots of `a·x² + b·x + c = 0`.
///
/// Fails with [`AddonError::NoRealRootsError`] when the discriminant is
/// negative, with a validation error when `a == 0` or any coefficient is
/// not finite, and with [`AddonError::NumericOverflowError`] when the
/// discriminant or a root overflows `f64`. Roots come back ordered,
/// `root1 >= root2`, and are always finite.
pub fn solve_quadratic(coefficients: Coefficients) -> Result<Roots> {
    let Coefficients { a, b, c } = coefficients;
    validate_finite("a", a)?;
    validate_finite("b", b)?;
    validate_finite("c", c)?;

    if a == 0.0 {
        return Err(AddonError::ValidationError {
            message: "coefficient 'a' must be non-zero for a quadratic".to_string(),
        });
    }

    let discriminant = coefficients.discriminant();
    tracing::debug!("solve_quadratic a={} b={} c={} d={}", a, b, c, discriminant);

    if !discriminant.is_finite() {
        return Err(AddonError::NumericOverflowError {
            message: format!("discriminant of a={} b={} c={} is not finite", a, b, c),
        });
    }

    if discriminant < 0.0 {
        return Err(AddonError::NoRealRootsError { discriminant });
    }

    // q = -(b + sign(b)·√d) / 2 avoids cancellation between b and √d
    let sign = if b >= 0.0 { 1.0 } else { -1.0 };
    let q = -0.5 * (b + sign * discriminant.sqrt());

    let (x1, x2) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
    if !x1.is_finite() || !x2.is_finite() {
        return Err(AddonError::NumericOverflowError {
            message: format!("roots of a={} b={} c={} are not finite", a, b, c),
        });
    }

    Ok(Roots {
        root1: x1.max(x2),
        root2: x1.min(x2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_is_root(k: Coefficients, x: f64) {
        let y = k.a * x * x + k.b * x + k.c;
        assert!(y.abs() < 1e-6, "f({}) = {}", x, y);
    }

    #[test]
    fn test_two_real_roots() {
        let k = Coefficients::new(2.0, 6.0, 1.0);
        let roots = solve_quadratic(k).unwrap();
        assert!((roots.root1 - (-6.0 + 28f64.sqrt()) / 4.0).abs() < EPS);
        assert!((roots.root2 - (-6.0 - 28f64.sqrt()) / 4.0).abs() < EPS);
        assert_is_root(k, roots.root1);
        assert_is_root(k, roots.root2);
    }

    #[test]
    fn test_negative_discriminant_fails() {
        let err = solve_quadratic(Coefficients::new(2.0, 1.0, 1.0)).unwrap_err();
        match err {
            AddonError::NoRealRootsError { discriminant } => {
                assert!((discriminant + 7.0).abs() < EPS)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_double_root() {
        let roots = solve_quadratic(Coefficients::new(1.0, -2.0, 1.0)).unwrap();
        assert!((roots.root1 - 1.0).abs() < EPS);
        assert!((roots.root2 - 1.0).abs() < EPS);

        let zero = solve_quadratic(Coefficients::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(zero, Roots { root1: 0.0, root2: 0.0 });
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_order() {
        // -x² + 5x - 6 = 0 → 3, 2
        let roots = solve_quadratic(Coefficients::new(-1.0, 5.0, -6.0)).unwrap();
        assert!((roots.root1 - 3.0).abs() < EPS);
        assert!((roots.root2 - 2.0).abs() < EPS);
    }

    #[test]
    fn test_small_root_stays_accurate() {
        // x² + 1e8·x + 1 = 0, 樸素公式在小根上會嚴重失準
        let k = Coefficients::new(1.0, 1e8, 1.0);
        let roots = solve_quadratic(k).unwrap();
        assert!((roots.root1 - -1e-8).abs() < 1e-15);
        assert!((roots.root2 - -1e8).abs() < 1e-3);
    }

    #[test]
    fn test_overflowing_coefficients_fail() {
        // b² 與 4ac 同時溢位成 inf，相減得到 NaN
        let err = solve_quadratic(Coefficients::new(1e200, 1e200, 1e200)).unwrap_err();
        assert!(matches!(err, AddonError::NumericOverflowError { .. }));

        let err = solve_quadratic(Coefficients::new(1.0, 1e200, 1.0)).unwrap_err();
        assert!(matches!(err, AddonError::NumericOverflowError { .. }));
    }

    #[test]
    fn test_overflowing_root_fails() {
        // 判別式有限，但 q / a 溢位
        let err = solve_quadratic(Coefficients::new(1e-300, 1e150, 0.0)).unwrap_err();
        assert!(matches!(err, AddonError::NumericOverflowError { .. }));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            solve_quadratic(Coefficients::new(0.0, 2.0, 1.0)),
            Err(AddonError::ValidationError { .. })
        ));
        assert!(matches!(
            solve_quadratic(Coefficients::new(1.0, f64::NAN, 1.0)),
            Err(AddonError::InvalidConfigValueError { .. })
        ));
    }
}
