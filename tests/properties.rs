use bridgearch::{is_even, solve_roots, ArchError, Coefficients};
use proptest::prelude::*;

fn curvature() -> impl Strategy<Value = f64> {
    prop_oneof![-50.0..-0.5_f64, 0.5..50.0_f64]
}

proptest! {
    #[test]
    fn real_roots_satisfy_the_equation(
        a in curvature(),
        b in -50.0..50.0_f64,
        c in -50.0..50.0_f64,
    ) {
        let coefficients = Coefficients::new(a, b, c);
        prop_assume!(coefficients.discriminant() >= 0.0);

        let roots = solve_roots(&coefficients).unwrap().unwrap();
        for x in roots.to_array() {
            let scale = a.abs() * x * x + b.abs() * x.abs() + c.abs() + 1.0;
            prop_assert!(coefficients.height_at(x).abs() <= 1.0e-8 * scale);
        }
    }

    #[test]
    fn negative_discriminant_has_no_roots(
        a in curvature(),
        b in -50.0..50.0_f64,
        lift in 0.1..50.0_f64,
    ) {
        // Push c past b²/4a so that b² − 4ac = −4|a|·lift.
        let c = (b * b / (4.0 * a.abs()) + lift) * a.signum();
        let coefficients = Coefficients::new(a, b, c);
        prop_assert!(coefficients.discriminant() < 0.0);
        prop_assert_eq!(solve_roots(&coefficients), Ok(None));
    }

    #[test]
    fn zero_curvature_is_always_rejected(b in any::<f64>(), c in any::<f64>()) {
        prop_assert!(solve_roots(&Coefficients::new(0.0, b, c)).is_err());
    }

    #[test]
    fn integers_follow_integer_parity(n in -1_000_000_i64..1_000_000) {
        prop_assert_eq!(is_even(n as f64), n % 2 == 0);
    }

    #[test]
    fn fractional_values_are_not_even(n in -1_000_i64..1_000, frac in 0.001..0.999_f64) {
        prop_assert!(!is_even(n as f64 + frac));
    }
}

#[test]
fn finite_linear_profile_reports_not_quadratic() {
    assert_eq!(
        solve_roots(&Coefficients::new(0.0, 3.0, 1.0)),
        Err(ArchError::NotQuadratic)
    );
}
