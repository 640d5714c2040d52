use homotopy::{fun, homotopy, Blend, Exp, Linear, Square, Trig, Weights};
use proptest::prelude::*;

fn endpoint_error<R: Blend<f64>>(rule: R, a: f64, b: f64, c: f64, x: f64) -> (f64, f64) {
    let f = move |x: f64| a * x * x + b;
    let g = move |x: f64| c * x.sin();

    let family = homotopy(rule, fun(f), fun(g));

    (
        (family.eval(0.0, x) - f(x)).abs(),
        (family.eval(1.0, x) - g(x)).abs(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128, .. ProptestConfig::default()
    })]

    #[test]
    fn endpoint_law_holds_for_all_rules(
        a in -10.0f64..10.0, b in -10.0f64..10.0, c in -10.0f64..10.0,
        x in -20.0f64..20.0
    ) {
        let errors = [
            endpoint_error(Linear, a, b, c, x),
            endpoint_error(Square, a, b, c, x),
            endpoint_error(Trig, a, b, c, x),
            endpoint_error(Exp, a, b, c, x),
        ];

        for (i, (at_zero, at_one)) in errors.iter().enumerate() {
            prop_assert!(*at_zero < 1e-4, "rule {i}: h_0 differs from f by {at_zero}");
            prop_assert!(*at_one < 1e-4, "rule {i}: h_1 differs from g by {at_one}");
        }
    }

    #[test]
    fn linear_weights_sum_to_one(t in -3.0f64..3.0) {
        let (w_f, w_g) = Linear.weights(t);
        prop_assert!((w_f + w_g - 1.0).abs() < 1e-9);
    }

    #[test]
    fn trig_weights_lie_on_unit_circle(t in -3.0f64..3.0) {
        let (w_f, w_g) = Trig.weights(t);
        prop_assert!((w_f * w_f + w_g * w_g - 1.0).abs() < 1e-9);
    }

    #[test]
    fn square_and_exp_weights_stay_below_one_inside(t in 0.01f64..0.99) {
        let (w_f, w_g) = Square.weights(t);
        prop_assert!(w_f + w_g < 1.0, "square weights sum to {}", w_f + w_g);

        let (w_f, w_g) = Exp.weights(t);
        prop_assert!(w_f + w_g < 1.0, "exp weights sum to {}", w_f + w_g);
    }

    #[test]
    fn blends_are_weighted_sums(t in -1.0f64..2.0, x in -5.0f64..5.0) {
        let f = |x: f64| x.cos();
        let g = |x: f64| x * x * x;

        let family = homotopy(Trig, fun(f), fun(g));
        let (w_f, w_g) = Trig.weights(t);

        prop_assert_eq!(family.eval(t, x), w_f * f(x) + w_g * g(x));
    }

    #[test]
    fn constant_endpoints_ignore_x(t in 0.0f64..1.0, x in -100.0f64..100.0, y in -100.0f64..100.0) {
        let family = homotopy(Exp, homotopy::constant(0.0f64), homotopy::constant(1.0));

        prop_assert_eq!(family.eval(t, x), family.eval(t, y));
    }
}
