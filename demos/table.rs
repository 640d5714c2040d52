//! Prints a linear family between `x²` and `2x + 1` for `t` in steps of 0.1.

use homotopy::{Fun, Function, Linear};

fn print(t: f64, h: Function<impl Fun<Real = f64>>) {
    println!("\nh_t for t = {:.1}", t);

    for i in 0..15 {
        let x = i as f64;
        println!("\th({:.1}) = {:.1}", x, h.eval(x));
    }
}

fn main() {
    let f = homotopy::fun(|x: f64| x * x);
    let g = homotopy::fun(|x: f64| 2.0 * x + 1.0);

    let family = homotopy::homotopy(Linear, f, g);

    for (t, h) in family.frames(10) {
        print(t, h);
    }
}
