//! Building endpoint functions from closures and values.

use std::fmt;
use std::marker::PhantomData;

use num_traits::Float;

use crate::{Fun, Function};

/// Turn a closure `x ↦ f(x)` into a [`Function`](struct.Function.html).
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let f = homotopy::fun(|x: f64| x.exp() - 1.0);
///
/// assert_approx_eq!(f.eval(0.0), 0.0);
/// ```
pub fn fun<V, C>(f: C) -> Function<Closure<V, C>>
where
    C: Fn(V) -> V,
{
    Function(Closure(f, PhantomData))
}

/// A function with the same value `c` everywhere.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let f = homotopy::constant(2.5f64);
///
/// assert_approx_eq!(f.eval(-100.0), 2.5);
/// assert_approx_eq!(f.eval(100.0), 2.5);
/// ```
pub fn constant<V: Copy>(c: V) -> Function<impl Fun<Real = V> + Copy> {
    fun(move |_| c)
}

/// A step function that is `below` for `x < at` and `above` otherwise.
///
/// A NaN argument compares false against `at` and so gives `above`.
///
/// # Example
/// ```
/// let heaviside = homotopy::step(0.0, 0.0, 1.0);
///
/// assert_eq!(heaviside.eval(-0.5), 0.0);
/// assert_eq!(heaviside.eval(0.0), 1.0);
/// assert_eq!(heaviside.eval(3.0), 1.0);
/// ```
pub fn step<V: Float>(at: V, below: V, above: V) -> Function<impl Fun<Real = V> + Copy> {
    fun(move |x: V| if x < at { below } else { above })
}

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct Closure<V, C>(C, PhantomData<fn(V) -> V>);

impl<V, C> Fun for Closure<V, C>
where
    C: Fn(V) -> V,
{
    type Real = V;

    fn eval(&self, x: V) -> V {
        (self.0)(x)
    }
}

impl<V, C> fmt::Debug for Closure<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Closure")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_switches_at_threshold() {
        let s = step(1.5f64, -1.0, 1.0);

        assert_eq!(s.eval(1.4), -1.0);
        assert_eq!(s.eval(1.5), 1.0);
        assert_eq!(s.eval(f64::NAN), 1.0);
        assert_eq!(s.eval(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn endpoints_are_copy() {
        let c = constant(4.0f64);
        let d = c;

        assert_eq!(c.eval(0.0) + d.eval(1.0), 8.0);
    }
}
