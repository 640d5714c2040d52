//! Blend rules, deciding how `f(x)` and `g(x)` are mixed at parameter `t`.
//!
//! The four built-in rules are weighted sums `w_f(t) * f(x) + w_g(t) * g(x)`:
//!
//! | Rule                      | `w_f(t)`                  | `w_g(t)`              |
//! |---------------------------|---------------------------|-----------------------|
//! | [`Linear`](struct.Linear.html) | `1 - t`              | `t`                   |
//! | [`Square`](struct.Square.html) | `(1 - t)²`           | `t²`                  |
//! | [`Trig`](struct.Trig.html)     | `cos(t·π/2)`         | `sin(t·π/2)`          |
//! | [`Exp`](struct.Exp.html)       | `(e^(1-t) - 1)/(e - 1)` | `(e^t - 1)/(e - 1)` |
//!
//! Only `Linear` is a convex combination for every `t`. The weights of
//! `Square` and `Exp` sum to less than one strictly between the endpoints,
//! which makes them ease away from `f` and into `g`.

#[cfg(feature = "easer")]
use std::fmt;
#[cfg(feature = "easer")]
use std::marker::PhantomData;

use num_traits::{Float, FloatConst};

#[cfg(feature = "easer")]
use easer::functions::Easing;

use crate::{Fun, Function};

/// A rule for blending two functions `f` and `g` at parameter `t`.
///
/// Rules are expected to satisfy `blend(f, g, 0) ≡ f` and `blend(f, g, 1) ≡ g`
/// pointwise; this is what makes the resulting family a homotopy from `f` to
/// `g`. The trait cannot enforce this, so custom rules should test for it.
///
/// `t` is not restricted to `[0, 1]`. Values outside of that range
/// extrapolate according to the rule's formula.
///
/// # Example
///
/// A rule that goes through `f + g` halfway:
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use homotopy::{Blend, Fun, Function};
///
/// struct Detour;
///
/// impl Blend<f64> for Detour {
///     fn blend<F, G>(&self, f: F, g: G, t: f64) -> Function<impl Fun<Real = f64>>
///     where
///         F: Fun<Real = f64>,
///         G: Fun<Real = f64>,
///     {
///         let w_f = 1.0 - t * t;
///         let w_g = t * (2.0 - t);
///
///         homotopy::fun(move |x: f64| w_f * f.eval(x) + w_g * g.eval(x))
///     }
/// }
///
/// let family = homotopy::homotopy(Detour, homotopy::constant(1.0), homotopy::constant(2.0));
///
/// assert_approx_eq!(family.eval(0.0, 7.0), 1.0);
/// assert_approx_eq!(family.eval(0.5, 7.0), 0.75 + 1.5);
/// assert_approx_eq!(family.eval(1.0, 7.0), 2.0);
/// ```
pub trait Blend<V> {
    /// Blend `f` and `g` at parameter `t`.
    fn blend<F, G>(&self, f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
    where
        F: Fun<Real = V>,
        G: Fun<Real = V>;
}

/// Rules that blend by weighting `f(x)` and `g(x)` with factors depending
/// only on `t`.
pub trait Weights<V> {
    /// Returns `(w_f, w_g)` at parameter `t`.
    fn weights(&self, t: V) -> (V, V);
}

/// Straight-line blend. The weights always sum to one.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use homotopy::Weights;
///
/// let (w_f, w_g) = homotopy::Linear.weights(0.25f64);
///
/// assert_approx_eq!(w_f, 0.75);
/// assert_approx_eq!(w_g, 0.25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

/// Quadratic blend, leaving `f` slowly and arriving at `g` slowly.
///
/// Note that `(1 - t)² + t²` is less than one for `t` strictly inside
/// `[0, 1]`, so the blend is not a convex combination there. At `t = 0.5`,
/// both weights are `0.25`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square;

/// Quarter-circle blend. The squared weights always sum to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trig;

/// Exponentially normalized blend.
///
/// Each weight is zero at its "off" endpoint and one at its "on" endpoint.
/// The weights are computed with `exp_m1`, so that they are exact at
/// `t = 0` and `t = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exp;

impl<V: Float> Weights<V> for Linear {
    fn weights(&self, t: V) -> (V, V) {
        (V::one() - t, t)
    }
}

impl<V: Float> Weights<V> for Square {
    fn weights(&self, t: V) -> (V, V) {
        let s = V::one() - t;

        (s * s, t * t)
    }
}

impl<V: Float + FloatConst> Weights<V> for Trig {
    fn weights(&self, t: V) -> (V, V) {
        let angle = t * V::FRAC_PI_2();

        (angle.cos(), angle.sin())
    }
}

impl<V: Float> Weights<V> for Exp {
    fn weights(&self, t: V) -> (V, V) {
        // e - 1
        let norm = V::one().exp_m1();

        ((V::one() - t).exp_m1() / norm, t.exp_m1() / norm)
    }
}

macro_rules! blend_by_weights {
    ($($rule:ty),* $(,)?) => {
        $(
            impl<V> Blend<V> for $rule
            where
                V: Float,
                $rule: Weights<V>,
            {
                fn blend<F, G>(&self, f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
                where
                    F: Fun<Real = V>,
                    G: Fun<Real = V>,
                {
                    weighted(self.weights(t), f, g)
                }
            }
        )*
    };
}

blend_by_weights!(Linear, Square, Trig, Exp);

fn weighted<V, F, G>((w_f, w_g): (V, V), f: F, g: G) -> Function<WeightedClosure<F, G, V>>
where
    V: Float,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    Function(WeightedClosure(f, g, w_f, w_g))
}

#[derive(Debug, Clone)]
struct WeightedClosure<F, G, V>(F, G, V, V);

impl<F, G, V> Fun for WeightedClosure<F, G, V>
where
    V: Float,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    type Real = V;

    fn eval(&self, x: V) -> V {
        self.2 * self.0.eval(x) + self.3 * self.1.eval(x)
    }
}

/// A rule given by a closure that mixes the values `f(x)` and `g(x)` at
/// parameter `t`.
///
/// The closure receives `(f(x), g(x), t)`.
///
/// # Example
///
/// Cubic smoothstep:
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let smoothstep = homotopy::Pointwise(|fx: f64, gx: f64, t: f64| {
///     let s = t * t * (3.0 - 2.0 * t);
///     (1.0 - s) * fx + s * gx
/// });
///
/// let family = homotopy::homotopy(
///     smoothstep,
///     homotopy::fun(|x: f64| x),
///     homotopy::fun(|x: f64| -x),
/// );
///
/// assert_approx_eq!(family.eval(0.0, 3.0), 3.0);
/// assert_approx_eq!(family.eval(0.5, 3.0), 0.0);
/// assert_approx_eq!(family.eval(1.0, 3.0), -3.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Pointwise<C>(pub C);

impl<V, C> Blend<V> for Pointwise<C>
where
    V: Copy,
    C: Fn(V, V, V) -> V,
{
    fn blend<F, G>(&self, f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
    where
        F: Fun<Real = V>,
        G: Fun<Real = V>,
    {
        let mix = &self.0;

        crate::fun(move |x: V| mix(f.eval(x), g.eval(x), t))
    }
}

/// Runs a rule with the parameter reversed, i.e. `t ↦ 1 - t`.
///
/// If `R` blends from `f` to `g`, `Reversed<R>` blends from `g` back to `f`
/// along the same path. See also
/// [`Homotopy::reverse`](struct.Homotopy.html#method.reverse).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<R>(pub R);

impl<V, R> Blend<V> for Reversed<R>
where
    V: Float,
    R: Blend<V>,
{
    fn blend<F, G>(&self, f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
    where
        F: Fun<Real = V>,
        G: Fun<Real = V>,
    {
        self.0.blend(f, g, V::one() - t)
    }
}

impl<V, R> Weights<V> for Reversed<R>
where
    V: Float,
    R: Weights<V>,
{
    fn weights(&self, t: V) -> (V, V) {
        self.0.weights(V::one() - t)
    }
}

/// Which part of an easing curve to use in [`Eased`](struct.Eased.html).
///
/// This is only available when enabling the `easer` feature.
#[cfg(feature = "easer")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    In,
    Out,
    InOut,
}

/// Linear blend with the parameter reshaped by an easing function from
/// [`easer`](https://docs.rs/easer/0.2.1/easer/index.html).
///
/// This is only available when enabling the `easer` feature.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use homotopy::{Ease, Eased, Weights};
///
/// let rule = Eased::new(easer::functions::Cubic, Ease::In);
/// let (w_f, w_g) = rule.weights(0.5f64);
///
/// assert_approx_eq!(w_g, 0.125);
/// assert_approx_eq!(w_f + w_g, 1.0);
/// ```
#[cfg(feature = "easer")]
pub struct Eased<E> {
    ease: Ease,
    _easing: PhantomData<E>,
}

#[cfg(feature = "easer")]
impl<E> Eased<E> {
    /// The easing function `_easing` is passed as a parameter here only to
    /// simplify type inference.
    pub fn new(_easing: E, ease: Ease) -> Self {
        Eased {
            ease,
            _easing: PhantomData,
        }
    }
}

#[cfg(feature = "easer")]
impl<E> Clone for Eased<E> {
    fn clone(&self) -> Self {
        *self
    }
}

#[cfg(feature = "easer")]
impl<E> Copy for Eased<E> {}

#[cfg(feature = "easer")]
impl<E> fmt::Debug for Eased<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eased")
            .field("ease", &self.ease)
            .field("easing", &std::any::type_name::<E>())
            .finish()
    }
}

#[cfg(feature = "easer")]
impl<V, E> Weights<V> for Eased<E>
where
    V: Float,
    E: Easing<V>,
{
    fn weights(&self, t: V) -> (V, V) {
        let (start, delta, duration) = (V::zero(), V::one(), V::one());

        let s = match self.ease {
            Ease::In => E::ease_in(t, start, delta, duration),
            Ease::Out => E::ease_out(t, start, delta, duration),
            Ease::InOut => E::ease_in_out(t, start, delta, duration),
        };

        (V::one() - s, s)
    }
}

#[cfg(feature = "easer")]
impl<V, E> Blend<V> for Eased<E>
where
    V: Float,
    E: Easing<V>,
{
    fn blend<F, G>(&self, f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
    where
        F: Fun<Real = V>,
        G: Fun<Real = V>,
    {
        weighted(self.weights(t), f, g)
    }
}

/// Blend `f` and `g` linearly at parameter `t`.
///
/// This is a shortcut for `Linear.blend(f, g, t)`.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let f = homotopy::fun(|x: f64| x * x);
/// let g = homotopy::fun(|x: f64| 2.0 * x + 1.0);
///
/// let h = homotopy::linear(f, g, 0.5);
///
/// assert_approx_eq!(h.eval(10.0), (100.0 + 21.0) / 2.0);
/// ```
pub fn linear<V, F, G>(f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
where
    V: Float,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    weighted(Linear.weights(t), f, g)
}

/// Blend `f` and `g` quadratically at parameter `t`.
///
/// See [`Square`](struct.Square.html).
pub fn square<V, F, G>(f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
where
    V: Float,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    weighted(Square.weights(t), f, g)
}

/// Blend `f` and `g` along a quarter circle at parameter `t`.
///
/// See [`Trig`](struct.Trig.html).
pub fn trig<V, F, G>(f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
where
    V: Float + FloatConst,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    weighted(Trig.weights(t), f, g)
}

/// Blend `f` and `g` with exponential weights at parameter `t`.
///
/// See [`Exp`](struct.Exp.html).
pub fn exp<V, F, G>(f: F, g: G, t: V) -> Function<impl Fun<Real = V>>
where
    V: Float,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    weighted(Exp.weights(t), f, g)
}
