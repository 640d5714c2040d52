use num_traits::{cast, Float};

use crate::{Blend, Fun, Function, Reversed};

/// A family of functions `h_t` deforming `f` into `g`, as produced by
/// [`homotopy`](fn.homotopy.html).
///
/// The family holds a blend rule together with both endpoint functions.
/// Pick a parameter with [`at`](#method.at) to get the concrete function
/// `h_t`.
#[derive(Clone, Debug)]
pub struct Homotopy<R, F, G> {
    rule: R,
    f: F,
    g: G,
}

/// Bind a blend rule to two endpoint functions, giving a family of
/// functions parameterized by `t`.
///
/// No evaluation happens here: `rule`, `f` and `g` are only captured. They
/// are called once a concrete `t` (for the rule) and then a concrete `x` (for
/// `f` and `g`) are supplied. Endpoints are taken by value; pass `&f` to
/// capture them by reference instead.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let f = homotopy::fun(|x: f64| x * x);
/// let g = homotopy::fun(|x: f64| 2.0 * x + 1.0);
///
/// let family = homotopy::homotopy(homotopy::Square, &f, &g);
///
/// assert_approx_eq!(family.at(0.0).eval(10.0), f.eval(10.0));
/// assert_approx_eq!(family.at(0.5).eval(10.0), 0.25 * 100.0 + 0.25 * 21.0);
/// assert_approx_eq!(family.at(1.0).eval(10.0), g.eval(10.0));
/// ```
pub fn homotopy<V, R, F, G>(rule: R, f: F, g: G) -> Homotopy<R, F, G>
where
    R: Blend<V>,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    Homotopy { rule, f, g }
}

impl<R, F, G> Homotopy<R, F, G> {
    /// The blend rule of this family.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The function at `t = 0`.
    pub fn source(&self) -> Function<&F> {
        Function(&self.f)
    }

    /// The function at `t = 1`.
    pub fn target(&self) -> Function<&G> {
        Function(&self.g)
    }

    /// The same family traversed backwards, deforming `g` into `f`.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// let make = || {
    ///     homotopy::homotopy(
    ///         homotopy::Exp,
    ///         homotopy::fun(|x: f64| x.cos()),
    ///         homotopy::constant(5.0),
    ///     )
    /// };
    /// let family = make();
    /// let back = make().reverse();
    ///
    /// assert_approx_eq!(back.eval(0.0, 1.0), 5.0);
    /// assert_approx_eq!(back.eval(1.0, 1.0), 1.0f64.cos());
    /// assert_approx_eq!(back.eval(0.3, 1.0), family.eval(0.7, 1.0));
    /// ```
    pub fn reverse(self) -> Homotopy<Reversed<R>, F, G> {
        Homotopy {
            rule: Reversed(self.rule),
            f: self.f,
            g: self.g,
        }
    }
}

impl<V, R, F, G> Homotopy<R, F, G>
where
    V: Float + 'static,
    R: Blend<V>,
    F: Fun<Real = V>,
    G: Fun<Real = V>,
{
    /// The function `h_t` of this family at parameter `t`.
    ///
    /// The returned function borrows the endpoints of `self`.
    pub fn at(&self, t: V) -> Function<impl Fun<Real = V> + '_> {
        self.rule.blend(&self.f, &self.g, t)
    }

    /// Evaluate `h_t(x)`.
    pub fn eval(&self, t: V, x: V) -> V {
        self.at(t).eval(x)
    }

    /// Sample the family at `n + 1` evenly spaced parameters from zero to
    /// one, yielding `(t, h_t)` pairs.
    ///
    /// For `n = 0`, only `t = 0` is yielded. The last frame is exactly
    /// `t = 1`, and frames are produced lazily, so large `n` cost nothing
    /// up front. Use `.rev()` to run the family backwards.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// let family = homotopy::homotopy(
    ///     homotopy::Linear,
    ///     homotopy::constant(0.0),
    ///     homotopy::constant(10.0),
    /// );
    ///
    /// let values: Vec<f64> = family.frames(4).map(|(_, h)| h.eval(0.0)).collect();
    ///
    /// assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    /// ```
    pub fn frames(
        &self,
        n: usize,
    ) -> impl DoubleEndedIterator<Item = (V, Function<impl Fun<Real = V> + '_>)> + '_ {
        (0..=n).map(move |i| {
            let t = if n == 0 {
                V::zero()
            } else {
                to_real::<V>(i) / to_real(n)
            };

            (t, self.at(t))
        })
    }
}

// Float conversions from `usize` cannot fail, but `NumCast` says they may.
fn to_real<V: Float>(i: usize) -> V {
    cast(i).unwrap_or_else(V::max_value)
}
