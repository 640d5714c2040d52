//! Homotopy is a small library for continuously deforming one real function
//! into another.
//!
//! Given two functions `f` and `g` defined on the same domain, a homotopy is a
//! family of functions `h_t`, indexed by a parameter `t`, such that `h_0` is
//! `f` and `h_1` is `g`. In between, a *blend rule* decides how `f(x)` and
//! `g(x)` are mixed. The intended applications are visualization, animation
//! and numerical experiments where you want to watch one curve morph into
//! another.
//!
//! Building a family does not evaluate anything and allocates nothing; work
//! only happens once you pick a `t` and then an `x`.
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use homotopy::{fun, homotopy, Linear};
//!
//! let f = fun(|x: f64| x * x);
//! let g = fun(|x: f64| 2.0 * x + 1.0);
//!
//! let family = homotopy(Linear, f, g);
//!
//! // At t = 0 the family is f, at t = 1 it is g
//! assert_approx_eq!(family.at(0.0).eval(3.0), 9.0);
//! assert_approx_eq!(family.at(1.0).eval(3.0), 7.0);
//!
//! // Halfway through, the linear rule averages the two
//! let h = family.at(0.5);
//! assert_approx_eq!(h.eval(3.0), 8.0);
//! ```
//!
//! Other blend rules ease in and out of the endpoints differently:
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! let f = homotopy::fun(|x: f64| x.sin());
//! let g = homotopy::constant(1.0);
//!
//! let family = homotopy::homotopy(homotopy::Trig, f, g);
//!
//! assert_approx_eq!(family.eval(1.0, 42.0), 1.0);
//! ```

#[cfg(feature = "easer")]
pub use easer;

mod endpoints;
mod family;
mod rules;

pub use endpoints::{constant, fun, step};
pub use family::{homotopy, Homotopy};
pub use rules::{
    exp, linear, square, trig, Blend, Exp, Linear, Pointwise, Reversed, Square, Trig, Weights,
};

#[cfg(feature = "easer")]
pub use rules::{Ease, Eased};

/// A real function of one real variable, `x ↦ f(x)`.
///
/// Both endpoints of a homotopy and every slice `h_t` implement `Fun`.
/// Closures become `Fun`s through [`fun`](fn.fun.html). Implement the trait
/// directly for endpoints that carry their own data:
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use homotopy::{Fun, Linear};
///
/// // Coefficients in ascending order of degree
/// struct Polynomial(Vec<f64>);
///
/// impl Fun for Polynomial {
///     type Real = f64;
///
///     fn eval(&self, x: f64) -> f64 {
///         self.0.iter().rev().fold(0.0, |acc, c| acc * x + c)
///     }
/// }
///
/// let family = homotopy::homotopy(
///     Linear,
///     Polynomial(vec![0.0, 0.0, 1.0]),
///     Polynomial(vec![1.0, 2.0]),
/// );
///
/// assert_approx_eq!(family.eval(0.0, 3.0), 9.0);
/// assert_approx_eq!(family.eval(1.0, 3.0), 7.0);
/// ```
pub trait Fun {
    /// The scalar type of both `x` and `f(x)`, usually `f32` or `f64`.
    type Real;

    fn eval(&self, x: Self::Real) -> Self::Real;
}

impl<'a, F> Fun for &'a F
where
    F: Fun + ?Sized,
{
    type Real = F::Real;

    fn eval(&self, x: F::Real) -> F::Real {
        (**self).eval(x)
    }
}

impl<F> Fun for Box<F>
where
    F: Fun + ?Sized,
{
    type Real = F::Real;

    fn eval(&self, x: F::Real) -> F::Real {
        (**self).eval(x)
    }
}

/// A function returned by this crate, such as an endpoint built with
/// [`fun`](fn.fun.html) or a slice `h_t` of a
/// [`Homotopy`](struct.Homotopy.html).
///
/// The wrapper lets callers evaluate the function without importing
/// [`Fun`](trait.Fun.html).
#[derive(Clone, Copy, Debug)]
pub struct Function<F>(pub F);

impl<F: Fun> Function<F> {
    /// Evaluate the function at `x`.
    pub fn eval(&self, x: F::Real) -> F::Real {
        self.0.eval(x)
    }
}

impl<F: Fun> Fun for Function<F> {
    type Real = F::Real;

    fn eval(&self, x: F::Real) -> F::Real {
        self.0.eval(x)
    }
}
