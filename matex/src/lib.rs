//! # Matex Engine
//!
//! **Compositional LaTeX math markup generation**
//!
//! Matex builds well-formed typeset-mathematics source text (inline
//! expressions, display blocks, full documents) by composing small pure
//! functions, each responsible for one notational construct.
//!
//! ## Quick Start
//!
//! ```rust
//! use matex::{Bound, MatexResult};
//!
//! fn main() -> MatexResult<()> {
//!     let sum = matex::sigma("k", &Bound::range(1, "n"), "k")?;
//!     let closed_form = matex::frac("n(n + 1)", "2");
//!     let identity = matex::equal(&[sum.as_str(), closed_form.as_str()]);
//!
//!     let doc = matex::document(&[matex::display(&[identity.as_str()]).as_str()]);
//!     println!("{doc}");
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Expressions
//! An expression is plain text. There is no AST: composition is textual
//! interpolation, and nesting decisions (such as whether a base needs
//! parenthesizing before an exponent) are heuristics applied by the outer
//! combinator.
//!
//! ### Bounds
//! Bounded operators take a [`Bound`]: either a [`Range`] with a start and
//! last value, or a region label. `sigma` and `integral` require the range
//! variant and reject anything else with [`MatexError::InvalidArgument`].
//!
//! ### Documents
//! Top-level blocks, typically prose mixed with inline and display
//! fragments, are joined inside a fixed preamble/footer shell by
//! [`document()`]. Writing
//! the result anywhere is the caller's business; the engine performs no
//! I/O.

pub mod bound;
pub mod calculus;
pub mod decoration;
pub mod document;
pub mod error;
pub mod layout;
pub mod operators;
pub mod symbols;

pub use bound::{Bound, BoundValue, Range};
pub use calculus::{area_integral, integral, limit, sigma};
pub use decoration::{
    acute, bar, breve, ceil, check, ddot, delta, dot, floor, grave, hat, not, triangle,
    vec_many, vec_single,
};
pub use document::document;
pub use error::MatexError;
pub use layout::{display, inline, matrix, ordered, verb, wrap};
pub use operators::{
    cdot, equal, frac, high, iff, log, log_base, low, pow, root, sqrt, square, sum, times,
};

/// Result type for Matex operations
pub type MatexResult<T> = Result<T, MatexError>;

#[cfg(test)]
mod tests;
