//! Ordered, fixed-length lists of types, manipulated entirely during trait resolution.
//!
//! A sequence is a type built from [`Nil`] and [`Cons`], usually written with [`seq!`].
//! Operations are traits with associated output types, each with a type alias for reading the
//! result. An operation whose requirements are not met is an unsatisfied trait bound, so
//! misuse is reported by the compiler and nothing is left to check at runtime.
//!
//! ```
//! use typeseq::*;
//! use typeseq::typenum::{U0, U1, U2};
//!
//! type S = seq![i32, f32, i32];
//!
//! assert_eq!(count::<S, i32>(), 2);
//! assert!(!contains::<S, bool>());
//! assert_identical::<Left<S, U1>, seq![i32]>();
//! assert_identical::<Right<S, U1>, seq![f32, i32]>();
//! assert_identical::<Swapped<seq![i32, f32, bool], U0, U2>, seq![bool, f32, i32]>();
//! ```

extern crate self as typeseq;

#[macro_use]
mod seq;

pub mod element;
pub mod map;
pub mod predicate;
pub mod query;
pub mod structure;
pub mod swap;
pub mod tuple;

pub use crate::element::*;
pub use crate::map::*;
pub use crate::predicate::*;
pub use crate::query::*;
pub use crate::seq::*;
pub use crate::structure::*;
pub use crate::swap::*;
pub use crate::tuple::*;
pub use typenum;
pub use typeseq_macro::{verify, Element};
