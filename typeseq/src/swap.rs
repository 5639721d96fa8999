//! Exchanging the elements at two positions.
//!
//! The sequence is cut into three runs around the two positions and put back together with
//! the two elements trading places:
//!
//! ```text
//! [0, first)  first  (first, second)  second  (second, len)
//!    run0       a         run1           b         run2
//!
//! => run0 ++ [b] ++ run1 ++ [a] ++ run2
//! ```

use crate::seq::{Cons, Len, Length, Sequence};
use crate::structure::{After, At, Before, Concat, Concatenated, Pivot};
use crate::verify;
use std::ops::Sub;
use typenum::{Diff, Sub1, Unsigned, B1};

/// Satisfied when `First < Second < len`.
pub trait ValidSwapIndices<First, Second> {}

#[verify]
impl<S, First, Second> ValidSwapIndices<First, Second> for S
where
    S: Length,
    First: Unsigned,
    Second: Unsigned,
    _: Verify<{ First < Second }, { Second < Len::<S> }>,
{
}

/// Number of elements strictly between `First` and `Second`.
pub type Gap<First, Second> = Sub1<Diff<Second, First>>;

/// Puts `A` back into the part of a sequence after the first swapped position.
///
/// `Self` is everything after position `first` and `Run0` everything before it. `Offset` is
/// the position of the second swapped position within `Self`.
pub trait Reassemble<Run0, A, Offset>: Sequence {
    type Output: Sequence;
}

impl<Rest, Run0, A, Offset> Reassemble<Run0, A, Offset> for Rest
where
    Rest: Pivot<Offset>,
    Before<Rest, Offset>: Concat<Cons<A, After<Rest, Offset>>>,
    Run0: Concat<
        Cons<At<Rest, Offset>, Concatenated<Before<Rest, Offset>, Cons<A, After<Rest, Offset>>>>,
    >,
{
    type Output = Concatenated<
        Run0,
        Cons<At<Rest, Offset>, Concatenated<Before<Rest, Offset>, Cons<A, After<Rest, Offset>>>>,
    >;
}

/// Exchanges the elements at positions `First` and `Second`.
///
/// Requires `First < Second < len`; any other pair of indices fails to resolve.
///
/// # Examples
///
/// ```
/// use typeseq::*;
/// use typeseq::typenum::{U0, U2};
///
/// type S = seq![i32, f32, bool];
/// assert_identical::<Swapped<S, U0, U2>, seq![bool, f32, i32]>();
/// ```
pub trait SwapElements<First, Second>: Sequence {
    type Output: Sequence;
}

pub type Swapped<S, First, Second> = <S as SwapElements<First, Second>>::Output;

impl<S, First, Second> SwapElements<First, Second> for S
where
    S: ValidSwapIndices<First, Second> + Pivot<First>,
    Second: Sub<First>,
    Diff<Second, First>: Sub<B1>,
    After<S, First>: Reassemble<Before<S, First>, At<S, First>, Gap<First, Second>>,
{
    type Output = <After<S, First> as Reassemble<
        Before<S, First>,
        At<S, First>,
        Gap<First, Second>,
    >>::Output;
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests
