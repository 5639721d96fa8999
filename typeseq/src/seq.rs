//! Types and traits for representing ordered lists of types.

use std::marker::PhantomData;
use typenum::{Add1, Unsigned, B1, U0};

/// Builds the sequence type holding the given element types, in order.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// assert_identical::<seq![], Nil>();
/// assert_identical::<seq![i32, f32], Cons<i32, Cons<f32, Nil>>>();
/// ```
#[macro_export]
macro_rules! seq {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => { $crate::Cons<$head, $crate::seq![$($tail),*]> };
}

/// The empty sequence.
///
/// Sequences only exist as types, so there is no value of this type.
#[derive(Debug)]
pub enum Nil {}

/// The sequence whose first element is `Head`, followed by the elements of `Tail`.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// type Numbers = Cons<u8, Cons<u16, Nil>>;
/// assert_eq!(Numbers::LEN, 2);
/// ```
#[derive(Debug)]
pub struct Cons<Head, Tail>(Never, PhantomData<(Head, Tail)>);

#[derive(Debug)]
enum Never {}

/// Trait bound satisfied by exactly `Nil` and `Cons<Head, Tail>` where `Tail: Sequence`.
///
/// Every operation in this crate requires it of its inputs, so passing anything else fails
/// to resolve.
pub trait Sequence {
    /// Number of elements.
    const LEN: usize;
}

impl Sequence for Nil {
    const LEN: usize = 0;
}

impl<Head, Tail: Sequence> Sequence for Cons<Head, Tail> {
    const LEN: usize = 1 + Tail::LEN;
}

/// Length of a sequence as a type-level unsigned integer.
///
/// # Examples
///
/// ```
/// use typeseq::*;
/// use typeseq::typenum::{U0, U3};
///
/// assert_identical::<Len<seq![]>, U0>();
/// assert_identical::<Len<seq![u8, u8, u8]>, U3>();
/// ```
pub trait Length: Sequence {
    type Output: Unsigned;
}

pub type Len<S> = <S as Length>::Output;

impl Length for Nil {
    type Output = U0;
}

impl<Head, Tail> Length for Cons<Head, Tail>
where
    Tail: Length,
    Len<Tail>: std::ops::Add<B1>,
    Add1<Len<Tail>>: Unsigned,
{
    type Output = Add1<Len<Tail>>;
}

/// Access to the first element of a non-empty sequence and the sequence after it.
pub trait NonEmpty: Sequence {
    type Head;
    type Tail: Sequence;
}

impl<Head, Tail: Sequence> NonEmpty for Cons<Head, Tail> {
    type Head = Head;
    type Tail = Tail;
}

pub type Head<S> = <S as NonEmpty>::Head;
pub type Tail<S> = <S as NonEmpty>::Tail;

/// Satisfied only when `Self` and `Rhs` are the same type.
///
/// Two sequences are the same type exactly when they have the same length and the same
/// element types in the same positions.
pub trait Identical<Rhs: ?Sized> {}
impl<T: ?Sized> Identical<T> for T {}

/// Fails to compile unless `A` and `B` are the same type.
pub const fn assert_identical<A, B>()
where
    A: Identical<B> + ?Sized,
    B: ?Sized,
{
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests
