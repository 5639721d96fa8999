//! Building sequences out of other sequences: concatenation and splitting.

use crate::seq::{Cons, Head, Len, Length, Nil, NonEmpty, Sequence, Tail};
use crate::verify;
use std::ops::Sub;
use typenum::{Bit, Sub1, UInt, UTerm, Unsigned, B1};

/// Appends the elements of `Rhs` after the elements of `Self`.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// assert_identical::<Concatenated<seq![u8], seq![u16, u32]>, seq![u8, u16, u32]>();
/// assert_identical::<Concatenated<seq![], seq![u8]>, seq![u8]>();
/// ```
pub trait Concat<Rhs>: Sequence {
    type Output: Sequence;
}

pub type Concatenated<Lhs, Rhs> = <Lhs as Concat<Rhs>>::Output;

impl<Rhs: Sequence> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<Head, Tail, Rhs> Concat<Rhs> for Cons<Head, Tail>
where
    Tail: Concat<Rhs>,
{
    type Output = Cons<Head, Concatenated<Tail, Rhs>>;
}

/// Satisfied when `K` is a position a sequence can be split at: `0 <= K <= len`.
pub trait ValidSplitIndex<K> {}

#[verify]
impl<S, K> ValidSplitIndex<K> for S
where
    S: Length,
    K: Unsigned,
    _: Verify<{ K <= Len::<S> }>,
{
}

/// Splits a sequence in two at `K` without checking `K` up front.
///
/// An index past the end still fails to resolve, because there is no impl splitting `Nil` at
/// a non-zero index. Prefer [`Split`], which states the bound explicitly.
pub trait SplitAt<K>: Sequence {
    type Left: Sequence;
    type Right: Sequence;
}

impl<S: Sequence> SplitAt<UTerm> for S {
    type Left = Nil;
    type Right = S;
}

impl<Head, Tail, U, B> SplitAt<UInt<U, B>> for Cons<Head, Tail>
where
    U: Unsigned,
    B: Bit,
    UInt<U, B>: Sub<B1>,
    Tail: SplitAt<Sub1<UInt<U, B>>>,
{
    type Left = Cons<Head, <Tail as SplitAt<Sub1<UInt<U, B>>>>::Left>;
    type Right = <Tail as SplitAt<Sub1<UInt<U, B>>>>::Right;
}

/// Splits a sequence into its first `K` elements and the rest.
///
/// `Left` holds positions `[0, K)` and `Right` positions `[K, len)`, so concatenating them in
/// order gives back the original sequence.
///
/// # Examples
///
/// ```
/// use typeseq::*;
/// use typeseq::typenum::U1;
///
/// type S = seq![i32, f32, i32];
/// assert_identical::<Left<S, U1>, seq![i32]>();
/// assert_identical::<Right<S, U1>, seq![f32, i32]>();
/// ```
pub trait Split<K>: Sequence {
    type Left: Sequence;
    type Right: Sequence;
}

pub type Left<S, K> = <S as Split<K>>::Left;
pub type Right<S, K> = <S as Split<K>>::Right;

impl<S, K> Split<K> for S
where
    S: ValidSplitIndex<K> + SplitAt<K>,
{
    type Left = <S as SplitAt<K>>::Left;
    type Right = <S as SplitAt<K>>::Right;
}

/// Decomposes a sequence around position `K` into the run before it, the element at it and
/// the run after it.
pub trait Pivot<K>: Sequence {
    type Before: Sequence;
    type At;
    type After: Sequence;
}

pub type Before<S, K> = <S as Pivot<K>>::Before;
pub type At<S, K> = <S as Pivot<K>>::At;
pub type After<S, K> = <S as Pivot<K>>::After;

impl<S, K> Pivot<K> for S
where
    S: SplitAt<K>,
    <S as SplitAt<K>>::Right: NonEmpty,
{
    type Before = <S as SplitAt<K>>::Left;
    type At = Head<<S as SplitAt<K>>::Right>;
    type After = Tail<<S as SplitAt<K>>::Right>;
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::assert_identical;
    use typenum::{U0, U1, U2, U3};

    #[test]
    fn concat_adds_lengths() {
        type Joined = Concatenated<seq![u8, u16], seq![u32, u64, u128]>;
        assert_eq!(Joined::LEN, 5);
        assert_identical::<Joined, seq![u8, u16, u32, u64, u128]>();
    }

    #[test]
    fn concat_with_empty_is_identity() {
        assert_identical::<Concatenated<seq![u8], Nil>, seq![u8]>();
        assert_identical::<Concatenated<Nil, seq![u8]>, seq![u8]>();
        assert_identical::<Concatenated<Nil, Nil>, Nil>();
    }

    #[test]
    fn concat_is_associative() {
        type A = seq![u8];
        type B = seq![u16, u32];
        type C = seq![u64];
        assert_identical::<
            Concatenated<Concatenated<A, B>, C>,
            Concatenated<A, Concatenated<B, C>>,
        >();
    }

    #[test]
    fn split_at_ends_gives_empty_side() {
        type S = seq![u8, u16, u32];
        assert_identical::<Left<S, U0>, Nil>();
        assert_identical::<Right<S, U0>, S>();
        assert_identical::<Left<S, U3>, S>();
        assert_identical::<Right<S, U3>, Nil>();
    }

    #[test]
    fn split_of_empty_sequence_at_zero() {
        assert_identical::<Left<Nil, U0>, Nil>();
        assert_identical::<Right<Nil, U0>, Nil>();
    }

    #[test]
    fn split_left_length_is_index() {
        type S = seq![u8, u16, u32, u64];
        assert_eq!(<Left<S, U2>>::LEN, 2);
        assert_eq!(<Right<S, U2>>::LEN, 2);
        assert_identical::<Left<S, U2>, seq![u8, u16]>();
        assert_identical::<Right<S, U2>, seq![u32, u64]>();
    }

    #[test]
    fn pivot_separates_element_from_runs() {
        type S = seq![u8, u16, u32, u64];
        assert_identical::<Before<S, U1>, seq![u8]>();
        assert_identical::<At<S, U1>, u16>();
        assert_identical::<After<S, U1>, seq![u32, u64]>();
        assert_identical::<After<S, U3>, Nil>();
    }
}
