//! Read-only questions about the contents of a sequence.
//!
//! Each query is a trait whose `Output` is a type-level answer, plus a `const fn` reading the
//! answer as a plain value. Element types are compared with [`Same`], so the elements and the
//! queried types must implement [`Element`](crate::Element).

use crate::element::Same;
use crate::seq::{Cons, Nil, Sequence};
use std::ops::{Add, BitAnd};
use typenum::{And, Bit, Gr, IsGreater, Sum, Unsigned, B0, B1, U0};

/// `B1` when the sequence is non-empty and its first element is `E`.
pub trait StartsWith<E: ?Sized>: Sequence {
    type Output: Bit;
}

impl<E: ?Sized> StartsWith<E> for Nil {
    type Output = B0;
}

impl<Head, Tail, E> StartsWith<E> for Cons<Head, Tail>
where
    Head: Same<E>,
    Tail: Sequence,
    E: ?Sized,
{
    type Output = <Head as Same<E>>::Output;
}

/// Number of positions holding `E`.
pub trait Count<E: ?Sized>: Sequence {
    type Output: Unsigned;
}

pub type CountOf<S, E> = <S as Count<E>>::Output;

impl<E: ?Sized> Count<E> for Nil {
    type Output = U0;
}

impl<Head, Tail, E> Count<E> for Cons<Head, Tail>
where
    Head: Same<E>,
    Tail: Count<E>,
    E: ?Sized,
    CountOf<Tail, E>: Add<<Head as Same<E>>::Output>,
    Sum<CountOf<Tail, E>, <Head as Same<E>>::Output>: Unsigned,
{
    type Output = Sum<CountOf<Tail, E>, <Head as Same<E>>::Output>;
}

/// `B1` when at least one position holds `E`.
pub trait Contains<E: ?Sized>: Sequence {
    type Output: Bit;
}

impl<S, E> Contains<E> for S
where
    S: Count<E>,
    E: ?Sized,
    CountOf<S, E>: IsGreater<U0>,
{
    type Output = Gr<CountOf<S, E>, U0>;
}

/// `B1` when every element type of the sequence `Es` is contained.
///
/// Repeated or reordered entries in `Es` do not change the answer; an empty `Es` is
/// contained in everything.
pub trait ContainsAll<Es>: Sequence {
    type Output: Bit;
}

impl<S: Sequence> ContainsAll<Nil> for S {
    type Output = B1;
}

impl<S, E, Es> ContainsAll<Cons<E, Es>> for S
where
    S: Contains<E> + ContainsAll<Es>,
    <S as Contains<E>>::Output: BitAnd<<S as ContainsAll<Es>>::Output>,
    And<<S as Contains<E>>::Output, <S as ContainsAll<Es>>::Output>: Bit,
{
    type Output = And<<S as Contains<E>>::Output, <S as ContainsAll<Es>>::Output>;
}

/// # Examples
///
/// ```
/// use typeseq::*;
///
/// assert!(starts_with::<seq![u8, u16], u8>());
/// assert!(!starts_with::<seq![u8, u16], u16>());
/// assert!(!starts_with::<seq![], u8>());
/// ```
pub const fn starts_with<S, E>() -> bool
where
    S: StartsWith<E>,
    E: ?Sized,
{
    <<S as StartsWith<E>>::Output as Bit>::BOOL
}

/// # Examples
///
/// ```
/// use typeseq::*;
///
/// const INTS: usize = count::<seq![i32, f32, i32], i32>();
/// assert_eq!(INTS, 2);
/// ```
pub const fn count<S, E>() -> usize
where
    S: Count<E>,
    E: ?Sized,
{
    <CountOf<S, E> as Unsigned>::USIZE
}

pub const fn contains<S, E>() -> bool
where
    S: Contains<E>,
    E: ?Sized,
{
    <<S as Contains<E>>::Output as Bit>::BOOL
}

/// # Examples
///
/// ```
/// use typeseq::*;
///
/// assert!(contains_all::<seq![u8, bool, char], seq![char, u8]>());
/// assert!(!contains_all::<seq![u8, bool, char], seq![char, f32]>());
/// ```
pub const fn contains_all<S, Es>() -> bool
where
    S: ContainsAll<Es>,
{
    <<S as ContainsAll<Es>>::Output as Bit>::BOOL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::assert_identical;
    use typenum::{U1, U2, U3};

    type Mixed = seq![i32, f32, i32];

    #[test]
    fn count_is_type_level_number() {
        assert_identical::<CountOf<Mixed, i32>, U2>();
        assert_identical::<CountOf<Mixed, f32>, U1>();
        assert_identical::<CountOf<Mixed, bool>, U0>();
        assert_identical::<CountOf<seq![u8, u8, u8], u8>, U3>();
    }

    #[test]
    fn count_of_empty_sequence_is_zero() {
        assert_eq!(count::<Nil, u8>(), 0);
    }

    #[test]
    fn contains_follows_count() {
        assert!(contains::<Mixed, f32>());
        assert!(!contains::<Mixed, bool>());
        assert!(!contains::<Nil, bool>());
    }

    #[test]
    fn contains_all_ignores_duplicates_and_order() {
        assert!(contains_all::<Mixed, seq![f32, i32, f32]>());
        assert!(contains_all::<Mixed, seq![]>());
        assert!(contains_all::<Nil, seq![]>());
        assert!(!contains_all::<Nil, seq![u8]>());
    }

    #[test]
    fn starts_with_compares_only_first_element() {
        assert!(starts_with::<Mixed, i32>());
        assert!(!starts_with::<Mixed, f32>());
    }

    #[test]
    fn reference_and_boxed_elements_can_be_queried() {
        assert!(starts_with::<seq![&'static str], &'static str>());
        assert_eq!(count::<seq![u8, Box<str>, Box<str>], Box<str>>(), 2);
    }
}
