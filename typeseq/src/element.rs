//! Type-level identity for element types.
//!
//! Stable Rust can require two types to be equal, but it cannot answer "are these two types
//! equal?" with `false`. Queries such as [`Count`](crate::Count) need that answer, so element
//! types taking part in them implement [`Element`]: each one carries an identity code, a
//! sequence of type-level unsigned integers, and two element types are the same exactly when
//! their codes are equal.
//!
//! A code is the constructor's own number followed by the codes of its type parameters, so
//! `Option<u8>` and `Option<i8>` differ while two spellings of `Option<u8>` agree. Codes below
//! 64 belong to the implementations in this module. `#[derive(Element)]` takes its code from
//! `#[element(code = N)]`, or else derives a five-digit code: `63` followed by a 64-bit hash
//! of the crate, the source location and the item, 16 bits per digit.

use crate::seq::{Cons, Nil, Sequence};
use crate::structure::{Concat, Concatenated};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::ops::BitAnd;
use typenum::consts::*;
use typenum::{And, Bit, IsEqual, B0, B1};

/// An element type with a type-level identity code.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// #[derive(Element)]
/// struct Meters;
///
/// assert!(same::<Meters, Meters>());
/// assert!(!same::<Meters, f64>());
/// ```
pub trait Element {
    type Id: Sequence;
}

/// Decides whether two element types are the same. `Output` is `B1` or `B0`.
pub trait Same<Rhs: ?Sized> {
    type Output: Bit;
}

impl<Lhs, Rhs> Same<Rhs> for Lhs
where
    Lhs: Element + ?Sized,
    Rhs: Element + ?Sized,
    Lhs::Id: SameCode<Rhs::Id>,
{
    type Output = <Lhs::Id as SameCode<Rhs::Id>>::Output;
}

/// Reads [`Same`] as a `bool`.
pub const fn same<Lhs, Rhs>() -> bool
where
    Lhs: Same<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    <<Lhs as Same<Rhs>>::Output as Bit>::BOOL
}

/// Element-wise equality of identity codes.
pub trait SameCode<Rhs> {
    type Output: Bit;
}

impl SameCode<Nil> for Nil {
    type Output = B1;
}

impl<Head, Tail> SameCode<Cons<Head, Tail>> for Nil {
    type Output = B0;
}

impl<Head, Tail> SameCode<Nil> for Cons<Head, Tail> {
    type Output = B0;
}

impl<LhsHead, LhsTail, RhsHead, RhsTail> SameCode<Cons<RhsHead, RhsTail>>
    for Cons<LhsHead, LhsTail>
where
    LhsHead: IsEqual<RhsHead>,
    LhsTail: SameCode<RhsTail>,
    <LhsHead as IsEqual<RhsHead>>::Output: BitAnd<<LhsTail as SameCode<RhsTail>>::Output>,
    And<<LhsHead as IsEqual<RhsHead>>::Output, <LhsTail as SameCode<RhsTail>>::Output>: Bit,
{
    type Output =
        And<<LhsHead as IsEqual<RhsHead>>::Output, <LhsTail as SameCode<RhsTail>>::Output>;
}

macro_rules! nominal {
    ($($ty:ty => $code:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                type Id = Cons<$code, Nil>;
            }
        )*
    };
}

nominal! {
    () => U1,
    bool => U2,
    char => U3,
    i8 => U4,
    i16 => U5,
    i32 => U6,
    i64 => U7,
    i128 => U8,
    isize => U9,
    u8 => U10,
    u16 => U11,
    u32 => U12,
    u64 => U13,
    u128 => U14,
    usize => U15,
    f32 => U16,
    f64 => U17,
    str => U18,
    String => U19,
    Nil => U32,
}

macro_rules! wrapper {
    ($($wrapper:ident => $code:ty),* $(,)?) => {
        $(
            impl<T: Element + ?Sized> Element for $wrapper<T> {
                type Id = Cons<$code, T::Id>;
            }
        )*
    };
}

wrapper! {
    Box => U23,
    PhantomData => U26,
    Rc => U30,
    Arc => U31,
    Cell => U34,
    RefCell => U35,
}

impl<T: Element> Element for Option<T> {
    type Id = Cons<U20, T::Id>;
}

impl<T: Element, E: Element> Element for Result<T, E>
where
    T::Id: Concat<E::Id>,
{
    type Id = Cons<U21, Concatenated<T::Id, E::Id>>;
}

impl<T: Element> Element for Vec<T> {
    type Id = Cons<U22, T::Id>;
}

impl<'a, T: Element + ?Sized> Element for &'a T {
    type Id = Cons<U24, T::Id>;
}

impl<'a, T: Element + ?Sized> Element for &'a mut T {
    type Id = Cons<U25, T::Id>;
}

impl<T: Element> Element for [T] {
    type Id = Cons<U27, T::Id>;
}

impl<T: Element + ?Sized> Element for *const T {
    type Id = Cons<U28, T::Id>;
}

impl<T: Element + ?Sized> Element for *mut T {
    type Id = Cons<U29, T::Id>;
}

// A tuple's parameters are spelled as the code of the matching sequence.
macro_rules! tuple {
    ($code:ty => $($name:ident),+) => {
        impl<$($name),+> Element for ($($name,)+)
        where
            seq![$($name),+]: Element,
        {
            type Id = Cons<$code, <seq![$($name),+] as Element>::Id>;
        }
    };
}

tuple!(U41 => A);
tuple!(U42 => A, B);
tuple!(U43 => A, B, C);
tuple!(U44 => A, B, C, D);
tuple!(U45 => A, B, C, D, E);
tuple!(U46 => A, B, C, D, E, F);
tuple!(U47 => A, B, C, D, E, F, G);
tuple!(U48 => A, B, C, D, E, F, G, H);
tuple!(U49 => A, B, C, D, E, F, G, H, I);
tuple!(U50 => A, B, C, D, E, F, G, H, I, J);
tuple!(U51 => A, B, C, D, E, F, G, H, I, J, K);
tuple!(U52 => A, B, C, D, E, F, G, H, I, J, K, L);

// Sequences are elements too, so sequences of sequences can be queried.
impl<Head: Element, Tail: Element + Sequence> Element for Cons<Head, Tail>
where
    Head::Id: Concat<Tail::Id>,
{
    type Id = Cons<U33, Concatenated<Head::Id, Tail::Id>>;
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

    #[test]
    fn primitive_is_same_as_itself() {
        assert!(same::<i32, i32>());
        assert!(same::<str, str>());
        assert!(same::<(), ()>());
    }

    #[test]
    fn distinct_primitives_are_not_same() {
        assert!(!same::<i32, u32>());
        assert!(!same::<f32, f64>());
        assert!(!same::<String, str>());
    }

    #[test]
    fn wrappers_compare_their_parameters() {
        assert!(same::<Option<u8>, Option<u8>>());
        assert!(!same::<Option<u8>, Option<i8>>());
        assert!(!same::<Option<u8>, Vec<u8>>());
        assert!(!same::<Option<u8>, u8>());
        assert!(same::<&'static str, &'static str>());
        assert!(!same::<&'static str, &'static mut str>());
    }

    #[test]
    fn parameter_boundaries_are_not_ambiguous() {
        assert!(!same::<(Option<u8>, u8), (Option<u8>, Option<u8>)>());
        assert!(!same::<Result<Vec<u8>, u8>, Result<u8, Vec<u8>>>());
        assert!(same::<Result<Vec<u8>, u8>, Result<Vec<u8>, u8>>());
    }

    #[test]
    fn tuple_arity_is_part_of_identity() {
        assert!(!same::<(u8,), (u8, u8)>());
        assert!(!same::<(u8, u8, u8), (u8, u8, u8, u8)>());
        assert!(same::<(u8, bool, char, ()), (u8, bool, char, ())>());
    }

    #[test]
    fn tuple_elements_are_grouped_by_position() {
        assert!(!same::<(u8, (u8, u8)), ((u8, u8), u8)>());
        assert!(!same::<(u8, u8), seq![u8, u8]>());
        assert!(same::<(u8, i8, u16, i16, u32), (u8, i8, u16, i16, u32)>());
        assert!(!same::<(u8, i8, u16, i16, u32), (u8, i8, u16, i16, u64)>());
    }

    #[test]
    fn shared_and_interior_mutable_wrappers_are_distinct() {
        assert!(same::<Rc<str>, Rc<str>>());
        assert!(!same::<Rc<u8>, Arc<u8>>());
        assert!(!same::<Rc<u8>, Box<u8>>());
        assert!(!same::<Cell<u8>, RefCell<u8>>());
        assert!(same::<RefCell<Vec<u8>>, RefCell<Vec<u8>>>());
    }

    #[test]
    fn slices_and_raw_pointers_are_distinct() {
        assert!(same::<Box<[u8]>, Box<[u8]>>());
        assert!(!same::<[u8], Vec<u8>>());
        assert!(!same::<&'static [u8], &'static str>());
        assert!(!same::<*const u8, *mut u8>());
        assert!(!same::<*const u8, &'static u8>());
        assert!(same::<*mut str, *mut str>());
    }

    #[test]
    fn sequences_compare_structurally() {
        assert!(same::<seq![u8, bool], seq![u8, bool]>());
        assert!(!same::<seq![u8, bool], seq![bool, u8]>());
        assert!(!same::<seq![u8], seq![u8, u8]>());
        assert!(!same::<seq![], seq![()]>());
    }
}
