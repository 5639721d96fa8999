//! The shapes a client-supplied type-level function can take.
//!
//! A predicate is a marker type implementing one of the four traits below for the type(s) it
//! applies to. Whether `P` fits a shape for given arguments is just whether the corresponding
//! bound holds, so an ill-formed predicate is rejected where it is first used.

use crate::element::Same;
use crate::structure::{Concat, Concatenated};
use std::marker::PhantomData;
use typenum::Bit;

/// Given one type, exposes a type-level boolean.
pub trait UnaryValuePredicate<T: ?Sized> {
    type Output: Bit;
    const VALUE: bool = <Self::Output as Bit>::BOOL;
}

/// Given two types, exposes a type-level boolean.
pub trait BinaryValuePredicate<T: ?Sized, U: ?Sized> {
    type Output: Bit;
    const VALUE: bool = <Self::Output as Bit>::BOOL;
}

/// Given one type, exposes a derived type.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// struct Wrap;
/// impl<T> UnaryTypePredicate<T> for Wrap {
///     type Output = Option<T>;
/// }
///
/// assert_identical::<<Wrap as UnaryTypePredicate<u8>>::Output, Option<u8>>();
/// ```
pub trait UnaryTypePredicate<T: ?Sized> {
    type Output;
}

/// Given two types, exposes a derived type.
pub trait BinaryTypePredicate<T: ?Sized, U: ?Sized> {
    type Output;
}

/// Compiles only if `P` is a unary value predicate for `T`.
pub const fn is_unary_value_predicate<P, T>() -> bool
where
    P: UnaryValuePredicate<T> + ?Sized,
    T: ?Sized,
{
    true
}

/// Compiles only if `P` is a binary value predicate for `T` and `U`.
pub const fn is_binary_value_predicate<P, T, U>() -> bool
where
    P: BinaryValuePredicate<T, U> + ?Sized,
    T: ?Sized,
    U: ?Sized,
{
    true
}

/// Compiles only if `P` is a unary type predicate for `T`.
pub const fn is_unary_type_predicate<P, T>() -> bool
where
    P: UnaryTypePredicate<T> + ?Sized,
    T: ?Sized,
{
    true
}

/// Compiles only if `P` is a binary type predicate for `T` and `U`.
pub const fn is_binary_type_predicate<P, T, U>() -> bool
where
    P: BinaryTypePredicate<T, U> + ?Sized,
    T: ?Sized,
    U: ?Sized,
{
    true
}

/// `B1` when both element types are the same.
pub enum IsSame {}

impl<T, U> BinaryValuePredicate<T, U> for IsSame
where
    T: Same<U> + ?Sized,
    U: ?Sized,
{
    type Output = <T as Same<U>>::Output;
}

/// `B1` when the element type is the same as `E`.
pub struct SameAs<E: ?Sized>(PhantomData<E>);

impl<T, E> UnaryValuePredicate<T> for SameAs<E>
where
    T: Same<E> + ?Sized,
    E: ?Sized,
{
    type Output = <T as Same<E>>::Output;
}

/// Maps every type to itself.
pub enum Identity {}

impl<T> UnaryTypePredicate<T> for Identity {
    type Output = T;
}

/// Joins two sequences.
pub enum Concatenate {}

impl<T, U> BinaryTypePredicate<T, U> for Concatenate
where
    T: Concat<U>,
{
    type Output = Concatenated<T, U>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::assert_identical;
    use typenum::{B0, B1};

    struct Large;
    impl UnaryValuePredicate<u64> for Large {
        type Output = B1;
    }
    impl UnaryValuePredicate<u8> for Large {
        type Output = B0;
    }

    #[test]
    fn value_predicate_exposes_bool() {
        assert!(<Large as UnaryValuePredicate<u64>>::VALUE);
        assert!(!<Large as UnaryValuePredicate<u8>>::VALUE);
        assert!(is_unary_value_predicate::<Large, u8>());
    }

    #[test]
    fn is_same_is_a_binary_value_predicate() {
        assert!(is_binary_value_predicate::<IsSame, u8, u16>());
        assert!(<IsSame as BinaryValuePredicate<u8, u8>>::VALUE);
        assert!(!<IsSame as BinaryValuePredicate<u8, u16>>::VALUE);
    }

    #[test]
    fn same_as_is_a_unary_value_predicate() {
        assert!(<SameAs<char> as UnaryValuePredicate<char>>::VALUE);
        assert!(!<SameAs<char> as UnaryValuePredicate<bool>>::VALUE);
    }

    #[test]
    fn identity_maps_to_argument() {
        assert!(is_unary_type_predicate::<Identity, u8>());
        assert_identical::<<Identity as UnaryTypePredicate<u8>>::Output, u8>();
    }

    #[test]
    fn concatenate_is_a_binary_type_predicate() {
        assert!(is_binary_type_predicate::<Concatenate, seq![u8], seq![u16]>());
        assert_identical::<
            <Concatenate as BinaryTypePredicate<seq![u8], seq![u16]>>::Output,
            seq![u8, u16],
        >();
    }
}
