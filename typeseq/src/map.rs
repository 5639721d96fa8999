//! Applying a unary type predicate to every element.

use crate::predicate::UnaryTypePredicate;
use crate::seq::{Cons, Nil, Sequence};

/// Replaces each element `T` with `<F as UnaryTypePredicate<T>>::Output`, keeping positions.
///
/// Every element must be accepted by `F`. If one is not, the whole mapping fails to resolve;
/// there is no partial result.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// struct Boxed;
/// impl<T> UnaryTypePredicate<T> for Boxed {
///     type Output = Box<T>;
/// }
///
/// assert_identical::<Mapped<seq![u8, char], Boxed>, seq![Box<u8>, Box<char>]>();
/// ```
pub trait ForEach<F: ?Sized>: Sequence {
    type Output: Sequence;
}

pub type Mapped<S, F> = <S as ForEach<F>>::Output;

impl<F: ?Sized> ForEach<F> for Nil {
    type Output = Nil;
}

impl<Head, Tail, F> ForEach<F> for Cons<Head, Tail>
where
    F: UnaryTypePredicate<Head> + ?Sized,
    Tail: ForEach<F>,
{
    type Output = Cons<<F as UnaryTypePredicate<Head>>::Output, Mapped<Tail, F>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Identity;
    use crate::seq::assert_identical;

    enum Pointer {}
    impl UnaryTypePredicate<u8> for Pointer {
        type Output = *const u8;
    }
    impl UnaryTypePredicate<u16> for Pointer {
        type Output = *const u16;
    }

    #[test]
    fn empty_sequence_maps_to_empty_sequence() {
        assert_identical::<Mapped<Nil, Pointer>, Nil>();
    }

    #[test]
    fn predicate_with_specific_impls_maps_accepted_elements() {
        assert_identical::<Mapped<seq![u16, u8], Pointer>, seq![*const u16, *const u8]>();
    }

    #[test]
    fn identity_mapping_leaves_sequence_unchanged() {
        type S = seq![u8, (), String];
        assert_identical::<Mapped<S, Identity>, S>();
    }
}
