//! Conversions between tuple types and sequences.

use crate::seq::Sequence;

/// A tuple type with a sequence of the same element types, in the same order.
///
/// Implemented for tuples of up to 12 elements.
///
/// # Examples
///
/// ```
/// use typeseq::*;
///
/// assert_identical::<Sequenced<(i32, f32, i32)>, seq![i32, f32, i32]>();
/// assert_identical::<Sequenced<()>, seq![]>();
/// ```
pub trait Tuple {
    type Sequence: Sequence;
}

pub type Sequenced<T> = <T as Tuple>::Sequence;

/// A sequence with a tuple type of the same element types. The inverse of [`Tuple`].
pub trait IntoTuple: Sequence {
    type Tuple;
}

pub type Tupled<S> = <S as IntoTuple>::Tuple;

macro_rules! tuple {
    ($($name:ident),*) => {
        impl<$($name),*> Tuple for ($($name,)*) {
            type Sequence = seq![$($name),*];
        }

        impl<$($name),*> IntoTuple for seq![$($name),*] {
            type Tuple = ($($name,)*);
        }
    };
}

tuple!();
tuple!(A);
tuple!(A, B);
tuple!(A, B, C);
tuple!(A, B, C, D);
tuple!(A, B, C, D, E);
tuple!(A, B, C, D, E, F);
tuple!(A, B, C, D, E, F, G);
tuple!(A, B, C, D, E, F, G, H);
tuple!(A, B, C, D, E, F, G, H, I);
tuple!(A, B, C, D, E, F, G, H, I, J);
tuple!(A, B, C, D, E, F, G, H, I, J, K);
tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{assert_identical, Cons, Nil};
    use crate::structure::Concatenated;

    #[test]
    fn single_element_tuple() {
        assert_identical::<Sequenced<(u8,)>, seq![u8]>();
        assert_identical::<Tupled<seq![u8]>, (u8,)>();
    }

    #[test]
    fn largest_tuple_keeps_order() {
        type Wide = (u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool, char);
        assert_eq!(<Sequenced<Wide>>::LEN, 12);
        assert_identical::<Tupled<Sequenced<Wide>>, Wide>();
    }

    #[test]
    fn sequence_results_convert_back_to_tuples() {
        type Joined = Concatenated<Sequenced<(u8, u16)>, Sequenced<(bool,)>>;
        assert_identical::<Tupled<Joined>, (u8, u16, bool)>();
        assert_identical::<Tupled<Nil>, ()>();
        assert_identical::<Tupled<Cons<char, Nil>>, (char,)>();
    }
}
