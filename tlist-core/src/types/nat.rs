use std::marker::PhantomData;

use paste::paste;

/*
 * Type level naturals, used as positions for `At`
 */


pub trait Nat: 'static {
    const VALUE: usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N: Nat>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = 1 + N::VALUE;
}


macro_rules! define_nats {
    ($prev:literal) => {};
    ($prev:literal, $n:literal $(, $rest:literal)*) => {
        paste! { pub type [<U $n>] = S<[<U $prev>]>; }
        define_nats!($n $(, $rest)*);
    };
}

pub type U0 = Z;
define_nats!(
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);


/// Names the index alias for a literal: `idx!(2)` is `U2`.
#[macro_export]
macro_rules! idx {
    ($n:literal) => {
        $crate::__paste! { $crate::nat::[<U $n>] }
    };
}
pub use crate::idx;
