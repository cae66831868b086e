use std::marker::PhantomData;

use super::token::*;

/*
 * Type level cons list
 *
 * `()` is the empty list. Every structural operation is an associated type, so
 * any `L: TList` supports them without further bounds.
 */


mod sealed {
    pub trait Sealed {}
    impl Sealed for () {}
    impl<A, T: super::TList> Sealed for super::TCons<A, T> {}
}


pub trait TList: sealed::Sealed + 'static {
    const LEN: usize;
    const IS_EMPTY: bool = Self::LEN == 0;

    /// First element, or `EmptyList`.
    type Head;
    /// Last element (not the rest of the list), or `EmptyList`.
    type Tail;

    type PushFront<X: Token>: TList;
    type PushBack<X: Token>: TList;
    type PopFront: TList;
    type PopBack: TList;
    type Concat<R: TList>: TList;

    /// Last element of the list, or `D` when empty.
    #[doc(hidden)]
    type LastOr<D>;
    /// `PopBack` of `H` followed by this list.
    #[doc(hidden)]
    type InitAfter<H: Token>: TList;

    fn collect_tokens(out: &mut Vec<TokenId>);

    fn tokens() -> Vec<TokenId> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::collect_tokens(&mut out);
        out
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TCons<A, T: TList>(PhantomData<(A, T)>);


impl TList for () {
    const LEN: usize = 0;

    type Head = EmptyList;
    type Tail = EmptyList;

    type PushFront<X: Token> = TCons<X, ()>;
    type PushBack<X: Token> = TCons<X, ()>;
    type PopFront = ();
    type PopBack = ();
    type Concat<R: TList> = R;

    type LastOr<D> = D;
    type InitAfter<H: Token> = ();

    fn collect_tokens(_out: &mut Vec<TokenId>) {}
}

impl<A: Token, T: TList> TList for TCons<A, T> {
    const LEN: usize = 1 + T::LEN;

    type Head = A;
    type Tail = T::LastOr<A>;

    type PushFront<X: Token> = TCons<X, Self>;
    type PushBack<X: Token> = TCons<A, T::PushBack<X>>;
    type PopFront = T;
    type PopBack = T::InitAfter<A>;
    type Concat<R: TList> = TCons<A, T::Concat<R>>;

    type LastOr<D> = T::LastOr<A>;
    type InitAfter<H: Token> = TCons<H, T::InitAfter<A>>;

    fn collect_tokens(out: &mut Vec<TokenId>) {
        out.push(A::ID);
        T::collect_tokens(out);
    }
}


pub type Front<L> = <L as TList>::Head;
pub type Back<L> = <L as TList>::Tail;
pub type PushFront<X, L> = <L as TList>::PushFront<X>;
pub type PushBack<X, L> = <L as TList>::PushBack<X>;
pub type PopFront<L> = <L as TList>::PopFront;
pub type PopBack<L> = <L as TList>::PopBack;
pub type Concat<L, R> = <L as TList>::Concat<R>;

pub const fn size<L: TList>() -> usize {
    L::LEN
}


#[macro_export]
macro_rules! tlist {
    () => { () };
    ($A:ty $(,$tok:ty)*) => {
        $crate::TCons<$A, $crate::tlist!($($tok),*)>
    };
}
pub use crate::tlist;
