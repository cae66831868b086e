use super::tlist::*;
use super::token::*;

/*
 * Linear search, membership and multiplicity
 *
 * Each query folds over the list front to back, comparing `Token::ID`s in
 * const context.
 */


pub trait Contains<X: Token>: TList {
    const VALUE: bool;
}

impl<X: Token> Contains<X> for () {
    const VALUE: bool = false;
}

impl<X: Token, A: Token, T: Contains<X>> Contains<X> for TCons<A, T> {
    const VALUE: bool = A::ID.same(X::ID) || <T as Contains<X>>::VALUE;
}


pub trait Count<X: Token>: TList {
    const VALUE: usize;
}

impl<X: Token> Count<X> for () {
    const VALUE: usize = 0;
}

impl<X: Token, A: Token, T: Count<X>> Count<X> for TCons<A, T> {
    const VALUE: usize = A::ID.same(X::ID) as usize + <T as Count<X>>::VALUE;
}


/// First position of `X`, or `None`.
pub trait Position<X: Token>: TList {
    const POSITION: Option<usize>;
}

impl<X: Token> Position<X> for () {
    const POSITION: Option<usize> = None;
}

impl<X: Token, A: Token, T: Position<X>> Position<X> for TCons<A, T> {
    const POSITION: Option<usize> = if A::ID.same(X::ID) {
        Some(0)
    } else {
        match <T as Position<X>>::POSITION {
            Some(i) => Some(i + 1),
            None => None,
        }
    };
}


/// First position of `X`. Using `INDEX` when `X` is absent fails const evaluation.
///
/// ```
/// use tlist_core::*;
/// const I: usize = find::<u8, tlist![i32, u8, u8]>();
/// assert_eq!(I, 1);
/// ```
///
/// ```compile_fail
/// use tlist_core::*;
/// const I: usize = find::<u8, tlist![i32, f64]>();
/// assert_eq!(I, 0);
/// ```
///
/// ```compile_fail
/// use tlist_core::*;
/// const I: usize = <tlist![] as Find<i32>>::INDEX;
/// assert_eq!(I, 0);
/// ```
pub trait Find<X: Token>: Position<X> {
    const INDEX: usize;
}

impl<X: Token, L: Position<X>> Find<X> for L {
    const INDEX: usize = match <L as Position<X>>::POSITION {
        Some(index) => index,
        None => panic!("`Find`: token is not an element of the type list"),
    };
}


pub const fn contains<X: Token, L: Contains<X>>() -> bool {
    <L as Contains<X>>::VALUE
}

pub const fn count<X: Token, L: Count<X>>() -> usize {
    <L as Count<X>>::VALUE
}

pub const fn position<X: Token, L: Position<X>>() -> Option<usize> {
    <L as Position<X>>::POSITION
}

pub const fn find<X: Token, L: Find<X>>() -> usize {
    <L as Find<X>>::INDEX
}
