use super::nat::*;
use super::tlist::*;
use super::token::*;

/*
 * Indexed access
 *
 * `At` is strict: an index past the end has no impl and fails to compile.
 * `TryAt` follows the `Front`/`Back` policy and yields `EmptyList` instead.
 */


/// Element at position `I`, peeling one element per `S`.
///
/// ```
/// use tlist_core::*;
/// assert_same::<At<U1, tlist![i32, f64, u8]>, f64>();
/// assert_same::<At<idx!(2), tlist![i32, f64, u8]>, u8>();
/// ```
///
/// Out of range is a compile error:
///
/// ```compile_fail,E0277
/// use tlist_core::*;
/// let _: Option<At<U3, tlist![i32, f64, u8]>> = None;
/// ```
///
/// ```compile_fail,E0277
/// use tlist_core::*;
/// let _: Option<At<U0, tlist![]>> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "`At`: index runs past the end of the type list (remaining list `{Self}`)",
    label = "the index is not below the list's `LEN`",
    note = "use `TryAt` to get `EmptyList` instead of an error"
)]
pub trait Get<I: Nat>: TList {
    type Output: Token;
}

impl<A: Token, T: TList> Get<Z> for TCons<A, T> {
    type Output = A;
}

impl<A: Token, T: Get<N>, N: Nat> Get<S<N>> for TCons<A, T> {
    type Output = <T as Get<N>>::Output;
}

pub type At<I, L> = <L as Get<I>>::Output;


pub trait TryGet<I: Nat>: TList {
    type Output;
}

impl<I: Nat> TryGet<I> for () {
    type Output = EmptyList;
}

impl<A: Token, T: TList> TryGet<Z> for TCons<A, T> {
    type Output = A;
}

impl<A: Token, T: TryGet<N>, N: Nat> TryGet<S<N>> for TCons<A, T> {
    type Output = <T as TryGet<N>>::Output;
}

pub type TryAt<I, L> = <L as TryGet<I>>::Output;
