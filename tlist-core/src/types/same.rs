use std::any::TypeId;

use super::token::EmptyList;


/// Implemented only when `Self` and `Rhs` are the same type.
pub trait Same<Rhs: ?Sized> {}
impl<T: ?Sized> Same<T> for T {}

/// Compiles only if `A` and `B` are identical; does nothing at runtime.
///
/// ```
/// use tlist_core::*;
/// assert_same::<PushBack<u8, tlist![i32]>, tlist![i32, u8]>();
/// ```
///
/// ```compile_fail
/// use tlist_core::*;
/// assert_same::<tlist![i32, u8], tlist![u8, i32]>();
/// ```
pub const fn assert_same<A: ?Sized + Same<B>, B: ?Sized>() {}


/// Runtime check for the marker returned by `Front`, `Back` and `TryAt` on a miss.
pub fn is_empty_list<T: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<EmptyList>()
}
