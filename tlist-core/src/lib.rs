//! Type-level lists of tokens, resolved entirely at compile time.
//!
//! ```
//! use tlist_core::*;
//!
//! token!(SomeTag);
//! type L = tlist![i32, f64, SomeTag];
//!
//! assert_same::<Front<L>, i32>();
//! assert_same::<Back<L>, SomeTag>();
//! assert_same::<PushBack<String, L>, tlist![i32, f64, SomeTag, String]>();
//! assert_same::<At<U1, L>, f64>();
//! const _: () = assert!(size::<L>() == 3 && find::<SomeTag, L>() == 2);
//! const _: () = assert!(contains::<SomeTag, L>() && !contains::<f32, L>());
//! ```

mod types;
pub mod internal;

pub use types::nat;
pub use internal::*;

#[doc(hidden)]
pub use paste::paste as __paste;


#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
