pub mod prelude;
pub mod inspect;
mod error;
mod trace;

pub use crate::inspect::Listing;
pub use crate::error::{InspectError, R};

pub use tlist_core::*;


#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
