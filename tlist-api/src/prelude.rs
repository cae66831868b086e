
pub use tlist_core::{tlist, token, idx};
pub use tlist_core::{TList, TCons, Token, TokenId, EmptyList};
pub use tlist_core::{Front, Back, PushFront, PushBack, PopFront, PopBack, Concat, At, TryAt};
pub use tlist_core::{Get, TryGet, Find, Position, Contains, Count};
pub use tlist_core::{size, find, position, contains, count};
pub use tlist_core::{Nat, Z, S, Same, assert_same};
pub use tlist_core::nat::*;

pub use crate::inspect::Listing;
pub use crate::error::InspectError;
