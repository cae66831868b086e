

pub use crate::types::tlist::*;
pub use crate::types::token::*;
pub use crate::types::nat::*;
pub use crate::types::access::*;
pub use crate::types::search::*;
pub use crate::types::same::*;
