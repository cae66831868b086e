
pub mod tlist;
pub mod token;
pub mod nat;
pub mod access;
pub mod search;
pub mod same;
