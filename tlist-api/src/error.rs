use tlist_core::TokenId;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    #[error("index {index} is out of bounds for a type list of length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("token `{token}` is not an element of the type list")]
    NotFound { token: TokenId },
}

pub type R<T> = std::result::Result<T, InspectError>;
