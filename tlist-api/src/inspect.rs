use std::fmt;

use tlist_core::{TList, Token, TokenId};

use crate::error::{InspectError, R};
use crate::trace::trace_inspect;


/*
 * Runtime view of a type list's token identities
 */

/// The token identities of a `TList`, in order.
///
/// Read-only: every structural change happens on the type, and a new `Listing`
/// is taken of the result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Listing(Vec<TokenId>);

impl Listing {
    pub fn of<L: TList>() -> Listing {
        let tokens = L::tokens();
        trace_inspect!(len = tokens.len(), "listing type list");
        Listing(tokens)
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = TokenId>) -> Listing {
        Listing(tokens.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[TokenId] {
        &self.0
    }

    pub fn front(&self) -> Option<TokenId> {
        self.0.first().copied()
    }

    pub fn back(&self) -> Option<TokenId> {
        self.0.last().copied()
    }

    pub fn at(&self, index: usize) -> R<TokenId> {
        self.0.get(index).copied().ok_or_else(|| {
            trace_inspect!(index, len = self.len(), "at: index out of bounds");
            InspectError::OutOfBounds { index, len: self.len() }
        })
    }

    pub fn find(&self, token: TokenId) -> R<usize> {
        self.0.iter().position(|t| t.same(token)).ok_or_else(|| {
            trace_inspect!(%token, "find: token not present");
            InspectError::NotFound { token }
        })
    }

    pub fn find_token<X: Token>(&self) -> R<usize> {
        self.find(X::ID)
    }

    pub fn contains(&self, token: TokenId) -> bool {
        self.0.iter().any(|t| t.same(token))
    }

    pub fn count(&self, token: TokenId) -> usize {
        self.0.iter().filter(|t| t.same(token)).count()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(token.name())?;
        }
        f.write_str("]")
    }
}
