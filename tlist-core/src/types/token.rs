use std::fmt;


/*
 * Token identity
 */

/// Identity of a type token.
///
/// `path` names the type; `site` is where `token!` registered it, so two distinct
/// types that print the same path still differ. Primitives have an empty site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId {
    path: &'static str,
    site: &'static str,
}

impl TokenId {
    pub const fn new(path: &'static str) -> TokenId {
        TokenId { path, site: "" }
    }

    pub const fn at(path: &'static str, site: &'static str) -> TokenId {
        TokenId { path, site }
    }

    pub const fn path(self) -> &'static str {
        self.path
    }

    pub const fn site(self) -> &'static str {
        self.site
    }

    /// Path without its module prefix. Generic arguments are kept as written.
    pub fn name(self) -> &'static str {
        let outer = &self.path[..self.path.find('<').unwrap_or(self.path.len())];
        match outer.rfind("::") {
            Some(i) => &self.path[i + 2..],
            None => self.path,
        }
    }

    /// Const identity comparison, usable from associated consts.
    pub const fn same(self, other: TokenId) -> bool {
        str_eq(self.path, other.path) && str_eq(self.site, other.site)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}


/// A compile-time identity that can be stored in a `TList`.
///
/// Only the identity is ever inspected, so uninhabited tag types work fine.
pub trait Token: 'static {
    const ID: TokenId;
}


/// Placeholder produced by `Front`, `Back` and `TryAt` when there is nothing there.
///
/// It does not implement `Token`, so it can never end up inside a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmptyList {}


macro_rules! primitive_tokens {
    ($($t:ty),*) => {
        $( impl Token for $t { const ID: TokenId = TokenId::new(stringify!($t)); } )*
    };
}

primitive_tokens!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64
);

impl Token for String {
    const ID: TokenId = TokenId::new("alloc::string::String");
}


/// Declares tag tokens, or registers existing types as tokens.
///
/// ```
/// use tlist_core::{token, Token};
///
/// token!(pub SomeTag);
/// struct Meters(f64);
/// token!(impl Meters);
///
/// assert_eq!(SomeTag::ID.name(), "SomeTag");
/// assert!(!SomeTag::ID.same(Meters::ID));
/// ```
#[macro_export]
macro_rules! token {
    (impl $($t:ty),+ $(,)?) => {
        $(
            impl $crate::Token for $t {
                const ID: $crate::TokenId = $crate::TokenId::at(
                    concat!(module_path!(), "::", stringify!($t)),
                    concat!(file!(), ":", line!(), ":", column!()),
                );
            }
        )+
    };
    ($(#[$meta:meta])* $vis:vis $name:ident $(, $($rest:tt)*)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {}
        $crate::token!(impl $name);
        $( $crate::token!($($rest)*); )?
    };
    () => {};
}
pub use crate::token;


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    token!(Alpha, Beta);

    mod nested {
        crate::token!(pub Alpha);
    }

    mod inner {
        pub struct C;
    }
    pub struct Wrapper<T>(T);
    token!(impl Wrapper<inner::C>);

    #[test]
    fn test_primitive_ids() {
        assert_eq!(i32::ID.path(), "i32");
        assert_eq!(<()>::ID.path(), "()");
        assert_eq!(String::ID.name(), "String");
        assert!(!i32::ID.same(u32::ID));
        assert!(f64::ID.same(f64::ID));
    }

    #[test]
    fn test_tag_ids() {
        assert_eq!(Alpha::ID.name(), "Alpha");
        assert!(Alpha::ID.path().ends_with("::tests::Alpha"));
        assert!(!Alpha::ID.same(Beta::ID));
        assert!(!Alpha::ID.same(nested::Alpha::ID));
    }

    #[test]
    fn test_shadowed_tag_is_distinct() {
        use crate::types::search::{contains, count, position};
        use crate::types::tlist::tlist;

        token!(Alpha);

        assert_eq!(Alpha::ID.path(), self::Alpha::ID.path());
        assert!(!Alpha::ID.same(self::Alpha::ID));
        assert!(!contains::<Alpha, tlist![self::Alpha]>());
        assert_eq!(count::<Alpha, tlist![self::Alpha, Beta]>(), 0);
        assert_eq!(position::<Alpha, tlist![self::Alpha, Alpha]>(), Some(1));
    }

    #[test]
    fn test_generic_name() {
        let id = <Wrapper<inner::C> as Token>::ID;
        assert_eq!(id.name(), "Wrapper<inner::C>");
        assert!(id.path().ends_with("::tests::Wrapper<inner::C>"));
        assert!(!id.site().is_empty());
        assert_eq!(TokenId::new("a::b::Pair<x::Y, z::W>").name(), "Pair<x::Y, z::W>");
        assert_eq!(TokenId::new("()").name(), "()");
    }

    #[test]
    fn test_same_in_const() {
        const SAME: bool = Alpha::ID.same(Alpha::ID);
        const DIFFERENT: bool = Alpha::ID.same(Beta::ID);
        assert!(SAME);
        assert!(!DIFFERENT);
    }

    #[quickcheck]
    fn same_matches_str_eq(a: String, b: String) -> bool {
        let a: &'static str = Box::leak(a.into_boxed_str());
        let b: &'static str = Box::leak(b.into_boxed_str());
        TokenId::new(a).same(TokenId::new(b)) == (a == b)
    }

    #[quickcheck]
    fn same_needs_matching_site(path: String, a: String, b: String) -> bool {
        let path: &'static str = Box::leak(path.into_boxed_str());
        let a: &'static str = Box::leak(a.into_boxed_str());
        let b: &'static str = Box::leak(b.into_boxed_str());
        TokenId::at(path, a).same(TokenId::at(path, b)) == (a == b)
    }

    #[quickcheck]
    fn same_is_reflexive(a: String) -> bool {
        let a: &'static str = Box::leak(a.into_boxed_str());
        TokenId::new(a).same(TokenId::new(a))
    }
}
