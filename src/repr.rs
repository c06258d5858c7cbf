// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::token::Token;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Text {}
    impl Sealed for super::Bytes {}
}

/// The backing representation of a pattern: characters or bytes.
///
/// The two representations are distinct, non-interoperable variants.
/// A `Pattern<Text>` only ever combines with character fragments and a
/// `Pattern<Bytes>` only ever combines with byte fragments; mixing the
/// two is rejected by the type system at the call site. The trait is
/// sealed, `Text` and `Bytes` are the only implementations.
pub trait Repr: private::Sealed + Copy + Ord + Hash + Debug + 'static {
    /// The owned sequence backing a pattern value.
    type Owned: Borrow<Self::Slice> + Clone + Eq + Ord + Hash + Debug + Default;

    /// The borrowed form of the sequence.
    type Slice: ?Sized;

    /// Look up a token of the token table in this representation.
    fn token(token: Token) -> &'static Self::Slice;

    /// Render an integer as its decimal literal in this representation.
    fn decimal(value: usize) -> Self::Owned;

    /// Append a fragment to a sequence under construction.
    fn append(buffer: &mut Self::Owned, fragment: &Self::Slice);
}

/// Marker for the character representation, backed by `String`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Text {}

/// Marker for the byte representation, backed by `Vec<u8>`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Bytes {}

impl Repr for Text {
    type Owned = String;
    type Slice = str;

    fn token(token: Token) -> &'static str {
        token.as_str()
    }

    fn decimal(value: usize) -> String {
        value.to_string()
    }

    fn append(buffer: &mut String, fragment: &str) {
        buffer.push_str(fragment);
    }
}

impl Repr for Bytes {
    type Owned = Vec<u8>;
    type Slice = [u8];

    fn token(token: Token) -> &'static [u8] {
        token.as_bytes()
    }

    fn decimal(value: usize) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    fn append(buffer: &mut Vec<u8>, fragment: &[u8]) {
        buffer.extend_from_slice(fragment);
    }
}

/// An operand acceptable to the builder operations of one representation:
/// either a pattern value of that representation or a raw literal of the
/// matching sequence kind. Integers convert to their decimal literal.
pub trait IntoFragment<R: Repr> {
    fn into_fragment(self) -> R::Owned;
}

impl IntoFragment<Text> for String {
    fn into_fragment(self) -> String {
        self
    }
}

impl IntoFragment<Text> for &String {
    fn into_fragment(self) -> String {
        self.clone()
    }
}

impl IntoFragment<Text> for &str {
    fn into_fragment(self) -> String {
        self.to_string()
    }
}

impl IntoFragment<Bytes> for Vec<u8> {
    fn into_fragment(self) -> Vec<u8> {
        self
    }
}

impl IntoFragment<Bytes> for &Vec<u8> {
    fn into_fragment(self) -> Vec<u8> {
        self.clone()
    }
}

impl IntoFragment<Bytes> for &[u8] {
    fn into_fragment(self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> IntoFragment<Bytes> for &[u8; N] {
    fn into_fragment(self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<R: Repr> IntoFragment<R> for usize {
    fn into_fragment(self) -> R::Owned {
        R::decimal(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bytes, IntoFragment, Repr, Text};
    use crate::token::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_lookup_per_representation() {
        for token in Token::ALL {
            assert_eq!(<Text as Repr>::token(token), token.as_str());
            assert_eq!(<Bytes as Repr>::token(token), token.as_str().as_bytes());
        }
    }

    #[test]
    fn test_decimal_rendering() {
        assert_eq!(<Text as Repr>::decimal(0), "0");
        assert_eq!(<Text as Repr>::decimal(42), "42");
        assert_eq!(<Bytes as Repr>::decimal(0), b"0");
        assert_eq!(<Bytes as Repr>::decimal(42), b"42");
    }

    #[test]
    fn test_integer_operands_become_decimal_fragments() {
        let text: String = IntoFragment::<Text>::into_fragment(7usize);
        assert_eq!(text, "7");
        let bytes: Vec<u8> = IntoFragment::<Bytes>::into_fragment(7usize);
        assert_eq!(bytes, b"7");
    }
}
