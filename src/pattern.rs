// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::borrow::Borrow;
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use std::ops::{Add, BitOr};

use crate::repr::{Bytes, IntoFragment, Repr, Text};
use crate::token::Token;

/// An immutable regular expression pattern under construction.
///
/// Every operation is a pure transformation: it consumes the values it is
/// given and produces a new, independently owned pattern whose content is
/// the old content spliced together with token-table fragments and the
/// operands. Nothing here parses, validates, or matches; the finished
/// pattern is handed to the external engine (see the pass-through methods
/// in the engine module).
///
/// `Pattern<Text>` is backed by characters, `Pattern<Bytes>` by raw bytes.
/// The two never mix: combining a pattern with a fragment of the other
/// representation is a type error at the call site.
///
/// ```
/// use human_regex::StringPattern;
///
/// let degrees = StringPattern::new(r"\d")
///     .repeat(Some(1), Some(3))
///     .named("degrees")
///     .append("°");
/// assert_eq!(degrees, r"(?P<degrees>\d{1,3})°");
/// ```
///
/// A byte fragment is not an operand of a character pattern:
///
/// ```compile_fail
/// use human_regex::StringPattern;
///
/// let mixed = StringPattern::new("a").append(b"b");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern<R: Repr> {
    content: R::Owned,
    repr: PhantomData<R>,
}

/// A pattern backed by characters (`String` content).
pub type StringPattern = Pattern<Text>;

/// A pattern backed by bytes (`Vec<u8>` content).
pub type BytesPattern = Pattern<Bytes>;

impl<R: Repr> Pattern<R> {
    /// Create a pattern from a raw fragment of the matching representation.
    pub fn new(fragment: impl IntoFragment<R>) -> Self {
        Self::from_owned(fragment.into_fragment())
    }

    fn from_owned(content: R::Owned) -> Self {
        Pattern {
            content,
            repr: PhantomData,
        }
    }

    fn empty() -> Self {
        Self::from_owned(R::Owned::default())
    }

    /// Consume the pattern and return the raw backing sequence.
    pub fn into_inner(self) -> R::Owned {
        self.content
    }

    fn push(&mut self, fragment: &R::Slice) {
        R::append(&mut self.content, fragment);
    }

    fn push_token(&mut self, token: Token) {
        R::append(&mut self.content, R::token(token));
    }

    /// Concatenate the given fragments into one pattern, i.e. join them
    /// with the empty separator.
    ///
    /// ```
    /// use human_regex::StringPattern;
    ///
    /// let pattern = StringPattern::concatenate(["Hello", " ", "world"]);
    /// assert_eq!(pattern, "Hello world");
    /// ```
    pub fn concatenate<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoFragment<R>,
    {
        let mut result = Self::empty();
        for fragment in fragments {
            result.push(fragment.into_fragment().borrow());
        }
        result
    }

    /// Alternation: `self|other`.
    ///
    /// No precedence handling is performed; group the alternatives first
    /// if precedence matters. Also available as the `|` operator.
    pub fn or(mut self, other: impl IntoFragment<R>) -> Self {
        self.push_token(Token::Or);
        self.push(other.into_fragment().borrow());
        self
    }

    /// Return a new pattern with `appendent` added after the content.
    /// Also available as the `+` operator.
    pub fn append(mut self, appendent: impl IntoFragment<R>) -> Self {
        self.push(appendent.into_fragment().borrow());
        self
    }

    /// Return a new pattern with `prependent` added before the content.
    ///
    /// Useful when an already built pattern needs raw fragments in front
    /// of it: `part.prepend("Expected ").prepend("A Long-")`.
    pub fn prepend(self, prependent: impl IntoFragment<R>) -> Self {
        let mut result = Self::new(prependent);
        result.push(self.content.borrow());
        result
    }

    /// Join `elements` with the content of this pattern as the separator,
    /// analogous to the join of the plain sequence types.
    ///
    /// ```
    /// use human_regex::StringPattern;
    ///
    /// let list = StringPattern::new(", ").join(["apples", "pears", "oranges"]);
    /// assert_eq!(list, "apples, pears, oranges");
    /// ```
    pub fn join<I>(self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoFragment<R>,
    {
        let mut result = Self::empty();
        let mut first = true;
        for element in elements {
            if !first {
                result.push(self.content.borrow());
            }
            first = false;
            result.push(element.into_fragment().borrow());
        }
        result
    }

    fn wrapped(self, open: Token, close: Token) -> Self {
        let mut result = Self::empty();
        result.push_token(open);
        result.push(self.content.borrow());
        result.push_token(close);
        result
    }

    fn prefixed(self, token: Token) -> Self {
        let mut result = Self::empty();
        result.push_token(token);
        result.push(self.content.borrow());
        result
    }

    fn suffixed(mut self, token: Token) -> Self {
        self.push_token(token);
        self
    }

    /// Wrap the content in an unnamed capturing group: `(self)`.
    pub fn unnamed(self) -> Self {
        self.wrapped(Token::OpenGroup, Token::CloseGroup)
    }

    /// Wrap the content in the extension notation: `(?self)`.
    ///
    /// This is the building block of the named/flag/assertion forms below;
    /// it is rarely useful on its own.
    pub fn extension(self) -> Self {
        self.wrapped(Token::OpenExtension, Token::CloseExtension)
    }

    /// Wrap the content in a non-capturing group: `(?:self)`.
    pub fn no_capture(self) -> Self {
        self.prefixed(Token::NoCapture).extension()
    }

    /// Wrap the content in an atomic group: `(?>self)`.
    pub fn atomic(self) -> Self {
        self.prefixed(Token::Atomic).extension()
    }

    /// Wrap the content in a group named `name`: `(?P<name>self)`.
    pub fn named(self, name: impl IntoFragment<R>) -> Self {
        let mut label = Self::empty();
        label.push_token(Token::OpenName);
        label.push(name.into_fragment().borrow());
        label.push_token(Token::CloseName);
        label.push(self.content.borrow());
        label.extension()
    }

    /// Treat the content as a group name and refer back to that group:
    /// `(?P=self)`.
    pub fn backreference(self) -> Self {
        self.prefixed(Token::NameReference).extension()
    }

    /// Treat the content as comment text: `(?#self)`.
    pub fn comment(self) -> Self {
        self.prefixed(Token::Comment).extension()
    }

    /// Encode engine flags into the expression itself: `(?flags)`.
    ///
    /// Intended for placement at the start of an expression. The flag
    /// letters are not validated here.
    pub fn set_flags(flags: impl IntoFragment<R>) -> Self {
        Self::new(flags).extension()
    }

    /// Modify the flags for this part of the expression: `(?flags:self)`.
    pub fn modify_flags(self, flags: impl IntoFragment<R>) -> Self {
        let mut body = Self::new(flags);
        body.push_token(Token::FlagsEnd);
        body.push(self.content.borrow());
        body.extension()
    }

    /// Positive lookahead: `self(?=following)`.
    pub fn followed_by(self, following: impl IntoFragment<R>) -> Self {
        let follows = Self::new(following).prefixed(Token::FollowedBy).extension();
        self.append(follows)
    }

    /// Negative lookahead: `self(?!not_following)`.
    pub fn not_followed_by(self, not_following: impl IntoFragment<R>) -> Self {
        let does_not_follow = Self::new(not_following)
            .prefixed(Token::NotFollowedBy)
            .extension();
        self.append(does_not_follow)
    }

    /// Positive lookbehind: `(?<=preceding)self`.
    pub fn preceded_by(self, preceding: impl IntoFragment<R>) -> Self {
        let precedes = Self::new(preceding).prefixed(Token::PrecededBy).extension();
        precedes.append(self)
    }

    /// Negative lookbehind: `(?<!not_preceding)self`.
    pub fn not_preceded_by(self, not_preceding: impl IntoFragment<R>) -> Self {
        let does_not_precede = Self::new(not_preceding)
            .prefixed(Token::NotPrecededBy)
            .extension();
        does_not_precede.append(self)
    }

    /// Conditional reference: `(?(id_or_name)yes)`, matching `yes` only if
    /// the referenced group participated in the match. `id_or_name` may be
    /// a group number (rendered as its decimal literal) or a group name.
    pub fn yes_no(id_or_name: impl IntoFragment<R>, yes: impl IntoFragment<R>) -> Self {
        Self::new(id_or_name).unnamed().append(yes).extension()
    }

    /// Conditional reference with an alternative:
    /// `(?(id_or_name)yes|no)`.
    pub fn yes_no_else(
        id_or_name: impl IntoFragment<R>,
        yes: impl IntoFragment<R>,
        no: impl IntoFragment<R>,
    ) -> Self {
        Self::new(id_or_name).unnamed().append(yes).or(no).extension()
    }

    /// Wrap the content in a character set: `[self]`.
    pub fn set(self) -> Self {
        self.wrapped(Token::OpenCharSet, Token::CloseCharSet)
    }

    /// Append the optional quantifier: `self?`.
    pub fn optional(self) -> Self {
        self.suffixed(Token::Optional)
    }

    /// Append the zero-or-more quantifier: `self*`.
    pub fn zero_or_more(self) -> Self {
        self.suffixed(Token::ZeroOrMore)
    }

    /// Append the one-or-more quantifier: `self+`.
    pub fn one_or_more(self) -> Self {
        self.suffixed(Token::OneOrMore)
    }

    /// Append the lazy modifier: `self?`.
    ///
    /// Chained after a quantifier this produces the lazy quantifiers,
    /// e.g. `zero_or_more().lazy()` yields `self*?`.
    pub fn lazy(self) -> Self {
        self.suffixed(Token::Lazy)
    }

    /// Append a bounded quantifier: `self{minimum,maximum}`.
    ///
    /// An absent bound is left out of the notation, distinct from zero:
    /// `repeat(Some(2), None)` yields `self{2,}`, `repeat(None, Some(4))`
    /// yields `self{,4}` and `repeat(None, None)` yields `self{,}`.
    /// Note that the omitted-minimum forms are not accepted by every
    /// engine dialect; no validation happens here.
    pub fn repeat(mut self, minimum: Option<usize>, maximum: Option<usize>) -> Self {
        self.push_token(Token::OpenQuantifier);
        if let Some(minimum) = minimum {
            self.push(R::decimal(minimum).borrow());
        }
        self.push_token(Token::QuantifierSeparator);
        if let Some(maximum) = maximum {
            self.push(R::decimal(maximum).borrow());
        }
        self.push_token(Token::CloseQuantifier);
        self
    }

    /// Append a fixed quantifier: `self{number}`.
    ///
    /// `exactly(0)` encodes the literal zero, `self{0}`.
    pub fn exactly(mut self, number: usize) -> Self {
        self.push_token(Token::OpenQuantifier);
        self.push(R::decimal(number).borrow());
        self.push_token(Token::CloseQuantifier);
        self
    }
}

impl StringPattern {
    /// The pattern content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl BytesPattern {
    /// The pattern content as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }
}

impl<R: Repr> IntoFragment<R> for Pattern<R> {
    fn into_fragment(self) -> R::Owned {
        self.content
    }
}

impl<R: Repr> IntoFragment<R> for &Pattern<R> {
    fn into_fragment(self) -> R::Owned {
        self.content.clone()
    }
}

impl<R: Repr, T: IntoFragment<R>> Add<T> for Pattern<R> {
    type Output = Pattern<R>;

    fn add(self, rhs: T) -> Pattern<R> {
        self.append(rhs)
    }
}

impl<R: Repr, T: IntoFragment<R>> BitOr<T> for Pattern<R> {
    type Output = Pattern<R>;

    fn bitor(self, rhs: T) -> Pattern<R> {
        self.or(rhs)
    }
}

impl From<&str> for StringPattern {
    fn from(fragment: &str) -> Self {
        Self::new(fragment)
    }
}

impl From<String> for StringPattern {
    fn from(fragment: String) -> Self {
        Self::new(fragment)
    }
}

impl From<&[u8]> for BytesPattern {
    fn from(fragment: &[u8]) -> Self {
        Self::new(fragment)
    }
}

impl<const N: usize> From<&[u8; N]> for BytesPattern {
    fn from(fragment: &[u8; N]) -> Self {
        Self::new(fragment)
    }
}

impl From<Vec<u8>> for BytesPattern {
    fn from(fragment: Vec<u8>) -> Self {
        Self::new(fragment)
    }
}

/// Convert a character pattern into a byte pattern by encoding its
/// content as UTF-8. This is the only bridge between the two
/// representations; there is no implicit mixing.
impl From<StringPattern> for BytesPattern {
    fn from(pattern: StringPattern) -> Self {
        Self::from_owned(pattern.content.into_bytes())
    }
}

impl<R: Repr> Debug for Pattern<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.content).finish()
    }
}

impl Display for StringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl Display for BytesPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content.escape_ascii())
    }
}

impl PartialEq<str> for StringPattern {
    fn eq(&self, other: &str) -> bool {
        self.content == other
    }
}

impl PartialEq<&str> for StringPattern {
    fn eq(&self, other: &&str) -> bool {
        self.content == *other
    }
}

impl PartialEq<String> for StringPattern {
    fn eq(&self, other: &String) -> bool {
        &self.content == other
    }
}

impl PartialEq<[u8]> for BytesPattern {
    fn eq(&self, other: &[u8]) -> bool {
        self.content == other
    }
}

impl PartialEq<&[u8]> for BytesPattern {
    fn eq(&self, other: &&[u8]) -> bool {
        self.content == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for BytesPattern {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.content == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for BytesPattern {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.content == *other
    }
}
