// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// The syntactic roles of the regular expression notation.
///
/// Every builder operation splices its output together from these
/// fragments plus the caller's operands. The table is closed: the set of
/// roles and their literal values are fixed for the lifetime of the
/// process.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    Empty,
    OpenCharSet,
    CloseCharSet,
    OpenGroup,
    CloseGroup,
    OpenExtension,
    CloseExtension,
    OpenName,
    CloseName,
    OpenQuantifier,
    CloseQuantifier,
    QuantifierSeparator,
    Or,
    NoCapture,
    FlagsEnd,
    Atomic,
    NameReference,
    Comment,
    FollowedBy,
    NotFollowedBy,
    PrecededBy,
    NotPrecededBy,
    ZeroOrMore,
    OneOrMore,
    Optional,
    Lazy,
}

impl Token {
    /// All roles, in declaration order.
    pub const ALL: [Token; 26] = [
        Token::Empty,
        Token::OpenCharSet,
        Token::CloseCharSet,
        Token::OpenGroup,
        Token::CloseGroup,
        Token::OpenExtension,
        Token::CloseExtension,
        Token::OpenName,
        Token::CloseName,
        Token::OpenQuantifier,
        Token::CloseQuantifier,
        Token::QuantifierSeparator,
        Token::Or,
        Token::NoCapture,
        Token::FlagsEnd,
        Token::Atomic,
        Token::NameReference,
        Token::Comment,
        Token::FollowedBy,
        Token::NotFollowedBy,
        Token::PrecededBy,
        Token::NotPrecededBy,
        Token::ZeroOrMore,
        Token::OneOrMore,
        Token::Optional,
        Token::Lazy,
    ];

    /// The literal fragment of this role in the character representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Empty => "",
            Token::OpenCharSet => "[",
            Token::CloseCharSet => "]",
            Token::OpenGroup => "(",
            Token::CloseGroup => ")",
            Token::OpenExtension => "(?",
            Token::CloseExtension => ")",
            Token::OpenName => "P<",
            Token::CloseName => ">",
            Token::OpenQuantifier => "{",
            Token::CloseQuantifier => "}",
            Token::QuantifierSeparator => ",",
            Token::Or => "|",
            Token::NoCapture => ":",
            Token::FlagsEnd => ":",
            Token::Atomic => ">",
            Token::NameReference => "P=",
            Token::Comment => "#",
            Token::FollowedBy => "=",
            Token::NotFollowedBy => "!",
            Token::PrecededBy => "<=",
            Token::NotPrecededBy => "<!",
            Token::ZeroOrMore => "*",
            Token::OneOrMore => "+",
            Token::Optional => "?",
            // the lazy modifier shares the literal of `Optional`,
            // `zero_or_more` + `lazy` chains into "*?" etc.
            Token::Lazy => "?",
        }
    }

    /// The literal fragment of this role in the byte representation,
    /// i.e. the UTF-8 encoding of [`Token::as_str`].
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
