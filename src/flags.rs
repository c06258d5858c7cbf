// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::{BitOr, BitOrAssign};

/// Engine flags accepted by [`compile`](crate::StringPattern::compile) and
/// the other pass-through methods, combined with `|`:
///
/// ```
/// use human_regex::Flags;
///
/// let flags = Flags::IGNORECASE | Flags::MULTILINE;
/// assert!(flags.contains(Flags::I));
/// ```
///
/// `LOCALE` and `DEBUG` exist for surface compatibility and have no
/// effect on the engine; `ASCII` disables Unicode mode.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Flags(u16);

impl Flags {
    pub const NOFLAG: Flags = Flags(0);

    pub const ASCII: Flags = Flags(1);
    pub const A: Flags = Flags(1);

    pub const IGNORECASE: Flags = Flags(1 << 1);
    pub const I: Flags = Flags(1 << 1);

    pub const LOCALE: Flags = Flags(1 << 2);
    pub const L: Flags = Flags(1 << 2);

    pub const MULTILINE: Flags = Flags(1 << 3);
    pub const M: Flags = Flags(1 << 3);

    pub const DOTALL: Flags = Flags(1 << 4);
    pub const S: Flags = Flags(1 << 4);

    pub const UNICODE: Flags = Flags(1 << 5);
    pub const U: Flags = Flags(1 << 5);

    pub const VERBOSE: Flags = Flags(1 << 6);
    pub const X: Flags = Flags(1 << 6);

    pub const DEBUG: Flags = Flags(1 << 7);

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::Flags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_combine() {
        let flags = Flags::IGNORECASE | Flags::MULTILINE | Flags::DOTALL;
        assert!(flags.contains(Flags::IGNORECASE));
        assert!(flags.contains(Flags::MULTILINE));
        assert!(flags.contains(Flags::DOTALL));
        assert!(!flags.contains(Flags::VERBOSE));
        assert!(flags.contains(Flags::NOFLAG));
    }

    #[test]
    fn test_short_names_alias_long_names() {
        assert_eq!(Flags::A, Flags::ASCII);
        assert_eq!(Flags::I, Flags::IGNORECASE);
        assert_eq!(Flags::L, Flags::LOCALE);
        assert_eq!(Flags::M, Flags::MULTILINE);
        assert_eq!(Flags::S, Flags::DOTALL);
        assert_eq!(Flags::U, Flags::UNICODE);
        assert_eq!(Flags::X, Flags::VERBOSE);
    }

    #[test]
    fn test_noflag_is_empty() {
        assert!(Flags::NOFLAG.is_empty());
        assert!(Flags::default().is_empty());
        assert_eq!(Flags::NOFLAG | Flags::I, Flags::I);
    }
}
