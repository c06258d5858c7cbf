// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! A fluent, human-readable builder for regular expression patterns.
//!
//! `human-regex` builds pattern *strings*. Every operation on a pattern
//! value splices literal syntax fragments around the existing content and
//! returns a new value; nothing is parsed, validated or matched here. The
//! finished pattern is handed to the external engine (the `regex` crate)
//! through the pass-through methods (`compile`, `search`, `findall`, ...).
//!
//! Patterns come in two non-interoperable representations:
//! [`StringPattern`] backed by characters and [`BytesPattern`] backed by
//! bytes (the fragments being the UTF-8 encoding of the character ones).
//! Combining the two is a compile error.
//!
//! ```
//! use human_regex::StringPattern;
//!
//! let degrees = StringPattern::new(r"\d")
//!     .repeat(Some(1), Some(3))
//!     .named("degrees")
//!     .append("°");
//! assert_eq!(degrees, r"(?P<degrees>\d{1,3})°");
//!
//! let found = degrees.search("latitude 47° north").unwrap().unwrap();
//! assert_eq!(found.as_str(), "47°");
//! ```

mod engine;
mod flags;
mod pattern;
mod repr;
mod token;

pub use engine::{purge, BytesMatches, Matches};
pub use flags::Flags;
pub use pattern::{BytesPattern, Pattern, StringPattern};
pub use repr::{Bytes, IntoFragment, Repr, Text};
pub use token::Token;
