// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Pass-through surface delegating to the external regex engine (the
//! `regex` crate): `regex::Regex` for character patterns and
//! `regex::bytes::Regex` for byte patterns.
//!
//! Nothing here interprets the pattern. Arguments, results and engine
//! errors are forwarded unchanged; a pattern the engine considers
//! malformed fails at the point of delegation, not earlier.
//!
//! The one-shot methods (`search`, `split`, `sub`, ...) compile with
//! [`Flags::NOFLAG`] through a process-wide cache keyed by pattern
//! content and flags; the cache holds a bounded number of entries
//! and [`purge`] empties it. To run a one-shot operation with flags,
//! either compile explicitly or encode the flags into the pattern with
//! `set_flags`/`modify_flags`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use regex::bytes::{Match as BytesMatch, Regex as BytesRegex, RegexBuilder as BytesRegexBuilder};
use regex::{Error, Match, Regex, RegexBuilder};

use crate::flags::Flags;
use crate::pattern::{BytesPattern, StringPattern};

static TEXT_CACHE: OnceLock<Mutex<HashMap<(String, Flags), Arc<Regex>>>> = OnceLock::new();
static BYTES_CACHE: OnceLock<Mutex<HashMap<(Vec<u8>, Flags), Arc<BytesRegex>>>> = OnceLock::new();

/// The cache never holds more than this many compiled patterns; on
/// overflow it is cleared wholesale and refilled on demand.
const CACHE_LIMIT: usize = 512;

/// Clear the process-wide cache of compiled patterns, for both
/// representations.
pub fn purge() {
    if let Some(cache) = TEXT_CACHE.get() {
        lock(cache).clear();
    }
    if let Some(cache) = BYTES_CACHE.get() {
        lock(cache).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a poisoned cache only ever holds compiled patterns, keep using it
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_text(pattern: &str, flags: Flags) -> Result<Regex, Error> {
    let mut builder = RegexBuilder::new(pattern);
    apply_text_flags(&mut builder, flags);
    builder.build()
}

fn apply_text_flags(builder: &mut RegexBuilder, flags: Flags) {
    builder
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .ignore_whitespace(flags.contains(Flags::VERBOSE));
    if flags.contains(Flags::ASCII) {
        builder.unicode(false);
    }
    // LOCALE and DEBUG have no engine counterpart
}

fn build_bytes(pattern: &[u8], flags: Flags) -> Result<BytesRegex, Error> {
    // the engine takes the pattern itself as text even in bytes mode
    let pattern = std::str::from_utf8(pattern)
        .map_err(|error| Error::Syntax(format!("pattern is not valid UTF-8: {}", error)))?;
    let mut builder = BytesRegexBuilder::new(pattern);
    builder
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .ignore_whitespace(flags.contains(Flags::VERBOSE));
    if flags.contains(Flags::ASCII) {
        builder.unicode(false);
    }
    builder.build()
}

fn cached_text(pattern: &str, flags: Flags) -> Result<Arc<Regex>, Error> {
    let cache = TEXT_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let key = (pattern.to_string(), flags);

    let mut map = lock(cache);
    if let Some(regex) = map.get(&key) {
        return Ok(regex.clone());
    }

    let regex = Arc::new(build_text(pattern, flags)?);
    if map.len() >= CACHE_LIMIT {
        map.clear();
    }
    map.insert(key, regex.clone());
    Ok(regex)
}

fn cached_bytes(pattern: &[u8], flags: Flags) -> Result<Arc<BytesRegex>, Error> {
    let cache = BYTES_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let key = (pattern.to_vec(), flags);

    let mut map = lock(cache);
    if let Some(regex) = map.get(&key) {
        return Ok(regex.clone());
    }

    let regex = Arc::new(build_bytes(pattern, flags)?);
    if map.len() >= CACHE_LIMIT {
        map.clear();
    }
    map.insert(key, regex.clone());
    Ok(regex)
}

/// The regex-crate meta characters, the set its `escape` function quotes.
const fn is_meta_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'\\' | b'.' | b'+' | b'*' | b'?' | b'(' | b')' | b'|' | b'[' | b']' | b'{' | b'}'
            | b'^' | b'$' | b'#' | b'&' | b'-' | b'~'
    )
}

impl StringPattern {
    /// Compile the pattern with the external engine.
    /// Delegates verbatim; an illegal pattern is the engine's error.
    pub fn compile(&self, flags: Flags) -> Result<Regex, Error> {
        build_text(self.as_str(), flags)
    }

    /// Find the leftmost match of the pattern in `text`.
    ///
    /// Like every one-shot method, this compiles with
    /// [`Flags::NOFLAG`]; use [`compile`](StringPattern::compile) or
    /// `set_flags` to search with flags.
    pub fn search<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        Ok(cached_text(self.as_str(), Flags::NOFLAG)?.find(text))
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool, Error> {
        Ok(cached_text(self.as_str(), Flags::NOFLAG)?.is_match(text))
    }

    /// Find a match starting at the beginning of `text`.
    ///
    /// The engine has no anchored-call mode, so this compiles the pattern
    /// wrapped as `\A(?:...)`; the non-capturing wrapper preserves group
    /// numbering.
    pub fn match_at_start<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        let anchored = self.clone().no_capture().prepend(r"\A");
        Ok(cached_text(anchored.as_str(), Flags::NOFLAG)?.find(text))
    }

    /// Find a match covering the whole of `text`, via `\A(?:...)\z`.
    pub fn fullmatch<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        let anchored = self.clone().no_capture().prepend(r"\A").append(r"\z");
        Ok(cached_text(anchored.as_str(), Flags::NOFLAG)?.find(text))
    }

    /// Split `text` by the matches of the pattern.
    pub fn split<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error> {
        Ok(cached_text(self.as_str(), Flags::NOFLAG)?
            .split(text)
            .collect())
    }

    /// Collect all non-overlapping match texts.
    pub fn findall<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error> {
        Ok(cached_text(self.as_str(), Flags::NOFLAG)?
            .find_iter(text)
            .map(|match_| match_.as_str())
            .collect())
    }

    /// Iterate over all non-overlapping matches.
    pub fn finditer<'t>(&self, text: &'t str) -> Result<Matches<'t>, Error> {
        let regex = cached_text(self.as_str(), Flags::NOFLAG)?;
        Ok(Matches::new(regex, text))
    }

    /// Replace every match in `text` with `replacement`.
    /// The replacement syntax is the engine's (`$name`, `$1`, ...).
    pub fn sub(&self, replacement: &str, text: &str) -> Result<String, Error> {
        let regex = cached_text(self.as_str(), Flags::NOFLAG)?;
        Ok(regex.replace_all(text, replacement).into_owned())
    }

    /// Like [`sub`](StringPattern::sub), additionally returning the number
    /// of replacements made.
    pub fn subn(&self, replacement: &str, text: &str) -> Result<(String, usize), Error> {
        let regex = cached_text(self.as_str(), Flags::NOFLAG)?;
        let count = regex.find_iter(text).count();
        Ok((regex.replace_all(text, replacement).into_owned(), count))
    }

    /// A pattern matching `literal` verbatim, all engine meta characters
    /// quoted. Delegates to the engine's own escape.
    pub fn escape(literal: &str) -> StringPattern {
        StringPattern::new(regex::escape(literal))
    }

    /// Clear the process-wide compiled-pattern cache. See [`purge`].
    pub fn purge() {
        purge();
    }
}

impl BytesPattern {
    /// Compile the pattern with the external bytes engine.
    /// Delegates verbatim; an illegal pattern is the engine's error.
    ///
    /// The engine reads the pattern itself as UTF-8 text even in bytes
    /// mode, so the byte content must be valid UTF-8 (a non-ASCII raw
    /// byte to match is written as a `(?-u:\xHH)` escape, as
    /// [`escape`](BytesPattern::escape) does); anything else fails with
    /// a syntax error before reaching the engine.
    pub fn compile(&self, flags: Flags) -> Result<BytesRegex, Error> {
        build_bytes(self.as_bytes(), flags)
    }

    /// Find the leftmost match of the pattern in `haystack`.
    pub fn search<'t>(&self, haystack: &'t [u8]) -> Result<Option<BytesMatch<'t>>, Error> {
        Ok(cached_bytes(self.as_bytes(), Flags::NOFLAG)?.find(haystack))
    }

    /// Whether the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &[u8]) -> Result<bool, Error> {
        Ok(cached_bytes(self.as_bytes(), Flags::NOFLAG)?.is_match(haystack))
    }

    /// Find a match starting at the beginning of `haystack`, via
    /// `\A(?:...)`.
    pub fn match_at_start<'t>(&self, haystack: &'t [u8]) -> Result<Option<BytesMatch<'t>>, Error> {
        let anchored = self.clone().no_capture().prepend(br"\A");
        Ok(cached_bytes(anchored.as_bytes(), Flags::NOFLAG)?.find(haystack))
    }

    /// Find a match covering the whole of `haystack`, via `\A(?:...)\z`.
    pub fn fullmatch<'t>(&self, haystack: &'t [u8]) -> Result<Option<BytesMatch<'t>>, Error> {
        let anchored = self.clone().no_capture().prepend(br"\A").append(br"\z");
        Ok(cached_bytes(anchored.as_bytes(), Flags::NOFLAG)?.find(haystack))
    }

    /// Split `haystack` by the matches of the pattern.
    pub fn split<'t>(&self, haystack: &'t [u8]) -> Result<Vec<&'t [u8]>, Error> {
        Ok(cached_bytes(self.as_bytes(), Flags::NOFLAG)?
            .split(haystack)
            .collect())
    }

    /// Collect all non-overlapping match slices.
    pub fn findall<'t>(&self, haystack: &'t [u8]) -> Result<Vec<&'t [u8]>, Error> {
        Ok(cached_bytes(self.as_bytes(), Flags::NOFLAG)?
            .find_iter(haystack)
            .map(|match_| match_.as_bytes())
            .collect())
    }

    /// Iterate over all non-overlapping matches.
    pub fn finditer<'t>(&self, haystack: &'t [u8]) -> Result<BytesMatches<'t>, Error> {
        let regex = cached_bytes(self.as_bytes(), Flags::NOFLAG)?;
        Ok(BytesMatches::new(regex, haystack))
    }

    /// Replace every match in `haystack` with `replacement`.
    pub fn sub(&self, replacement: &[u8], haystack: &[u8]) -> Result<Vec<u8>, Error> {
        let regex = cached_bytes(self.as_bytes(), Flags::NOFLAG)?;
        Ok(regex.replace_all(haystack, replacement).into_owned())
    }

    /// Like [`sub`](BytesPattern::sub), additionally returning the number
    /// of replacements made.
    pub fn subn(&self, replacement: &[u8], haystack: &[u8]) -> Result<(Vec<u8>, usize), Error> {
        let regex = cached_bytes(self.as_bytes(), Flags::NOFLAG)?;
        let count = regex.find_iter(haystack).count();
        Ok((regex.replace_all(haystack, replacement).into_owned(), count))
    }

    /// A pattern matching `literal` verbatim. ASCII meta characters are
    /// quoted the way the engine's own escape quotes them; non-ASCII
    /// bytes become `(?-u:\xHH)` hex escapes, since the pattern text
    /// itself must be UTF-8 and a plain `\xHH` in Unicode mode would
    /// denote a code point instead of the raw byte.
    pub fn escape(literal: &[u8]) -> BytesPattern {
        let mut content = Vec::with_capacity(literal.len());
        for &byte in literal {
            if byte.is_ascii() {
                if is_meta_byte(byte) {
                    content.push(b'\\');
                }
                content.push(byte);
            } else {
                content.extend_from_slice(format!(r"(?-u:\x{:02x})", byte).as_bytes());
            }
        }
        BytesPattern::new(content)
    }

    /// Clear the process-wide compiled-pattern cache. See [`purge`].
    pub fn purge() {
        purge();
    }
}

/// Iterator over the non-overlapping matches of a character pattern,
/// successive `find_at` calls on the cached engine handle.
pub struct Matches<'t> {
    regex: Arc<Regex>,
    text: &'t str,
    last_position: usize,
}

impl<'t> Matches<'t> {
    fn new(regex: Arc<Regex>, text: &'t str) -> Self {
        Matches {
            regex,
            text,
            last_position: 0,
        }
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.last_position > self.text.len() {
            return None;
        }

        let match_ = self.regex.find_at(self.text, self.last_position)?;
        if match_.start() == match_.end() {
            // an empty match must not repeat, step past the next character
            self.last_position = next_char_boundary(self.text, match_.end());
        } else {
            self.last_position = match_.end();
        }

        Some(match_)
    }
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

/// Iterator over the non-overlapping matches of a byte pattern.
pub struct BytesMatches<'t> {
    regex: Arc<BytesRegex>,
    haystack: &'t [u8],
    last_position: usize,
}

impl<'t> BytesMatches<'t> {
    fn new(regex: Arc<BytesRegex>, haystack: &'t [u8]) -> Self {
        BytesMatches {
            regex,
            haystack,
            last_position: 0,
        }
    }
}

impl<'t> Iterator for BytesMatches<'t> {
    type Item = BytesMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.last_position > self.haystack.len() {
            return None;
        }

        let match_ = self.regex.find_at(self.haystack, self.last_position)?;
        if match_.start() == match_.end() {
            self.last_position = match_.end() + 1;
        } else {
            self.last_position = match_.end();
        }

        Some(match_)
    }
}

#[cfg(test)]
mod tests {
    use super::purge;
    use crate::flags::Flags;
    use crate::pattern::{BytesPattern, StringPattern};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile() {
        let pattern = StringPattern::new("content").named("label");
        let regex = pattern.compile(Flags::NOFLAG).unwrap();
        assert_eq!(regex.as_str(), "(?P<label>content)");

        let captures = regex.captures("some content here").unwrap();
        assert_eq!(&captures["label"], "content");
    }

    #[test]
    fn test_compile_flags() {
        let pattern = StringPattern::new("hello");
        let regex = pattern.compile(Flags::IGNORECASE).unwrap();
        assert!(regex.is_match("say HELLO"));

        let pattern = StringPattern::new("^b");
        assert!(!pattern.compile(Flags::NOFLAG).unwrap().is_match("a\nb"));
        assert!(pattern.compile(Flags::MULTILINE).unwrap().is_match("a\nb"));

        let pattern = StringPattern::new("a.b");
        assert!(!pattern.compile(Flags::NOFLAG).unwrap().is_match("a\nb"));
        assert!(pattern.compile(Flags::DOTALL).unwrap().is_match("a\nb"));

        // flags without an engine counterpart are accepted and inert
        let pattern = StringPattern::new("x");
        assert!(pattern.compile(Flags::LOCALE | Flags::DEBUG).is_ok());
    }

    #[test]
    fn test_compile_error_propagates() {
        let pattern = StringPattern::new("(unclosed");
        assert!(pattern.compile(Flags::NOFLAG).is_err());

        // the builder does not validate, failure surfaces at delegation
        let pattern = StringPattern::new("a").repeat(Some(4), Some(2));
        assert_eq!(pattern, "a{4,2}");
        assert!(pattern.compile(Flags::NOFLAG).is_err());
    }

    #[test]
    fn test_search() {
        let pattern = StringPattern::new(r"\d").one_or_more();
        let found = pattern.search("abc 123 def").unwrap().unwrap();
        assert_eq!(found.start(), 4);
        assert_eq!(found.end(), 7);
        assert_eq!(found.as_str(), "123");

        assert_eq!(pattern.search("no digits").unwrap(), None);
    }

    #[test]
    fn test_match_at_start_and_fullmatch() {
        let pattern = StringPattern::new("world");

        // only a match at position zero counts
        assert!(pattern.match_at_start("hello world").unwrap().is_none());
        let matched = pattern.match_at_start("worldly").unwrap().unwrap();
        assert_eq!(matched.as_str(), "world");

        assert!(pattern.fullmatch("worldly").unwrap().is_none());
        let matched = pattern.fullmatch("world").unwrap().unwrap();
        assert_eq!((matched.start(), matched.end()), (0, 5));
    }

    #[test]
    fn test_anchoring_preserves_group_numbering() {
        let pattern = StringPattern::new("a").unnamed().append("b");
        let anchored = pattern.clone().no_capture().prepend(r"\A");
        // `\A(?:(a)b)` still has the group as number 1
        assert_eq!(anchored, r"\A(?:(a)b)");
        let regex = anchored.compile(Flags::NOFLAG).unwrap();
        let captures = regex.captures("ab").unwrap();
        assert_eq!(captures.get(1).unwrap().as_str(), "a");
    }

    #[test]
    fn test_split() {
        let pattern = StringPattern::new(",").append(StringPattern::new(r"\s").zero_or_more());
        assert_eq!(pattern, r",\s*");
        let pieces = pattern.split("a, b,c").unwrap();
        assert_eq!(pieces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_findall() {
        let pattern = StringPattern::new(r"\d").one_or_more();
        let found = pattern.findall("a1b22c333").unwrap();
        assert_eq!(found, vec!["1", "22", "333"]);

        assert_eq!(pattern.findall("none").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_finditer() {
        let pattern = StringPattern::new(r"\d").one_or_more();
        let mut matches = pattern.finditer("a1b22c333").unwrap();

        let match_ = matches.next().unwrap();
        assert_eq!((match_.start(), match_.end(), match_.as_str()), (1, 2, "1"));
        let match_ = matches.next().unwrap();
        assert_eq!((match_.start(), match_.end(), match_.as_str()), (3, 5, "22"));
        let match_ = matches.next().unwrap();
        assert_eq!(
            (match_.start(), match_.end(), match_.as_str()),
            (6, 9, "333")
        );
        assert!(matches.next().is_none());
    }

    #[test]
    fn test_finditer_empty_matches_advance() {
        let pattern = StringPattern::new("a").zero_or_more();
        let spans: Vec<(usize, usize)> = pattern
            .finditer("baa")
            .unwrap()
            .map(|match_| (match_.start(), match_.end()))
            .collect();
        assert_eq!(spans, vec![(0, 0), (1, 3), (3, 3)]);

        // empty matches advance over whole characters
        let pattern = StringPattern::new("x").zero_or_more();
        let spans: Vec<(usize, usize)> = pattern
            .finditer("é!")
            .unwrap()
            .map(|match_| (match_.start(), match_.end()))
            .collect();
        assert_eq!(spans, vec![(0, 0), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_sub_and_subn() {
        let pattern = StringPattern::new(r"\d").one_or_more();
        assert_eq!(pattern.sub("#", "a1b22").unwrap(), "a#b#");

        let (replaced, count) = pattern.subn("#", "a1b22").unwrap();
        assert_eq!(replaced, "a#b#");
        assert_eq!(count, 2);

        let (unchanged, count) = pattern.subn("#", "none").unwrap();
        assert_eq!(unchanged, "none");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_escape() {
        let pattern = StringPattern::escape("1+1=2.");
        assert_eq!(pattern, r"1\+1=2\.");
        assert!(pattern.fullmatch("1+1=2.").unwrap().is_some());
        assert!(pattern.fullmatch("1+1=2x").unwrap().is_none());
    }

    #[test]
    fn test_purge() {
        let pattern = StringPattern::new("cached");
        assert!(pattern.is_match("a cached pattern").unwrap());
        purge();
        assert!(pattern.is_match("a cached pattern").unwrap());
        StringPattern::purge();
        BytesPattern::purge();
    }

    #[test]
    fn test_bytes_compile_and_search() {
        let pattern = BytesPattern::new(br"\d").one_or_more().named(b"n");
        let regex = pattern.compile(Flags::NOFLAG).unwrap();
        assert!(regex.is_match(b"abc 123"));

        // byte patterns search non-UTF-8 haystacks
        let found = pattern.search(b"\xff1\xff22").unwrap().unwrap();
        assert_eq!(found.as_bytes(), b"1");
    }

    #[test]
    fn test_bytes_findall_split_sub() {
        let pattern = BytesPattern::new(br"\d").one_or_more();
        let found = pattern.findall(b"\xffa1b22c333").unwrap();
        assert_eq!(found, vec![b"1" as &[u8], b"22", b"333"]);

        let pieces = BytesPattern::new(b",").split(b"a,b,c").unwrap();
        assert_eq!(pieces, vec![b"a" as &[u8], b"b", b"c"]);

        assert_eq!(pattern.sub(b"#", b"a1b22").unwrap(), b"a#b#");
        let (replaced, count) = pattern.subn(b"#", b"a1b22").unwrap();
        assert_eq!(replaced, b"a#b#");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_bytes_fullmatch_and_finditer() {
        let pattern = BytesPattern::new(b"world");
        assert!(pattern.fullmatch(b"world").unwrap().is_some());
        assert!(pattern.fullmatch(b"worldly").unwrap().is_none());
        assert!(pattern.match_at_start(b"worldly").unwrap().is_some());

        let pattern = BytesPattern::new(b"a").zero_or_more();
        let spans: Vec<(usize, usize)> = pattern
            .finditer(b"baa")
            .unwrap()
            .map(|match_| (match_.start(), match_.end()))
            .collect();
        assert_eq!(spans, vec![(0, 0), (1, 3), (3, 3)]);
    }

    #[test]
    fn test_bytes_escape_non_ascii() {
        // non-ASCII bytes must survive as raw-byte escapes, the engine
        // would reject them as pattern text
        let escaped = BytesPattern::escape(b"\xff");
        assert_eq!(escaped, br"(?-u:\xff)");
        assert!(escaped.fullmatch(b"\xff").unwrap().is_some());
        assert!(escaped.fullmatch(b"\xfe").unwrap().is_none());
        // `\xff` must not be read as the code point U+00FF
        assert!(escaped.fullmatch("ÿ".as_bytes()).unwrap().is_none());

        let escaped = BytesPattern::escape(b"a+\xc3\xbfb");
        assert_eq!(escaped, br"a\+(?-u:\xc3)(?-u:\xbf)b");
        assert!(escaped.fullmatch(b"a+\xc3\xbfb").unwrap().is_some());
        assert!(escaped.fullmatch(b"a+b").unwrap().is_none());
    }

    #[test]
    fn test_cache_is_bounded() {
        use super::{lock, CACHE_LIMIT, TEXT_CACHE};

        for index in 0..CACHE_LIMIT * 2 {
            let pattern = StringPattern::new(format!("p{}", index));
            assert!(!pattern.is_match("q").unwrap());
        }

        let cache = TEXT_CACHE.get().unwrap();
        assert!(lock(cache).len() <= CACHE_LIMIT);
    }

    #[test]
    fn test_bytes_pattern_itself_must_be_utf8() {
        // the engine reads the pattern as text, a raw non-ASCII byte in
        // the pattern fails before delegation
        let pattern = BytesPattern::new(b"\xff");
        assert!(pattern.compile(Flags::NOFLAG).is_err());
        assert!(pattern.search(b"\xff").is_err());
    }

    #[test]
    fn test_bytes_escape_matches_engine_escape() {
        let escaped = BytesPattern::escape(b"1+1=2.");
        assert_eq!(escaped, br"1\+1=2\.");
        // for ASCII input the byte escape is the encoded text escape
        assert_eq!(
            escaped.as_bytes(),
            regex::escape("1+1=2.").as_bytes()
        );
        assert!(escaped.fullmatch(b"1+1=2.").unwrap().is_some());
    }
}
