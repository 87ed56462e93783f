//! Escape-aware display width calculations.
//!
//! This module provides functions to calculate the display width of text
//! in terminal cells, treating embedded SGR escape runs (`ESC [ … m`) as
//! zero-width and handling wide characters (CJK, emoji) correctly.

use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

/// Two-character marker that opens an SGR escape run.
pub const ESCAPE_MARKER: &str = "\u{1b}[";

/// Reset run appended after cell content that carries formatting.
pub const RESET_SEQUENCE: &str = "\u{1b}[0m";

/// Character that closes an SGR escape run.
const TERMINATOR: char = 'm';

/// Minimum string length to cache (shorter strings have minimal overhead).
const CACHE_MIN_LEN: usize = 8;

/// LRU cache for `cell_len` calculations.
static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

/// Get the cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and some emoji
/// are 2 cells wide. Control characters have 0 width.
#[must_use]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Remove every SGR escape run from `text`.
///
/// A run starts at `ESC [` and extends through the next `m`, inclusive.
/// A run with no terminator extends to the end of the text, so everything
/// after an unterminated `ESC [` is dropped.
#[must_use]
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    let Some(start) = text.find(ESCAPE_MARKER) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    let mut rest = &text[start..];
    loop {
        // rest begins at an ESC [ marker
        match rest.find(TERMINATOR) {
            None => break,
            Some(m) => rest = &rest[m + TERMINATOR.len_utf8()..],
        }
        match rest.find(ESCAPE_MARKER) {
            None => {
                out.push_str(rest);
                break;
            }
            Some(next) => {
                out.push_str(&rest[..next]);
                rest = &rest[next..];
            }
        }
    }
    Cow::Owned(out)
}

/// Compute cell width by summing character widths.
#[inline]
fn compute_cell_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Get the display width of a string, with escape runs counted as zero
/// (cached for longer strings).
///
/// This is the sum of the widths of all characters outside escape runs,
/// accounting for wide characters that take 2 cells. Control characters
/// have 0 width.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    // Short strings: compute directly (cache overhead not worth it)
    if text.len() < CACHE_MIN_LEN {
        return compute_cell_width(&strip_escapes(text));
    }

    if let Ok(mut cache) = CELL_LEN_CACHE.lock()
        && let Some(&cached) = cache.get(text)
    {
        return cached;
    }

    let width = compute_cell_width(&strip_escapes(text));

    if let Ok(mut cache) = CELL_LEN_CACHE.lock() {
        cache.put(text.to_string(), width);
    }

    width
}

/// Get the display width of a string without treating escape runs
/// specially.
///
/// Escape characters themselves are control characters and measure 0;
/// the printable body of a run measures like ordinary text.
#[must_use]
pub fn cell_len_plain(text: &str) -> usize {
    compute_cell_width(text)
}

/// Crop a string to at most `width` display columns.
///
/// Escape runs are copied through verbatim at zero cost, including runs
/// that open exactly where the crop lands, so formatting that was in
/// effect at the cut survives into the output. The crop stops at the
/// first visible character past the budget. If a wide character cannot
/// fit in the remaining budget, the result is padded with spaces to
/// exactly `width` columns.
#[must_use]
pub fn crop_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len().min(width.saturating_mul(4)));
    let mut used = 0;
    let mut rest = text;
    loop {
        if let Some(tail) = rest.strip_prefix(ESCAPE_MARKER) {
            match tail.find(TERMINATOR) {
                Some(m) => {
                    let run = ESCAPE_MARKER.len() + m + TERMINATOR.len_utf8();
                    out.push_str(&rest[..run]);
                    rest = &rest[run..];
                }
                None => {
                    // unterminated run swallows the remainder
                    out.push_str(rest);
                    rest = "";
                }
            }
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
