//! String parsing and formatting helpers.
//!
//! Parsers answer `None` instead of erroring; formatters never fail. The one
//! fallible helper is [`count`], which rejects malformed patterns.

use core::fmt::Display;
use num_traits::{Float, PrimInt};
use regex::Regex;

use crate::macros::trace_event;
use crate::{Error, Result};

const LENIENT_TRUE: [&str; 6] = ["t", "true", "1", "1.0", "yes", "y"];

/// Parses a base-10 integer. No surrounding whitespace is allowed.
pub fn parse_int<T: PrimInt>(s: &str) -> Option<T> {
    T::from_str_radix(s, 10).ok()
}

/// Parses a floating-point number, ignoring surrounding whitespace.
pub fn parse_float<T: Float>(s: &str) -> Option<T> {
    T::from_str_radix(s.trim(), 10).ok()
}

/// Returns `true` if `s` parses as an `i32`.
pub fn is_int(s: &str) -> bool {
    parse_int::<i32>(s).is_some()
}

/// Returns `true` if `s` has content and parses as an `f64`.
///
/// The only spelled-out values accepted are `Infinity` and `NaN`, optionally
/// signed and in exactly that case. `inf`, `infinity` and `nan` are rejected
/// even though [`parse_float`] accepts them.
pub fn is_number(s: &str) -> bool {
    if is_null_or_empty(Some(s)) {
        return false;
    }
    let body = s.trim().trim_start_matches(['+', '-']);
    let word = body.starts_with(|c: char| c.is_ascii_alphabetic());
    (!word || matches!(body, "Infinity" | "NaN")) && parse_float::<f64>(s).is_some()
}

/// Returns `true` for `None`, an empty string, or the word `null` (any case,
/// surrounding whitespace ignored).
pub fn is_null_or_empty(s: Option<&str>) -> bool {
    match s {
        None => true,
        Some(s) => s.is_empty() || s.trim().eq_ignore_ascii_case("null"),
    }
}

/// Interprets `value` as a boolean.
///
/// `true`/`false` are recognized in any case. In strict mode anything else,
/// including `None`, is `None`. In lenient mode `t`, `1`, `1.0`, `yes` and
/// `y` also count as true and everything else is false.
pub fn is_true(value: Option<&str>, strict: bool) -> Option<bool> {
    let Some(value) = value else {
        return if strict { None } else { Some(false) };
    };
    let lower = value.to_lowercase();
    match lower.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ if strict => None,
        other => Some(LENIENT_TRUE.contains(&other)),
    }
}

/// `s` repeated `times` times.
pub fn repeat(s: &str, times: usize) -> String {
    s.repeat(times)
}

/// `n` spaces.
pub fn spaces(n: usize) -> String {
    repeat(" ", n)
}

/// `n` left-padded with zeroes to `width` characters (sign included).
pub fn zero_padded(n: i64, width: usize) -> String {
    format!("{n:0width$}")
}

/// Replaces the last occurrence of `needle` in `s`.
pub fn replace_last(s: &str, needle: &str, replacement: &str) -> String {
    match s.rfind(needle) {
        Some(pos) => {
            let mut out = String::with_capacity(s.len() - needle.len() + replacement.len());
            out.push_str(&s[..pos]);
            out.push_str(replacement);
            out.push_str(&s[pos + needle.len()..]);
            out
        }
        None => s.to_owned(),
    }
}

/// Replaces `suffix` at the end of `source`.
///
/// A `suffix` that [`is_null_or_empty`] appends `replacement`; a missing
/// suffix leaves `source` as is.
pub fn replace_suffix(source: &str, suffix: &str, replacement: &str) -> String {
    if is_null_or_empty(Some(suffix)) {
        return format!("{source}{replacement}");
    }
    match source.strip_suffix(suffix) {
        Some(stem) => format!("{stem}{replacement}"),
        None => source.to_owned(),
    }
}

/// Upper-cases the first character if it is lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_owned(),
    }
}

/// Joins the `Display` forms of `items` with `delim`.
pub fn join<I>(items: I, delim: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| ToString::to_string(&item))
        .collect::<Vec<_>>()
        .join(delim)
}

/// Renders `items` as `[a,b,c]`, or `(a,b,c)` when `square` is false.
pub fn bracketed<I>(items: I, square: bool) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let (open, close) = if square { ('[', ']') } else { ('(', ')') };
    format!("{open}{}{close}", join(items, ","))
}

/// Number of non-overlapping matches of the regular expression `pattern` in
/// `haystack`.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if `pattern` does not compile.
pub fn count(pattern: &str, haystack: &str) -> Result<usize> {
    let re = Regex::new(pattern).map_err(|source| {
        trace_event!(warn, pattern, "rejected regular expression");
        Error::Pattern {
            pattern: pattern.to_owned(),
            source,
        }
    })?;
    Ok(re.find_iter(haystack).count())
}

/// Length, in characters, of the shorter string when one contains the
/// other; zero otherwise.
pub fn prefix_containment(a: &str, b: &str) -> usize {
    if a.contains(b) {
        b.chars().count()
    } else if b.contains(a) {
        a.chars().count()
    } else {
        0
    }
}
