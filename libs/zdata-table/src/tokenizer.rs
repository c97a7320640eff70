//! # Line Tokenizer
//!
//! Turns one raw text line into numeric field candidates.
//!
//! Tables come from spreadsheets, instrument dumps and hand-edited files, so a
//! line may carry labels, units or broken scientific notation around the
//! numbers. Cleanup runs in four passes:
//!
//! 1. drop a leading run of `e`/`E`
//! 2. drop every `e`/`E` not directly after a digit or `.`
//! 3. drop every `+`/`-` not directly before a digit or `.`
//! 4. split on runs of characters that cannot appear in a number
//!
//! ## Example
//!
//! ```rust
//! use zdata_table::tokenize;
//!
//! assert_eq!(tokenize("time: 1.5e3, -2"), vec!["1.5e3", "-2"]);
//! ```

/// Cleans a line and splits it into numeric field candidates.
///
/// Empty fields are discarded, so a blank line yields an empty vector.
pub fn tokenize(line: &str) -> Vec<String> {
    let cleaned = strip_orphan_signs(&strip_orphan_exponents(strip_leading_exponents(line)));
    split_fields(&cleaned).map(str::to_owned).collect()
}

/// Pass 1: removes a leading run of exponent markers.
pub fn strip_leading_exponents(line: &str) -> &str {
    line.trim_start_matches(is_exponent_marker)
}

/// Pass 2: removes exponent markers that have no mantissa in front of them.
///
/// Each marker is judged by the character before it in the input, so in
/// `"1ee5"` only the second `e` goes.
pub fn strip_orphan_exponents(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    let mut previous: Option<char> = None;

    for c in line.chars() {
        if !is_exponent_marker(c) || previous.is_some_and(is_mantissa_char) {
            cleaned.push(c);
        }
        previous = Some(c);
    }

    cleaned
}

/// Pass 3: removes sign characters that are not followed by a digit or `.`.
pub fn strip_orphan_signs(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if is_sign(c) && !chars.peek().copied().is_some_and(is_mantissa_char) {
            continue;
        }
        cleaned.push(c);
    }

    cleaned
}

/// Pass 4: splits on separator runs and skips empty fields.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_numeric_char(c))
        .filter(|field| !field.is_empty())
}

#[inline]
fn is_exponent_marker(c: char) -> bool {
    c == 'e' || c == 'E'
}

#[inline]
fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

#[inline]
fn is_mantissa_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[inline]
fn is_numeric_char(c: char) -> bool {
    is_mantissa_char(c) || is_sign(c) || is_exponent_marker(c)
}
