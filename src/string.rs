//! Algorithms over strings.
//!
//! All comparisons work on Unicode scalar values (`char`), not bytes, so multi-byte text
//!  reverses and counts the way a reader would expect.
extern crate alloc;

use alloc::{string::String, vec::Vec};

use crate::error::{invalid, Result};

mod frequency;
pub use frequency::FrequencyMap;

/// Returns whether `s` reads the same forwards and backwards, character for character.
///
/// Unlike [`is_palindrome`] nothing is normalised: case, spaces and punctuation all count.
///
/// # Examples
/// ```rust
/// # use dsa_kit::is_self_reversal;
/// assert!(is_self_reversal("racecar"));
/// assert!(!is_self_reversal("Racecar"));
/// ```
#[must_use]
pub fn is_self_reversal(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Returns whether `a` and `b` are anagrams: the same characters with the same multiplicities.
///
/// Comparison is case-sensitive, see [`are_anagrams_ignore_case`] otherwise.
///
/// # Examples
/// ```rust
/// # use dsa_kit::are_anagrams;
/// assert!(are_anagrams("listen", "silent"));
/// assert!(!are_anagrams("Listen", "silent"));
/// assert!(!are_anagrams("abc", "abcc"));
/// ```
#[must_use]
pub fn are_anagrams(a: &str, b: &str) -> bool {
    // equal multisets of chars always have equal byte length
    if a.len() != b.len() {
        return false;
    }

    FrequencyMap::from_chars(a) == FrequencyMap::from_chars(b)
}

/// Returns whether `a` and `b` are anagrams once both are lowercased.
///
/// # Examples
/// ```rust
/// # use dsa_kit::are_anagrams_ignore_case;
/// assert!(are_anagrams_ignore_case("Listen", "Silent"));
/// ```
#[must_use]
pub fn are_anagrams_ignore_case(a: &str, b: &str) -> bool {
    let fa: FrequencyMap<char> = a.chars().flat_map(char::to_lowercase).collect();
    let fb: FrequencyMap<char> = b.chars().flat_map(char::to_lowercase).collect();

    fa == fb
}

/// Returns whether `s` is a palindrome ignoring case and any non-alphanumeric character.
///
/// # Examples
/// ```rust
/// # use dsa_kit::is_palindrome;
/// assert!(is_palindrome("Madam"));
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("Hello"));
/// ```
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Reverses `s` character by character, scanning from the last character to the first.
///
/// Applying it twice gives back the original string.
///
/// # Examples
/// ```rust
/// # use dsa_kit::reverse_string;
/// assert_eq!(reverse_string("Kotlin"), "niltoK");
/// ```
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the first word of minimal length in a space separated string.
///
/// Words are split on every single `' '`, so consecutive spaces produce empty words, and an
///  empty word is always the smallest. Ties keep the earliest word.
///
/// # Errors
/// Returns [`InvalidArgument`](crate::Error::InvalidArgument) if `input` is empty.
///
/// # Examples
/// ```rust
/// # use dsa_kit::smallest_word_first;
/// assert_eq!(smallest_word_first("I am word best coder"), Ok("I"));
/// assert_eq!(smallest_word_first("to be or"), Ok("to"));
/// assert!(smallest_word_first("").is_err());
/// ```
pub fn smallest_word_first(input: &str) -> Result<&str> {
    if input.is_empty() {
        return Err(invalid("smallest_word_first needs a non-empty string"));
    }

    let mut words = input.split(' ');
    // split always yields at least one item
    let mut smallest = words.next().unwrap_or(input);

    for word in words {
        if char_len(word) < char_len(smallest) {
            smallest = word;
        }
    }

    Ok(smallest)
}

/// Returns the last word of minimal length in a space separated string.
///
/// Empty words (from leading, trailing or repeated spaces) are ignored. Ties keep the latest word,
///  the opposite of [`smallest_word_first`]. Returns `""` if there are no words at all.
///
/// # Examples
/// ```rust
/// # use dsa_kit::smallest_word_last;
/// assert_eq!(smallest_word_last("I am word best coder"), "I");
/// assert_eq!(smallest_word_last("to be or"), "or");
/// assert_eq!(smallest_word_last("   "), "");
/// ```
#[must_use]
pub fn smallest_word_last(input: &str) -> &str {
    input
        .split(' ')
        .filter(|w| !w.is_empty())
        .fold(None, |smallest: Option<&str>, word| match smallest {
            Some(s) if char_len(word) > char_len(s) => Some(s),
            _ => Some(word),
        })
        .unwrap_or("")
}
