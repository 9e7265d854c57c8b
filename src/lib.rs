#![no_std]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::alloc_instead_of_core, clippy::std_instead_of_alloc)]
//! `dsa_kit` is a small catalogue of independent array and string algorithms: two-sum, anagram
//!  and palindrome checks, duplicate detection, and a handful of classic integer exercises.
//!
//! Every function is pure: it borrows its input, never mutates it, and keeps no state between calls.
//!  "No answer" is expressed as `None`, `false` or an empty collection, while malformed input
//!  (a negative count, an empty required string) is rejected with [`Error::InvalidArgument`].
//!
//! ## Arrays
//! ```rust
//! use dsa_kit::{find_duplicate_values, two_sum_complement};
//!
//! assert_eq!(two_sum_complement(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert_eq!(find_duplicate_values(&[1, 2, 2, 3, 3, 3]), [2, 3]);
//! ```
//!
//! ## Strings
//! ```rust
//! use dsa_kit::{are_anagrams, is_palindrome, smallest_word_last};
//!
//! assert!(are_anagrams("listen", "silent"));
//! assert!(is_palindrome("Madam"));
//! assert_eq!(smallest_word_last("to be or"), "or");
//! ```
//!
//! ## Numbers
//! ```rust
//! use dsa_kit::{factorial, fibonacci, Error};
//!
//! assert_eq!(fibonacci(5)?, [0, 1, 1, 2, 3]);
//! assert!(matches!(factorial(-1), Err(Error::InvalidArgument(_))));
//! # Ok::<(), Error>(())
//! ```

mod error;
pub use error::{Error, Result};

pub mod array;
pub use array::{
    concat_array, find_duplicate_values, has_adjacent_duplicate, has_duplicate, second_largest,
    two_sum_brute_force, two_sum_complement,
};

pub mod string;
pub use string::{
    are_anagrams, are_anagrams_ignore_case, is_palindrome, is_self_reversal, reverse_string,
    smallest_word_first, smallest_word_last, FrequencyMap,
};

pub mod numeric;
pub use numeric::{factorial, fibonacci, is_prime, swap_without_temp};
