//! Classic integer exercises: fibonacci, primality, factorial and the temporary-free swap.
extern crate alloc;

use alloc::vec::Vec;

use crate::error::{invalid, Result};

/// The number of leading Fibonacci terms that fit in a `u64`, `F(0)..=F(93)`.
pub const MAX_FIBONACCI_TERMS: i64 = 94;

/// The largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL: i64 = 20;

/// Returns the first `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// `n = 0` yields an empty sequence and `n = 1` yields `[0]`.
///
/// # Errors
/// Returns [`InvalidArgument`](crate::Error::InvalidArgument) if `n` is negative or greater than
///  [`MAX_FIBONACCI_TERMS`].
///
/// # Examples
/// ```rust
/// # use dsa_kit::fibonacci;
/// assert_eq!(fibonacci(10).unwrap(), [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<Vec<u64>> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(invalid("fibonacci term count overflows u64"));
    }

    let n = usize::try_from(n).map_err(|_| invalid("fibonacci term count is negative"))?;

    let mut seq: Vec<u64> = [0, 1].into_iter().take(n).collect();
    seq.reserve(n.saturating_sub(2));

    for i in 2..n {
        seq.push(seq[i - 1] + seq[i - 2]);
    }

    Ok(seq)
}

/// Returns whether `n` is prime, by trial division up to `sqrt(n)`.
///
/// Every `n <= 1` is not prime.
///
/// # Examples
/// ```rust
/// # use dsa_kit::is_prime;
/// assert!(is_prime(29));
/// assert!(!is_prime(9));
/// assert!(!is_prime(1));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without the overflow
    (2..).take_while(|&i| i <= n / i).all(|i| n % i != 0)
}

fn factorial_rec(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * factorial_rec(n - 1)
    }
}

/// Returns `n!`, computed recursively.
///
/// # Errors
/// Returns [`InvalidArgument`](crate::Error::InvalidArgument) if `n` is negative or greater than
///  [`MAX_FACTORIAL`].
///
/// # Examples
/// ```rust
/// # use dsa_kit::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64> {
    if n > MAX_FACTORIAL {
        return Err(invalid("factorial overflows u64"));
    }

    let n = u64::try_from(n).map_err(|_| invalid("factorial of a negative number"))?;

    Ok(factorial_rec(n))
}

/// Swaps two integers using only addition and subtraction, no temporary.
///
/// Arithmetic wraps, which keeps the trick exact across the whole `i64` range.
///
/// # Examples
/// ```rust
/// # use dsa_kit::swap_without_temp;
/// assert_eq!(swap_without_temp(5, 10), (10, 5));
/// ```
#[must_use]
pub const fn swap_without_temp(mut a: i64, mut b: i64) -> (i64, i64) {
    a = a.wrapping_add(b);
    b = a.wrapping_sub(b);
    a = a.wrapping_sub(b);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Error;

    #[test]
    fn fib() {
        assert_eq!(fibonacci(0), Ok(Vec::new()));
        assert_eq!(fibonacci(1).unwrap(), [0]);
        assert_eq!(fibonacci(2).unwrap(), [0, 1]);
        assert_eq!(fibonacci(10).unwrap(), [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);

        let longest = fibonacci(MAX_FIBONACCI_TERMS).unwrap();
        assert_eq!(longest.len(), 94);
        assert_eq!(longest.last(), Some(&12_200_160_415_121_876_738));

        assert!(matches!(fibonacci(-3), Err(Error::InvalidArgument(_))));
        assert!(matches!(fibonacci(95), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn primes() {
        let small: Vec<i64> = (-5..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(small, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);

        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        assert!(is_prime(1_000_000_007));
        // 7 * 1_317_624_576_693_539_401
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn fact() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert!(matches!(factorial(-1), Err(Error::InvalidArgument(_))));
        assert!(matches!(factorial(21), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn swap() {
        assert_eq!(swap_without_temp(5, 10), (10, 5));
        assert_eq!(swap_without_temp(-7, 7), (7, -7));
        assert_eq!(swap_without_temp(i64::MAX, -1), (-1, i64::MAX));
        assert_eq!(swap_without_temp(i64::MIN, i64::MAX), (i64::MAX, i64::MIN));
    }
}
