//! Prime selection for bucket counts
//!
//! Bucket counts are kept prime so that hash values sharing a common factor
//! with the capacity do not pile into a subset of buckets.

/// Check whether `n` is prime by trial division over odd divisors.
///
/// `2` and `3` are prime, `0`, `1` and every other even number are not.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor = 3usize;
    // factor <= n / factor avoids overflowing factor * factor
    while factor <= n / factor {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }

    true
}

/// Return the smallest prime reachable from `n` by first forcing it odd and
/// then stepping over odd candidates.
///
/// Note that an even input never maps to itself: `next_prime(2)` is `3`.
/// Callers that want to keep an already-prime value check [`is_prime`] first.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };

    while !is_prime(candidate) {
        candidate += 2;
    }

    candidate
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
