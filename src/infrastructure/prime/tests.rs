use super::*;

#[test]
fn test_is_prime_small_values() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    for n in 0..50 {
        assert_eq!(is_prime(n), primes.contains(&n), "is_prime({})", n);
    }
}

#[test]
fn test_is_prime_odd_squares() {
    // Squares of primes are the boundary case for the divisor loop
    assert!(!is_prime(9));
    assert!(!is_prime(25));
    assert!(!is_prime(49));
    assert!(!is_prime(121));
    assert!(!is_prime(10_403)); // 101 * 103
    assert!(is_prime(10_007));
}

#[test]
fn test_next_prime_keeps_odd_primes() {
    assert_eq!(next_prime(3), 3);
    assert_eq!(next_prime(11), 11);
    assert_eq!(next_prime(53), 53);
}

#[test]
fn test_next_prime_rounds_up() {
    assert_eq!(next_prime(0), 3);
    assert_eq!(next_prime(1), 3);
    assert_eq!(next_prime(4), 5);
    assert_eq!(next_prime(22), 23);
    assert_eq!(next_prime(30), 31);
    assert_eq!(next_prime(100), 101);
    assert_eq!(next_prime(106), 107);
    assert_eq!(next_prime(222), 223);
}

#[test]
fn test_next_prime_even_prime_is_skipped() {
    // 2 is forced odd before the primality check
    assert_eq!(next_prime(2), 3);
}

#[test]
fn test_next_prime_always_prime_and_not_smaller() {
    for n in 0..2000 {
        let p = next_prime(n);
        assert!(is_prime(p), "next_prime({}) = {} is not prime", n, p);
        assert!(p >= n);
    }
}
