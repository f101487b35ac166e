//! Fibonacci numbers

/// Largest `n` for which F(n) fits in a `u64`
pub const MAX_FIBONACCI_INDEX: u32 = 93;

/// F(n) with F(0) = 0 and F(1) = 1, wrapping modulo 2^64 past
/// [`MAX_FIBONACCI_INDEX`].
pub const fn fibonacci(n: u32) -> u64 {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    let mut i = 0;
    while i < n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        i += 1;
    }
    a
}

/// F(n), or `None` if it does not fit in a `u64`
pub const fn checked_fibonacci(n: u32) -> Option<u64> {
    if n > MAX_FIBONACCI_INDEX {
        None
    } else {
        Some(fibonacci(n))
    }
}
