//! Trial-division primality test

/// Primitive integers that can be tested for primality
pub trait PrimeCandidate: Copy {
    fn is_prime(self) -> bool;
}

macro_rules! impl_prime_candidate {
    ($($t:ty),* $(,)?) => {
        $(
            impl PrimeCandidate for $t {
                #[inline]
                fn is_prime(self) -> bool {
                    if self < 2 {
                        return false;
                    }
                    if self % 2 == 0 {
                        return self == 2;
                    }
                    let mut divisor: $t = 3;
                    // checked_mul fails only once divisor^2 exceeds the type, and so n
                    while let Some(square) = divisor.checked_mul(divisor) {
                        if square > self {
                            break;
                        }
                        if self % divisor == 0 {
                            return false;
                        }
                        divisor += 2;
                    }
                    true
                }
            }
        )*
    };
}

impl_prime_candidate!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Returns true if `n` is prime. Negative numbers, 0 and 1 are not prime.
///
/// ```
/// use mathutils_integer::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(100u64));
/// assert!(!is_prime(-7i32));
/// ```
#[inline]
pub fn is_prime<I: PrimeCandidate>(n: I) -> bool {
    n.is_prime()
}
