//! Math-utils Integer Utilities
//!
//! Trial-division primality testing over every primitive integer type and
//! iterative Fibonacci numbers in `u64`.

mod fibonacci;
mod prime;

pub use fibonacci::{checked_fibonacci, fibonacci, MAX_FIBONACCI_INDEX};
pub use prime::{is_prime, PrimeCandidate};
