//! Small number-theory helpers.

/// Greatest common divisor (Euclid's algorithm).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, computed as `a / gcd(a, b) * b` so the
/// intermediate product stays small. `lcm(x, 0)` and `lcm(0, x)` are 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 { 0 } else { a / gcd(a, b) * b }
}
