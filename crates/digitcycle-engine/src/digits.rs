//! Base-10 digit decomposition. No locale or formatting concerns.

/// Decompose `n` into its decimal digits, most-significant first.
///
/// Zero decomposes to `[0]`, so every value has at least one digit.
pub fn decompose(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Sum of the squares of `digits`.
pub fn square_sum(digits: &[u8]) -> u64 {
    digits.iter().map(|&d| u64::from(d) * u64::from(d)).sum()
}
