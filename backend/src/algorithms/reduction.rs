//! Digit reduction: repeated digit sums down to a single digit.

/// Decimal digits of `n`, least significant first. `0` yields a single `0`.
pub fn digits(mut n: u32) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(10);
    while n > 0 {
        out.push(n % 10);
        n /= 10;
    }
    out
}

/// Sum of the decimal digits of `n`, optionally skipping zeros.
pub fn digit_sum(n: u32, ignore_zero: bool) -> u32 {
    digits(n)
        .into_iter()
        .filter(|d| !(ignore_zero && *d == 0))
        .sum()
}

/// Collapse `n` to a single digit by iterated digit sums.
///
/// Every positive input lands in 1-9. The only input whose digits are all
/// zero is `0` itself, which is returned unchanged, so the loop always
/// terminates.
pub fn reduce(mut n: u32, ignore_zero: bool) -> u32 {
    while n >= 10 {
        n = digit_sum(n, ignore_zero);
    }
    n
}

/// [`reduce`] for totals that may not fit in a `u32`.
pub fn reduce_wide(n: u64, ignore_zero: bool) -> u32 {
    match u32::try_from(n) {
        Ok(narrow) => reduce(narrow, ignore_zero),
        // At most 20 digits, so the first digit sum is below 200.
        Err(_) => reduce(sum_ascii_digits(&n.to_string()), ignore_zero),
    }
}

/// Sum of the digits of every ASCII digit character in `s`.
pub(crate) fn sum_ascii_digits(s: &str) -> u32 {
    s.chars().filter_map(|c| c.to_digit(10)).sum()
}
