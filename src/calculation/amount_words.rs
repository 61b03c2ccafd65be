//! Amount-in-words conversion, Indian numbering.
//!
//! Printed invoices spell the grand total out in words using the Indian
//! crore/lakh/thousand/hundred grouping rather than the international
//! thousand/million grouping. The conversion is a pure string function so
//! it can be tested independently of any rendering target.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spells out a 0-99 chunk, e.g. 47 becomes "Forty Seven".
fn two_digit_words(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
    }
}

/// Converts a non-negative integer amount to words with Indian grouping.
///
/// The amount is decomposed into crore, lakh, thousand, and hundred
/// chunks; each non-zero chunk is spelled out and suffixed with its place
/// name. Zero renders as "Zero". A crore chunk of 100 or more is itself
/// converted recursively so very large amounts still read correctly.
///
/// # Example
///
/// ```
/// use siteledger::calculation::amount_to_words;
///
/// assert_eq!(amount_to_words(0), "Zero");
/// assert_eq!(
///     amount_to_words(1_234_567),
///     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
/// );
/// ```
pub fn amount_to_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }

    let mut n = amount;
    let crore = n / 10_000_000;
    n %= 10_000_000;
    let lakh = n / 100_000;
    n %= 100_000;
    let thousand = n / 1_000;
    n %= 1_000;
    let hundred = n / 100;
    n %= 100;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        let words = if crore < 100 {
            two_digit_words(crore)
        } else {
            amount_to_words(crore)
        };
        parts.push(format!("{} Crore", words));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if n > 0 {
        parts.push(two_digit_words(n));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(amount_to_words(0), "Zero");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(amount_to_words(1), "One");
        assert_eq!(amount_to_words(9), "Nine");
    }

    #[test]
    fn test_teens() {
        assert_eq!(amount_to_words(10), "Ten");
        assert_eq!(amount_to_words(14), "Fourteen");
        assert_eq!(amount_to_words(19), "Nineteen");
    }

    #[test]
    fn test_tens() {
        assert_eq!(amount_to_words(20), "Twenty");
        assert_eq!(amount_to_words(47), "Forty Seven");
        assert_eq!(amount_to_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundred_boundary() {
        assert_eq!(amount_to_words(100), "One Hundred");
        assert_eq!(amount_to_words(101), "One Hundred One");
        assert_eq!(amount_to_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_thousand_boundary() {
        assert_eq!(amount_to_words(1_000), "One Thousand");
        assert_eq!(
            amount_to_words(99_999),
            "Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
    }

    #[test]
    fn test_lakh_boundary() {
        assert_eq!(amount_to_words(100_000), "One Lakh");
        assert_eq!(
            amount_to_words(9_999_999),
            "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
    }

    #[test]
    fn test_crore_boundary() {
        assert_eq!(amount_to_words(10_000_000), "One Crore");
    }

    #[test]
    fn test_mixed_grouping() {
        assert_eq!(
            amount_to_words(1_234_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
        assert_eq!(
            amount_to_words(23_456_789),
            "Two Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine"
        );
    }

    #[test]
    fn test_zero_chunks_are_skipped() {
        assert_eq!(amount_to_words(10_000_500), "One Crore Five Hundred");
        assert_eq!(amount_to_words(200_003), "Two Lakh Three");
    }

    #[test]
    fn test_large_crore_chunk_recurses() {
        assert_eq!(
            amount_to_words(1_230_000_000),
            "One Hundred Twenty Three Crore"
        );
    }
}
