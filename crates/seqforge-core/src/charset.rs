//! Fixed alphabets used by random and padded nodes.

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Uppercase latin letters.
pub const UPPER_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits and uppercase letters with the easily confused I and O removed.
pub const UNAMBIGUOUS: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Uppercase hexadecimal digits.
pub const HEX_UPPER: &str = "0123456789ABCDEF";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unambiguous_excludes_lookalikes() {
        assert!(!UNAMBIGUOUS.contains('I'));
        assert!(!UNAMBIGUOUS.contains('O'));
        assert_eq!(UNAMBIGUOUS.len(), 34);
    }

    #[test]
    fn hex_is_digits_plus_a_to_f() {
        assert_eq!(HEX_UPPER, format!("{}ABCDEF", DIGITS));
    }
}
