//! Lexicographic string comparison with `String.compareTo` results.
//!
//! The value is not just a sign: it is the difference between the first
//! differing UTF-16 code units, or the length difference when one string is a
//! prefix of the other. Callers that sort on the raw value rely on this.

/// Compare `a` against `b` over UTF-16 code units.
pub fn java_compare(a: &str, b: &str) -> i32 {
    let mut left = a.encode_utf16();
    let mut right = b.encode_utf16();

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x != y => return i32::from(x) - i32::from(y),
            (Some(_), Some(_)) => {}
            (Some(_), None) => return 1 + left.count() as i32,
            (None, Some(_)) => return -(1 + right.count() as i32),
            (None, None) => return 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_differing_unit() {
        assert_eq!(java_compare("bob", "ann"), 1);
        assert_eq!(java_compare("ann", "bob"), -1);
        assert_eq!(java_compare("apple", "azure"), i32::from(b'p') - i32::from(b'z'));
    }

    #[test]
    fn test_prefix_uses_length_difference() {
        assert_eq!(java_compare("annabel", "ann"), 4);
        assert_eq!(java_compare("ann", "annabel"), -4);
        assert_eq!(java_compare("", "ab"), -2);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(java_compare("wowitsbot", "wowitsbot"), 0);
        assert_eq!(java_compare("", ""), 0);
    }

    #[test]
    fn test_counts_utf16_units() {
        // U+1F600 is a surrogate pair, so it counts as two units.
        assert_eq!(java_compare("a\u{1F600}", "a"), 2);
    }
}
