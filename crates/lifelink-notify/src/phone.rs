//! Phone number normalization to international format.

/// Normalize a raw phone number into international format.
///
/// Strips spaces, dashes, and parentheses; a leading `0` is replaced by
/// the country prefix, and a number with no `+` prefix gets the country
/// prefix prepended.
pub fn normalize_phone(raw: &str, country_prefix: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix('0') {
        return format!("{country_prefix}{rest}");
    }
    if !cleaned.starts_with('+') {
        return format!("{country_prefix}{cleaned}");
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_replaced_by_prefix() {
        assert_eq!(normalize_phone("0788123456", "+250"), "+250788123456");
    }

    #[test]
    fn test_already_international_unchanged() {
        assert_eq!(normalize_phone("+250788123456", "+250"), "+250788123456");
    }

    #[test]
    fn test_bare_number_gets_prefix() {
        assert_eq!(normalize_phone("788123456", "+250"), "+250788123456");
    }

    #[test]
    fn test_separators_stripped() {
        assert_eq!(normalize_phone("(078) 812-34 56", "+250"), "+250788123456");
    }
}
