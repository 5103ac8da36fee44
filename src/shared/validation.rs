use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating review category identifiers
    /// Lowercase alphanumeric words joined by single hyphens or underscores
    /// - Valid: "responsiveness", "customs-clearance", "cost_transparency"
    /// - Invalid: "-pricing", "pricing_", "Pricing", "cost__x", "cost x"
    pub static ref CATEGORY_ID_REGEX: Regex =
        Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_regex_valid() {
        assert!(CATEGORY_ID_REGEX.is_match("responsiveness"));
        assert!(CATEGORY_ID_REGEX.is_match("customs-clearance"));
        assert!(CATEGORY_ID_REGEX.is_match("cost_transparency"));
        assert!(CATEGORY_ID_REGEX.is_match("a1"));
    }

    #[test]
    fn test_category_id_regex_invalid() {
        assert!(!CATEGORY_ID_REGEX.is_match("-pricing"));
        assert!(!CATEGORY_ID_REGEX.is_match("pricing_"));
        assert!(!CATEGORY_ID_REGEX.is_match("Pricing"));
        assert!(!CATEGORY_ID_REGEX.is_match("cost__x"));
        assert!(!CATEGORY_ID_REGEX.is_match("cost x"));
        assert!(!CATEGORY_ID_REGEX.is_match(""));
    }
}
