/// Parse a nutrient magnitude out of loosely-formatted text.
///
/// Strips every character that is not a digit or a decimal point, then
/// parses the remainder as a float. Anything unparseable collapses to 0.0:
/// malformed or partial input during editing must never block the caller.
pub fn parse_nutrient(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_nutrient("310"), 310.0);
    }

    #[test]
    fn test_unit_suffix_stripped() {
        assert_eq!(parse_nutrient("15g"), 15.0);
        assert_eq!(parse_nutrient("240 kcal"), 240.0);
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(parse_nutrient("12.5"), 12.5);
        assert_eq!(parse_nutrient("12.5g"), 12.5);
    }

    #[test]
    fn test_empty_and_garbage_fall_back_to_zero() {
        assert_eq!(parse_nutrient(""), 0.0);
        assert_eq!(parse_nutrient("abc"), 0.0);
        assert_eq!(parse_nutrient("g"), 0.0);
        assert_eq!(parse_nutrient("."), 0.0);
    }

    #[test]
    fn test_multiple_decimal_points_fall_back_to_zero() {
        assert_eq!(parse_nutrient("1.2.3"), 0.0);
    }

    #[test]
    fn test_whitespace_and_mixed_text() {
        assert_eq!(parse_nutrient(" 15 g "), 15.0);
        assert_eq!(parse_nutrient("approx 20"), 20.0);
    }
}
