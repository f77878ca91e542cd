use std::num::NonZeroUsize;

use textractor_engine::config::WordBudget;

/// Parse `--max-words-per-file`: a positive integer, or `unbounded`.
///
/// # Errors
/// Returns an error for zero, negative or non-numeric input.
pub fn parse_word_budget(s: &str) -> Result<WordBudget, String> {
    let s = s.trim().replace('_', "");
    if s.eq_ignore_ascii_case("unbounded") || s.eq_ignore_ascii_case("unlimited") {
        return Ok(WordBudget::Unbounded);
    }
    let value: usize = s.parse().map_err(|err| format!("invalid number '{s}': {err}"))?;
    NonZeroUsize::new(value)
        .map(WordBudget::Limited)
        .ok_or_else(|| "value must be at least 1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_budget_number() {
        assert_eq!(parse_word_budget("10").unwrap(), WordBudget::from_limit(10));
        assert_eq!(parse_word_budget("1_000").unwrap(), WordBudget::from_limit(1000));
    }

    #[test]
    fn test_parse_word_budget_unbounded() {
        assert_eq!(parse_word_budget("unbounded").unwrap(), WordBudget::Unbounded);
        assert_eq!(parse_word_budget("UNLIMITED").unwrap(), WordBudget::Unbounded);
    }

    #[test]
    fn test_parse_word_budget_rejects_zero_and_garbage() {
        assert!(parse_word_budget("0").is_err());
        assert!(parse_word_budget("-3").is_err());
        assert!(parse_word_budget("ten").is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_positive_numbers_round_trip(n in 1usize..10_000_000) {
            let parsed = parse_word_budget(&n.to_string()).unwrap();
            prop_assert_eq!(parsed.limit(), Some(n));
        }
    }
}
