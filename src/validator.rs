//! Name validation for the meetup greeting.
//!
//! Rules are checked in order and the first match wins:
//! empty (after trimming spaces), numeric, special characters.

use crate::error::NameError;

/// Characters that get a name rejected.
pub const REJECTED_CHARACTERS: &str = r#",.|!@#$%&*+_-=[]{};:/?\'"()"#;

const WELCOME_PREFIX: &str = "Bem Vindo ao meetup da comunidade Golang CWB, ";

// Failure messages of the untyped validator. Callers can only tell them
// apart by comparing strings.
pub const EMPTY_MESSAGE: &str = "the given name is empty";
pub const NUMERIC_MESSAGE: &str = "the given name is a number";
pub const SPECIAL_CHARACTERS_MESSAGE: &str = "the given name contains special characters";

/// Check `name` and build its welcome message.
pub fn validate(name: &str) -> Result<String, NameError> {
    if is_blank(name) {
        return Err(NameError::Empty(name.to_string()));
    }
    if is_numeric(name) {
        return Err(NameError::NumericOnly(name.to_string()));
    }
    if has_rejected_character(name) {
        return Err(NameError::SpecialCharacters(name.to_string()));
    }
    Ok(welcome_message(name))
}

/// Same rules as [`validate`], but failures are bare strings.
pub fn validate_untyped(name: &str) -> Result<String, String> {
    if is_blank(name) {
        return Err(EMPTY_MESSAGE.to_string());
    }
    if is_numeric(name) {
        return Err(NUMERIC_MESSAGE.to_string());
    }
    if has_rejected_character(name) {
        return Err(SPECIAL_CHARACTERS_MESSAGE.to_string());
    }
    Ok(welcome_message(name))
}

pub fn welcome_message(name: &str) -> String {
    format!("{}{}.", WELCOME_PREFIX, name)
}

// Only U+0020 is trimmed; tabs and newlines count as content.
fn is_blank(name: &str) -> bool {
    name.trim_matches(' ').is_empty()
}

// The untrimmed input must parse, so " 1" is not numeric. A finite
// literal that overflows to infinity is out of range and not numeric.
// NaN takes no sign; infinities do.
fn is_numeric(name: &str) -> bool {
    let unsigned = name
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(name);

    if unsigned.eq_ignore_ascii_case("nan") {
        return unsigned.len() == name.len();
    }
    if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
        return true;
    }
    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        return parse_hex_float(hex).is_some_and(f64::is_finite);
    }
    name.parse::<f64>().is_ok_and(f64::is_finite)
}

// Hex mantissa with an optional '.', then a mandatory binary exponent:
// "1p4", "1.8P-1". The "0x" prefix is already stripped.
fn parse_hex_float(hex: &str) -> Option<f64> {
    let (mantissa, exponent) = hex.split_once(|c: char| c == 'p' || c == 'P')?;
    let exponent: i64 = exponent.parse().ok()?;
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut value = 0.0_f64;
    for c in int_digits.chars().chain(frac_digits.chars()) {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    if value == 0.0 {
        return Some(0.0);
    }
    let scale = exponent.clamp(-4096, 4096) - 4 * frac_digits.len() as i64;
    Some(value * 2.0_f64.powi(scale.clamp(-4096, 4096) as i32))
}

fn has_rejected_character(name: &str) -> bool {
    name.contains(|c: char| REJECTED_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Classification;
    use proptest::prelude::*;

    fn classification_of(name: &str) -> Option<Classification> {
        validate(name).err().map(|e| e.classification())
    }

    #[test]
    fn empty_name() {
        assert_eq!(validate(""), Err(NameError::Empty(String::new())));
        assert_eq!(classification_of("   "), Some(Classification::Empty));
    }

    #[test]
    fn only_spaces_are_trimmed() {
        assert_eq!(classification_of("\t"), None);
        assert_eq!(
            validate("\t").as_deref(),
            Ok("Bem Vindo ao meetup da comunidade Golang CWB, \t.")
        );
    }

    #[test]
    fn numeric_names() {
        assert_eq!(validate("01.10"), Err(NameError::NumericOnly("01.10".into())));
        for name in ["01", "-3", "+1", "1e5", "inf", "NaN"] {
            assert_eq!(classification_of(name), Some(Classification::NumericOnly), "{name}");
        }
    }

    #[test]
    fn overflowing_literal_is_not_numeric() {
        // out of range, and no rejected character either
        assert_eq!(
            validate("1e400").as_deref(),
            Ok("Bem Vindo ao meetup da comunidade Golang CWB, 1e400.")
        );
        assert_eq!(classification_of("-1e400"), Some(Classification::SpecialCharactersOnly));
        assert_eq!(classification_of("1e-400"), Some(Classification::NumericOnly));
        assert_eq!(classification_of("-inf"), Some(Classification::NumericOnly));
        assert_eq!(classification_of("+Infinity"), Some(Classification::NumericOnly));
    }

    #[test]
    fn hex_floats_are_numeric() {
        assert_eq!(validate("0x1p4"), Err(NameError::NumericOnly("0x1p4".into())));
        for name in ["0x1.8p1", "-0X1P-2", "0x.8p0", "0x0p9999"] {
            assert_eq!(classification_of(name), Some(Classification::NumericOnly), "{name}");
        }
    }

    #[test]
    fn hex_without_exponent_is_not_numeric() {
        assert_eq!(classification_of("0x10"), None);
        assert_eq!(classification_of("0x1p"), None);
        assert_eq!(classification_of("0xp4"), None);
        assert_eq!(classification_of("0x1p9999"), None);
    }

    #[test]
    fn signed_nan_is_not_numeric() {
        assert_eq!(classification_of("nan"), Some(Classification::NumericOnly));
        // '+' and '-' are rejected characters
        assert_eq!(
            validate("+nan"),
            Err(NameError::SpecialCharacters("+nan".into()))
        );
        assert_eq!(classification_of("-NaN"), Some(Classification::SpecialCharactersOnly));
    }

    #[test]
    fn padded_number_is_not_numeric() {
        // " 1" fails to parse and has no rejected character
        assert_eq!(classification_of(" 1"), None);
    }

    #[test]
    fn special_character_names() {
        assert_eq!(
            validate("#Golang@CWB"),
            Err(NameError::SpecialCharacters("#Golang@CWB".into()))
        );
        assert_eq!(
            classification_of("Ana Maria-Silva"),
            Some(Classification::SpecialCharactersOnly)
        );
        assert_eq!(classification_of("o'brien"), Some(Classification::SpecialCharactersOnly));
        assert_eq!(classification_of(r"back\slash"), Some(Classification::SpecialCharactersOnly));
    }

    #[test]
    fn numeric_rule_wins_over_special_characters() {
        // '.' and '-' are rejected characters, but the number check runs first
        assert_eq!(classification_of("-1.5"), Some(Classification::NumericOnly));
    }

    #[test]
    fn valid_name() {
        assert_eq!(
            validate("folks").as_deref(),
            Ok("Bem Vindo ao meetup da comunidade Golang CWB, folks.")
        );
        assert_eq!(
            validate("  Gopher  ").as_deref(),
            Ok("Bem Vindo ao meetup da comunidade Golang CWB,   Gopher  .")
        );
    }

    #[test]
    fn untyped_messages() {
        assert_eq!(validate_untyped(" "), Err(EMPTY_MESSAGE.to_string()));
        assert_eq!(validate_untyped("01"), Err(NUMERIC_MESSAGE.to_string()));
        assert_eq!(validate_untyped("a|b"), Err(SPECIAL_CHARACTERS_MESSAGE.to_string()));
        assert_eq!(validate_untyped("folks"), validate("folks").map_err(|e| e.to_string()));
    }

    fn rejected_char() -> impl Strategy<Value = char> {
        prop::sample::select(REJECTED_CHARACTERS.chars().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn spaces_only_is_empty(name in " {0,12}") {
            prop_assert_eq!(classification_of(&name), Some(Classification::Empty));
        }

        #[test]
        fn floats_are_numeric(x in any::<f64>()) {
            let name = x.to_string();
            prop_assert_eq!(classification_of(&name), Some(Classification::NumericOnly));
        }

        #[test]
        fn digit_strings_are_numeric(name in "[0-9]{1,8}(\\.[0-9]{1,4})?") {
            prop_assert_eq!(classification_of(&name), Some(Classification::NumericOnly));
        }

        #[test]
        fn rejected_characters_are_caught(
            prefix in "[a-zA-Z]{1,6}",
            c in rejected_char(),
            suffix in "[a-zA-Z]{0,6}",
        ) {
            let name = format!("{}{}{}", prefix, c, suffix);
            prop_assert_eq!(
                classification_of(&name),
                Some(Classification::SpecialCharactersOnly)
            );
        }

        #[test]
        fn other_names_are_welcomed(name in "[a-zA-Z][a-zA-Z ]{0,15}") {
            prop_assume!(name.parse::<f64>().is_err());
            let message = validate(&name).unwrap();
            prop_assert!(message.contains(&name));
            prop_assert_eq!(message, welcome_message(&name));
        }

        #[test]
        fn typed_and_untyped_agree(name in any::<String>()) {
            let typed = validate(&name);
            let untyped = validate_untyped(&name);
            match (&typed, &untyped) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(e), Err(msg)) => {
                    let expected = match e.classification() {
                        Classification::Empty => EMPTY_MESSAGE,
                        Classification::NumericOnly => NUMERIC_MESSAGE,
                        Classification::SpecialCharactersOnly => SPECIAL_CHARACTERS_MESSAGE,
                    };
                    prop_assert_eq!(msg.as_str(), expected);
                }
                _ => prop_assert!(false, "outcomes differ for {:?}", name),
            }
        }
    }
}
