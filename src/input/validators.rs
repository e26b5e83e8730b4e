use regex::Regex;
use std::sync::LazyLock;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal pattern is valid")
});

pub fn required(label: impl Into<String>) -> Validator {
    let message = format!("{} is required", label.into());
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Something, an `@`, something, a dot, something. Searched anywhere in the
/// value, not anchored.
pub fn email(message: impl Into<String>) -> Validator {
    custom(|value| EMAIL_SHAPE.is_match(value), message)
}

pub fn number(message: impl Into<String>) -> Validator {
    custom(is_numeric, message)
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(
        move |value: &str| {
            if f(value) { Ok(()) } else { Err(msg.clone()) }
        },
    )
}

pub fn run(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Whether the trimmed text coerces to a number the way a browser number
/// field does: decimal and exponent forms, signed `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    if matches!(trimmed, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }

    let prefix = trimmed.get(..2).map(str::to_ascii_lowercase);
    let radix = match prefix.as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    DECIMAL_LITERAL.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{email, is_numeric, number, required, run};

    #[test]
    fn required_rejects_blank() {
        let v = required("Name");
        assert_eq!(v(""), Err("Name is required".to_string()));
        assert_eq!(v("   "), Err("Name is required".to_string()));
        assert_eq!(v("Ann"), Ok(()));
    }

    #[test]
    fn email_shape() {
        let v = email("bad");
        assert!(v("a@b.com").is_ok());
        assert!(v("ann@x.com").is_ok());
        assert!(v("contact: ann@x.com").is_ok());
        assert!(v("bad").is_err());
        assert!(v("a@b").is_err());
        assert!(v("@b.com").is_err());
        assert!(v("a@.com").is_err());
    }

    #[test]
    fn numeric_forms() {
        for ok in ["30", " 30 ", "-2.5", ".5", "5.", "1e3", "+7", "Infinity", "0x1F", "0b101", "0O17"] {
            assert!(is_numeric(ok), "{ok} should be numeric");
        }
        for bad in ["abc", "30 years", "NaN", "inf", "1_000", "0x", "0b102", "--1", "1e"] {
            assert!(!is_numeric(bad), "{bad} should not be numeric");
        }
    }

    #[test]
    fn chain_stops_at_first_failure() {
        let chain = vec![required("Age"), number("Valid age is required")];
        assert_eq!(run(&chain, ""), Err("Age is required".to_string()));
        assert_eq!(run(&chain, "abc"), Err("Valid age is required".to_string()));
        assert_eq!(run(&chain, "30"), Ok(()));
    }
}
