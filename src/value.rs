use crate::error::Error;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// Conversion from a stored raw value to a typed one, applied at lookup time.
///
/// The set of target types is closed (`i64`, `f64`, `f32`, `bool`,
/// `String`); asking for anything else fails to compile instead of failing
/// at runtime.
pub trait FromValue: sealed::Sealed + Sized {
    /// Target name used in conversion error messages.
    const TARGET: &'static str;

    fn from_value(raw: &str) -> Result<Self, Error>;
}

impl FromValue for i64 {
    const TARGET: &'static str = "int";

    fn from_value(raw: &str) -> Result<Self, Error> {
        raw.parse().map_err(|_| failed(raw, Self::TARGET))
    }
}

impl FromValue for f64 {
    const TARGET: &'static str = "double";

    fn from_value(raw: &str) -> Result<Self, Error> {
        normalize_decimal(raw).parse().map_err(|_| failed(raw, Self::TARGET))
    }
}

impl FromValue for f32 {
    const TARGET: &'static str = "float";

    fn from_value(raw: &str) -> Result<Self, Error> {
        normalize_decimal(raw).parse().map_err(|_| failed(raw, Self::TARGET))
    }
}

impl FromValue for bool {
    const TARGET: &'static str = "bool";

    fn from_value(raw: &str) -> Result<Self, Error> {
        const TRUE: [&str; 4] = ["true", "1", "yes", "on"];
        const FALSE: [&str; 4] = ["false", "0", "no", "off"];

        let lower = raw.to_ascii_lowercase();

        if TRUE.contains(&lower.as_str()) {
            Ok(true)
        } else if FALSE.contains(&lower.as_str()) {
            Ok(false)
        } else {
            Err(failed(raw, Self::TARGET))
        }
    }
}

impl FromValue for String {
    const TARGET: &'static str = "string";

    fn from_value(raw: &str) -> Result<Self, Error> {
        Ok(raw.to_owned())
    }
}

/// Values written under a comma-decimal locale ("3,14") are accepted by
/// turning every comma into a period before parsing.
fn normalize_decimal(raw: &str) -> String {
    raw.replace(',', ".")
}

fn failed(raw: &str, target: &'static str) -> Error {
    Error::TypeConversion {
        value: raw.to_owned(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parses_signed_decimal() {
        assert_eq!(i64::from_value("5").expect("conversion failed"), 5);
        assert_eq!(i64::from_value("-17").expect("conversion failed"), -17);
    }

    #[test]
    fn int_requires_whole_string_to_parse() {
        for raw in ["abc", "5abc", "1.5", "", "5 "] {
            let result = i64::from_value(raw);
            assert!(
                matches!(result, Err(Error::TypeConversion { target: "int", .. })),
                "{raw:?} should not parse as int"
            );
        }
    }

    #[test]
    fn double_accepts_period_and_comma_decimals() {
        assert!((f64::from_value("3.14").expect("conversion failed") - 3.14).abs() < 1e-12);
        assert!((f64::from_value("3,14").expect("conversion failed") - 3.14).abs() < 1e-12);
    }

    #[test]
    fn double_rejects_garbage() {
        let result = f64::from_value("pi");

        assert!(matches!(
            result,
            Err(Error::TypeConversion { target: "double", .. })
        ));
    }

    #[test]
    fn float_accepts_comma_decimals() {
        assert!((f32::from_value("2,5").expect("conversion failed") - 2.5).abs() < 1e-6);
    }

    #[test]
    fn float_rejects_garbage() {
        let result = f32::from_value("x");

        assert!(matches!(
            result,
            Err(Error::TypeConversion { target: "float", .. })
        ));
    }

    #[test]
    fn bool_accepts_exactly_eight_tokens_case_insensitively() {
        for raw in ["true", "TRUE", "1", "yes", "Yes", "on", "On"] {
            assert!(bool::from_value(raw).expect("conversion failed"), "{raw:?}");
        }

        for raw in ["false", "FALSE", "0", "no", "No", "off", "OFF"] {
            assert!(!bool::from_value(raw).expect("conversion failed"), "{raw:?}");
        }
    }

    #[test]
    fn bool_rejects_anything_else() {
        for raw in ["maybe", "2", "tru", "", "yes please"] {
            let result = bool::from_value(raw);
            assert!(
                matches!(result, Err(Error::TypeConversion { target: "bool", .. })),
                "{raw:?} should not parse as bool"
            );
        }
    }

    #[test]
    fn string_is_identity() {
        assert_eq!(
            String::from_value("any = text, really").expect("conversion failed"),
            "any = text, really"
        );
    }
}
