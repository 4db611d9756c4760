use std::{io::Write, ops::RangeInclusive};

use serde::Serialize;

use super::{snake_case, value::Value, Error};

/// Configuration value validation functions.
#[derive(Serialize)]
pub enum Validator {
    /// Only allow positive integers, i.e. any values greater than 0.
    PositiveInteger,
    /// Ensure that an integer value falls within the specified inclusive range.
    IntegerInRange(RangeInclusive<i128>),
    /// Only allow one of the given strings.
    Enumeration(Vec<String>),
    /// A custom validation function.
    #[serde(serialize_with = "serialize_custom")]
    #[serde(untagged)]
    Custom(Box<dyn Fn(&Value) -> Result<(), Error>>),
}

pub(crate) fn serialize_custom<S>(
    _: &Box<dyn Fn(&Value) -> Result<(), Error>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("Custom")
}

impl Validator {
    pub(crate) fn validate(&self, value: &Value) -> Result<(), Error> {
        match self {
            Validator::PositiveInteger => positive_integer(value),
            Validator::IntegerInRange(range) => integer_in_range(range, value),
            Validator::Enumeration(values) => enumeration(values, value),
            Validator::Custom(validator_fn) => validator_fn(value),
        }
    }

    pub(crate) fn description(&self) -> Option<String> {
        match self {
            Validator::PositiveInteger => Some(String::from("Positive integer")),
            Validator::IntegerInRange(range) => Some(format!(
                "Integer in range {}..={}",
                range.start(),
                range.end()
            )),
            Validator::Enumeration(values) => Some(format!(
                "One of: <ul>{}</ul>",
                values
                    .iter()
                    .map(|v| format!("<li>{v}</li>"))
                    .collect::<Vec<_>>()
                    .join("")
            )),
            Validator::Custom(_) => None,
        }
    }

    pub(crate) fn emit_cargo_extras(
        &self,
        mut stdout: impl Write,
        config_key: &str,
        actual_value: &Value,
    ) {
        if let Validator::Enumeration(values) = self {
            for possible_value in values {
                writeln!(
                    stdout,
                    "cargo:rustc-check-cfg=cfg({config_key}_{})",
                    snake_case(possible_value)
                )
                .ok();
            }

            writeln!(
                stdout,
                "cargo:rustc-cfg={config_key}_{}",
                snake_case(&actual_value.to_string())
            )
            .ok();
        }
    }
}

fn enumeration(values: &[String], value: &Value) -> Result<(), Error> {
    let Value::String(value) = value else {
        return Err(Error::parse(
            "Validator::Enumeration can only be used with string values",
        ));
    };

    if !values.contains(value) {
        return Err(Error::validation(format!(
            "Expected one of {values:?}, found '{value}'"
        )));
    }

    Ok(())
}

fn positive_integer(value: &Value) -> Result<(), Error> {
    if !value.is_integer() {
        return Err(Error::validation(
            "Validator::PositiveInteger can only be used with integer values",
        ));
    }
    if value.as_integer() <= 0 {
        return Err(Error::validation(format!(
            "Expected positive integer, found '{}'",
            value.as_integer()
        )));
    }

    Ok(())
}

fn integer_in_range(range: &RangeInclusive<i128>, value: &Value) -> Result<(), Error> {
    if !value.is_integer() || !range.contains(&value.as_integer()) {
        return Err(Error::validation(format!(
            "Value '{value}' does not fall within range '{range:?}'"
        )));
    }

    Ok(())
}
