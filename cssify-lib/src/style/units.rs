use crate::error::{Result, StyleError};
use crate::style::unitless::{DefaultUnitless, UnitlessLookup};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Unit appended to numbers when nothing else applies.
pub const DEFAULT_UNIT: &str = "px";

/// Which unit numeric values get.
///
/// Deserializes from either a bare string (`"rem"`) or an object of
/// per-property units (`{"fontSize": "em"}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UnitSpec {
    /// One unit for every numeric property.
    Global(String),
    /// Units keyed by camelCase property name; missing properties use `px`.
    PerProperty(HashMap<String, String>),
}

impl UnitSpec {
    /// The unit to append for `property`, falling back to [`DEFAULT_UNIT`]
    /// when the spec has nothing (or an empty string) for it.
    pub fn unit_for(&self, property: &str) -> &str {
        let unit = match self {
            UnitSpec::Global(unit) => Some(unit.as_str()),
            UnitSpec::PerProperty(units) => units.get(property).map(String::as_str),
        };
        unit.filter(|unit| !unit.is_empty()).unwrap_or(DEFAULT_UNIT)
    }
}

impl From<&str> for UnitSpec {
    fn from(unit: &str) -> Self {
        UnitSpec::Global(unit.to_string())
    }
}

impl From<String> for UnitSpec {
    fn from(unit: String) -> Self {
        UnitSpec::Global(unit)
    }
}

impl From<HashMap<String, String>> for UnitSpec {
    fn from(units: HashMap<String, String>) -> Self {
        UnitSpec::PerProperty(units)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for UnitSpec {
    fn from(units: [(&str, &str); N]) -> Self {
        UnitSpec::PerProperty(
            units
                .into_iter()
                .map(|(property, unit)| (property.to_string(), unit.to_string()))
                .collect(),
        )
    }
}

/// A declaration value the resolver knows how to print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssValue<'a> {
    Str(&'a str),
    Number(f64),
}

impl<'a> CssValue<'a> {
    /// Borrows a string or number out of a JSON value. Anything else is `None`.
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(CssValue::Str(s)),
            Value::Number(n) => n.as_f64().map(CssValue::Number),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for CssValue<'a> {
    fn from(value: &'a str) -> Self {
        CssValue::Str(value)
    }
}

impl From<f64> for CssValue<'_> {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

impl From<i32> for CssValue<'_> {
    fn from(value: i32) -> Self {
        CssValue::Number(f64::from(value))
    }
}

impl fmt::Display for CssValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Str(s) => f.write_str(s),
            CssValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// Prints a number the way a script runtime would: `20` rather than `20.0`,
/// exponent form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let printed = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return printed.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Resolves a value already known to be a string or number.
pub fn resolve_css_value<U: UnitlessLookup>(
    unitless: &U,
    property: &str,
    value: CssValue<'_>,
    unit: Option<&UnitSpec>,
) -> String {
    let number = match value {
        CssValue::Str(s) => return s.to_string(),
        CssValue::Number(n) => n,
    };

    if number == 0.0 {
        return "0".to_string();
    }

    let printed = format_number(number);
    if unitless.is_unitless(property) {
        return printed;
    }

    let unit = unit.map_or(DEFAULT_UNIT, |spec| spec.unit_for(property));
    printed + unit
}

/// Strict variant for loosely typed input: rejects anything that is not a
/// string or number with [`StyleError::InvalidValueType`].
pub fn apply_css_units_with<U: UnitlessLookup>(
    unitless: &U,
    property: &str,
    value: &Value,
    unit: Option<&UnitSpec>,
) -> Result<String> {
    let value =
        CssValue::from_json(value).ok_or_else(|| StyleError::invalid_value(property, value))?;
    Ok(resolve_css_value(unitless, property, value, unit))
}

/// Formats `value` for `property`, appending a unit to non-zero numbers unless
/// the property is unitless. Uses the built-in unitless table.
pub fn apply_css_units(property: &str, value: &Value, unit: Option<&UnitSpec>) -> Result<String> {
    apply_css_units_with(&DefaultUnitless, property, value, unit)
}
