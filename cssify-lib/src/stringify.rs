//! Declaration and rule-set serialization.

use crate::error::{expect_object, Result};
use crate::style::naming::camel_to_kebab;
use crate::style::selector::trim_css_selector;
use crate::style::unitless::{DefaultUnitless, UnitlessLookup};
use crate::style::units::{apply_css_units_with, resolve_css_value, CssValue, UnitSpec};
use log::{debug, trace};
use serde::Deserialize;
use serde_json::{Map, Value};

/// camelCase property name => string or number value.
pub type StyleDeclaration = Map<String, Value>;

/// Selector => [`StyleDeclaration`].
pub type StyleRule = Map<String, Value>;

const IMPORTANT_SUFFIX: &str = "!important";

/// Per-call formatting options.
///
/// A plain `bool` converts into options with only `important` set, so
/// `stringify_css_properties(&value, true)` reads the same as passing
/// `StringifyOptions { important: true, unit: None }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    /// Append `!important` to every declaration.
    pub important: bool,
    /// Units for numeric values; `px` when absent.
    pub unit: Option<UnitSpec>,
}

impl StringifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<UnitSpec>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl From<bool> for StringifyOptions {
    fn from(important: bool) -> Self {
        StringifyOptions {
            important,
            unit: None,
        }
    }
}

impl From<&StringifyOptions> for StringifyOptions {
    fn from(options: &StringifyOptions) -> Self {
        options.clone()
    }
}

/// Stringifier bound to a unitless property table.
///
/// The free functions of this module use `CssStringifier::default()`, which
/// carries the built-in [`DefaultUnitless`] table.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssStringifier<U = DefaultUnitless> {
    unitless: U,
}

impl<U: UnitlessLookup> CssStringifier<U> {
    pub fn new(unitless: U) -> Self {
        CssStringifier { unitless }
    }

    pub fn unitless(&self) -> &U {
        &self.unitless
    }

    /// See [`crate::apply_css_units`].
    pub fn apply_css_units(
        &self,
        property: &str,
        value: &Value,
        unit: Option<&UnitSpec>,
    ) -> Result<String> {
        apply_css_units_with(&self.unitless, property, value, unit)
    }

    /// See [`stringify_style_declaration`].
    pub fn stringify_style_declaration(
        &self,
        declaration: &Value,
        options: &StringifyOptions,
    ) -> Result<String> {
        let declaration =
            expect_object(declaration, "stringify_style_declaration", "style_declaration")?;
        Ok(self.write_declaration(declaration, options))
    }

    /// See [`stringify_style_rule`].
    pub fn stringify_style_rule(&self, rule: &Value, options: &StringifyOptions) -> Result<String> {
        let rule = expect_object(rule, "stringify_style_rule", "style_rule")?;

        let mut css = String::new();
        for (selector, declaration) in rule {
            if has_no_keys(declaration) {
                debug!("skipping selector '{}' with an empty declaration", selector);
                continue;
            }

            let block = self.stringify_style_declaration(declaration, options)?;
            css.push_str(&trim_css_selector(selector));
            css.push('{');
            css.push_str(&block);
            css.push('}');
        }
        Ok(css)
    }

    fn write_declaration(&self, declaration: &StyleDeclaration, options: &StringifyOptions) -> String {
        let important = if options.important { IMPORTANT_SUFFIX } else { "" };

        let mut css = String::new();
        for (property, value) in declaration {
            let Some(value) = CssValue::from_json(value) else {
                trace!("dropping '{}': value is not a string or number", property);
                continue;
            };

            let value = resolve_css_value(&self.unitless, property, value, options.unit.as_ref());
            css.push_str(&camel_to_kebab(property));
            css.push(':');
            css.push_str(&value);
            css.push_str(important);
            css.push(';');
        }
        css
    }
}

/// True when a rule value has no keys to serialize. Scalars count as keyless;
/// `null` does not and is left for the declaration check to reject.
fn has_no_keys(declaration: &Value) -> bool {
    match declaration {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Null => false,
    }
}

/// Serializes one declaration block into `prop:value;` pairs.
///
/// Fails with [`StyleError::InvalidInputType`](crate::StyleError::InvalidInputType)
/// unless `declaration` is an object. Entries whose value is not a string or
/// number are skipped.
pub fn stringify_style_declaration(declaration: &Value, options: &StringifyOptions) -> Result<String> {
    CssStringifier::<DefaultUnitless>::default().stringify_style_declaration(declaration, options)
}

/// Serializes a selector => declaration map into `selector{...}` blocks.
///
/// Selectors are whitespace normalized and selectors whose declaration has no
/// keys at all are left out.
pub fn stringify_style_rule(rule: &Value, options: &StringifyOptions) -> Result<String> {
    CssStringifier::<DefaultUnitless>::default().stringify_style_rule(rule, options)
}
