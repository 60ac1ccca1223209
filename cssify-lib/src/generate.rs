use crate::error::{expect_object, Result};
use crate::stringify::{stringify_style_declaration, stringify_style_rule, StringifyOptions};
use serde_json::Value;

pub mod style_map {
    use super::*;

    /// Converts an inline style object into declaration text.
    ///
    /// `options` is either a `bool` (append `!important`) or a full
    /// [`StringifyOptions`].
    pub fn stringify_css_properties(
        css_properties: &Value,
        options: impl Into<StringifyOptions>,
    ) -> Result<String> {
        expect_object(css_properties, "stringify_css_properties", "css_properties")?;
        stringify_style_declaration(css_properties, &options.into())
    }

    /// Converts a selector => style object map into rule-set text.
    pub fn stringify_style_map(
        style_map: &Value,
        options: impl Into<StringifyOptions>,
    ) -> Result<String> {
        expect_object(style_map, "stringify_style_map", "style_map")?;
        stringify_style_rule(style_map, &options.into())
    }
}
