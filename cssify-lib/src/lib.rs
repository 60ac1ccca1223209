//! Turns style data kept as plain maps into CSS text.
//!
//! Declarations are `serde_json` objects mapping camelCase property names to
//! string or number values. Rule sets map selectors to declarations.
//!
//! ```
//! use cssify_lib::{stringify_style_rule, StringifyOptions};
//! use serde_json::json;
//!
//! let css = stringify_style_rule(
//!     &json!({ "  .main   >  .child ": { "padding": 8 } }),
//!     &StringifyOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(css, ".main>.child{padding:8px;}");
//! ```

pub mod error;
pub mod generate;
pub mod stringify;
pub mod style;

pub use error::{Result, StyleError};
pub use generate::style_map::{stringify_css_properties, stringify_style_map};
pub use stringify::{
    stringify_style_declaration, stringify_style_rule, CssStringifier, StringifyOptions,
    StyleDeclaration, StyleRule,
};
pub use style::naming::camel_to_kebab;
pub use style::selector::trim_css_selector;
pub use style::unitless::{DefaultUnitless, UnitlessLookup};
pub use style::units::{apply_css_units, CssValue, UnitSpec, DEFAULT_UNIT};
