use std::collections::HashSet;

/// Properties whose numeric values never take a unit, in camelCase.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "msGridRow",
    "msGridRowSpan",
    "msGridColumn",
    "msGridColumnSpan",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    "WebkitLineClamp",
    // SVG
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

/// Answers whether a property must be printed without a unit.
pub trait UnitlessLookup {
    fn is_unitless(&self, property: &str) -> bool;
}

/// The built-in table of unitless CSS properties.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultUnitless;

impl UnitlessLookup for DefaultUnitless {
    fn is_unitless(&self, property: &str) -> bool {
        UNITLESS_PROPERTIES.contains(&property)
    }
}

impl UnitlessLookup for HashSet<String> {
    fn is_unitless(&self, property: &str) -> bool {
        self.contains(property)
    }
}

impl<F> UnitlessLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_unitless(&self, property: &str) -> bool {
        self(property)
    }
}
