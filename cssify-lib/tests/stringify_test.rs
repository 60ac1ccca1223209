use cssify_lib::{
    apply_css_units, camel_to_kebab, stringify_css_properties, stringify_style_declaration,
    stringify_style_map, stringify_style_rule, trim_css_selector, StringifyOptions, StyleError,
};
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parse_rule_count(css: &str) -> usize {
    let sheet = StyleSheet::parse(css, ParserOptions::default())
        .unwrap_or_else(|e| panic!("generated CSS failed to parse: {css}: {e:?}"));
    sheet
        .rules
        .0
        .iter()
        .filter(|rule| matches!(rule, CssRule::Style(_)))
        .count()
}

#[test]
fn test_declaration_scenarios() {
    let options = StringifyOptions::default();
    assert_eq!(
        stringify_style_declaration(
            &json!({ "marginBottom": "20px", "backgroundColor": "teal" }),
            &options
        )
        .unwrap(),
        "margin-bottom:20px;background-color:teal;"
    );
    assert_eq!(
        stringify_style_declaration(
            &json!({ "zIndex": 20, "flex": 1, "opacity": 0.5, "margin": 0 }),
            &StringifyOptions::from(true)
        )
        .unwrap(),
        "z-index:20!important;flex:1!important;opacity:0.5!important;margin:0!important;"
    );
}

#[test]
fn test_rule_scenarios() {
    let options = StringifyOptions::default();
    assert_eq!(
        stringify_style_rule(&json!({ "  .main   >  .child ": { "padding": 8 } }), &options).unwrap(),
        ".main>.child{padding:8px;}"
    );
    assert_eq!(
        stringify_style_rule(
            &json!({ ".empty": {}, ".valid": { "display": "block" } }),
            &options
        )
        .unwrap(),
        ".valid{display:block;}"
    );
}

#[test]
fn test_output_order_follows_input() {
    let css = stringify_style_declaration(
        &json!({ "top": 1, "left": 2, "bottom": 3, "right": 4 }),
        &StringifyOptions::default(),
    )
    .unwrap();
    assert_eq!(css, "top:1px;left:2px;bottom:3px;right:4px;");

    let css = stringify_style_map(
        &json!({
            "#root": { "color": "teal" },
            "header": { "color": "teal" },
            ".className": { "color": "teal" },
        }),
        false,
    )
    .unwrap();
    assert_eq!(css, "#root{color:teal;}header{color:teal;}.className{color:teal;}");
}

#[test]
fn test_selector_normalization_in_style_map() {
    let color = json!({ "color": "teal" });
    let css = stringify_style_map(
        &json!({
            " .className  ": color,
            "#root   div h1": color,
            "#root >  ul li": color,
            "* > p+  ul li": color,
            "div ~p.className": color,
        }),
        false,
    )
    .unwrap();
    assert_eq!(
        css,
        ".className{color:teal;}#root div h1{color:teal;}#root>ul li{color:teal;}*>p+ul li{color:teal;}div~p.className{color:teal;}"
    );
}

#[test]
fn test_invalid_entries_do_not_affect_siblings() {
    let css = stringify_css_properties(
        &json!({
            "margin": { "top": 10 },
            "padding": "5px 10px",
            "background": null,
            "color": "teal",
            "border": [],
        }),
        false,
    )
    .unwrap();
    assert_eq!(css, "padding:5px 10px;color:teal;");
}

#[test]
fn test_numeric_properties() {
    for value in [1.0, -2.5, 12.0, 0.25] {
        let resolved = apply_css_units("marginLeft", &json!(value), None).unwrap();
        assert!(resolved.ends_with("px"), "{resolved}");
    }
    for property in ["marginLeft", "zIndex", "opacity", "width"] {
        assert_eq!(
            apply_css_units(property, &json!(0), Some(&"em".into())).unwrap(),
            "0"
        );
    }
    for value in [1.0, 3.5, 400.0] {
        let resolved = apply_css_units("fontWeight", &json!(value), None).unwrap();
        assert!(resolved.chars().all(|c| c.is_ascii_digit() || c == '.'), "{resolved}");
    }
}

#[test]
fn test_errors_are_typed() {
    let options = StringifyOptions::default();
    match stringify_style_rule(&Value::Null, &options) {
        Err(StyleError::InvalidInputType {
            context,
            argument,
            received,
            type_tag,
        }) => {
            assert_eq!(context, "stringify_style_rule");
            assert_eq!(argument, "style_rule");
            assert_eq!(received, "null");
            assert_eq!(type_tag, "null");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = apply_css_units("fontSize", &json!({}), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: value of 'fontSize' must be string or number, but received object."
    );
}

#[test]
fn test_helpers_are_reexported() {
    assert_eq!(camel_to_kebab("WebkitTransition"), "-webkit-transition");
    assert_eq!(trim_css_selector("div > span"), "div>span");
}

#[test]
fn test_output_parses_as_css() {
    let css = stringify_style_map(
        &json!({
            ".card": {
                "display": "flex",
                "flexGrow": 1,
                "padding": 12,
                "borderRadius": "4px",
                "WebkitTransition": "opacity 0.2s",
            },
            "ul  >  li + li": { "marginTop": 0.5, "lineHeight": 1.4 },
            ".empty": {},
        }),
        StringifyOptions::new().with_important(true).with_unit([("marginTop", "em")]),
    )
    .unwrap();

    assert_eq!(parse_rule_count(&css), 2);
    assert!(css.contains("ul>li+li{margin-top:0.5em!important;line-height:1.4!important;}"));
}
