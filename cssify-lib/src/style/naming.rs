/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Each ASCII uppercase letter becomes `-` followed by its lowercase form, so
/// vendor prefixed names like `WebkitTransition` come out as `-webkit-transition`.
pub fn camel_to_kebab(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }
    kebab
}
