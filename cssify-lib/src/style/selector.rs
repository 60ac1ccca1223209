/// Whitespace as matched by `\s` in script regexes. Unlike
/// `char::is_whitespace` this includes U+FEFF and leaves out U+0085.
fn is_selector_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// True for the combinators that never need surrounding whitespace.
fn is_combinator(ch: char) -> bool {
    matches!(ch, '+' | '~' | '>')
}

/// Normalizes whitespace in a selector.
///
/// Whitespace touching `+`, `~` or `>` is removed, any other run of two or
/// more whitespace characters becomes a single space, and the result is
/// trimmed. `" div  >  span   +  a ~ p  "` becomes `"div>span+a~p"`.
///
/// Commas get no special treatment.
pub fn trim_css_selector(selector: &str) -> String {
    let mut trimmed = String::with_capacity(selector.len());
    let mut chars = selector.chars().peekable();

    while let Some(ch) = chars.next() {
        if !is_selector_whitespace(ch) {
            trimmed.push(ch);
            continue;
        }

        // Swallow the whole whitespace run.
        let mut run_len = 1;
        while let Some(&next) = chars.peek() {
            if !is_selector_whitespace(next) {
                break;
            }
            run_len += 1;
            chars.next();
        }

        let after_combinator = trimmed.chars().last().is_some_and(is_combinator);
        let before_combinator = chars.peek().is_some_and(|&next| is_combinator(next));
        if after_combinator || before_combinator {
            continue;
        }

        if run_len >= 2 {
            trimmed.push(' ');
        } else {
            trimmed.push(ch);
        }
    }

    trimmed.trim_matches(is_selector_whitespace).to_string()
}
