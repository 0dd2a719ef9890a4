/// Escapes `value` for use between the double quotes of a C string literal.
///
/// Backslashes, double quotes, and the common control characters are
/// escaped; other control characters use a three-digit octal escape so the
/// following character can never be absorbed into the escape sequence.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                escaped.push_str(&format!("\\{:03o}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Returns `value` as a complete, double-quoted C string literal.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses [`quote`] for the escapes it produces.
    fn unquote(literal: &str) -> String {
        let inner = literal
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .expect("literal is quoted");
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next().expect("escape has a payload") {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                d @ '0'..='7' => {
                    let digits: String = [d, chars.next().unwrap(), chars.next().unwrap()]
                        .iter()
                        .collect();
                    let code = u32::from_str_radix(&digits, 8).expect("octal escape");
                    out.push(char::from_u32(code).expect("valid char"));
                }
                other => out.push(other),
            }
        }
        out
    }

    #[test]
    fn quote_wraps_plain_text() {
        assert_eq!(quote("example.com"), "\"example.com\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(escape(r#"pa"ss\word"#), r#"pa\"ss\\word"#);
    }

    #[test]
    fn escape_uses_octal_for_other_controls() {
        assert_eq!(escape("a\u{7}1"), "a\\0071");
    }

    #[test]
    fn quoted_values_round_trip() {
        for value in [
            "MATE Gateway",
            r#"say "hi""#,
            r"C:\secrets\",
            "line\nbreak\ttab",
            "\"",
            "unicode ✓",
        ] {
            assert_eq!(unquote(&quote(value)), value, "round trip of {value:?}");
        }
    }
}
