//! Log sanitization for response bodies
//!
//! Login replies carry the session token and connection payloads may echo a
//! password. Bodies go through [`sanitize_for_log`] before they reach a log
//! line: secret string values are masked, then the text is cut to a fixed
//! length.

/// Maximum number of bytes of a body kept in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Replacement for masked values.
const MASK: &str = "***";

/// Largest char boundary not above `index` (`str::floor_char_boundary` needs 1.91).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Cut `s` to [`TRUNCATE_LIMIT`] bytes, noting the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Keys whose string values never appear in logs.
fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.contains("token")
        || key.contains("password")
        || key.contains("secret")
        || key == "auth"
        || key == "authorization"
}

/// Byte offset of the closing quote of a JSON string whose opening quote
/// has already been consumed.
fn string_end(body: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, b) in body.bytes().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Mask the string values of secret keys in a JSON-like body.
///
/// Works on the raw text so that bodies that are not valid JSON (HTML error
/// pages, cut-off payloads) are still handled. Non-string values are left as
/// they are.
pub fn redact_secrets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    let mut mask_next = false;

    while let Some(start) = rest.find('"') {
        out.push_str(&rest[..start]);
        let body = &rest[start + 1..];
        let Some(end) = string_end(body) else {
            // Unterminated literal at the end of the text.
            if mask_next {
                out.push('"');
                out.push_str(MASK);
            } else {
                out.push_str(&rest[start..]);
            }
            return out;
        };
        let literal = &body[..end];
        let after = &body[end + 1..];

        if mask_next {
            out.push('"');
            out.push_str(MASK);
            out.push('"');
            mask_next = false;
        } else {
            out.push('"');
            out.push_str(literal);
            out.push('"');
            let value = after.trim_start().strip_prefix(':').map(str::trim_start);
            mask_next = value.is_some_and(|v| v.starts_with('"')) && is_secret_key(literal);
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Mask secrets, then truncate. Use this for every logged body.
pub fn sanitize_for_log(s: &str) -> String {
    truncate_for_log(&redact_secrets(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_body_is_cut_on_char_boundary() {
        let s = "д".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.starts_with('д'));
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn login_token_is_masked() {
        let body = r#"{"success":true,"token":"eyJhbGciOi.secret.sig"}"#;
        let logged = sanitize_for_log(body);
        assert_eq!(logged, r#"{"success":true,"token":"***"}"#);
        assert!(!logged.contains("eyJhbGciOi"));
    }

    #[test]
    fn password_with_escaped_quote_is_masked() {
        let body = r#"{"connection": {"url": "http://erp", "password" : "p\"w", "username": "bob"}}"#;
        assert_eq!(
            redact_secrets(body),
            r#"{"connection": {"url": "http://erp", "password" : "***", "username": "bob"}}"#
        );
    }

    #[test]
    fn author_field_is_not_a_secret() {
        let body = r#"{"documents":[{"author":"Ivanov","auth":"basic xyz"}]}"#;
        assert_eq!(
            redact_secrets(body),
            r#"{"documents":[{"author":"Ivanov","auth":"***"}]}"#
        );
    }

    #[test]
    fn non_string_secret_leaves_following_keys_alone() {
        let body = r#"{"token":null,"message":"bad credentials"}"#;
        assert_eq!(redact_secrets(body), body);
    }

    #[test]
    fn cut_off_secret_is_still_masked() {
        let body = r#"{"success":true,"access_token":"abcdef"#;
        assert_eq!(redact_secrets(body), r#"{"success":true,"access_token":"***"#);
    }

    #[test]
    fn plain_text_passes_through() {
        let body = "<html>502 Bad Gateway</html>";
        assert_eq!(sanitize_for_log(body), body);
    }

    #[test]
    fn long_token_is_masked_before_truncation() {
        let token = "t".repeat(TRUNCATE_LIMIT * 2);
        let body = format!(r#"{{"token":"{token}"}}"#);
        assert_eq!(sanitize_for_log(&body), r#"{"token":"***"}"#);
    }
}
