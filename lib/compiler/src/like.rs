/// Translates a SQL `LIKE` pattern into an anchored regular expression for SPARQL's `REGEX`.
///
/// An interior `%` becomes `.*` and `_` becomes `.`; every other character is matched literally.
/// A leading or trailing `%` is dropped together with the anchor it would have faced, which keeps
/// the generated expression minimal.
pub fn like_to_regex(pattern: &str) -> String {
    let anchor_start = !pattern.starts_with('%');
    let anchor_end = !pattern.ends_with('%');
    let body = pattern.strip_prefix('%').unwrap_or(pattern);
    let body = body.strip_suffix('%').unwrap_or(body);

    let mut regex = String::with_capacity(body.len() + 2);
    if anchor_start {
        regex.push('^');
    }
    for c in body.chars() {
        match c {
            '%' => regex.push_str(".*"),
            '_' => regex.push('.'),
            '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
            | '\\' => {
                regex.push('\\');
                regex.push(c);
            }
            _ => regex.push(c),
        }
    }
    if anchor_end {
        regex.push('$');
    }
    regex
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn wildcards_translate() {
        let regex = Regex::new(&like_to_regex("a%b_c")).unwrap();
        assert!(regex.is_match("aXXbYc"));
        assert!(regex.is_match("abZc"));
        assert!(!regex.is_match("ab_c_and_more"));
    }

    #[test]
    fn anchors_are_added_for_literal_edges() {
        assert_eq!(like_to_regex("abc"), "^abc$");
        assert_eq!(like_to_regex("%abc"), "abc$");
        assert_eq!(like_to_regex("abc%"), "^abc");
        assert_eq!(like_to_regex("%abc%"), "abc");
    }

    #[test]
    fn edge_wildcards_leave_no_residue() {
        assert_eq!(like_to_regex("%"), "");
        assert_eq!(like_to_regex("Al%"), "^Al");
        let regex = Regex::new(&like_to_regex("Al%")).unwrap();
        assert!(regex.is_match("Alice"));
        assert!(!regex.is_match("Hal"));
    }

    #[test]
    fn metacharacters_are_escaped() {
        let regex = Regex::new(&like_to_regex("1.5%")).unwrap();
        assert!(regex.is_match("1.5 litres"));
        assert!(!regex.is_match("125 litres"));
    }
}
