use crate::TemplateError;

/// The projection modifier of a SELECT query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectModifier {
    #[default]
    None,
    Distinct,
    Reduced,
}

/// A user-supplied SPARQL template, decomposed for rewriting.
///
/// Templates containing constructs the compiler cannot rewrite around (a second SELECT, GROUP
/// BY, ORDER BY, LIMIT, OFFSET, UNION, MINUS, HAVING) are kept but marked not rewritable: the
/// raw text is then sent to the endpoint byte-for-byte and every filter is evaluated locally.
///
/// The graph pattern is the span between the first `{` and the last `}` of the raw text. This is
/// deliberately not nesting-aware, a known limitation for templates whose outermost braces do
/// not delimit the intended pattern.
#[derive(Clone, Debug)]
pub struct QueryTemplate {
    raw: String,
    rewritable: bool,
    select_modifier: SelectModifier,
    prefixes: Vec<String>,
    from_clauses: Vec<String>,
    graph_pattern: String,
}

impl QueryTemplate {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let tokens = scan_tokens(text);

        let select_count = tokens
            .iter()
            .filter(|t| t.eq_ignore_ascii_case("SELECT"))
            .count();
        if select_count == 0 {
            return Err(TemplateError::MissingSelect);
        }

        let open = text.find('{');
        let close = text.rfind('}');
        let graph_pattern = match (open, close) {
            (Some(open), Some(close)) if open < close => text[open..=close].to_owned(),
            _ => return Err(TemplateError::MissingGraphPattern),
        };

        let rewritable = select_count == 1 && !contains_disallowed_construct(&tokens);

        let select_position = tokens
            .iter()
            .position(|t| t.eq_ignore_ascii_case("SELECT"))
            .unwrap_or_default();
        let select_modifier = match tokens.get(select_position + 1) {
            Some(t) if t.eq_ignore_ascii_case("DISTINCT") => SelectModifier::Distinct,
            Some(t) if t.eq_ignore_ascii_case("REDUCED") => SelectModifier::Reduced,
            _ => SelectModifier::None,
        };

        Ok(Self {
            raw: text.to_owned(),
            rewritable,
            select_modifier,
            prefixes: extract_prefixes(&tokens),
            from_clauses: extract_from_clauses(&tokens),
            graph_pattern,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_rewritable(&self) -> bool {
        self.rewritable
    }

    pub fn select_modifier(&self) -> SelectModifier {
        self.select_modifier
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn from_clauses(&self) -> &[String] {
        &self.from_clauses
    }

    /// The braced graph pattern, including the outer braces.
    pub fn graph_pattern(&self) -> &str {
        &self.graph_pattern
    }
}

fn contains_disallowed_construct(tokens: &[String]) -> bool {
    for (i, token) in tokens.iter().enumerate() {
        let followed_by_by = tokens
            .get(i + 1)
            .is_some_and(|t| t.eq_ignore_ascii_case("BY"));
        if (token.eq_ignore_ascii_case("GROUP") || token.eq_ignore_ascii_case("ORDER"))
            && followed_by_by
        {
            return true;
        }
        if token.eq_ignore_ascii_case("LIMIT")
            || token.eq_ignore_ascii_case("OFFSET")
            || token.eq_ignore_ascii_case("UNION")
            || token.eq_ignore_ascii_case("MINUS")
            || token.eq_ignore_ascii_case("HAVING")
        {
            return true;
        }
    }
    false
}

fn extract_prefixes(tokens: &[String]) -> Vec<String> {
    let mut prefixes = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.eq_ignore_ascii_case("PREFIX") {
            if let (Some(name), Some(iri)) = (tokens.get(i + 1), tokens.get(i + 2)) {
                prefixes.push(format!("PREFIX {name} {iri}"));
            }
        }
    }
    prefixes
}

fn extract_from_clauses(tokens: &[String]) -> Vec<String> {
    let mut clauses = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.eq_ignore_ascii_case("FROM") {
            match tokens.get(i + 1) {
                Some(named) if named.eq_ignore_ascii_case("NAMED") => {
                    if let Some(iri) = tokens.get(i + 2) {
                        clauses.push(format!("FROM NAMED {iri}"));
                    }
                }
                Some(iri) if iri.starts_with('<') => clauses.push(format!("FROM {iri}")),
                _ => {}
            }
        }
    }
    clauses
}

/// Splits the template into keyword-level tokens.
///
/// Quoted literals and `#` comments are skipped so keyword-like text inside them is never
/// mistaken for a construct. `<...>` IRIs are kept as one token, which also protects fragment
/// IRIs containing `#` from being treated as comments.
fn scan_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut chars = text.chars().peekable();

    let flush = |word: &mut String, tokens: &mut Vec<String>| {
        if !word.is_empty() {
            tokens.push(std::mem::take(word));
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                flush(&mut word, &mut tokens);
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '\'' | '"' => {
                flush(&mut word, &mut tokens);
                skip_literal(&mut chars, c);
            }
            '<' => {
                flush(&mut word, &mut tokens);
                let mut iri = String::from('<');
                for c in chars.by_ref() {
                    iri.push(c);
                    if c == '>' {
                        break;
                    }
                }
                tokens.push(iri);
            }
            '{' | '}' | '(' | ')' | ',' | ';' => flush(&mut word, &mut tokens),
            c if c.is_whitespace() => flush(&mut word, &mut tokens),
            c => word.push(c),
        }
    }
    flush(&mut word, &mut tokens);
    tokens
}

fn skip_literal(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_template_is_rewritable() {
        let template = QueryTemplate::parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>\n\
             SELECT ?name WHERE { ?s foaf:name ?name }",
        )
        .unwrap();
        assert!(template.is_rewritable());
        assert_eq!(template.select_modifier(), SelectModifier::None);
        assert_eq!(
            template.prefixes(),
            ["PREFIX foaf: <http://xmlns.com/foaf/0.1/>"]
        );
        assert_eq!(template.graph_pattern(), "{ ?s foaf:name ?name }");
    }

    #[test]
    fn group_by_marks_the_template_not_rewritable() {
        let template = QueryTemplate::parse(
            "SELECT ?s { ?s ?p ?o } GROUP BY ?s",
        )
        .unwrap();
        assert!(!template.is_rewritable());
    }

    #[test]
    fn keywords_inside_literals_are_ignored() {
        let template = QueryTemplate::parse(
            "SELECT ?s WHERE { ?s <http://example.com/note> \"ORDER BY and UNION\" }",
        )
        .unwrap();
        assert!(template.is_rewritable());
    }

    #[test]
    fn keywords_inside_comments_are_ignored() {
        let template = QueryTemplate::parse(
            "SELECT ?s WHERE { # no LIMIT here\n ?s ?p ?o }",
        )
        .unwrap();
        assert!(template.is_rewritable());
    }

    #[test]
    fn second_select_marks_the_template_not_rewritable() {
        let template = QueryTemplate::parse(
            "SELECT ?s WHERE { { SELECT ?s WHERE { ?s ?p ?o } } }",
        )
        .unwrap();
        assert!(!template.is_rewritable());
    }

    #[test]
    fn missing_select_is_a_hard_error() {
        QueryTemplate::parse("ASK { ?s ?p ?o }").unwrap_err();
    }

    #[test]
    fn missing_graph_pattern_is_a_hard_error() {
        QueryTemplate::parse("SELECT ?s WHERE ?s ?p ?o").unwrap_err();
    }

    #[test]
    fn distinct_and_from_are_extracted() {
        let template = QueryTemplate::parse(
            "SELECT DISTINCT ?s FROM <http://example.com/g> FROM NAMED <http://example.com/n> \
             WHERE { ?s ?p ?o }",
        )
        .unwrap();
        assert_eq!(template.select_modifier(), SelectModifier::Distinct);
        assert_eq!(
            template.from_clauses(),
            [
                "FROM <http://example.com/g>",
                "FROM NAMED <http://example.com/n>"
            ]
        );
    }

    #[test]
    fn iri_fragments_are_not_comments() {
        let template = QueryTemplate::parse(
            "SELECT ?s WHERE { ?s <http://example.com/vocab#prop> ?o }",
        )
        .unwrap();
        assert!(template.is_rewritable());
    }
}
