//! N-Triples serialization.
//!
//! The pipeline's graphs are exchanged as N-Triples: one statement per
//! line, IRIs in angle brackets, literals double-quoted with optional
//! `@lang` or `^^<datatype>`. Blank nodes are not supported; every node in
//! the upstream dataset is minted as an IRI.

use std::fs;
use std::path::Path;

use super::{Graph, GraphError, Term, Triple};

/// Read a graph from an N-Triples file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    parse(&content)
}

/// Parse N-Triples text into a graph.
pub fn parse(text: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let triple = parse_line(trimmed).map_err(|message| GraphError::Parse {
            line: idx + 1,
            message,
        })?;
        graph.insert(triple);
    }
    Ok(graph)
}

/// Write a graph to an N-Triples file.
pub fn write_file(graph: &Graph, path: impl AsRef<Path>) -> Result<(), GraphError> {
    let path = path.as_ref();
    fs::write(path, to_string(graph)).map_err(|e| GraphError::io(path, e))
}

/// Serialize a graph as N-Triples text, in insertion order.
pub fn to_string(graph: &Graph) -> String {
    let mut out = String::new();
    for triple in graph.iter() {
        out.push('<');
        out.push_str(&triple.subject);
        out.push_str("> <");
        out.push_str(&triple.predicate);
        out.push_str("> ");
        write_term(&mut out, &triple.object);
        out.push_str(" .\n");
    }
    out
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Term::Literal {
            value,
            lang,
            datatype,
        } => {
            out.push('"');
            for ch in value.chars() {
                match ch {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    c if (c as u32) < 0x20 => {
                        out.push_str(&format!("\\u{:04X}", c as u32));
                    }
                    c => out.push(c),
                }
            }
            out.push('"');
            if let Some(lang) = lang {
                out.push('@');
                out.push_str(lang);
            } else if let Some(datatype) = datatype {
                out.push_str("^^<");
                out.push_str(datatype);
                out.push('>');
            }
        }
    }
}

fn parse_line(line: &str) -> Result<Triple, String> {
    let mut scanner = Scanner::new(line);
    let subject = scanner.iri()?;
    scanner.skip_ws();
    let predicate = scanner.iri()?;
    scanner.skip_ws();
    let object = scanner.term()?;
    scanner.skip_ws();
    scanner.expect('.')?;
    scanner.skip_ws();
    if !scanner.at_end() {
        return Err("trailing content after terminating dot".to_string());
    }
    Ok(Triple::new(subject, predicate, object))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("expected '{expected}', found '{c}'")),
            None => Err(format!("expected '{expected}', found end of line")),
        }
    }

    fn iri(&mut self) -> Result<String, String> {
        self.expect('<')?;
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => return Ok(iri),
                Some(c) => iri.push(c),
                None => return Err("unterminated IRI".to_string()),
            }
        }
    }

    fn term(&mut self) -> Result<Term, String> {
        match self.peek() {
            Some('<') => Ok(Term::Iri(self.iri()?)),
            Some('"') => self.literal(),
            Some('_') => Err("blank nodes are not supported".to_string()),
            Some(c) => Err(format!("expected IRI or literal, found '{c}'")),
            None => Err("expected IRI or literal, found end of line".to_string()),
        }
    }

    fn literal(&mut self) -> Result<Term, String> {
        self.expect('"')?;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => value.push(self.escape()?),
                Some(c) => value.push(c),
                None => return Err("unterminated literal".to_string()),
            }
        }

        match self.peek() {
            Some('@') => {
                self.pos += 1;
                let mut lang = String::new();
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '-') {
                    lang.push(self.chars[self.pos]);
                    self.pos += 1;
                }
                if lang.is_empty() {
                    return Err("empty language tag".to_string());
                }
                Ok(Term::lang_literal(value, lang))
            }
            Some('^') => {
                self.expect('^')?;
                self.expect('^')?;
                let datatype = self.iri()?;
                Ok(Term::typed_literal(value, datatype))
            }
            _ => Ok(Term::literal(value)),
        }
    }

    fn escape(&mut self) -> Result<char, String> {
        match self.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.unicode_escape(4),
            Some('U') => self.unicode_escape(8),
            Some(c) => Err(format!("unknown escape '\\{c}'")),
            None => Err("dangling escape at end of line".to_string()),
        }
    }

    fn unicode_escape(&mut self, digits: usize) -> Result<char, String> {
        let mut code = 0u32;
        for _ in 0..digits {
            let ch = self
                .bump()
                .ok_or_else(|| "truncated unicode escape".to_string())?;
            let digit = ch
                .to_digit(16)
                .ok_or_else(|| format!("invalid hex digit '{ch}' in unicode escape"))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| format!("invalid code point U+{code:04X}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iri_object() {
        let g = parse("<urn:a> <urn:p> <urn:b> .\n").unwrap();
        assert_eq!(g.len(), 1);
        assert!(g.contains(&Triple::new("urn:a", "urn:p", Term::iri("urn:b"))));
    }

    #[test]
    fn test_parse_literals() {
        let text = concat!(
            "<urn:a> <urn:name> \"Marie Curie\" .\n",
            "<urn:a> <urn:label> \"chimiste\"@fr .\n",
            "<urn:a> <urn:born> \"1867-11-07\"^^<http://www.w3.org/2001/XMLSchema#date> .\n",
        );
        let g = parse(text).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.value("urn:a", "urn:name"), Some("Marie Curie"));
        assert!(g.contains(&Triple::new(
            "urn:a",
            "urn:label",
            Term::lang_literal("chimiste", "fr")
        )));
    }

    #[test]
    fn test_parse_escapes() {
        let g = parse(r#"<urn:a> <urn:p> "line\nbreak \"quoted\" é" ."#).unwrap();
        assert_eq!(g.value("urn:a", "urn:p"), Some("line\nbreak \"quoted\" é"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# header\n\n<urn:a> <urn:p> <urn:b> .\n";
        let g = parse(text).unwrap();
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let err = parse("<urn:a> <urn:p> <urn:b> .\n<urn:a> <urn:p> oops .\n").unwrap_err();
        match err {
            GraphError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_nodes_rejected() {
        let err = parse("<urn:a> <urn:p> _:b0 .\n").unwrap_err();
        assert!(err.to_string().contains("blank nodes"));
    }

    #[test]
    fn test_write_escapes_and_tags() {
        let mut g = Graph::new();
        g.add("urn:a", "urn:p", Term::literal("say \"hi\"\n"));
        g.add("urn:a", "urn:q", Term::lang_literal("bonjour", "fr"));
        let text = to_string(&g);
        assert!(text.contains(r#""say \"hi\"\n""#));
        assert!(text.contains("\"bonjour\"@fr ."));
        // Output parses back to the same graph
        let reread = parse(&text).unwrap();
        assert_eq!(reread.len(), g.len());
    }
}
