use anyhow::{bail, Result};
use capset_model::eq_ignore_case;

use crate::lexer::Lexer;
use crate::token::{Span, Tok, TokKind};

/// Longest text accepted by any entry point.
pub const MAX_INPUT_LEN: usize = 64 * 1024;

/// `head,Key=Value,...` before any field is interpreted.
#[derive(Debug, Clone)]
pub struct Record {
    pub head: String,
    pub head_span: Span,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub key: String,
    pub value: String,
    pub span: Span,
}

impl Record {
    /// Value of `key`, looked up case-insensitively.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| eq_ignore_case(&f.key, key))
    }

    pub fn has_only(&self, keys: &[&str]) -> bool {
        self.fields
            .iter()
            .all(|f| keys.iter().any(|k| eq_ignore_case(&f.key, k)))
    }
}

pub fn parse_record(src: &str) -> Result<Record> {
    if src.len() > MAX_INPUT_LEN {
        bail!(
            "input exceeds {} bytes ({} bytes)",
            MAX_INPUT_LEN,
            src.len()
        );
    }
    let mut p = Parser::new(src);
    p.parse_record()
}

struct Parser<'a> {
    src: &'a str,
    lex: Lexer<'a>,
    cur: Tok,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        let mut lex = Lexer::new(src);
        let cur = lex.next_tok();
        Self { src, lex, cur }
    }

    fn bump(&mut self) {
        self.cur = self.lex.next_tok();
    }

    fn expect(&mut self, k: TokKind) -> Result<Tok> {
        if self.cur.kind == k {
            let t = self.cur.clone();
            self.bump();
            Ok(t)
        } else {
            bail!(
                "expected {:?} at {}, found {:?}",
                k,
                self.cur.span.start,
                self.cur.kind
            )
        }
    }

    fn parse_text(&mut self, what: &str) -> Result<(String, Span)> {
        match &self.cur.kind {
            TokKind::Text(s) if !s.is_empty() => {
                let out = (s.clone(), self.cur.span);
                self.bump();
                Ok(out)
            }
            other => bail!("expected {} at {}, found {:?}", what, self.cur.span.start, other),
        }
    }

    fn parse_record(&mut self) -> Result<Record> {
        let (head, head_span) = self.parse_text("identifier")?;

        let mut fields: Vec<Field> = Vec::new();
        loop {
            match self.cur.kind {
                TokKind::Eof => break,
                TokKind::Comma => self.bump(),
                _ => bail!(
                    "expected ',' at {}, found {:?}",
                    self.cur.span.start,
                    self.cur.kind
                ),
            }
            let field = self.parse_field()?;
            if fields.iter().any(|f| eq_ignore_case(&f.key, &field.key)) {
                bail!("duplicate key '{}' at {}", field.key, field.span.start);
            }
            fields.push(field);
        }

        Ok(Record {
            head,
            head_span,
            fields,
        })
    }

    fn parse_field(&mut self) -> Result<Field> {
        let (key, key_span) = self.parse_text("key")?;
        self.expect(TokKind::Eq)?;

        // the value is the raw text up to the next ','; it may contain '='
        let mut range: Option<(u32, u32)> = None;
        let mut end = self.cur.span.end;
        while !matches!(self.cur.kind, TokKind::Comma | TokKind::Eof) {
            let span = self.cur.span;
            range = Some(range.map_or((span.start, span.end), |(start, _)| (start, span.end)));
            end = span.end;
            self.bump();
        }
        let value = range
            .map(|(from, to)| self.src[from as usize..to as usize].to_string())
            .unwrap_or_default();

        Ok(Field {
            key,
            value,
            span: Span {
                start: key_span.start,
                end,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_head_and_fields() {
        let r = parse_record("Net,Version=v4.0,Profile=Client").unwrap();
        assert_eq!(r.head, "Net");
        assert_eq!(r.fields.len(), 2);
        assert_eq!(r.get("version").unwrap().value, "v4.0");
        assert_eq!(r.get("PROFILE").unwrap().value, "Client");
        assert!(r.has_only(&["Version", "Profile"]));
    }

    #[test]
    fn value_may_contain_equals_and_be_empty() {
        let r = parse_record("Net,DisplayName=a=b,Family=").unwrap();
        assert_eq!(r.get("DisplayName").unwrap().value, "a=b");
        assert_eq!(r.get("Family").unwrap().value, "");
    }

    #[test]
    fn value_keeps_inner_spacing_around_equals() {
        let r = parse_record("Net, DisplayName = a = b ,Family=x =").unwrap();
        assert_eq!(r.get("DisplayName").unwrap().value, "a = b");
        assert_eq!(r.get("Family").unwrap().value, "x =");
    }

    #[test]
    fn head_span_covers_the_trimmed_identifier() {
        let r = parse_record("  Net ,Version=v1").unwrap();
        assert_eq!(r.head_span, Span { start: 2, end: 5 });
    }

    #[test]
    fn rejects_structural_errors() {
        for bad in ["", ",Version=v1", "Net,", "Net,Version", "Net,=v1", "Net=x", "Net,A=1,a=2"] {
            assert!(parse_record(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_oversized_input() {
        let long = "N".repeat(MAX_INPUT_LEN + 1);
        assert!(parse_record(&long).is_err());
    }
}
