use crate::token::{Span, Tok, TokKind};

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn span(&self, start: usize) -> Span {
        Span {
            start: start as u32,
            end: self.pos as u32,
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    pub fn next_tok(&mut self) -> Tok {
        self.skip_ws();
        let start = self.pos;
        let Some(c) = self.bump() else {
            return Tok {
                kind: TokKind::Eof,
                span: self.span(start),
            };
        };

        let single = match c {
            ',' => Some(TokKind::Comma),
            '=' => Some(TokKind::Eq),
            _ => None,
        };
        if let Some(kind) = single {
            return Tok {
                kind,
                span: self.span(start),
            };
        }

        // text runs up to the next separator; inner whitespace is kept
        while let Some(p) = self.peek() {
            if p == ',' || p == '=' {
                break;
            }
            self.bump();
        }
        let text = self.src[start..self.pos].trim_end();
        let end = start + text.len();
        Tok {
            kind: TokKind::Text(text.to_string()),
            span: Span {
                start: start as u32,
                end: end as u32,
            },
        }
    }
}
