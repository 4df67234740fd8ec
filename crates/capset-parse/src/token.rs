/// Byte range into the parsed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokKind {
    Eof,
    /// `,` between fields
    Comma,
    /// `=` between key and value
    Eq,
    /// Any other run of characters, surrounding whitespace trimmed
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Tok {
    pub kind: TokKind,
    pub span: Span,
}
