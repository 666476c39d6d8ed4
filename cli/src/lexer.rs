use logos::Logos;

/// Tokens of a Styx line, as far as the line editor cares about them.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+(\.[0-9]*)?", priority = 4)]
    Number,

    #[regex(r"[-+*/%^]", priority = 3)]
    Symbol,

    #[token("add")]
    #[token("sub")]
    #[token("mul")]
    #[token("div")]
    #[token("mod")]
    #[token("min")]
    #[token("max")]
    Word,

    // Anything the grammar does not know.
    #[regex(r"[^ \t\r\n\f()]+", priority = 1)]
    Other,
}
