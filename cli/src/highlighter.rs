use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

const DEFAULT_FG: Color = Color::White;

fn color_of(token: Token) -> Color {
    match token {
        Token::LParen | Token::RParen => Color::DarkGray,
        Token::Number => Color::Cyan,
        Token::Symbol | Token::Word => Color::Magenta,
        Token::Other => Color::Red,
    }
}

/// Colors each token of the line; text between tokens keeps the default style.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new().fg(DEFAULT_FG), line[curr_end..span.start].to_string()));
            }
            let fg = token.map(color_of).unwrap_or(DEFAULT_FG);
            output.push((Style::new().fg(fg), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(DEFAULT_FG), line[curr_end..].to_string()));
        }

        output
    }
}
