use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::trace;

use crate::parser::{
    Node, NodeKind, ParseError, ParseErrorKind, Span, error::convert_pest_error,
};

/// Default limit on nested compound nodes (the top-level line counts as one).
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Parser)]
#[grammar = "parser/styx.pest"]
pub struct StyxParser;

/// Parse a full `operator expr+` line.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Node, ParseError> {
    // The line itself is one level before any parenthesis opens.
    check_depth(source, 1, max_depth)?;
    let pair = parse_rule(Rule::program, source)?;
    build_program(pair, source)
}

/// Parse a single anchored expression: a number or `( operator expr+ )`.
pub fn parse_expr(source: &str) -> Result<Node, ParseError> {
    parse_expr_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_expr_with_max_depth(source: &str, max_depth: usize) -> Result<Node, ParseError> {
    check_depth(source, 0, max_depth)?;
    let pair = parse_rule(Rule::line_expr, source)?;
    let expr = pair.into_inner().next().ok_or_else(|| missing("expression", source))?;
    build_expr(expr, source)
}

/// Parse what a user typed at the prompt.
///
/// A line opening with `(` can only be a single expression and is parsed as
/// one. Any other line is first read as a program. If that fails but the
/// whole line is a single expression (`42`) that expression is returned
/// instead; otherwise whichever of the two attempts got further into the line
/// is reported.
pub fn parse_line(source: &str, max_depth: usize) -> Result<Node, ParseError> {
    if source.trim_start().starts_with('(') {
        return parse_expr_with_max_depth(source, max_depth);
    }
    match parse_with_max_depth(source, max_depth) {
        Ok(node) => Ok(node),
        Err(err) if matches!(err.kind, ParseErrorKind::MaxDepthExceeded { .. }) => Err(err),
        Err(err) => parse_expr_with_max_depth(source, max_depth).map_err(|expr_err| {
            if expr_err.span.0.start > err.span.0.start {
                expr_err
            } else {
                err
            }
        }),
    }
}

fn parse_rule(rule: Rule, source: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs =
        StyxParser::parse(rule, source).map_err(|e| convert_pest_error(e, source))?;
    pairs.next().ok_or_else(|| missing("input", source))
}

fn missing(what: &str, source: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("missing expected {} in parse tree", what),
        },
        source,
        Span::new(0, source.len()),
    )
}

/// Reject input nested deeper than `max_depth` before handing it to pest,
/// whose recursive descent would otherwise follow the nesting on the stack.
fn check_depth(source: &str, base: usize, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = base;
    for (pos, c) in source.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source,
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1).max(base),
            _ => {}
        }
    }
    Ok(())
}

fn build_program(pair: Pair<Rule>, source: &str) -> Result<Node, ParseError> {
    let span = Span::from(pair.as_span());
    let mut children = vec![Node::delimiter("", Span::empty_at(span.0.start))];

    for inner in pair.into_inner() {
        let child = match inner.as_rule() {
            Rule::operator => Node::operator(inner.as_str(), inner.as_span().into()),
            Rule::expr => build_expr(inner, source)?,
            Rule::EOI => Node::delimiter("", inner.as_span().into()),
            rule => return Err(unhandled(rule, inner.as_span().into(), source)),
        };
        children.push(child);
    }

    trace!(children = children.len(), "built program node");
    compound(NodeKind::Program, children, span, source)
}

fn build_expr(pair: Pair<Rule>, source: &str) -> Result<Node, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner().peekable();

    // `expr := number` collapses to the number leaf itself.
    if let Some(first) = inner.peek()
        && first.as_rule() == Rule::number
    {
        return Ok(Node::number(first.as_str(), first.as_span().into()));
    }

    let mut children = vec![Node::delimiter("(", Span::new(span.0.start, span.0.start + 1))];
    for pair in inner {
        let child = match pair.as_rule() {
            Rule::operator => Node::operator(pair.as_str(), pair.as_span().into()),
            Rule::expr => build_expr(pair, source)?,
            rule => return Err(unhandled(rule, pair.as_span().into(), source)),
        };
        children.push(child);
    }
    children.push(Node::delimiter(")", Span::new(span.0.end - 1, span.0.end)));

    compound(NodeKind::Expr, children, span, source)
}

fn compound(kind: NodeKind, children: Vec<Node>, span: Span, source: &str) -> Result<Node, ParseError> {
    Node::compound(kind, children, span.clone())
        .map_err(|err| ParseError::new(ParseErrorKind::MalformedTree(err), source, span))
}

fn unhandled(rule: Rule, span: Span, source: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("Unhandled rule: {:?}", rule),
        },
        source,
        span,
    )
}
