// Syntax tree shared by the parser and the evaluator.

use core::{fmt, ops::Range};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn empty_at(pos: usize) -> Self {
        Self(pos..pos)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// Which grammar rule produced a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level `operator expr+` line.
    Program,
    /// Parenthesized `( operator expr+ )` form.
    Expr,
    /// Numeric literal.
    Number,
    /// Operator token.
    Operator,
    /// Parenthesis or start/end-of-input anchor.
    Delimiter,
}

impl NodeKind {
    pub fn is_compound(self) -> bool {
        matches!(self, NodeKind::Program | NodeKind::Expr)
    }

    /// Numbers and parenthesized expressions can both stand in operand position.
    pub fn is_operand(self) -> bool {
        matches!(self, NodeKind::Expr | NodeKind::Number)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "program",
            NodeKind::Expr => "expression",
            NodeKind::Number => "number",
            NodeKind::Operator => "operator",
            NodeKind::Delimiter => "delimiter",
        };
        f.write_str(name)
    }
}

/// Violation of the positional layout a compound node must follow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{kind} is not a compound node")]
    NotCompound { kind: NodeKind },

    #[error("expected {expected} at child {index}, found {}", describe(found))]
    UnexpectedChild {
        index: usize,
        expected: &'static str,
        found: Option<NodeKind>,
    },

    #[error("{kind} has no operands")]
    MissingOperand { kind: NodeKind },
}

fn describe(found: &Option<NodeKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "nothing".to_string(),
    }
}

/// One matched grammar rule instance.
///
/// Compound nodes (`Program`, `Expr`) always have the layout
///
/// ```text
/// [delimiter, operator, operand, operand*, delimiter]
/// ```
///
/// so the operator is the child at index 1 and the operands start at index 2.
/// The layout is checked by [`Node::compound`]; fields are private so a node
/// cannot be built any other way.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    contents: String,
    children: Vec<Node>,
    span: Span,
}

impl Node {
    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: NodeKind::Number,
            contents: text.into(),
            children: Vec::new(),
            span,
        }
    }

    /// Operator token. The text is not checked against the operator set here;
    /// an unknown token surfaces as an evaluation error instead.
    pub fn operator(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: NodeKind::Operator,
            contents: text.into(),
            children: Vec::new(),
            span,
        }
    }

    pub fn delimiter(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: NodeKind::Delimiter,
            contents: text.into(),
            children: Vec::new(),
            span,
        }
    }

    pub fn compound(kind: NodeKind, children: Vec<Node>, span: Span) -> Result<Self, TreeError> {
        if !kind.is_compound() {
            return Err(TreeError::NotCompound { kind });
        }
        check_layout(kind, &children)?;
        Ok(Self {
            kind,
            contents: String::new(),
            children,
            span,
        })
    }

    /// Builds `( operator operands... )`, adding the parentheses.
    pub fn expr(operator: Node, operands: Vec<Node>, span: Span) -> Result<Self, TreeError> {
        let open = Node::delimiter("(", Span::new(span.0.start, span.0.start + 1));
        let close = Node::delimiter(")", Span::new(span.0.end.saturating_sub(1), span.0.end));
        Self::compound(NodeKind::Expr, wrap(open, operator, operands, close), span)
    }

    /// Builds a top-level line, adding the start and end anchors.
    pub fn program(operator: Node, operands: Vec<Node>, span: Span) -> Result<Self, TreeError> {
        let start = Node::delimiter("", Span::empty_at(span.0.start));
        let end = Node::delimiter("", Span::empty_at(span.0.end));
        Self::compound(NodeKind::Program, wrap(start, operator, operands, end), span)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The operator token of a compound node.
    pub fn operator_token(&self) -> Option<&Node> {
        if self.kind.is_compound() {
            self.children.get(1)
        } else {
            None
        }
    }

    /// Operand children of a compound node, in source order.
    pub fn operands(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .skip(2)
            .filter(|child| child.kind.is_operand())
    }
}

fn wrap(open: Node, operator: Node, operands: Vec<Node>, close: Node) -> Vec<Node> {
    let mut children = Vec::with_capacity(operands.len() + 3);
    children.push(open);
    children.push(operator);
    children.extend(operands);
    children.push(close);
    children
}

fn check_layout(kind: NodeKind, children: &[Node]) -> Result<(), TreeError> {
    let expect = |index: usize, expected: &'static str, ok: fn(NodeKind) -> bool| {
        let found = children.get(index).map(|c| c.kind);
        match found {
            Some(k) if ok(k) => Ok(()),
            _ => Err(TreeError::UnexpectedChild {
                index,
                expected,
                found,
            }),
        }
    };

    expect(0, "delimiter", |k| k == NodeKind::Delimiter)?;
    expect(1, "operator", |k| k == NodeKind::Operator)?;

    let last = children.len() - 1;
    if last < 2 {
        return Err(TreeError::MissingOperand { kind });
    }
    expect(last, "delimiter", |k| k == NodeKind::Delimiter)?;
    if last == 2 {
        return Err(TreeError::MissingOperand { kind });
    }
    for index in 2..last {
        expect(index, "operand", NodeKind::is_operand)?;
    }
    Ok(())
}

/// Operators of the fixed grammar. Symbol and word spellings are synonyms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Min,
    Max,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "+" | "add" => Operator::Add,
            "-" | "sub" => Operator::Sub,
            "*" | "mul" => Operator::Mul,
            "/" | "div" => Operator::Div,
            "%" | "mod" => Operator::Mod,
            "^" => Operator::Pow,
            "min" => Operator::Min,
            "max" => Operator::Max,
            _ => return None,
        };
        Some(op)
    }

    /// Reducers that scan all operands instead of folding pairwise.
    pub fn is_extremum(self) -> bool {
        matches!(self, Operator::Min | Operator::Max)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
            Operator::Min => "min",
            Operator::Max => "max",
        };
        f.write_str(s)
    }
}
