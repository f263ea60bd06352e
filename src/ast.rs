use std::fmt;

/// Name under which postfix factorial is dispatched.
///
/// The parser wraps `x!` as a one-argument [`Expr::FunctionCall`] with this
/// name, so factorial goes through the same registry as every other function.
pub const FACTORIAL: &str = "!";

/// Arithmetic operators with two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Prefix operators with one operand.
///
/// Unary `+` is accepted by the parser but produces no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
}

/// Relational and equality operators. They always evaluate to `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

/// Logical connectives over truthy (non-zero) operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so a parsed expression is a plain tree with
/// no sharing. The tree is built bottom-up by the parser, read by the
/// evaluator, and dropped once the result is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number literal, kept as its source text.
    Number {
        /// The numeral exactly as written, e.g. `1.5e-10`.
        literal: String,
    },
    /// Reference to a variable or constant by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// `name = value`. Evaluates to the assigned value.
    Assignment {
        /// Name of the variable being bound.
        name:  String,
        /// The right-hand side.
        value: Box<Self>,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A comparison yielding `0` or `1`.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A logical `&&` or `||` yielding `0` or `1`.
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`), including postfix factorial.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a number literal node.
    #[must_use]
    pub fn number(literal: impl Into<String>) -> Self {
        Self::Number { literal: literal.into() }
    }

    /// Builds an identifier node.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("&&"),
            Self::Or => f.write_str("||"),
        }
    }
}

/// Renders the tree fully parenthesized, which makes grouping explicit:
/// `2^3^2` displays as `(2 ^ (3 ^ 2))`, `5!!` as `((5)!)!` and
/// `(x = 3) + 1` as `((x = 3) + 1)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { literal } => f.write_str(literal),
            Self::Identifier { name } => f.write_str(name),
            Self::Assignment { name, value } => write!(f, "({name} = {value})"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Comparison { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Logical { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments } if name == FACTORIAL && arguments.len() == 1 => {
                write!(f, "({})!", arguments[0])
            },
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}
