/// The environment module holds named values visible to expressions.
///
/// Variables live in an [`Environment`](environment::Environment) owned by
/// the caller and persist across evaluations; named constants live in a
/// read-only [`ConstantTable`](environment::ConstantTable) consulted when a
/// name is not bound as a variable.
pub mod environment;
/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST recursively, applies operators and builtin
/// functions, resolves names and performs assignments.
///
/// # Responsibilities
/// - Evaluates every AST node to an `f64`.
/// - Dispatches function calls through the builtin registry.
/// - Reports evaluation errors such as division by zero, domain violations
///   and overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw input and produces a sequence of
/// tokens, each corresponding to a number, name, operator or parenthesis.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and byte position.
/// - Inserts implicit multiplication, as in `2pi` or `3(4 + 5)`.
/// - Reports lexical errors for invalid characters and malformed numerals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs one expression tree that encodes precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting unbalanced parentheses, missing operands
///   and leftover tokens.
pub mod parser;
