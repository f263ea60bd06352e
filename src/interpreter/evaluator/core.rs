use tracing::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::environment::{ConstantTable, Environment},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree against a variable environment and a
/// constant table.
///
/// This is a convenience wrapper around [`Evaluator::eval`].
///
/// # Errors
/// The first [`EvalError`] raised anywhere in the tree. When an assignment's
/// right-hand side fails, `env` is left untouched.
///
/// # Example
/// ```
/// use reckon::{
///     ast::Expr,
///     interpreter::{
///         environment::{ConstantTable, Environment},
///         evaluator::evaluate,
///     },
/// };
///
/// let mut env = Environment::new();
/// let constants = ConstantTable::default();
/// let expr = Expr::Assignment { name:  "x".to_string(),
///                               value: Box::new(Expr::number("10")), };
///
/// assert_eq!(evaluate(&expr, &mut env, &constants).unwrap(), 10.0);
/// assert_eq!(env.get("x"), Some(10.0));
/// ```
pub fn evaluate(expr: &Expr, env: &mut Environment, consts: &ConstantTable) -> EvalResult<f64> {
    Evaluator::new(env, consts).eval(expr)
}

/// Walks an expression tree and computes its value.
///
/// ## Usage
///
/// An `Evaluator` borrows the caller's [`Environment`] mutably and the
/// [`ConstantTable`] immutably for the duration of one evaluation.
/// Assignment is the only operation that writes to the environment.
pub struct Evaluator<'a> {
    /// Variable bindings, read by identifiers and written by assignment.
    pub(crate) variables: &'a mut Environment,
    /// Fallback lookup for names that are not bound as variables.
    pub(crate) constants: &'a ConstantTable,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given environment and constants.
    #[must_use]
    pub const fn new(variables: &'a mut Environment, constants: &'a ConstantTable) -> Self {
        Self { variables,
               constants }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node variant and recurses into the children.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { literal } => Self::eval_number(literal),
            Expr::Identifier { name } => self.eval_identifier(name),
            Expr::Assignment { name, value } => self.eval_assignment(name, value),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Comparison { left, op, right } => self.eval_comparison(left, *op, right),
            Expr::Logical { left, op, right } => self.eval_logical(left, *op, right),
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }

    /// Converts a number literal's text to a float.
    ///
    /// # Errors
    /// [`EvalError::InvalidLiteral`] when the text is not a valid numeral.
    fn eval_number(literal: &str) -> EvalResult<f64> {
        literal.parse::<f64>()
               .map_err(|_| EvalError::InvalidLiteral { literal: literal.to_string() })
    }

    /// Resolves a name, trying variables first and constants second.
    ///
    /// # Errors
    /// [`EvalError::UndefinedVariable`] when the name is bound in neither.
    fn eval_identifier(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .or_else(|| self.constants.get(name))
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates the right-hand side, binds it to `name` and returns it.
    ///
    /// The binding is only written after the value is known, so a failing
    /// right-hand side leaves the environment unchanged.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<f64> {
        let value = self.eval(value)?;
        self.variables.set(name, value);
        debug!(name, value, "assigned variable");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::{
        ast::Expr,
        error::EvalError,
        interpreter::{
            environment::{ConstantTable, Environment},
            lexer::tokenize,
            parser::parse,
        },
    };

    fn eval_in(env: &mut Environment, input: &str) -> Result<f64, EvalError> {
        let tokens = tokenize(input).unwrap_or_else(|e| panic!("{input:?} failed to lex: {e}"));
        let expr = parse(&tokens).unwrap_or_else(|e| panic!("{input:?} failed to parse: {e}"));
        evaluate(&expr, env, &ConstantTable::default())
    }

    fn eval_str(input: &str) -> Result<f64, EvalError> {
        eval_in(&mut Environment::new(), input)
    }

    fn assert_close(input: &str, expected: f64) {
        match eval_str(input) {
            Ok(value) => assert!((value - expected).abs() < 1e-9,
                                 "{input:?} gave {value}, expected {expected}"),
            Err(e) => panic!("{input:?} failed: {e}"),
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_close("2 + 3 * 4", 14.0);
        assert_close("(2 + 3) * 4", 20.0);
        assert_close("2^3^2", 512.0);
        assert_close("8/4/2", 1.0);
        assert_close("-3^2", -9.0);
        assert_close("-(-5)", 5.0);
        assert_close("2^-1", 0.5);
        assert_close("0/5", 0.0);
        assert_close("2sin(90)", 2.0);
        assert_close("2(3+4)", 14.0);
    }

    #[test]
    fn test_literals() {
        assert_close(".5", 0.5);
        assert_close("2.", 2.0);
        assert_close("1.5e-3", 0.0015);
        assert_eq!(eval_str("1e999"), Ok(f64::INFINITY));
    }

    #[test]
    fn test_invalid_literal_node() {
        let expr = Expr::number("1..2");
        assert_eq!(evaluate(&expr, &mut Environment::new(), &ConstantTable::new()),
                   Err(EvalError::InvalidLiteral { literal: "1..2".into() }));
    }

    #[test]
    fn test_names() {
        assert_close("pi", std::f64::consts::PI);
        assert_close("2pi", std::f64::consts::TAU);
        assert_eq!(eval_str("undefined_var"),
                   Err(EvalError::UndefinedVariable { name: "undefined_var".into() }));
    }

    #[test]
    fn test_variables_shadow_constants() {
        let mut env = Environment::new();
        assert_eq!(eval_in(&mut env, "pi = 3"), Ok(3.0));
        assert_eq!(eval_in(&mut env, "pi"), Ok(3.0));
        env.reset();
        assert_eq!(eval_in(&mut env, "pi"), Ok(std::f64::consts::PI));
    }

    #[test]
    fn test_assignment_persists() {
        let mut env = Environment::new();
        assert_eq!(eval_in(&mut env, "x = 10"), Ok(10.0));
        assert_eq!(eval_in(&mut env, "x + 5"), Ok(15.0));
        assert_eq!(eval_in(&mut env, "x = x * 2"), Ok(20.0));
        assert_eq!(env.get("x"), Some(20.0));
    }

    #[test]
    fn test_failed_assignment_leaves_environment() {
        let mut env = Environment::new();
        env.set("x", 1.0);
        assert_eq!(eval_in(&mut env, "x = 1/0"), Err(EvalError::DivisionByZero));
        assert!(eval_in(&mut env, "y = sqrt(-1)").is_err());
        assert_eq!(env.get("x"), Some(1.0));
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn test_assignment_inside_call() {
        let mut env = Environment::new();
        assert_eq!(eval_in(&mut env, "max(a = 2, 3)"), Ok(3.0));
        assert_eq!(env.get("a"), Some(2.0));
    }
}
