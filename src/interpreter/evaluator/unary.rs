use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation is plain IEEE negation and never fails on its own.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: The operand expression.
    ///
    /// # Returns
    /// The value of the operation.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        match op {
            UnaryOperator::Negate => Ok(-value),
        }
    }
}
