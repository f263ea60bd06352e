use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::{from_bool, is_truthy},
};

impl Evaluator<'_> {
    /// Evaluates a logical operation.
    ///
    /// Both operands are evaluated before the operator is applied; there is
    /// no short-circuiting, so an error in either side is always reported.
    /// Any non-zero value counts as true. The result is `1.0` or `0.0`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The logical operator.
    /// - `right`: Right operand.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr)
                               -> EvalResult<f64> {
        let left = is_truthy(self.eval(left)?);
        let right = is_truthy(self.eval(right)?);

        match op {
            LogicalOperator::And => Ok(from_bool(left && right)),
            LogicalOperator::Or => Ok(from_bool(left || right)),
        }
    }
}
