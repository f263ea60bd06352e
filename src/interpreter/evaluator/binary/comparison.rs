use crate::{
    ast::{ComparisonOperator, Expr},
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::from_bool,
};

impl Evaluator<'_> {
    /// Evaluates a comparison node.
    ///
    /// Both operands are always evaluated, left first. The result is exactly
    /// `1.0` when the relation holds and `0.0` otherwise. Equality is exact
    /// IEEE equality, so any comparison with `NaN` other than `!=` is false.
    pub(crate) fn eval_comparison(&mut self,
                                  left: &Expr,
                                  op: ComparisonOperator,
                                  right: &Expr)
                                  -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Ok(compare(op, left, right))
    }
}

/// Applies a comparison operator to two values.
///
/// # Example
/// ```
/// use reckon::{ast::ComparisonOperator, interpreter::evaluator::binary::comparison::compare};
///
/// assert_eq!(compare(ComparisonOperator::Less, 1.0, 2.0), 1.0);
/// assert_eq!(compare(ComparisonOperator::Equal, 1.0, 2.0), 0.0);
/// ```
#[must_use]
pub fn compare(op: ComparisonOperator, left: f64, right: f64) -> f64 {
    let holds = match op {
        ComparisonOperator::Less => left < right,
        ComparisonOperator::Greater => left > right,
        ComparisonOperator::LessEqual => left <= right,
        ComparisonOperator::GreaterEqual => left >= right,
        ComparisonOperator::Equal => left == right,
        ComparisonOperator::NotEqual => left != right,
    };
    from_bool(holds)
}
