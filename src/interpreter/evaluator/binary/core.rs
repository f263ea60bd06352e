use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::{
        binary::power::checked_pow,
        core::{EvalResult, Evaluator},
    },
};

impl Evaluator<'_> {
    /// Evaluates both operands of an arithmetic node, left first, then
    /// applies the operator.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, left, right)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// `+`, `-` and `*` follow IEEE semantics. Division by zero (either sign)
    /// fails. Exponentiation is checked by [`checked_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result of `left op right`.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Mul, 3.0, 4.0);
    /// assert_eq!(result.unwrap(), 12.0);
    ///
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => checked_pow(left, right, "^"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::BinaryOperator,
        error::EvalError,
        interpreter::evaluator::Evaluator,
    };

    #[test]
    fn test_division() {
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 5.0, 0.0),
                   Err(EvalError::DivisionByZero));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 5.0, -0.0),
                   Err(EvalError::DivisionByZero));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 0.0, 5.0), Ok(0.0));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_plain_ieee_arithmetic() {
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Add, 0.1, 0.2), Ok(0.1 + 0.2));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Mul, 1e308, 10.0),
                   Ok(f64::INFINITY));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 2.0, 5.0), Ok(-3.0));
    }
}
