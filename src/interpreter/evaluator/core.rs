use crate::{
    ast::{AdditiveOperator, Expression, Factor, MultiplicativeOperator, SubExpression, Term},
    error::RuntimeError,
    interpreter::environment::Environment,
    util::num::parse_numeral,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many expressions may be under evaluation at once.
///
/// Each parenthesized group, variable reference and builtin argument opens a
/// new level. Past this limit evaluation fails with
/// [`RuntimeError::EvaluationTooDeep`].
pub const MAX_EVAL_DEPTH: usize = 256;

impl Environment {
    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for evaluation. It never modifies the
    /// environment, so evaluating the same tree twice gives the same result.
    ///
    /// Without `==` the value is that of the first sub-expression. With a
    /// chain, adjacent sub-expressions are compared left to right: the first
    /// unequal pair yields `0.0` and the rest of the chain is not evaluated;
    /// if every pair is equal the result is `1.0`. Comparison is plain `f64`
    /// equality, so a NaN anywhere in the chain makes it `0.0`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::dispatcher::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.execute_line("1 + 1 == 2 == 2"), Ok(Some(1.0)));
    /// assert_eq!(interpreter.execute_line("1 == 2 == 1"), Ok(Some(0.0)));
    /// ```
    pub fn evaluate(&self, expr: &Expression) -> EvalResult<f64> {
        self.eval_expression(expr, 0)
    }

    /// Evaluates an expression found `depth` levels below the top.
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval_expression(&self, expr: &Expression, depth: usize) -> EvalResult<f64> {
        if depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::EvaluationTooDeep { limit: MAX_EVAL_DEPTH });
        }
        let depth = depth + 1;

        let first = self.eval_sub_expression(&expr.first, depth)?;
        if expr.chain.is_empty() {
            return Ok(first);
        }

        let mut previous = first;
        for sub in &expr.chain {
            let next = self.eval_sub_expression(sub, depth)?;
            if previous != next {
                return Ok(0.0);
            }
            previous = next;
        }
        Ok(1.0)
    }

    /// Folds an additive chain left to right.
    fn eval_sub_expression(&self, sub: &SubExpression, depth: usize) -> EvalResult<f64> {
        let mut acc = self.eval_term(&sub.first, depth)?;
        for (op, term) in &sub.rest {
            let rhs = self.eval_term(term, depth)?;
            match op {
                AdditiveOperator::Add => acc += rhs,
                AdditiveOperator::Sub => acc -= rhs,
            }
        }
        Ok(acc)
    }

    /// Folds a multiplicative chain left to right.
    ///
    /// Division follows IEEE 754: dividing by zero gives an infinity or NaN
    /// and is not an error.
    fn eval_term(&self, term: &Term, depth: usize) -> EvalResult<f64> {
        let mut acc = self.eval_factor(&term.first, depth)?;
        for (op, factor) in &term.rest {
            let rhs = self.eval_factor(factor, depth)?;
            match op {
                MultiplicativeOperator::Mul => acc *= rhs,
                MultiplicativeOperator::Div => acc /= rhs,
            }
        }
        Ok(acc)
    }

    /// Evaluates a single factor.
    ///
    /// A variable evaluates the definition it captured when it was parsed,
    /// not whatever the name is bound to now.
    fn eval_factor(&self, factor: &Factor, depth: usize) -> EvalResult<f64> {
        match factor {
            Factor::Number(literal) => parse_numeral(literal),
            Factor::Paren(expr) => self.eval_expression(expr, depth),
            Factor::Variable { bound, .. } => self.eval_expression(bound, depth),
            Factor::BuiltinCall { name, arguments } => {
                self.eval_builtin_call(name, arguments, depth)
            },
        }
    }
}
