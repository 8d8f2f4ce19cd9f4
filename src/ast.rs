use std::{fmt, iter, mem, rc::Rc};

/// A numeric literal exactly as it was written.
///
/// The literal keeps its sign and its digit text verbatim; conversion to `f64`
/// happens only when the literal is evaluated, so malformed text such as
/// `1.2.3` parses fine and fails later with a numeric conversion error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// Whether the literal started with `-`.
    pub negative: bool,
    /// Digits and decimal points as they appeared in the line.
    pub digits:   String,
}

impl NumberLiteral {
    /// Creates a literal from its sign and digit text.
    #[must_use]
    pub fn new(negative: bool, digits: impl Into<String>) -> Self {
        Self { negative,
               digits: digits.into() }
    }
}

/// Operators of an additive chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// Operators of a multiplicative chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOperator {
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// The lowest grammar unit.
///
/// `Factor` is a closed set of node kinds; the evaluator matches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// A numeric literal such as `42`, `-1.5`.
    Number(NumberLiteral),
    /// A parenthesized expression, `( expression )`.
    Paren(Box<Expression>),
    /// A reference to a variable.
    ///
    /// `bound` is the variable's defining expression as it stood when this
    /// reference was parsed. Later redefinitions of the name do not affect it.
    Variable {
        /// Name of the variable.
        name:  String,
        /// The definition captured at parse time.
        bound: Rc<Expression>,
    },
    /// A call to a builtin function (e.g. `max(x, 2)`).
    BuiltinCall {
        /// Name of the builtin being called.
        name:      String,
        /// Argument expressions in call order.
        arguments: Vec<Expression>,
    },
}

/// A multiplicative chain: `factor (("*" | "/") factor)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// The leading factor.
    pub first: Factor,
    /// The remaining factors with the operator that precedes each.
    pub rest:  Vec<(MultiplicativeOperator, Factor)>,
}

/// An additive chain: `term (("+" | "-") term)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubExpression {
    /// The leading term.
    pub first: Term,
    /// The remaining terms with the operator that precedes each.
    pub rest:  Vec<(AdditiveOperator, Term)>,
}

/// A chained equality: `sub_expression ("==" sub_expression)*`.
///
/// With an empty `chain` the expression is just its first sub-expression.
/// Otherwise it is a comparison and evaluates to `1.0` or `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The leading sub-expression.
    pub first: SubExpression,
    /// Sub-expressions compared, pairwise and in order, with `==`.
    pub chain: Vec<SubExpression>,
}

impl Expression {
    /// Moves every captured variable definition in this tree into `out`,
    /// leaving empty literals in place of the references.
    fn detach_bindings(&mut self, out: &mut Vec<Rc<Self>>) {
        for sub in iter::once(&mut self.first).chain(&mut self.chain) {
            let terms = iter::once(&mut sub.first).chain(sub.rest.iter_mut().map(|(_, t)| t));
            for term in terms {
                let factors =
                    iter::once(&mut term.first).chain(term.rest.iter_mut().map(|(_, f)| f));
                for factor in factors {
                    match factor {
                        Factor::Number(_) => {},
                        Factor::Paren(inner) => inner.detach_bindings(out),
                        Factor::BuiltinCall { arguments, .. } => {
                            for arg in arguments {
                                arg.detach_bindings(out);
                            }
                        },
                        Factor::Variable { .. } => {
                            let empty = Factor::Number(NumberLiteral::new(false, String::new()));
                            if let Factor::Variable { bound, .. } = mem::replace(factor, empty) {
                                out.push(bound);
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Releases captured definitions iteratively. A chain built by repeating
/// `n = n + 1` has no bound on its length.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_bindings(&mut pending);

        while let Some(bound) = pending.pop() {
            if let Ok(mut expr) = Rc::try_unwrap(bound) {
                expr.detach_bindings(&mut pending);
            }
        }
    }
}

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`; stores the expression without evaluating it.
    Assignment {
        /// Variable being defined or redefined.
        name:  String,
        /// Its new definition.
        value: Expression,
    },
    /// A bare expression whose value is the line's result.
    Expression(Expression),
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits)
    }
}

impl fmt::Display for AdditiveOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

impl fmt::Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Paren(expr) => write!(f, "({expr})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BuiltinCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, factor) in &self.rest {
            write!(f, " {op} {factor}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SubExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, term) in &self.rest {
            write!(f, " {op} {term}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for sub in &self.chain {
            write!(f, " == {sub}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}
