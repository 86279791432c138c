// ============================================================================
// Operations
// The four arithmetic folds a NumericValue can chain
// ============================================================================

use std::fmt;

/// A binary arithmetic step applied left-to-right over an operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// running + x
    Add,
    /// running - x
    Minus,
    /// running * x
    Times,
    /// running / x
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Minus,
        Operation::Times,
        Operation::Divide,
    ];

    /// Apply one fold step.
    ///
    /// Plain IEEE-754 arithmetic: division by zero gives an infinity (or NaN
    /// for `0 / 0`) and NaN operands propagate.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Minus => lhs - rhs,
            Operation::Times => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }

    /// Operator symbol, used in logs and `Display`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Minus => "-",
            Operation::Times => "*",
            Operation::Divide => "/",
        }
    }

    /// Method name on `NumericValue` that performs this fold.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Minus => "minus",
            Operation::Times => "times",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
