//! Binary arithmetic on pairs of operands.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while calculating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The right-hand operand of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A symbol that is not one of `+ - * /`.
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),
}

/// One of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The ASCII symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Map a typed character to an operator.
    ///
    /// Accepts the ASCII symbols plus the keypad glyphs `−`, `×`, `x` and `÷`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| CalcError::InvalidOperator(s.to_string()))
            }
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}

/// Apply `operator` to `a` and `b`.
///
/// Follows IEEE-754 semantics, so overflow yields an infinity rather than an
/// error. Only division by an exact zero fails.
pub fn evaluate(operator: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
    match operator {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(Operator::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(evaluate(Operator::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(evaluate(Operator::Multiply, 4.0, 2.5), Ok(10.0));
        assert_eq!(evaluate(Operator::Divide, 9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(Operator::Divide, 7.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        // Negative zero compares equal to zero.
        assert_eq!(
            evaluate(Operator::Divide, 7.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(evaluate(Operator::Divide, 1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn test_overflow_is_infinite() {
        let result = evaluate(Operator::Multiply, 1e308, 10.0).unwrap();
        assert!(result.is_infinite());
        assert!(result.is_sign_positive());
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("÷".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalcError::InvalidOperator("%".to_string()))
        );
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_symbol_round_trips_through_display() {
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }
}
