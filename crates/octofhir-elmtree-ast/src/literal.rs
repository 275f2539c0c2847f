//! Literal AST nodes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value taken from an ELM JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// JSON null
    Null,
    /// JSON boolean
    Boolean(bool),
    /// JSON number that fits a signed 64-bit integer
    Integer(i64),
    /// JSON number with a fractional part, or an integer beyond `i64`
    Decimal(Decimal),
    /// JSON number outside the range of [`Decimal`]
    Float(f64),
    /// JSON string
    String(String),
}

impl Literal {
    /// Get the string value, if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean literal
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the scalar type
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Decimal> for Literal {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Null.to_string(), "null");
        assert_eq!(Literal::from(true).to_string(), "true");
        assert_eq!(Literal::from(45).to_string(), "45");
        assert_eq!(
            Literal::from(Decimal::from_str("1.50").unwrap()).to_string(),
            "1.50"
        );
        assert_eq!(Literal::from("female").to_string(), "\"female\"");
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::from("And").as_str(), Some("And"));
        assert_eq!(Literal::from(1).as_str(), None);
        assert_eq!(Literal::from(false).as_bool(), Some(false));
        assert!(Literal::Null.is_null());
        assert_eq!(Literal::Float(1e100).type_name(), "float");
    }
}
