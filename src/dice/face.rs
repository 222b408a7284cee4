use serde::Serialize;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// marker trait for any value that can be printed on a die.
///
/// grouping combinations needs Ord, tables need Display,
/// and dice get compared against each other through equality.
pub trait Face: Clone + Ord + Hash + Debug + Display {}
impl<T> Face for T where T: Clone + Ord + Hash + Debug + Display {}

/// Face value known only at runtime: a number or a label.
///
/// Numbers sort before labels, numbers sort numerically,
/// labels sort lexically.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Symbol {
    Number(i64),
    Label(String),
}

impl From<i64> for Symbol {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}
impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Label(s.trim().to_string()))
    }
}
impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::str::FromStr for Symbol {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Label(s) => write!(f, "{}", s),
        }
    }
}
