//! The closed set of class labels a teacher can be assigned to.

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of `Class 1` through `Class 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(u8);

impl ClassName {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 10;

    /// Every selectable class, in display order.
    pub fn all() -> impl Iterator<Item = ClassName> {
        (Self::FIRST..=Self::LAST).map(ClassName)
    }

    /// Class with the given number, if it is in range.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= Self::FIRST && number <= Self::LAST {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", self.0)
    }
}

impl FromStr for ClassName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("Class ")
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Self::new)
            .ok_or_else(|| ValidationError::UnknownClass { value: s.to_string() })
    }
}

impl TryFrom<String> for ClassName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassName> for String {
    fn from(value: ClassName) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_labels() {
        let labels: Vec<String> = ClassName::all().map(|c| c.to_string()).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "Class 1");
        assert_eq!(labels[9], "Class 10");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Class 4".parse::<ClassName>().ok(), ClassName::new(4));
        assert!("Class 0".parse::<ClassName>().is_err());
        assert!("Class 11".parse::<ClassName>().is_err());
        assert!("class 4".parse::<ClassName>().is_err());
        assert!("".parse::<ClassName>().is_err());
    }
}
