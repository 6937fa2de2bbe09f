//! Batch selection policy.
//!
//! A product may have been bought several times. Each purchase is a batch,
//! and a sale consumes exactly one unsold batch. The [`BookingMethod`]
//! decides which one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Booking method determines which unsold batch a sale is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookingMethod {
    /// First In, First Out. The earliest unsold batch is sold first.
    #[default]
    Fifo,
    /// Last In, First Out. The most recent unsold batch is sold first.
    Lifo,
}

impl FromStr for BookingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FIFO" => Ok(Self::Fifo),
            "LIFO" => Ok(Self::Lifo),
            _ => Err(format!("unknown booking method: {s}")),
        }
    }
}

impl fmt::Display for BookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lifo => write!(f, "LIFO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("fifo".parse::<BookingMethod>(), Ok(BookingMethod::Fifo));
        assert_eq!("LIFO".parse::<BookingMethod>(), Ok(BookingMethod::Lifo));
        assert_eq!("Lifo".parse::<BookingMethod>(), Ok(BookingMethod::Lifo));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hifo".parse::<BookingMethod>().unwrap_err();
        assert!(err.contains("hifo"));
    }

    #[test]
    fn test_display_round_trips() {
        for method in [BookingMethod::Fifo, BookingMethod::Lifo] {
            assert_eq!(method.to_string().parse::<BookingMethod>(), Ok(method));
        }
    }
}
