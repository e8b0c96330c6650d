//! Errors raised while categorizing a list.

use thiserror::Error;

/// Which status axis a value was classified on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAxis {
    Series,
    User,
}

impl std::fmt::Display for StatusAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusAxis::Series => write!(f, "series"),
            StatusAxis::User => write!(f, "user"),
        }
    }
}

/// A record carried a status code outside the known vocabulary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unrecognized {axis} status value: {value}")]
pub struct InvalidCategoryError {
    pub axis: StatusAxis,
    pub value: u8,
}

impl InvalidCategoryError {
    pub fn series(value: u8) -> Self {
        Self {
            axis: StatusAxis::Series,
            value,
        }
    }

    pub fn user(value: u8) -> Self {
        Self {
            axis: StatusAxis::User,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_axis() {
        assert_eq!(
            InvalidCategoryError::series(7).to_string(),
            "Unrecognized series status value: 7"
        );
        assert_eq!(
            InvalidCategoryError::user(5).to_string(),
            "Unrecognized user status value: 5"
        );
    }
}
