// Upcase
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Error types for batch operations

use thiserror::Error;

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors raised by [`crate::batch::UppercaseBatch`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The input sequence had no elements
    #[error("empty list")]
    EmptyInput,
}

impl BatchError {
    /// Stable short code used in reports and log fields
    pub fn code(&self) -> &'static str {
        match self {
            BatchError::EmptyInput => "empty_input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        assert_eq!(BatchError::EmptyInput.to_string(), "empty list");
        assert_eq!(BatchError::EmptyInput.code(), "empty_input");
    }
}
