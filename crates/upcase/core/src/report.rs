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

//! Serializable summary of a batch call

use crate::batch::UppercaseBatch;
use crate::error::BatchResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome status of a batch call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BatchStatus {
    Ok = 0,
    Error = 1,
    /// No result recorded yet
    Pending = 2,
}

impl BatchStatus {
    /// Numeric status code
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchStatus::Ok => "ok",
            BatchStatus::Error => "error",
            BatchStatus::Pending => "pending",
        };
        write!(f, "{name}")
    }
}

/// Report of a single batch call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Outcome status
    pub status: BatchStatus,
    /// Capacity of the output buffer, zero on failure
    pub capacity: usize,
    /// Uppercased items, empty on failure
    pub items: Vec<String>,
    /// Rendered error message, if the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchReport {
    /// Report for a call that has not produced a result yet
    pub fn pending() -> Self {
        Self {
            status: BatchStatus::Pending,
            capacity: 0,
            items: Vec::new(),
            error: None,
        }
    }

    /// Build a report from the result of [`UppercaseBatch::build`]
    pub fn from_result(result: BatchResult<UppercaseBatch>) -> Self {
        match result {
            Ok(batch) => Self {
                status: BatchStatus::Ok,
                capacity: batch.capacity(),
                items: batch.into_items(),
                error: None,
            },
            Err(e) => Self {
                status: BatchStatus::Error,
                capacity: 0,
                items: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == BatchStatus::Ok
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BatchStatus::Ok.code(), 0);
        assert_eq!(BatchStatus::Error.code(), 1);
        assert_eq!(BatchStatus::Pending.code(), 2);
        assert_eq!(BatchStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_report_from_success() {
        let report = BatchReport::from_result(UppercaseBatch::build(&["Go"]));
        assert!(report.is_ok());
        assert_eq!(report.capacity, 1);
        assert_eq!(report.items, vec!["GO"]);
        assert_eq!(report.error, None);
    }

    #[test]
    fn test_report_from_empty_input() {
        let empty: Vec<String> = Vec::new();
        let report = BatchReport::from_result(UppercaseBatch::build(&empty));
        assert_eq!(report.status, BatchStatus::Error);
        assert_eq!(report.capacity, 0);
        assert!(report.items.is_empty());
        assert_eq!(report.error.as_deref(), Some("empty list"));
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(BatchReport::default().status, BatchStatus::Pending);
    }
}
