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

//! Uppercase batch operation
//!
//! Takes an ordered sequence of strings, uppercases every element into a
//! freshly allocated buffer sized to the input, and reports the capacity of
//! that buffer. An empty input is rejected before any work is done.

use crate::error::{BatchError, BatchResult};
use tracing::{info, warn};

/// Uppercased output of a single batch call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UppercaseBatch {
    /// Uppercased items, in input order. Boxed so capacity equals length.
    items: Box<[String]>,
}

impl UppercaseBatch {
    /// Uppercase every item of `items` into a new buffer.
    ///
    /// Fails with [`BatchError::EmptyInput`] when `items` is empty. On success
    /// the number of processed items is logged at `INFO`.
    pub fn build<S: AsRef<str>>(items: &[S]) -> BatchResult<Self> {
        let total = items.len();
        if total == 0 {
            warn!(error = BatchError::EmptyInput.code(), "Rejected empty batch");
            return Err(BatchError::EmptyInput);
        }

        let mut buffer = Vec::with_capacity(total);
        for item in items {
            buffer.push(item.as_ref().to_uppercase());
        }

        info!(processed = total, "Uppercased batch");
        Ok(Self { items: buffer.into_boxed_slice() })
    }

    /// Allocated size of the output buffer
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Number of uppercased items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A built batch always holds at least one item
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only access to the uppercased items
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Take ownership of the uppercased items
    pub fn into_items(self) -> Vec<String> {
        self.items.into_vec()
    }
}

/// Uppercase `items` and return the capacity of the output buffer.
///
/// The uppercased contents are dropped; use [`UppercaseBatch::build`] to keep them.
pub fn uppercase_batch<S: AsRef<str>>(items: &[S]) -> BatchResult<usize> {
    UppercaseBatch::build(items).map(|batch| batch.capacity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_order() {
        let batch = UppercaseBatch::build(&["one", "Two", "thrEE"]).unwrap();
        assert_eq!(batch.items(), &["ONE", "TWO", "THREE"]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.capacity(), 3);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_build_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(UppercaseBatch::build(&empty), Err(BatchError::EmptyInput));
        assert_eq!(uppercase_batch(&empty), Err(BatchError::EmptyInput));
    }

    #[test]
    fn test_unicode_uppercase() {
        // ß expands to two characters
        let batch = UppercaseBatch::build(&["straße", "héllo"]).unwrap();
        assert_eq!(batch.items(), &["STRASSE", "HÉLLO"]);
        assert_eq!(batch.capacity(), 2);
    }

    #[test]
    fn test_owned_strings() {
        let input = vec![String::from("go"), String::from("rust")];
        assert_eq!(uppercase_batch(&input), Ok(2));
        assert_eq!(UppercaseBatch::build(&input).unwrap().into_items(), vec!["GO", "RUST"]);
    }

    #[test]
    fn test_empty_strings_are_items() {
        assert_eq!(uppercase_batch(&["", ""]), Ok(2));
    }
}
