use std::collections::BTreeMap;

use super::{Error, Signature};

/// A point together with the squared magnitude of the function there.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Squared magnitude of the function output at `point`.
    pub magnitude: f64,

    /// The evaluated point.
    pub point: Vec<f64>,
}

/// Best known evaluation for each orthant seen during a run.
///
/// Entries are keyed by the [`Signature`] of the function output and only
/// ever replaced by an evaluation with an equal or smaller magnitude. Nothing
/// is removed. Keys are kept in ascending order so that scans visit entries
/// in a stable order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: BTreeMap<Signature, FunctionCall>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an evaluation for `signature`.
    ///
    /// The entry is replaced if none exists yet or if the stored magnitude is
    /// greater than or equal to `magnitude`, so on ties the latest insert
    /// wins. Returns `true` if the table changed.
    pub fn insert(&mut self, point: Vec<f64>, signature: Signature, magnitude: f64) -> bool {
        if let Some(existing) = self.entries.get(&signature)
            && existing.magnitude < magnitude
        {
            return false;
        }
        self.entries
            .insert(signature, FunctionCall { magnitude, point });
        true
    }

    /// Returns the entry stored for `signature`, if any.
    #[must_use]
    pub fn get(&self, signature: Signature) -> Option<&FunctionCall> {
        self.entries.get(&signature)
    }

    /// Returns the entry whose signature is closest to `signature`.
    ///
    /// Closeness is the number of differing bits. Entries are scanned in
    /// ascending signature order and the first one at the minimum distance
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] if the table has no entries.
    pub fn nearest(&self, signature: Signature) -> Result<(Signature, &FunctionCall), Error> {
        self.entries
            .iter()
            .min_by_key(|(key, _)| key.distance(signature))
            .map(|(key, call)| (*key, call))
            .ok_or(Error::EmptyTable)
    }

    /// Returns the number of orthants with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no evaluation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in ascending signature order.
    pub fn iter(&self) -> impl Iterator<Item = (Signature, &FunctionCall)> {
        self.entries.iter().map(|(key, call)| (*key, call))
    }
}
