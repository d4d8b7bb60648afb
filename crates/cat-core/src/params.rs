//! Named per-entity parameter columns.
//!
//! # Design
//!
//! Truth and estimate bundles are "dataframe-shaped": a small set of named
//! parameters, each a fixed-length numeric column indexed by entity id.
//! `ParamTable` represents exactly that — an ordered list of
//! `(name, Vec<f64>)` pairs, all of the same length.  Column order is
//! insertion order and is preserved everywhere (trace output, iteration)
//! so runs produce byte-identical output for identical inputs.
//!
//! Recognized names are a convention, not a restriction: persons carry at
//! minimum [`THETA`]; items at minimum [`DIFFICULTY`], optionally
//! [`DISCRIMINATION`].  Multi-parameter models add further columns without
//! any code change here.

use crate::{CatError, CatResult};

/// Ability parameter column name.
pub const THETA: &str = "theta";
/// Item difficulty column name.
pub const DIFFICULTY: &str = "b";
/// Item discrimination column name.
pub const DISCRIMINATION: &str = "a";

/// An ordered mapping from parameter name to a fixed-length `f64` column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamTable {
    len:     usize,
    columns: Vec<(String, Vec<f64>)>,
}

impl ParamTable {
    /// An empty table for `len` entities (no columns yet).
    pub fn new(len: usize) -> Self {
        Self { len, columns: Vec::new() }
    }

    /// Builder-style column insertion.  Fails if `values.len() != self.len()`
    /// or the name is already present.
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> CatResult<Self> {
        if values.len() != self.len {
            return Err(CatError::DimensionMismatch {
                expected: self.len,
                got:      values.len(),
                what:     "parameter column",
            });
        }
        if self.has_column(name) {
            return Err(CatError::Config(format!("duplicate parameter column {name:?}")));
        }
        self.columns.push((name.to_string(), values));
        Ok(self)
    }

    /// A table with the same shape (length and column names) as `self`, all
    /// values zero.  This is the standard initial-estimate bundle.
    pub fn zeros_like(&self) -> Self {
        Self {
            len:     self.len,
            columns: self
                .columns
                .iter()
                .map(|(name, _)| (name.clone(), vec![0.0; self.len]))
                .collect(),
        }
    }

    /// Number of entities (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Read access to one column.
    pub fn column(&self, name: &str) -> CatResult<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| CatError::UnknownParameter(name.to_string()))
    }

    /// Mutable access to one column.
    pub fn column_mut(&mut self, name: &str) -> CatResult<&mut [f64]> {
        self.columns
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_mut_slice())
            .ok_or_else(|| CatError::UnknownParameter(name.to_string()))
    }

    /// One value, by column name and entity index.
    pub fn value(&self, name: &str, index: usize) -> CatResult<f64> {
        Ok(self.column(name)?[index])
    }

    /// `true` if `other` has the same length and the same column names in the
    /// same order.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.len == other.len && self.names().eq(other.names())
    }

    /// Element-wise `self − estimate` over every column (self is the truth
    /// bundle).  This is the bias table recorded each round.
    pub fn bias_against(&self, estimate: &Self) -> CatResult<Self> {
        if !self.same_shape(estimate) {
            return Err(CatError::DimensionMismatch {
                expected: self.len,
                got:      estimate.len,
                what:     "estimate table",
            });
        }
        let columns = self
            .columns
            .iter()
            .zip(&estimate.columns)
            .map(|((name, truth), (_, est))| {
                let diff = truth.iter().zip(est).map(|(t, e)| t - e).collect();
                (name.clone(), diff)
            })
            .collect();
        Ok(Self { len: self.len, columns })
    }
}
