//! Dynamically sized dense matrix built from owned row vectors.
//!
//! Each row is an independently owned [`DenseVector`] of identical width;
//! the column count is derived from row 0 rather than stored. The
//! equal-width invariant is established at the construction boundary and
//! preserved because no operation resizes a single row.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::config::limits::{MAX_MATRIX_SIZE, check_dim};
use crate::core::traits::Element;
use crate::error::DynError;
use crate::vector::DenseVector;

/// Owned dense matrix with bounds-checked row and element access.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T> {
    rows: Box<[DenseVector<T>]>,
}

impl<T> DenseMatrix<T> {
    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, derived from row 0. An empty (taken) matrix
    /// reports 0 without touching a nonexistent row.
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, DenseVector::len)
    }

    /// True only for the inert post-`take` state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checked row access.
    pub fn row(&self, index: usize) -> Result<&DenseVector<T>, DynError> {
        self.rows
            .get(index)
            .ok_or(DynError::IndexOutOfRange(index, self.rows.len()))
    }

    /// Checked mutable row access.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut DenseVector<T>, DynError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(DynError::IndexOutOfRange(index, len))
    }

    /// Checked element access; the row bound is checked first, then the
    /// column bound by the row vector itself.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, DynError> {
        self.row(row)?.get(col)
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, DynError> {
        self.row_mut(row)?.get_mut(col)
    }

    /// Iterate over rows in order.
    pub fn rows_iter(&self) -> std::slice::Iter<'_, DenseVector<T>> {
        self.rows.iter()
    }

    /// O(1) exchange of shape and storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.rows, &mut other.rows);
    }

    /// Move the contents out, leaving `self` empty: safe to drop and to
    /// reassign, but no longer indexable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Assemble a matrix from prebuilt rows.
    ///
    /// The row count and the width of row 0 go through the same cap
    /// validation as `new`, and every later row must match row 0's width.
    /// This is the only entry point accepting caller-supplied rows, so the
    /// equal-width invariant is enforced here once.
    pub fn from_rows(rows: Vec<DenseVector<T>>) -> Result<Self, DynError> {
        check_dim(rows.len(), MAX_MATRIX_SIZE)?;
        let ncols = rows[0].len();
        check_dim(ncols, MAX_MATRIX_SIZE)?;
        for row in &rows[1..] {
            if row.len() != ncols {
                return Err(DynError::DimensionMismatch(
                    ncols.to_string(),
                    row.len().to_string(),
                ));
            }
        }
        Ok(Self {
            rows: rows.into_boxed_slice(),
        })
    }

    fn shape(&self) -> String {
        format!("{}x{}", self.nrows(), self.ncols())
    }
}

impl<T: Element> DenseMatrix<T> {
    /// Allocate `nrows` zero-initialized rows of width `ncols`.
    ///
    /// Fails with `SizeOutOfRange` unless both dimensions lie in
    /// `[1, MAX_MATRIX_SIZE]`; both are checked before any allocation.
    pub fn new(nrows: usize, ncols: usize) -> Result<Self, DynError> {
        check_dim(nrows, MAX_MATRIX_SIZE)?;
        check_dim(ncols, MAX_MATRIX_SIZE)?;
        let mut rows = Vec::with_capacity(nrows);
        for _ in 0..nrows {
            rows.push(DenseVector::new(ncols)?);
        }
        Ok(Self {
            rows: rows.into_boxed_slice(),
        })
    }

    /// Element-wise scalar multiply; shape preserved.
    pub fn scale(&self, value: T) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.scale(value.clone()))
            .collect();
        Self { rows }
    }

    /// Matrix-vector product: entry `i` is the dot product of row `i`
    /// with `x`, accumulated from `T::zero()`.
    pub fn matvec(&self, x: &DenseVector<T>) -> Result<DenseVector<T>, DynError> {
        if self.ncols() != x.len() {
            return Err(DynError::DimensionMismatch(self.shape(), x.len().to_string()));
        }
        let elems = self
            .rows
            .iter()
            .map(|row| row.dot(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DenseVector::from_boxed(elems.into_boxed_slice()))
    }

    /// Element-wise sum, delegated row by row; fails with
    /// `DimensionMismatch` unless both dimensions agree.
    pub fn try_add(&self, other: &Self) -> Result<Self, DynError> {
        self.zip_rows(other, DenseVector::try_add)
    }

    /// Element-wise difference; same shape contract as [`Self::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, DynError> {
        self.zip_rows(other, DenseVector::try_sub)
    }

    /// Matrix product over the shared inner dimension; fails with
    /// `DimensionMismatch` unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, DynError> {
        if self.ncols() != other.nrows() {
            return Err(DynError::DimensionMismatch(self.shape(), other.shape()));
        }
        let mut out = Self::new(self.nrows(), other.ncols())?;
        for (i, lhs_row) in self.rows.iter().enumerate() {
            let out_row = out.rows[i].as_mut_slice();
            for j in 0..other.ncols() {
                let mut acc = T::zero();
                for (k, a) in lhs_row.iter().enumerate() {
                    acc = acc + a.clone() * other.rows[k].as_slice()[j].clone();
                }
                out_row[j] = acc;
            }
        }
        Ok(out)
    }

    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&DenseVector<T>, &DenseVector<T>) -> Result<DenseVector<T>, DynError>,
    ) -> Result<Self, DynError> {
        if self.nrows() != other.nrows() || self.ncols() != other.ncols() {
            return Err(DynError::DimensionMismatch(self.shape(), other.shape()));
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: rows.into_boxed_slice(),
        })
    }
}

impl<T> Default for DenseMatrix<T> {
    /// The empty inert state, reachable through `take` but never through a
    /// constructor.
    fn default() -> Self {
        Self {
            rows: Vec::new().into_boxed_slice(),
        }
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = DenseVector<T>;

    fn index(&self, index: usize) -> &DenseVector<T> {
        match self.row(index) {
            Ok(row) => row,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut DenseVector<T> {
        match self.row_mut(index) {
            Ok(row) => row,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    /// One row per line, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T: FromStr> FromStr for DenseMatrix<T> {
    type Err = DynError;

    /// One row per non-empty line; ragged widths are rejected.
    fn from_str(s: &str) -> Result<Self, DynError> {
        let mut rows = Vec::new();
        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            rows.push(line.parse::<DenseVector<T>>()?);
        }
        Self::from_rows(rows)
    }
}
