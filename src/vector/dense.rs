//! Dynamically sized dense vector with value semantics.
//!
//! `DenseVector<T>` owns a contiguous buffer whose length is fixed at
//! construction. Cloning deep-copies the buffer, `take` transfers it in
//! O(1) and leaves the source empty, and `swap` exchanges storage without
//! touching elements. All fallible paths report through [`DynError`].

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::config::limits::{MAX_VECTOR_SIZE, check_dim};
use crate::core::traits::Element;
use crate::error::DynError;

/// Owned, fixed-length numeric vector with bounds-checked access.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVector<T> {
    elems: Box<[T]>,
}

impl<T> DenseVector<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// True only for the inert post-`take` state; constructors never
    /// produce an empty vector.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<&T, DynError> {
        self.elems
            .get(index)
            .ok_or(DynError::IndexOutOfRange(index, self.elems.len()))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynError> {
        let len = self.elems.len();
        self.elems
            .get_mut(index)
            .ok_or(DynError::IndexOutOfRange(index, len))
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// View the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Iterate over elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// O(1) exchange of length and storage with `other`; no element is
    /// copied or cloned.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.elems, &mut other.elems);
    }

    /// Move the contents out, leaving `self` empty: safe to drop and to
    /// reassign, but no longer indexable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub(crate) fn from_boxed(elems: Box<[T]>) -> Self {
        Self { elems }
    }

    fn check_same_len(&self, other: &Self) -> Result<(), DynError> {
        if self.len() != other.len() {
            return Err(DynError::DimensionMismatch(
                self.len().to_string(),
                other.len().to_string(),
            ));
        }
        Ok(())
    }
}

impl<T: Clone> DenseVector<T> {
    /// Copy `elems` into a freshly owned buffer.
    ///
    /// The source is never aliased. An empty source slice fails the same
    /// length validation as a zero requested size.
    pub fn from_slice(elems: &[T]) -> Result<Self, DynError> {
        check_dim(elems.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            elems: elems.to_vec().into_boxed_slice(),
        })
    }
}

impl<T: Element> DenseVector<T> {
    /// Allocate `len` zero-initialized elements.
    ///
    /// Fails with `SizeOutOfRange` unless `1 <= len <= MAX_VECTOR_SIZE`.
    pub fn new(len: usize) -> Result<Self, DynError> {
        check_dim(len, MAX_VECTOR_SIZE)?;
        Ok(Self {
            elems: vec![T::zero(); len].into_boxed_slice(),
        })
    }

    /// Element-wise `self[i] + value`, same length as `self`.
    pub fn scalar_add(&self, value: T) -> Self {
        self.map(|elem| elem + value.clone())
    }

    /// Element-wise `self[i] - value`.
    pub fn scalar_sub(&self, value: T) -> Self {
        self.map(|elem| elem - value.clone())
    }

    /// Element-wise `self[i] * value`.
    pub fn scale(&self, value: T) -> Self {
        self.map(|elem| elem * value.clone())
    }

    /// Element-wise sum; fails with `DimensionMismatch` when lengths
    /// differ, before any work is done.
    pub fn try_add(&self, other: &Self) -> Result<Self, DynError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference; same length contract as [`Self::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, DynError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Sum of pairwise products, accumulated from `T::zero()`.
    pub fn dot(&self, other: &Self) -> Result<T, DynError> {
        self.check_same_len(other)?;
        let acc = self
            .elems
            .iter()
            .cloned()
            .zip(other.elems.iter().cloned())
            .fold(T::zero(), |acc, (a, b)| acc + a * b);
        Ok(acc)
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            elems: self.elems.iter().cloned().map(f).collect(),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, DynError> {
        self.check_same_len(other)?;
        let elems = self
            .elems
            .iter()
            .cloned()
            .zip(other.elems.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self { elems })
    }
}

impl<T> Default for DenseVector<T> {
    /// The empty inert state, reachable through `take` but never through a
    /// constructor.
    fn default() -> Self {
        Self {
            elems: Vec::new().into_boxed_slice(),
        }
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a DenseVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DenseVector<T> {
    /// Space-separated element tokens in index order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{elem}")?;
        }
        Ok(())
    }
}

impl<T: FromStr> FromStr for DenseVector<T> {
    type Err = DynError;

    /// Parse whitespace-separated element tokens; the token count becomes
    /// the length and is validated against the cap.
    fn from_str(s: &str) -> Result<Self, DynError> {
        let mut elems = Vec::new();
        for (pos, token) in s.split_whitespace().enumerate() {
            let elem = token
                .parse()
                .map_err(|_| DynError::Parse(pos, token.to_string()))?;
            elems.push(elem);
        }
        check_dim(elems.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            elems: elems.into_boxed_slice(),
        })
    }
}
