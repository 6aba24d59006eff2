//=====================================================
// File: types/ndarray.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Generic N-dimensional storage for array-valued types
// Objective: Own a column-major buffer whose length always equals the
//            product of the shape, with checked allocation and indexing
//=====================================================

use std::fmt;

use thiserror::Error;

//=====================================================
// Section 1.0 - Errors & Element Contract
//=====================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("cannot allocate array of shape {shape:?}: element count overflows")]
    SizeOverflow { shape: Vec<usize> },
    #[error("cannot allocate array of {elements} elements")]
    AllocationFailed { elements: usize },
    #[error("shape {shape:?} holds {expected} elements, {actual} supplied")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid index: {index} is outside 1..={size}.")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("Invalid index.")]
    InvalidIndex,
    #[error("transpose is not defined for arrays of rank {rank}")]
    UnsupportedRank { rank: usize },
}

/// Element types storable in an [`NdArray`].
pub trait ArrayElement: Clone + fmt::Debug {
    /// Value used to fill freshly allocated storage.
    fn null_value() -> Self;
}

impl ArrayElement for f64 {
    fn null_value() -> Self {
        0.0
    }
}

impl ArrayElement for i64 {
    fn null_value() -> Self {
        0
    }
}

impl ArrayElement for String {
    fn null_value() -> Self {
        String::new()
    }
}

/// One subscript of an extraction, with 0-based positions already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscript {
    /// Every position along the addressed dimension.
    All,
    /// Explicit positions plus the shape of the index array they came from.
    Positions {
        positions: Vec<usize>,
        shape: Vec<usize>,
    },
}

impl Subscript {
    fn count(&self, extent: usize) -> usize {
        match self {
            Subscript::All => extent,
            Subscript::Positions { positions, .. } => positions.len(),
        }
    }

    fn position(&self, k: usize) -> usize {
        match self {
            Subscript::All => k,
            Subscript::Positions { positions, .. } => positions[k],
        }
    }
}

//=====================================================
// Section 2.0 - NdArray
//=====================================================

/// Homogeneous N-dimensional array stored column-major.
///
/// Shapes always carry at least two dimensions. Trailing singleton
/// dimensions above rank 2 are dropped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T: ArrayElement> NdArray<T> {
    /// Allocates an array of `shape` filled with the element's null value.
    pub fn new(shape: &[usize]) -> Result<Self, ArrayError> {
        let shape = normalize_shape(shape);
        let elements = element_count(&shape)?;
        let mut data = reserve(elements)?;
        data.resize(elements, T::null_value());
        Ok(Self { shape, data })
    }

    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self, ArrayError> {
        let shape = normalize_shape(shape);
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(ArrayError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn scalar(value: T) -> Self {
        Self {
            shape: vec![1, 1],
            data: vec![value],
        }
    }

    pub fn empty() -> Self {
        Self {
            shape: vec![0, 0],
            data: Vec::new(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A rank-2 array with one row or one column.
    pub fn is_vector(&self) -> bool {
        self.rank() == 2 && (self.rows() == 1 || self.cols() == 1)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let size = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange {
                index: index + 1,
                size,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Releases the buffer and leaves an empty, reusable array.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.shape = vec![0, 0];
    }

    /// Swaps rows and columns. Arrays above rank 2 have no transpose.
    pub fn transpose(&self) -> Result<Self, ArrayError> {
        if self.rank() > 2 {
            return Err(ArrayError::UnsupportedRank { rank: self.rank() });
        }
        let (rows, cols) = (self.rows(), self.cols());
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..rows {
            for j in 0..cols {
                data.push(self.data[i + j * rows].clone());
            }
        }
        Ok(Self {
            shape: vec![cols, rows],
            data,
        })
    }

    /// Copies out the elements addressed by `subscripts`.
    ///
    /// A single subscript indexes linearly. Several subscripts address
    /// dimensions; the last one absorbs any trailing dimensions.
    pub fn extract(&self, subscripts: &[Subscript]) -> Result<Self, ArrayError> {
        match subscripts {
            [] => Ok(self.clone()),
            [single] => self.extract_linear(single),
            _ => self.extract_dims(subscripts),
        }
    }

    fn extract_linear(&self, subscript: &Subscript) -> Result<Self, ArrayError> {
        let size = self.data.len();
        let count = subscript.count(size);
        let mut data = reserve(count)?;
        for k in 0..count {
            let position = subscript.position(k);
            let value = self.data.get(position).ok_or(ArrayError::IndexOutOfRange {
                index: position + 1,
                size,
            })?;
            data.push(value.clone());
        }
        let shape = match subscript {
            Subscript::All => vec![count, 1],
            Subscript::Positions { shape, .. } => {
                let index_is_vector = shape.len() == 2 && (shape[0] == 1 || shape[1] == 1);
                if self.is_vector() && index_is_vector {
                    if self.rows() == 1 {
                        vec![1, count]
                    } else {
                        vec![count, 1]
                    }
                } else {
                    shape.clone()
                }
            }
        };
        Self::from_vec(&shape, data)
    }

    fn extract_dims(&self, subscripts: &[Subscript]) -> Result<Self, ArrayError> {
        let dims = subscripts.len();
        let mut extents: Vec<usize> = self.shape.clone();
        if extents.len() > dims {
            let folded: usize = extents[dims - 1..].iter().product();
            extents.truncate(dims - 1);
            extents.push(folded);
        }
        extents.resize(dims, 1);

        let counts: Vec<usize> = subscripts
            .iter()
            .zip(&extents)
            .map(|(subscript, extent)| subscript.count(*extent))
            .collect();
        for (subscript, extent) in subscripts.iter().zip(&extents) {
            if let Subscript::Positions { positions, .. } = subscript {
                if let Some(bad) = positions.iter().find(|p| **p >= *extent) {
                    return Err(ArrayError::IndexOutOfRange {
                        index: bad + 1,
                        size: *extent,
                    });
                }
            }
        }

        let total = element_count(&counts)?;
        let mut data = reserve(total)?;
        let mut cursor = vec![0usize; dims];
        for _ in 0..total {
            let mut offset = 0;
            let mut stride = 1;
            for d in 0..dims {
                offset += subscripts[d].position(cursor[d]) * stride;
                stride *= extents[d];
            }
            data.push(self.data[offset].clone());
            for d in 0..dims {
                cursor[d] += 1;
                if cursor[d] < counts[d] {
                    break;
                }
                cursor[d] = 0;
            }
        }
        Self::from_vec(&counts, data)
    }
}

//=====================================================
// Section 3.0 - Shape Helpers
//=====================================================

pub fn normalize_shape(shape: &[usize]) -> Vec<usize> {
    let mut shape = shape.to_vec();
    while shape.len() > 2 && shape.last() == Some(&1) {
        shape.pop();
    }
    if shape.len() < 2 {
        shape.resize(2, 1);
    }
    shape
}

/// Empty buffer with room for `elements`, or AllocationFailed.
fn reserve<T>(elements: usize) -> Result<Vec<T>, ArrayError> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| ArrayError::AllocationFailed { elements })?;
    Ok(data)
}

pub fn element_count(shape: &[usize]) -> Result<usize, ArrayError> {
    shape
        .iter()
        .try_fold(1usize, |acc, dim| acc.checked_mul(*dim))
        .ok_or_else(|| ArrayError::SizeOverflow {
            shape: shape.to_vec(),
        })
}


//=====================================================
// End of file
//=====================================================
