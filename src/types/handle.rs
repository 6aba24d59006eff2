//=====================================================
// File: types/handle.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Arrays of opaque resource handles
// Objective: Carry 64-bit identifiers of external resources (figures,
//            axes, ...) without ever interpreting them
//=====================================================

use super::ndarray::{ArrayError, NdArray, Subscript};
use super::value::Value;

/// Reserved identifier meaning "no resource".
pub const NULL_HANDLE: i64 = 0;

#[derive(Debug, Clone)]
pub struct HandleArray {
    data: NdArray<i64>,
}

impl HandleArray {
    /// Allocates `shape` worth of null handles.
    pub fn new(shape: &[usize]) -> Result<Self, ArrayError> {
        Ok(Self {
            data: NdArray::new(shape)?,
        })
    }

    pub fn scalar(handle: i64) -> Self {
        Self {
            data: NdArray::scalar(handle),
        }
    }

    pub fn from_vec(shape: &[usize], handles: Vec<i64>) -> Result<Self, ArrayError> {
        Ok(Self {
            data: NdArray::from_vec(shape, handles)?,
        })
    }

    pub fn data(&self) -> &NdArray<i64> {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    pub fn set(&mut self, index: usize, handle: i64) -> Result<(), ArrayError> {
        self.data.set(index, handle)
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.get(index) == Some(NULL_HANDLE)
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn size(&self) -> usize {
        self.data.size()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn transpose(&self) -> Result<Self, ArrayError> {
        Ok(Self {
            data: self.data.transpose()?,
        })
    }

    pub fn extract(&self, subscripts: &[Subscript]) -> Result<Self, ArrayError> {
        Ok(Self {
            data: self.data.extract(subscripts)?,
        })
    }

    /// Handle comparison as the interpreter has always performed it.
    ///
    /// Known divergence: returns `true` only when the shapes match and NO
    /// pair of corresponding handles is equal, so two identical non-empty
    /// arrays compare unequal. Callers relying on ordinary equality must not
    /// use this until the intended semantics are settled.
    pub fn equals(&self, other: &Value) -> bool {
        let Some(other) = other.as_handle() else {
            return false;
        };
        if other.shape() != self.shape() {
            return false;
        }
        !self
            .data
            .as_slice()
            .iter()
            .zip(other.data.as_slice())
            .any(|(a, b)| a == b)
    }
}


//=====================================================
// End of file
//=====================================================
