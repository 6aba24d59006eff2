//=====================================================
// File: types/string.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: String matrices
// Objective: Store text elements in the shared NdArray discipline
//=====================================================

use super::ndarray::{ArrayError, NdArray, Subscript};

#[derive(Debug, Clone, PartialEq)]
pub struct StringArray {
    data: NdArray<String>,
}

impl StringArray {
    pub fn new(shape: &[usize]) -> Result<Self, ArrayError> {
        Ok(Self {
            data: NdArray::new(shape)?,
        })
    }

    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            data: NdArray::scalar(value.into()),
        }
    }

    pub fn from_array(data: NdArray<String>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &NdArray<String> {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.data.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), ArrayError> {
        self.data.set(index, value.into())
    }

    /// The text of a 1x1 string.
    pub fn as_scalar(&self) -> Option<&str> {
        if self.data.is_scalar() {
            self.get(0)
        } else {
            None
        }
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
}

//=====================================================
// End of file
//=====================================================
