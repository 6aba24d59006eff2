//=====================================================
// File: types/double.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Real and complex numeric matrices
// Objective: Pair a real NdArray with an optional imaginary part of the
//            same shape
//=====================================================

use super::ndarray::{ArrayError, NdArray, Subscript};

#[derive(Debug, Clone, PartialEq)]
pub struct Double {
    real: NdArray<f64>,
    imag: Option<NdArray<f64>>,
}

impl Double {
    pub fn new(shape: &[usize], complex: bool) -> Result<Self, ArrayError> {
        let real = NdArray::new(shape)?;
        let imag = if complex {
            Some(NdArray::new(shape)?)
        } else {
            None
        };
        Ok(Self { real, imag })
    }

    pub fn from_real(real: NdArray<f64>) -> Self {
        Self { real, imag: None }
    }

    pub fn from_parts(real: NdArray<f64>, imag: NdArray<f64>) -> Result<Self, ArrayError> {
        if real.shape() != imag.shape() {
            return Err(ArrayError::ShapeMismatch {
                shape: real.shape().to_vec(),
                expected: real.size(),
                actual: imag.size(),
            });
        }
        Ok(Self {
            real,
            imag: Some(imag),
        })
    }

    pub fn scalar(value: f64) -> Self {
        Self::from_real(NdArray::scalar(value))
    }

    pub fn complex_scalar(re: f64, im: f64) -> Self {
        Self {
            real: NdArray::scalar(re),
            imag: Some(NdArray::scalar(im)),
        }
    }

    /// The `[]` value.
    pub fn empty() -> Self {
        Self::from_real(NdArray::empty())
    }

    pub fn is_complex(&self) -> bool {
        self.imag.is_some()
    }

    pub fn real(&self) -> &NdArray<f64> {
        &self.real
    }

    pub fn imag(&self) -> Option<&NdArray<f64>> {
        self.imag.as_ref()
    }

    pub fn get_real(&self, index: usize) -> Option<f64> {
        self.real.get(index).copied()
    }

    pub fn set_real(&mut self, index: usize, value: f64) -> Result<(), ArrayError> {
        self.real.set(index, value)
    }

    pub fn shape(&self) -> &[usize] {
        self.real.shape()
    }

    pub fn size(&self) -> usize {
        self.real.size()
    }

    pub fn is_scalar(&self) -> bool {
        self.real.is_scalar()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    pub fn clear(&mut self) {
        self.real.clear();
        self.imag = None;
    }

    pub fn transpose(&self) -> Result<Self, ArrayError> {
        Ok(Self {
            real: self.real.transpose()?,
            imag: self.imag.as_ref().map(NdArray::transpose).transpose()?,
        })
    }

    pub fn extract(&self, subscripts: &[Subscript]) -> Result<Self, ArrayError> {
        Ok(Self {
            real: self.real.extract(subscripts)?,
            imag: self
                .imag
                .as_ref()
                .map(|imag| imag.extract(subscripts))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_parts_follow_transpose() {
        let real = NdArray::from_vec(&[1, 2], vec![1.0, 2.0]).expect("real");
        let imag = NdArray::from_vec(&[1, 2], vec![-1.0, -2.0]).expect("imag");
        let value = Double::from_parts(real, imag).expect("same shape");
        let transposed = value.transpose().expect("rank 2");
        assert_eq!(transposed.shape(), &[2, 1]);
        assert_eq!(
            transposed.imag().map(|imag| imag.as_slice().to_vec()),
            Some(vec![-1.0, -2.0])
        );
    }

    #[test]
    fn empty_has_no_elements() {
        let empty = Double::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_complex());
        assert_eq!(empty.shape(), &[0, 0]);
    }
}

//=====================================================
// End of file
//=====================================================
