//=====================================================
// File: types/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Value hierarchy of the interpreter
// Objective: Re-export the array storage, element kinds, and shared value
//            handles used across the crate
//=====================================================

pub mod double;
pub mod function;
pub mod handle;
pub mod invoke;
pub mod ndarray;
pub mod string;
pub mod value;

pub use double::Double;
pub use function::Function;
pub use handle::{HandleArray, NULL_HANDLE};
pub use invoke::OptionalArgs;
pub use ndarray::{ArrayElement, ArrayError, NdArray, Subscript};
pub use string::StringArray;
pub use value::{TypeTag, Value, ValueRef};

//=====================================================
// End of file
//=====================================================
