//=====================================================
// File: types/value.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Root value type of the interpreter
// Objective: Close the set of element kinds in one enum, expose checked
//            downcasts, and share values through reference-counted handles
//=====================================================

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::double::Double;
use super::function::Function;
use super::handle::HandleArray;
use super::ndarray::Subscript;
use super::string::StringArray;
use crate::interpreter::{CODE_GENERIC, ErrorKind, ScriptError};

//=====================================================
// Section 1.0 - Type Tags
//=====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Double,
    String,
    Handle,
    Function,
}

impl TypeTag {
    /// Code used when mangling overload names.
    pub fn short_code(self) -> &'static str {
        match self {
            TypeTag::Double => "s",
            TypeTag::String => "c",
            TypeTag::Handle => "h",
            TypeTag::Function => "fptr",
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            TypeTag::Double => "constant",
            TypeTag::String => "string",
            TypeTag::Handle => "handle",
            TypeTag::Function => "fptr",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

//=====================================================
// Section 2.0 - Value
//=====================================================

const SCALAR_SHAPE: [usize; 2] = [1, 1];

#[derive(Debug, Clone)]
pub enum Value {
    Double(Double),
    String(StringArray),
    Handle(HandleArray),
    Function(Function),
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Double(_) => TypeTag::Double,
            Value::String(_) => TypeTag::String,
            Value::Handle(_) => TypeTag::Handle,
            Value::Function(_) => TypeTag::Function,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_tag().type_name()
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Value::Double(value) => value.shape(),
            Value::String(value) => value.shape(),
            Value::Handle(value) => value.shape(),
            Value::Function(_) => &SCALAR_SHAPE,
        }
    }

    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    pub fn size(&self) -> usize {
        match self {
            Value::Double(value) => value.size(),
            Value::String(value) => value.size(),
            Value::Handle(value) => value.size(),
            Value::Function(_) => 1,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn as_double(&self) -> Option<&Double> {
        match self {
            Value::Double(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringArray> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&HandleArray> {
        match self {
            Value::Handle(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_handle_mut(&mut self) -> Option<&mut HandleArray> {
        match self {
            Value::Handle(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(value) => Some(value),
            _ => None,
        }
    }

    /// Structural comparison dispatched on the receiver's kind.
    pub fn equals(&self, other: &Value) -> bool {
        match self {
            Value::Double(value) => other.as_double() == Some(value),
            Value::String(value) => other.as_string() == Some(value),
            Value::Handle(value) => value.equals(other),
            Value::Function(value) => other
                .as_function()
                .is_some_and(|function| function.name() == value.name()),
        }
    }

    /// Drops the element storage. Functions hold none.
    pub fn clear(&mut self) {
        match self {
            Value::Double(value) => value.clear(),
            Value::String(value) => value.clear(),
            Value::Handle(value) => value.clear(),
            Value::Function(_) => {}
        }
    }

    pub fn transpose(&self) -> Result<Value, ScriptError> {
        Ok(match self {
            Value::Double(value) => Value::Double(value.transpose()?),
            Value::String(value) => Value::String(value.transpose()?),
            Value::Handle(value) => Value::Handle(value.transpose()?),
            Value::Function(_) => return Err(unsupported("transpose", self.type_tag())),
        })
    }

    pub fn extract(&self, subscripts: &[Subscript]) -> Result<Value, ScriptError> {
        Ok(match self {
            Value::Double(value) => Value::Double(value.extract(subscripts)?),
            Value::String(value) => Value::String(value.extract(subscripts)?),
            Value::Handle(value) => Value::Handle(value.extract(subscripts)?),
            Value::Function(_) => return Err(unsupported("extraction", self.type_tag())),
        })
    }
}

fn unsupported(operation: &str, tag: TypeTag) -> ScriptError {
    ScriptError::new(
        ErrorKind::Unsupported,
        CODE_GENERIC,
        format!("{operation} is not supported for type '{tag}'"),
    )
}

impl From<Double> for Value {
    fn from(value: Double) -> Self {
        Value::Double(value)
    }
}

impl From<StringArray> for Value {
    fn from(value: StringArray) -> Self {
        Value::String(value)
    }
}

impl From<HandleArray> for Value {
    fn from(value: HandleArray) -> Self {
        Value::Handle(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Double(value) if value.is_empty() => write!(f, "[]"),
            Value::Double(value) => {
                let real = value.real().as_slice();
                let imag = value.imag().map(|imag| imag.as_slice());
                let cells: Vec<String> = real
                    .iter()
                    .enumerate()
                    .map(|(i, re)| match imag {
                        Some(imag) => format!("{re}{:+}i", imag[i]),
                        None => format!("{re}"),
                    })
                    .collect();
                write_matrix(f, value.shape(), &cells)
            }
            Value::String(value) => {
                let cells: Vec<String> = value
                    .data()
                    .as_slice()
                    .iter()
                    .map(|text| format!("\"{text}\""))
                    .collect();
                write_matrix(f, value.shape(), &cells)
            }
            Value::Handle(value) => {
                let shape = value
                    .shape()
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join("x");
                write!(f, "{shape} handle")
            }
            Value::Function(value) => write!(f, "<native function {}>", value.name()),
        }
    }
}

fn write_matrix(f: &mut fmt::Formatter<'_>, shape: &[usize], cells: &[String]) -> fmt::Result {
    if shape.len() > 2 {
        return write!(f, "[{}]", cells.join(" "));
    }
    let rows = shape[0];
    let cols = shape[1];
    for row in 0..rows {
        if row > 0 {
            writeln!(f)?;
        }
        let line: Vec<&str> = (0..cols).map(|col| cells[row + col * rows].as_str()).collect();
        write!(f, "{}", line.join("  "))?;
    }
    Ok(())
}

//=====================================================
// Section 3.0 - Shared Handles
//=====================================================

/// Shared, reference-counted handle to a [`Value`].
///
/// Cloning a `ValueRef` retains the same value; [`ValueRef::deep_clone`]
/// produces a new value with its own identity and storage.
#[derive(Clone)]
pub struct ValueRef(Rc<RefCell<Value>>);

impl ValueRef {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    pub fn borrow(&self) -> Ref<'_, Value> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Value> {
        self.0.borrow_mut()
    }

    /// Number of live handles sharing this value.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn ptr_eq(&self, other: &ValueRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn deep_clone(&self) -> ValueRef {
        ValueRef::new(self.borrow().clone())
    }

    pub fn type_tag(&self) -> TypeTag {
        self.borrow().type_tag()
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("ValueRef").field(&*value).finish(),
            Err(_) => f.write_str("ValueRef(<borrowed>)"),
        }
    }
}

impl From<Value> for ValueRef {
    fn from(value: Value) -> Self {
        ValueRef::new(value)
    }
}


//=====================================================
// End of file
//=====================================================
