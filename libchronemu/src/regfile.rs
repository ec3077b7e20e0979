use libchronisa::{Register, Value};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Register index {index} out of range for a file of {len} registers")]
pub struct OutOfRangeError {
    pub index: Register,
    pub len: usize,
}

/// Fixed-length file of signed integer registers. The length is set at
/// construction and never changes; the observed programs use 4 or 6.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegFile(Vec<Value>);

impl RegFile {
    pub fn new(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn from_values(values: impl Into<Vec<Value>>) -> Self {
        Self(values.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn register(&self, index: Register) -> Result<Value, OutOfRangeError> {
        self.0
            .get(index)
            .copied()
            .ok_or(self.out_of_range(index))
    }

    pub fn register_mut(&mut self, index: Register) -> Result<&mut Value, OutOfRangeError> {
        let err = self.out_of_range(index);
        self.0.get_mut(index).ok_or(err)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    fn out_of_range(&self, index: Register) -> OutOfRangeError {
        OutOfRangeError {
            index,
            len: self.0.len(),
        }
    }
}
