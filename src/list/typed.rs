use std::slice;

use tracing::{debug, warn};

use crate::core::{Element, ReflectError, Result, TypeDescriptor, Value};

/// An ordered list whose element type is fixed at construction from a
/// runtime [`TypeDescriptor`]. Every append is checked against it.
#[derive(Debug, Clone)]
pub struct DynamicList {
    element_type: TypeDescriptor,
    items: Vec<Value>,
}

impl DynamicList {
    pub fn new(element_type: TypeDescriptor) -> Self {
        debug!(element_type = %element_type, "constructed typed list");
        Self {
            element_type,
            items: Vec::new(),
        }
    }

    pub fn element_type(&self) -> &TypeDescriptor {
        &self.element_type
    }

    /// Appends `value` at the end.
    ///
    /// Fails with [`ReflectError::TypeMismatch`] if the value's runtime type
    /// differs from the list's element type; the list is left unchanged.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if let Err(err) = self.element_type.check(&value) {
            warn!(element_type = %self.element_type, value = %value, "rejected append");
            return Err(err);
        }

        self.items.push(value);
        debug!(size = self.items.len(), "appended to typed list");
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Recovers the elements as a statically typed `Vec<T>`.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        let expected = self.element_type.data_type();
        if T::DATA_TYPE != expected {
            return Err(ReflectError::TypeMismatch {
                expected,
                found: T::DATA_TYPE,
            });
        }

        self.items
            .iter()
            .map(|value| {
                T::from_value(value).ok_or(ReflectError::TypeMismatch {
                    expected: T::DATA_TYPE,
                    found: value.data_type(),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a DynamicList {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
