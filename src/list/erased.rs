use std::slice;

use crate::core::{Result, TypeDescriptor, Value};

use super::DynamicList;

/// A list with no declared element type. Anything goes in, which is what a
/// generic list looks like once its type argument has been erased.
#[derive(Debug, Clone, Default)]
pub struct ErasedList {
    items: Vec<Value>,
}

impl ErasedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Re-applies the element type check, failing on the first element that
    /// does not match `element_type`.
    pub fn into_typed(self, element_type: TypeDescriptor) -> Result<DynamicList> {
        let mut list = DynamicList::new(element_type);
        for value in self.items {
            list.append(value)?;
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataType, ReflectError};

    #[test]
    fn test_erased_list_accepts_anything() {
        let mut list = ErasedList::new();
        list.push(1);
        list.push(2);
        list.push(3);
        list.push("Hello");
        assert_eq!(list.size(), 4);
        assert_eq!(list.iter().last(), Some(&Value::from("Hello")));
    }

    #[test]
    fn test_into_typed_rejects_mismatch() {
        let mut list = ErasedList::new();
        list.push(1);
        list.push("Hello");

        let err = list
            .into_typed(TypeDescriptor::new("java.lang.Integer", DataType::Integer))
            .unwrap_err();
        assert_eq!(
            err,
            ReflectError::TypeMismatch {
                expected: DataType::Integer,
                found: DataType::Text,
            }
        );
    }

    #[test]
    fn test_into_typed_keeps_order() {
        let mut list = ErasedList::new();
        list.push("Hello");
        list.push("world");

        let typed = list
            .into_typed(TypeDescriptor::of::<String>())
            .unwrap();
        assert_eq!(typed.to_vec::<String>().unwrap(), vec!["Hello", "world"]);
    }
}
