use std::fmt;

use super::{DataType, ReflectError, Result, Value};

/// Runtime handle for an element type, obtained by name lookup or from a
/// static Rust type via [`TypeDescriptor::of`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    data_type: DataType,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Descriptor for a statically known element type.
    pub fn of<T: Element>() -> Self {
        Self::new(std::any::type_name::<T>(), T::DATA_TYPE)
    }

    /// The name this descriptor was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn accepts(&self, value: &Value) -> bool {
        self.data_type.is_compatible(value)
    }

    pub fn check(&self, value: &Value) -> Result<()> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(ReflectError::TypeMismatch {
                expected: self.data_type,
                found: value.data_type(),
            })
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.data_type)
    }
}

/// A Rust type that can be stored in, and recovered from, a runtime-typed list.
pub trait Element: Into<Value> + Sized {
    const DATA_TYPE: DataType;

    fn from_value(value: &Value) -> Option<Self>;
}

impl Element for i64 {
    const DATA_TYPE: DataType = DataType::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl Element for i32 {
    const DATA_TYPE: DataType = DataType::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|i| i32::try_from(i).ok())
    }
}

impl Element for f64 {
    const DATA_TYPE: DataType = DataType::Float;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Element for String {
    const DATA_TYPE: DataType = DataType::Text;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Element for bool {
    const DATA_TYPE: DataType = DataType::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_of_static_type() {
        let desc = TypeDescriptor::of::<String>();
        assert_eq!(desc.data_type(), DataType::Text);
        assert_eq!(desc.name(), std::any::type_name::<String>());

        assert_eq!(TypeDescriptor::of::<i32>().data_type(), DataType::Integer);
        assert_eq!(TypeDescriptor::of::<bool>().data_type(), DataType::Boolean);
    }

    #[test]
    fn test_check() {
        let desc = TypeDescriptor::new("System.Int32", DataType::Integer);
        assert!(desc.check(&Value::Integer(1)).is_ok());

        let err = desc.check(&Value::from("Hello")).unwrap_err();
        assert_eq!(
            err,
            ReflectError::TypeMismatch {
                expected: DataType::Integer,
                found: DataType::Text,
            }
        );
    }

    #[test]
    fn test_i32_from_out_of_range_integer() {
        assert_eq!(i32::from_value(&Value::Integer(5)), Some(5));
        assert_eq!(i32::from_value(&Value::Integer(i64::MAX)), None);
    }
}
