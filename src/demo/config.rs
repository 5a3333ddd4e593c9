use crate::core::Value;

/// Inputs for a demonstration run.
///
/// `DemoConfig::default()` reproduces the classic walkthrough: three
/// integers into a `System.Int32` list, two strings into a `System.String`
/// list, and `"Hello"` as the value that does not belong.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Type name for the first list
    pub int_type_name: String,

    /// Type name for the second list
    pub text_type_name: String,

    /// Values appended to the first list
    pub int_values: Vec<Value>,

    /// Values appended to the second list
    pub text_values: Vec<Value>,

    /// Value pushed into the first list in fail mode
    pub mismatched_value: Value,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            int_type_name: "System.Int32".to_string(),
            text_type_name: "System.String".to_string(),
            int_values: vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)],
            text_values: vec![Value::from("Hello"), Value::from("world")],
            mismatched_value: Value::from("Hello"),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type name for the first list
    pub fn int_type_name(mut self, name: &str) -> Self {
        self.int_type_name = name.to_string();
        self
    }

    /// Set the type name for the second list
    pub fn text_type_name(mut self, name: &str) -> Self {
        self.text_type_name = name.to_string();
        self
    }

    pub fn int_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.int_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn text_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.text_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn mismatched_value(mut self, value: impl Into<Value>) -> Self {
        self.mismatched_value = value.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.int_type_name, "System.Int32");
        assert_eq!(config.text_type_name, "System.String");
        assert_eq!(config.int_values.len(), 3);
        assert_eq!(config.text_values.len(), 2);
        assert_eq!(config.mismatched_value, Value::from("Hello"));
    }

    #[test]
    fn test_builder() {
        let config = DemoConfig::new()
            .int_type_name("java.lang.Integer")
            .text_type_name("java.lang.String")
            .int_values([10, 20])
            .text_values(["a"])
            .mismatched_value(false);

        assert_eq!(config.int_type_name, "java.lang.Integer");
        assert_eq!(config.int_values, vec![Value::Integer(10), Value::Integer(20)]);
        assert_eq!(config.text_values, vec![Value::from("a")]);
        assert_eq!(config.mismatched_value, Value::Boolean(false));
    }
}
