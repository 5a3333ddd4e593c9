use super::DataType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    #[error("Unknown type: '{0}'")]
    UnknownType(String),

    #[error("Type mismatch: list of {expected} cannot hold a value of type {found}")]
    TypeMismatch { expected: DataType, found: DataType },
}

pub type Result<T> = std::result::Result<T, ReflectError>;

impl ReflectError {
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReflectError::UnknownType("System.Int128".into());
        assert_eq!(err.to_string(), "Unknown type: 'System.Int128'");
        assert!(err.is_unknown_type());

        let err = ReflectError::TypeMismatch {
            expected: DataType::Integer,
            found: DataType::Text,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch: list of INTEGER cannot hold a value of type TEXT"
        );
        assert!(err.is_type_mismatch());
    }
}
