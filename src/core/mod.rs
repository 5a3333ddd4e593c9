pub mod descriptor;
pub mod error;
pub mod value;

pub use descriptor::{Element, TypeDescriptor};
pub use error::{ReflectError, Result};
pub use value::{DataType, Value};
