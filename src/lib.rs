// ============================================================================
// runtime_generics
// ============================================================================

//! Lists whose element type is chosen from a type name at run time.
//!
//! A [`TypeRegistry`] maps fully-qualified names such as `System.Int32` or
//! `java.lang.String` to a [`DataType`]. A [`DynamicList`] built from the
//! resolved [`TypeDescriptor`] checks every append against it, so a type
//! mismatch surfaces when the value is inserted rather than at compile time.
//!
//! ```
//! use runtime_generics::{DynamicList, resolve_type};
//!
//! # fn main() -> runtime_generics::Result<()> {
//! let mut ints = DynamicList::new(resolve_type("System.Int32")?);
//! ints.append(1)?;
//! ints.append(2)?;
//! assert!(ints.append("Hello").is_err());
//! assert_eq!(ints.size(), 2);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod demo;
pub mod list;
pub mod registry;

pub use crate::core::{DataType, Element, ReflectError, Result, TypeDescriptor, Value};
pub use demo::{DemoConfig, DemoReport, Demonstration, Mode, print_len};
pub use list::{DynamicList, ErasedList};
pub use registry::{TypeRegistry, resolve_type};
