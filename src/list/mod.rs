pub mod erased;
pub mod typed;

pub use erased::ErasedList;
pub use typed::DynamicList;
