pub mod rows;

#[doc(hidden)]
pub use paste;
