//! Media type data models.
//!
//! Category is a string enum. MediaType is the tagged value callers hold:
//! a `'static` registry entry or a shared custom type.

pub mod category;
pub mod custom;
pub mod media_type;

pub use category::Category;
pub use custom::CustomType;
pub use media_type::MediaType;
