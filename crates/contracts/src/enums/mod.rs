pub mod catalog_options;
pub mod rotation;

pub use rotation::Rotation;
