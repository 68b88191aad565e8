// crates/blockstack-core/src/lib.rs
pub mod constraints;
pub mod elements;
pub mod geometry;

pub use constraints::*;
pub use elements::*;
pub use geometry::*;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
