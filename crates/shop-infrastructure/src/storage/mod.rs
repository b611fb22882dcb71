//! File storage adapters

pub mod local;

pub use local::LocalFileStore;
