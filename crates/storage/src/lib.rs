#![warn(clippy::pedantic)]

pub mod file;
pub mod memory;
pub mod model;

pub use file::FileStorage;
pub use memory::MemoryStorage;
