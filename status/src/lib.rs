pub mod config;
pub mod probe;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod testing;

pub use resolver::{Resolution, StatusResolver, StatusSource};
