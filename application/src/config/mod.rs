//! Application configuration types

mod generation;

pub use generation::GenerationParams;
