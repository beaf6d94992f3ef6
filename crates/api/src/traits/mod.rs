//! Trait definitions for samplers and their byte producers

pub mod producer;
pub mod sampler;

pub use producer::XofProducer;
pub use sampler::CoefficientSampler;
