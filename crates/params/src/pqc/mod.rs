//! Constants for post-quantum parameter sets

pub mod kyber;
