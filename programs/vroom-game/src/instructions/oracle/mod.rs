pub mod fulfill_randomness;

pub use fulfill_randomness::*;
