pub mod cascade;
pub mod classifier;
pub mod phrases;
pub mod review;

pub use cascade::*;
pub use classifier::*;
pub use review::*;
