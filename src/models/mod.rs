pub mod function;
pub mod utterance;

pub use function::*;
pub use utterance::*;
