#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod compose;
mod error;
mod input;
mod plan;
mod pool;
pub mod random;
mod warmup;
mod workout;

pub use compose::*;
pub use error::*;
pub use input::*;
pub use plan::*;
pub use pool::*;
pub use random::VariationSeed;
pub use warmup::*;
pub use workout::*;
