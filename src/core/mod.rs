pub mod choices;
pub mod demo;
pub mod geometry;
pub mod palette;
pub mod spin;

pub use choices::*;
pub use demo::*;
pub use spin::*;
