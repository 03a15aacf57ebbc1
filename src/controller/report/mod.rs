pub mod analyze;
pub mod generator;
pub mod headline;

pub use analyze::*;
pub use generator::*;
pub use headline::*;
