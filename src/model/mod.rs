pub mod linescore;
pub mod report;
pub mod schedule;
pub mod team;

pub use linescore::*;
pub use report::*;
pub use schedule::*;
pub use team::*;
