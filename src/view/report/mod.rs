pub mod linescore;
pub mod template;
pub mod upcoming;
pub mod yesterday;

pub use linescore::*;
pub use template::*;
pub use upcoming::*;
pub use yesterday::*;
