pub mod entry;
pub mod format;

pub use entry::*;
pub use format::*;
