pub mod cache;
pub mod engine;
pub mod patterns;
pub mod segment;

pub use cache::*;
pub use engine::*;
pub use patterns::*;
pub use segment::*;
