//! API 处理器

pub mod batch;
pub mod detect;
pub mod index;
pub mod languages;
pub mod translate;

pub use batch::*;
pub use detect::*;
pub use index::*;
pub use languages::*;
pub use translate::*;
