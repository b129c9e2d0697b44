mod file;
mod health;
mod info;
mod prediction;

pub use file::*;
pub use health::*;
pub use info::*;
pub use prediction::*;
