pub mod context;
pub use context::*;

pub mod rewrite;
pub use rewrite::*;

pub mod transcript;
pub use transcript::*;
