pub mod hand;
pub use hand::*;

pub mod line;
pub use line::*;

pub mod split;
pub use split::*;
