pub mod record;
pub use record::*;

pub mod role;
pub use role::*;

pub mod roster;
pub use roster::*;

pub mod seat;
pub use seat::*;
