pub mod convert;
pub use convert::*;

pub mod progress;
pub use progress::*;

pub mod report;
pub use report::*;

pub mod writer;
pub use writer::*;
