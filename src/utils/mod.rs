mod progress;
pub mod logging;

pub use progress::MultiProgressNew;
