pub mod classes;
pub mod visibility;

pub use classes::*;
pub use visibility::*;
