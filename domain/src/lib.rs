pub mod providers;
pub mod reference;
pub mod status;

pub use providers::*;
pub use reference::*;
pub use status::*;
