pub mod config;
pub mod export;
pub mod host;
pub mod picker;
pub mod script;
pub mod session;
pub mod storage;
pub mod store;

pub use waypick_core::protocol;
pub use waypick_core::record;
