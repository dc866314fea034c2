//! Platform abstraction layer
//!
//! Host-independent pieces of the browser glue:
//! - Input latching (jump presses with a debounce window)

pub mod input;

pub use input::JumpLatch;
