//! Listening socket and session admission.

pub mod admission;
pub mod listener;

pub use admission::{Admission, SessionPermit};
pub use listener::{serve, Server};
