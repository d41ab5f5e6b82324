//! Single-request lifecycle on top of the service traits.

mod async_call;
mod state;


pub use async_call::{AsyncCall, CallGuard, CallHandle};
pub use state::CallState;
