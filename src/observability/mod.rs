//! Request lifecycle hooks.
//!
//! The transport reports every outgoing request, its outcome, and its duration through a
//! [`RequestHooks`] implementation. [`TracingHooks`] is the default and emits `tracing`
//! events; applications can plug in their own implementation for metrics.

mod hooks;

pub use hooks::{NoOpHooks, RequestContext, RequestHooks, ResponseContext, TracingHooks};
