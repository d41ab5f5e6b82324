//! Mock implementations for testing
//!
//! These mocks allow isolated unit testing of services and the call wrapper without
//! actual HTTP calls.

mod mock_transport;

pub use mock_transport::{MockHttpTransport, MockRequest};
