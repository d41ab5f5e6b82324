//! Credentials for tests

use crate::auth::Auth;

pub fn test_auth() -> Auth {
    Auth::new("sk-test")
}
