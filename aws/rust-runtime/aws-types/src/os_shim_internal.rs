/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstraction for code that reads environment variables, so that it can be tested
//! without touching the real process environment.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process, and, as such, are difficult to test with a multi-
/// threaded test runner like Rust's. This enables loading environment variables either from the
/// actual process environment ([`std::env::var`](std::env::var)) or from a hash map.
///
/// Cloning is cheap: faked environments share their map through an `Arc`.
#[derive(Clone, Debug)]
pub struct Env(Arc<Inner>);

#[derive(Debug)]
enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Returns the first of `keys` that is set to a non-blank value.
    ///
    /// A variable that is present but empty counts as unset.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<(String, String)> {
        keys.iter().find_map(|key| match self.get(key) {
            Ok(value) if !value.trim().is_empty() => Some((key.to_string(), value)),
            Ok(_) => {
                tracing::debug!(key = %key, "ignoring empty environment variable");
                None
            }
            Err(_) => None,
        })
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[
    ///     ("HOME", "/home/myname"),
    ///     ("AWS_REGION", "us-west-2")
    /// ]);
    /// assert_eq!(mock_env.get("HOME").unwrap(), "/home/myname");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that uses the real process environment
    ///
    /// Calls will be delegated to [`std::env::var`](std::env::var).
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(Inner::Fake(hash_map)))
    }
}
