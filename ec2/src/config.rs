/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::BuildError;
use crate::operation::ENDPOINT_PREFIX;
use aws_types::os_shim_internal::Env;
use aws_types::region::{EnvironmentProvider, ProvideRegion, Region};

const ENDPOINT_ENV_VAR: &str = "AWS_ENDPOINT_URL_EC2";

/// Where requests are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint: Option<http::Uri>,
}

impl Config {
    /// Loads the region and endpoint override from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(Env::real())
    }

    /// Like [`from_env`](Config::from_env), but reads from `env`.
    pub fn from_env_with(env: Env) -> Self {
        let region = EnvironmentProvider::new_with_env(env.clone()).region();
        let mut builder = ConfigBuilder::new().set_region(region);
        if let Some((_, endpoint)) = env.first_non_empty(&[ENDPOINT_ENV_VAR]) {
            match endpoint.trim().parse::<http::Uri>() {
                Ok(uri) => builder = builder.set_endpoint(Some(uri)),
                Err(err) => tracing::warn!(
                    endpoint = %endpoint,
                    error = %err,
                    "ignoring invalid {}", ENDPOINT_ENV_VAR
                ),
            }
        }
        builder.build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint(&self) -> Option<&http::Uri> {
        self.endpoint.as_ref()
    }

    /// The endpoint override if one is set, otherwise the regional EC2 endpoint.
    pub fn resolve_endpoint(&self) -> Result<http::Uri, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().ok_or(BuildError::MissingRegion)?;
        let suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let endpoint = format!("https://{}.{}.{}/", ENDPOINT_PREFIX, region, suffix);
        endpoint
            .parse()
            .map_err(|source| BuildError::InvalidEndpoint { endpoint, source })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    region: Option<Region>,
    endpoint: Option<http::Uri>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: impl ProvideRegion) -> Self {
        self.region = region.region();
        self
    }

    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Overrides the endpoint, e.g. to point at a local test server.
    pub fn endpoint(mut self, endpoint: http::Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn set_endpoint(mut self, endpoint: Option<http::Uri>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
        }
    }
}
