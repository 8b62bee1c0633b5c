/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Failure to turn an operation input into an HTTP request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("no region was configured; set one on the config or through AWS_REGION")]
    MissingRegion,

    #[error("`{endpoint}` is not a valid endpoint")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("failed to construct the HTTP request")]
    InvalidRequest(#[from] http::Error),
}
