/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One zero-sized type per EC2 operation, tying its input and output shapes together.
//!
//! ```
//! use ec2::input::DescribeInstancesRequest;
//! use ec2::operation::{DescribeInstances, OperationShape};
//! use ec2::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let input = DescribeInstancesRequest::builder().instance_ids("i-1234567890abcdef0").build();
//! let request = DescribeInstances::make_request(&input, &config).unwrap();
//! assert_eq!(request.uri(), "https://ec2.us-east-1.amazonaws.com/");
//! ```

use crate::config::Config;
use crate::error::BuildError;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

pub trait OperationShape {
    /// Operation name, sent as the `Action` parameter.
    const NAME: &'static str;
    type Input;
    type Output;

    /// Writes `input` as an EC2 query body, starting with `Action` and `Version`.
    fn serialize_input(input: &Self::Input) -> String;

    /// Builds an unsigned `POST` request for `input` against the endpoint in `config`.
    fn make_request(
        input: &Self::Input,
        config: &Config,
    ) -> Result<http::Request<String>, BuildError> {
        let endpoint = config.resolve_endpoint()?;
        let body = Self::serialize_input(input);
        tracing::debug!(
            operation = Self::NAME,
            endpoint = %endpoint,
            content_length = body.len(),
            "built request"
        );
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, body.len())
            .body(body)?;
        Ok(request)
    }
}

include!(concat!(env!("OUT_DIR"), "/operation.rs"));
