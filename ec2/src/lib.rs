/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response shapes for the Amazon Elastic Compute Cloud API.
//!
//! Every shape is generated from `model/ec2.json` at build time. Shapes are plain data: build
//! one with its builder, read it back through its accessors, compare and hash it structurally,
//! and turn an operation input into an EC2 query request with
//! [`OperationShape::make_request`](operation::OperationShape::make_request).
//!
//! ```
//! use ec2::input::CreateVolumeRequest;
//! use ec2::model::VolumeType;
//!
//! let request = CreateVolumeRequest::builder()
//!     .availability_zone("us-east-1a")
//!     .size(100)
//!     .volume_type(VolumeType::Gp2)
//!     .build();
//! assert_eq!(
//!     request.to_string(),
//!     "{AvailabilityZone: us-east-1a,Size: 100,VolumeType: gp2}"
//! );
//! ```
//!
//! Signing, sending and parsing responses are left to the caller.

#![allow(clippy::too_many_arguments, clippy::new_without_default)]
#![allow(rustdoc::bare_urls, rustdoc::invalid_html_tags, rustdoc::broken_intra_doc_links)]

pub mod config;
mod display;
pub mod error;
pub mod operation;

/// Operation input shapes.
pub mod input {
    include!(concat!(env!("OUT_DIR"), "/input.rs"));
}

/// Operation output shapes that are not nested anywhere else.
pub mod output {
    include!(concat!(env!("OUT_DIR"), "/output.rs"));
}

/// Structures and enums nested inside operation inputs and outputs.
pub mod model {
    include!(concat!(env!("OUT_DIR"), "/model.rs"));
}

pub(crate) mod query_ser {
    include!(concat!(env!("OUT_DIR"), "/query_ser.rs"));
}

pub use aws_types::region::Region;
pub use config::Config;
pub use smithy_types::Instant;
