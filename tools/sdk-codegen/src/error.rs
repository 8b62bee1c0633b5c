/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::path::PathBuf;

/// Failure while reading a model or generating code from it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodegenError {
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid service model")]
    InvalidModel(#[from] serde_json::Error),

    #[error("invalid codegen settings")]
    InvalidSettings(#[from] toml::de::Error),

    #[error("protocol `{0}` is not supported; only `ec2` models can be generated")]
    UnsupportedProtocol(String),

    #[error("shape `{name}` referenced by `{referenced_by}` is not defined in the model")]
    UnknownShape { name: String, referenced_by: String },

    #[error("operation `{0}` is not defined in the model")]
    UnknownOperation(String),

    #[error("shape `{shape}` has type `{kind}`, which is not supported here")]
    UnsupportedShape { shape: String, kind: &'static str },

    #[error("structure `{0}` refers back to itself")]
    RecursiveShape(String),

    #[error("enum `{shape}` maps both `{first}` and `{second}` to variant `{variant}`")]
    DuplicateEnumVariant {
        shape: String,
        variant: String,
        first: String,
        second: String,
    },

    #[error("shape `{0}` collides with a Rust prelude type")]
    ReservedShapeName(String),

    #[error("`{shape}` members `{first}` and `{second}` both map to the Rust name `{rust_name}`")]
    MemberNameCollision {
        shape: String,
        rust_name: String,
        first: String,
        second: String,
    },
}
