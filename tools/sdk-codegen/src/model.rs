/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Serde view of a botocore service description.
//!
//! Only the parts that drive code generation are modeled. Unknown keys (`min`, `max`,
//! `pattern`, `errors`, ...) are ignored. Member order is preserved so that generated
//! fields follow the order in which the model declares them.

use crate::error::CodegenError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    #[serde(default)]
    pub version: Option<String>,
    pub metadata: Metadata,
    #[serde(default)]
    pub operations: IndexMap<String, Operation>,
    #[serde(default)]
    pub shapes: IndexMap<String, Shape>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl ServiceModel {
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let json = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Looks up `name`, reporting `referenced_by` if the shape doesn't exist.
    pub fn shape(&self, name: &str, referenced_by: &str) -> Result<&Shape, CodegenError> {
        self.shapes
            .get(name)
            .ok_or_else(|| CodegenError::UnknownShape {
                name: name.to_owned(),
                referenced_by: referenced_by.to_owned(),
            })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub api_version: String,
    pub endpoint_prefix: String,
    pub protocol: String,
    pub service_full_name: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub signature_version: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub http: Option<HttpTrait>,
    #[serde(default)]
    pub input: Option<ShapeRef>,
    #[serde(default)]
    pub output: Option<ShapeRef>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpTrait {
    pub method: String,
    pub request_uri: String,
}

#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    pub shape: String,
}

/// A reference from a structure or list to its target shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub shape: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub query_name: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Structure(StructureShape),
    List(ListShape),
    String(StringShape),
    Integer(SimpleShape),
    Long(SimpleShape),
    Boolean(SimpleShape),
    Double(SimpleShape),
    Float(SimpleShape),
    Timestamp(SimpleShape),
    Blob(SimpleShape),
    Map(SimpleShape),
}

impl Shape {
    /// The botocore type name, as spelled in the model.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Structure(_) => "structure",
            Shape::List(_) => "list",
            Shape::String(_) => "string",
            Shape::Integer(_) => "integer",
            Shape::Long(_) => "long",
            Shape::Boolean(_) => "boolean",
            Shape::Double(_) => "double",
            Shape::Float(_) => "float",
            Shape::Timestamp(_) => "timestamp",
            Shape::Blob(_) => "blob",
            Shape::Map(_) => "map",
        }
    }

    pub fn is_sensitive(&self) -> bool {
        match self {
            Shape::String(shape) => shape.sensitive,
            Shape::Integer(shape)
            | Shape::Long(shape)
            | Shape::Boolean(shape)
            | Shape::Double(shape)
            | Shape::Float(shape)
            | Shape::Timestamp(shape)
            | Shape::Blob(shape)
            | Shape::Map(shape) => shape.sensitive,
            Shape::Structure(_) | Shape::List(_) => false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StructureShape {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub members: IndexMap<String, MemberRef>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListShape {
    pub member: MemberRef,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StringShape {
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl StringShape {
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct SimpleShape {
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub documentation: Option<String>,
}
