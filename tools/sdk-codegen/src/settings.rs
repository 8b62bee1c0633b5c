/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generator settings, loaded from a `codegen.toml` next to the model.
//!
//! ```toml
//! [codegen]
//! module-name = "ec2"
//! include-documentation = true
//! operations = ["CreateVolume", "DescribeInstances"]
//!
//! [runtime]
//! types-crate = "smithy_types"
//! query-crate = "smithy_query"
//! ```

use crate::error::CodegenError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodegenSettings {
    #[serde(default)]
    pub codegen: CodegenConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl CodegenSettings {
    pub fn from_toml(text: &str) -> Result<Self, CodegenError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let text = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodegenConfig {
    /// Name of the crate the generated code is included into; used in documentation.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Copy model documentation onto generated items.
    #[serde(default = "default_true")]
    pub include_documentation: bool,
    /// Restricts generation to these operations and the shapes they reach.
    #[serde(default)]
    pub operations: Option<Vec<String>>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            module_name: default_module_name(),
            include_documentation: true,
            operations: None,
        }
    }
}

/// Crate names generated code uses for runtime support.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuntimeConfig {
    #[serde(default = "default_types_crate")]
    pub types_crate: String,
    #[serde(default = "default_query_crate")]
    pub query_crate: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            types_crate: default_types_crate(),
            query_crate: default_query_crate(),
        }
    }
}

fn default_module_name() -> String {
    "ec2".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_types_crate() -> String {
    "smithy_types".to_owned()
}

fn default_query_crate() -> String {
    "smithy_query".to_owned()
}

#[cfg(test)]
mod tests {
    use super::CodegenSettings;
    use crate::error::CodegenError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_settings_use_defaults() {
        assert_eq!(CodegenSettings::default(), CodegenSettings::from_toml("").unwrap());
        let settings = CodegenSettings::default();
        assert_eq!(settings.runtime.types_crate, "smithy_types");
        assert_eq!(settings.runtime.query_crate, "smithy_query");
        assert!(settings.codegen.include_documentation);
    }

    #[test]
    fn full_settings() {
        let settings = CodegenSettings::from_toml(
            r#"
            [codegen]
            module-name = "aws_sdk_ec2"
            include-documentation = false
            operations = ["CreateVolume"]

            [runtime]
            types-crate = "aws_smithy_types"
            query-crate = "aws_smithy_query"
            "#,
        )
        .unwrap();
        assert_eq!(settings.codegen.module_name, "aws_sdk_ec2");
        assert!(!settings.codegen.include_documentation);
        assert_eq!(
            settings.codegen.operations,
            Some(vec!["CreateVolume".to_string()])
        );
        assert_eq!(settings.runtime.types_crate, "aws_smithy_types");
        assert_eq!(settings.runtime.query_crate, "aws_smithy_query");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            CodegenSettings::from_toml("[codegen]\nmodule = \"ec2\"\n"),
            Err(CodegenError::InvalidSettings(_))
        ));
    }

    #[test]
    fn missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        assert!(matches!(
            CodegenSettings::load(&path),
            Err(CodegenError::Io { .. })
        ));
    }
}
