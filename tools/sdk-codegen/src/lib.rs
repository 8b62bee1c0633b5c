/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generates Rust shapes from a botocore EC2 service description.
//!
//! The output is a set of Rust source files meant to be `include!`d by the consuming crate:
//!
//! - `model.rs`: nested structures and enums
//! - `input.rs`: operation input structures
//! - `output.rs`: operation output structures
//! - `operation.rs`: service constants and one marker type per operation
//! - `query_ser.rs`: EC2 query serializers for everything reachable from an input
//!
//! Usually this runs from a build script:
//!
//! ```no_run
//! # fn main() -> Result<(), sdk_codegen::CodegenError> {
//! let out_dir = std::env::var_os("OUT_DIR").unwrap();
//! sdk_codegen::generate_to_dir(
//!     "model/ec2.json".as_ref(),
//!     "codegen.toml".as_ref(),
//!     out_dir.as_ref(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generators;
pub mod model;
pub mod naming;
pub mod settings;
pub mod symbol;
pub mod writer;

pub use error::CodegenError;
pub use model::ServiceModel;
pub use settings::CodegenSettings;

use crate::generators::{enumeration, operation, query_ser, structure, GENERATED_HEADER};
use crate::model::Shape;
use crate::symbol::{ShapeModule, SymbolProvider};
use crate::writer::RustWriter;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Generated source, keyed by file name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: BTreeMap<String, String>,
}

impl GeneratedFiles {
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(name, contents)| (name.as_str(), contents.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn insert(&mut self, file_name: &str, contents: String) {
        self.files.insert(file_name.to_owned(), contents);
    }
}

pub fn generate(
    model: &ServiceModel,
    settings: &CodegenSettings,
) -> Result<GeneratedFiles, CodegenError> {
    let symbols = SymbolProvider::new(model, settings)?;
    let mut files = GeneratedFiles::default();
    for module in ShapeModule::ALL {
        let file_name = format!("{}.rs", module.name());
        let _span = tracing::debug_span!("generate", file = %file_name).entered();
        files.insert(&file_name, render_module(&symbols, module)?);
    }
    {
        let _span = tracing::debug_span!("generate", file = "operation.rs").entered();
        files.insert("operation.rs", operation::render(&symbols));
    }
    {
        let _span = tracing::debug_span!("generate", file = "query_ser.rs").entered();
        files.insert("query_ser.rs", query_ser::render(&symbols)?);
    }
    tracing::info!(
        module = %settings.codegen.module_name,
        operations = symbols.operations().len(),
        "generated shapes"
    );
    Ok(files)
}

fn render_module(symbols: &SymbolProvider<'_>, module: ShapeModule) -> Result<String, CodegenError> {
    let mut writer = RustWriter::new();
    writer.line(GENERATED_HEADER);
    let mut count = 0;
    for (name, shape) in symbols.shapes_in(module) {
        match shape {
            Shape::Structure(structure_shape) => {
                writer.blank();
                structure::render_structure(&mut writer, symbols, name, structure_shape)?;
            }
            Shape::String(string_shape) if string_shape.is_enum() => {
                writer.blank();
                enumeration::render_enum(&mut writer, symbols, name, string_shape)?;
            }
            _ => continue,
        }
        count += 1;
    }
    tracing::debug!(shapes = count, "rendered module");
    Ok(writer.finish())
}

/// Loads the model and settings, generates code, and writes every file into `out_dir`.
///
/// Files whose contents are unchanged are left untouched so that their timestamps don't
/// trigger rebuilds. Returns the paths of all generated files.
pub fn generate_to_dir(
    model_path: &Path,
    settings_path: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, CodegenError> {
    let model = ServiceModel::load(model_path)?;
    let settings = CodegenSettings::load(settings_path)?;
    let files = generate(&model, &settings)?;

    std::fs::create_dir_all(out_dir).map_err(|source| CodegenError::Write {
        path: out_dir.to_owned(),
        source,
    })?;
    let mut written = Vec::with_capacity(files.len());
    for (file_name, contents) in files.iter() {
        let path = out_dir.join(file_name);
        let unchanged = std::fs::read_to_string(&path)
            .map(|existing| existing == contents)
            .unwrap_or(false);
        if unchanged {
            tracing::debug!(path = %path.display(), "unchanged");
        } else {
            std::fs::write(&path, contents).map_err(|source| CodegenError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "wrote");
        }
        written.push(path);
    }
    Ok(written)
}
