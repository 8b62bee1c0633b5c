/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::CodegenError;
use crate::generators::write_docs;
use crate::model::StringShape;
use crate::naming;
use crate::symbol::{self, SymbolProvider};
use crate::writer::RustWriter;
use std::collections::HashMap;

/// Renders a string enum with an `Unknown` catch-all so values added to the service later
/// still round-trip.
pub fn render_enum(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    shape_name: &str,
    shape: &StringShape,
) -> Result<(), CodegenError> {
    let type_name = symbol::type_name(shape_name);
    let variants = variants(shape_name, &shape.enum_values)?;

    write_docs(writer, symbols, shape.documentation.as_deref());
    writer.line("#[non_exhaustive]");
    writer.line("#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]");
    writer.open(format!("pub enum {} {{", type_name));
    for (variant, _) in &variants {
        writer.line("#[allow(missing_docs)] // documentation missing in model");
        writer.line(format!("{},", variant));
    }
    writer.line("/// Unknown contains new variants that have been added since this code was generated.");
    writer.line("Unknown(std::string::String),");
    writer.close("}");
    writer.blank();

    writer.open(format!("impl std::convert::From<&str> for {} {{", type_name));
    writer.open("fn from(s: &str) -> Self {");
    writer.open("match s {");
    for (variant, value) in &variants {
        writer.line(format!("{:?} => {}::{},", value, type_name, variant));
    }
    writer.line(format!("other => {}::Unknown(other.to_owned()),", type_name));
    writer.close("}");
    writer.close("}");
    writer.close("}");
    writer.blank();

    writer.open(format!("impl std::str::FromStr for {} {{", type_name));
    writer.line("type Err = std::convert::Infallible;");
    writer.blank();
    writer.open("fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {");
    writer.line(format!("Ok({}::from(s))", type_name));
    writer.close("}");
    writer.close("}");
    writer.blank();

    writer.open(format!("impl {} {{", type_name));
    writer.line("/// Returns the `&str` value of the enum member.");
    writer.open("pub fn as_str(&self) -> &str {");
    writer.open("match self {");
    for (variant, value) in &variants {
        writer.line(format!("{}::{} => {:?},", type_name, variant, value));
    }
    writer.line(format!("{}::Unknown(s) => s.as_ref(),", type_name));
    writer.close("}");
    writer.close("}");
    writer.line("/// Returns all the `&str` values of the enum members.");
    writer.open("pub fn values() -> &'static [&'static str] {");
    let values: Vec<String> = variants.iter().map(|(_, value)| format!("{:?}", value)).collect();
    writer.line(format!("&[{}]", values.join(", ")));
    writer.close("}");
    writer.close("}");
    writer.blank();

    writer.open(format!("impl std::convert::AsRef<str> for {} {{", type_name));
    writer.open("fn as_ref(&self) -> &str {");
    writer.line("self.as_str()");
    writer.close("}");
    writer.close("}");
    writer.blank();

    writer.open(format!("impl std::fmt::Display for {} {{", type_name));
    writer.open("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
    writer.line("f.write_str(self.as_str())");
    writer.close("}");
    writer.close("}");
    Ok(())
}

/// Pairs each value with its variant name, rejecting two values that collapse onto one name.
fn variants<'v>(shape_name: &str, values: &'v [String]) -> Result<Vec<(String, &'v str)>, CodegenError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut variants = Vec::with_capacity(values.len());
    for value in values {
        let variant = naming::enum_variant_name(value);
        if let Some(first) = seen.insert(variant.clone(), value.as_str()) {
            return Err(CodegenError::DuplicateEnumVariant {
                shape: shape_name.to_owned(),
                variant,
                first: first.to_owned(),
                second: value.clone(),
            });
        }
        variants.push((variant, value.as_str()));
    }
    Ok(variants)
}
