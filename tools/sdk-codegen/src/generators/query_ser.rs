/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! EC2 Query request serializers.
//!
//! One `serialize_operation_*` function per operation writes the whole request body; one
//! `serialize_structure_*` function per nested input structure writes its members below the
//! prefix it is handed. Unset members are skipped entirely.

use crate::error::CodegenError;
use crate::generators::GENERATED_HEADER;
use crate::model::{Operation, Shape};
use crate::naming;
use crate::symbol::{MemberSymbol, RustType, ShapeModule, SymbolProvider};
use crate::writer::RustWriter;

pub fn render(symbols: &SymbolProvider<'_>) -> Result<String, CodegenError> {
    let mut writer = RustWriter::new();
    writer.line(GENERATED_HEADER);
    for operation in symbols.operations() {
        writer.blank();
        render_operation(&mut writer, symbols, operation)?;
    }
    for module in ShapeModule::ALL {
        for (name, shape) in symbols.shapes_in(module) {
            if let Shape::Structure(structure) = shape {
                if symbols.is_serialized(name) && symbols.is_nested(name) {
                    writer.blank();
                    let members = symbols.members(name, structure)?;
                    render_structure(&mut writer, symbols, name, &members);
                }
            }
        }
    }
    Ok(writer.finish())
}

pub(crate) fn operation_fn_name(operation_name: &str) -> String {
    format!("serialize_operation_{}", naming::to_snake_case(operation_name))
}

fn structure_fn_path(shape_name: &str) -> String {
    format!(
        "crate::query_ser::serialize_structure_{}",
        naming::to_snake_case(shape_name)
    )
}

fn render_operation(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    operation: &Operation,
) -> Result<(), CodegenError> {
    let query = &symbols.settings().runtime.query_crate;
    writer.line("#[allow(unused_mut)]");
    let members = match &operation.input {
        Some(input) => {
            writer.open(format!(
                "pub fn {}(input: &{}) -> std::string::String {{",
                operation_fn_name(&operation.name),
                symbols.shape_path(&input.shape)
            ));
            match symbols.model().shape(&input.shape, &operation.name)? {
                Shape::Structure(structure) => symbols.members(&input.shape, structure)?,
                other => {
                    return Err(CodegenError::UnsupportedShape {
                        shape: input.shape.clone(),
                        kind: other.kind(),
                    })
                }
            }
        }
        None => {
            writer.open(format!(
                "pub fn {}(_input: &()) -> std::string::String {{",
                operation_fn_name(&operation.name)
            ));
            Vec::new()
        }
    };
    writer.line("let mut out = std::string::String::new();");
    writer.line(format!(
        "let mut writer = {}::QueryWriter::new(&mut out, {:?}, crate::operation::API_VERSION);",
        query, operation.name
    ));
    MemberWriter::new(symbols).write_members(writer, "writer", &members);
    writer.line("writer.finish();");
    writer.line("out");
    writer.close("}");
    Ok(())
}

fn render_structure(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    shape_name: &str,
    members: &[MemberSymbol<'_>],
) {
    let query = &symbols.settings().runtime.query_crate;
    writer.line("#[allow(unused_mut, unused_variables)]");
    writer.open(format!(
        "pub fn serialize_structure_{}(mut writer: {}::QueryValueWriter, input: &{}) {{",
        naming::to_snake_case(shape_name),
        query,
        symbols.shape_path(shape_name)
    ));
    MemberWriter::new(symbols).write_members(writer, "writer", members);
    writer.close("}");
}

/// Emits member writes, numbering local variables so nested lists never shadow each other.
struct MemberWriter<'s, 'a> {
    symbols: &'s SymbolProvider<'a>,
    next_var: usize,
}

impl<'s, 'a> MemberWriter<'s, 'a> {
    fn new(symbols: &'s SymbolProvider<'a>) -> Self {
        MemberWriter {
            symbols,
            next_var: 1,
        }
    }

    fn var(&mut self, prefix: &str) -> String {
        let name = format!("{}_{}", prefix, self.next_var);
        self.next_var += 1;
        name
    }

    fn write_members(&mut self, writer: &mut RustWriter, parent: &str, members: &[MemberSymbol<'_>]) {
        for member in members {
            let scope = self.var("scope");
            let value = self.var("var");
            writer.line(format!(
                "let mut {} = {}.prefix({:?});",
                scope, parent, member.wire_name
            ));
            writer.open(format!("if let Some({}) = &input.{} {{", value, member.field));
            self.write_value(writer, &member.ty, &scope, &value);
            writer.close("}");
        }
    }

    /// Writes `value` (always a reference) through the value writer named `scope`.
    fn write_value(&mut self, writer: &mut RustWriter, ty: &RustType, scope: &str, value: &str) {
        let types = &self.symbols.settings().runtime.types_crate;
        match ty {
            RustType::String => {
                writer.line(format!("{}.string({});", scope, value));
            }
            RustType::Enum(_) => {
                writer.line(format!("{}.string({}.as_str());", scope, value));
            }
            RustType::Bool => {
                writer.line(format!("{}.boolean(*{});", scope, value));
            }
            RustType::I32 | RustType::I64 | RustType::F32 | RustType::F64 => {
                writer.line(format!(
                    "{}.number({}::Number::from(*{}));",
                    scope, types, value
                ));
            }
            RustType::Instant => {
                writer.line(format!(
                    "{}.instant({}, {}::instant::Format::DateTime);",
                    scope, value, types
                ));
            }
            RustType::Structure(name) => {
                writer.line(format!("{}({}, {});", structure_fn_path(name), scope, value));
            }
            RustType::List(member) => {
                let list = self.var("list");
                let item = self.var("item");
                let entry = self.var("entry");
                writer.line(format!("let mut {} = {}.start_list();", list, scope));
                writer.open(format!("for {} in {} {{", item, value));
                writer.line(format!("let mut {} = {}.entry();", entry, list));
                self.write_value(writer, member, &entry, &item);
                writer.close("}");
                writer.line(format!("{}.finish();", list));
            }
        }
    }
}
