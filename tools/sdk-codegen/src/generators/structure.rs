/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structure shapes: the struct itself, its accessors, its builder, and the `Debug`,
//! `Display` and `Hash` implementations.

use crate::error::CodegenError;
use crate::generators::write_docs;
use crate::model::StructureShape;
use crate::naming;
use crate::symbol::{self, MemberSymbol, RustType, SymbolProvider};
use crate::writer::RustWriter;

const REDACTED: &str = "*** Sensitive Data Redacted ***";

pub fn render_structure<'a>(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'a>,
    shape_name: &str,
    shape: &'a StructureShape,
) -> Result<(), CodegenError> {
    let members = symbols.members(shape_name, shape)?;
    let context = StructureContext {
        symbols,
        type_name: symbol::type_name(shape_name),
        path: symbols.shape_path(shape_name),
        builder_module: naming::builder_module_name(shape_name),
        builder_path: symbols.builder_module_path(shape_name),
        has_float: symbols.contains_float(shape_name),
        members,
    };

    write_docs(writer, symbols, shape.documentation.as_deref());
    context.render_struct(writer);
    writer.blank();
    context.render_accessors(writer);
    writer.blank();
    context.render_debug(writer, &context.type_name);
    writer.blank();
    context.render_display(writer);
    writer.blank();
    if context.has_float {
        context.render_eq(writer);
        writer.blank();
        context.render_hash(writer);
        writer.blank();
    }
    context.render_builder_module(writer);
    Ok(())
}

struct StructureContext<'s, 'a> {
    symbols: &'s SymbolProvider<'a>,
    type_name: String,
    path: String,
    builder_module: String,
    builder_path: String,
    has_float: bool,
    members: Vec<MemberSymbol<'a>>,
}

impl StructureContext<'_, '_> {
    fn field_type(&self, member: &MemberSymbol<'_>) -> String {
        format!("std::option::Option<{}>", self.symbols.render(&member.ty))
    }

    fn docs(&self, writer: &mut RustWriter, member: &MemberSymbol<'_>) {
        write_docs(writer, self.symbols, member.documentation);
    }

    fn render_struct(&self, writer: &mut RustWriter) {
        writer.line("#[non_exhaustive]");
        if self.has_float {
            writer.line("#[derive(std::clone::Clone, std::default::Default)]");
        } else {
            writer.line(
                "#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]",
            );
        }
        writer.open(format!("pub struct {} {{", self.type_name));
        for member in &self.members {
            self.docs(writer, member);
            writer.line(format!("pub {}: {},", member.field, self.field_type(member)));
        }
        writer.close("}");
    }

    fn render_accessors(&self, writer: &mut RustWriter) {
        writer.open(format!("impl {} {{", self.type_name));
        for member in &self.members {
            let (return_type, body) = match &member.ty {
                RustType::String => (
                    "std::option::Option<&str>".to_owned(),
                    format!("self.{}.as_deref()", member.field),
                ),
                ty if ty.is_copy() => (
                    format!("std::option::Option<{}>", self.symbols.render(ty)),
                    format!("self.{}", member.field),
                ),
                RustType::List(inner) => (
                    format!("std::option::Option<&[{}]>", self.symbols.render(inner)),
                    format!("self.{}.as_deref()", member.field),
                ),
                ty => (
                    format!("std::option::Option<&{}>", self.symbols.render(ty)),
                    format!("self.{}.as_ref()", member.field),
                ),
            };
            self.docs(writer, member);
            writer.open(format!("pub fn {}(&self) -> {} {{", member.field, return_type));
            writer.line(body);
            writer.close("}");
        }
        writer.line(format!(
            "/// Creates a new builder-style object to manufacture [`{}`]({}).",
            self.type_name, self.path
        ));
        writer.open(format!("pub fn builder() -> {}::Builder {{", self.builder_path));
        writer.line(format!("{}::Builder::default()", self.builder_path));
        writer.close("}");
        writer.close("}");
    }

    /// `Debug` for the shape or its builder; both hold the same fields.
    fn render_debug(&self, writer: &mut RustWriter, type_name: &str) {
        writer.open(format!("impl std::fmt::Debug for {} {{", type_name));
        writer.open("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        writer.line(format!("let mut formatter = f.debug_struct({:?});", type_name));
        for member in &self.members {
            if member.sensitive {
                writer.line(format!(
                    "formatter.field({:?}, &{:?});",
                    member.plain, REDACTED
                ));
            } else {
                writer.line(format!(
                    "formatter.field({:?}, &self.{});",
                    member.plain, member.field
                ));
            }
        }
        writer.line("formatter.finish()");
        writer.close("}");
        writer.close("}");
    }

    fn render_display(&self, writer: &mut RustWriter) {
        writer.open(format!("impl std::fmt::Display for {} {{", self.type_name));
        writer.open("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        writer.line("let mut formatter = crate::display::display_struct(f);");
        for member in &self.members {
            let method = match &member.ty {
                _ if member.sensitive => "sensitive_field",
                RustType::List(inner) if inner.is_float() => "number_list_field",
                RustType::List(_) => "list_field",
                ty if ty.is_float() => "number_field",
                _ => "field",
            };
            writer.line(format!(
                "formatter.{}({:?}, &self.{});",
                method, member.model_name, member.field
            ));
        }
        writer.line("formatter.finish()");
        writer.close("}");
        writer.close("}");
    }

    /// `PartialEq` and `Eq` for shapes holding floats. Floats compare by bit pattern, so `NaN`
    /// equals itself and `0.0` differs from `-0.0`, matching `Hash`.
    fn render_eq(&self, writer: &mut RustWriter) {
        writer.open(format!("impl std::cmp::PartialEq for {} {{", self.type_name));
        writer.open("fn eq(&self, other: &Self) -> bool {");
        // a shape only holds floats when it has members
        for (index, member) in self.members.iter().enumerate() {
            let comparison = format!(
                "{} == {}",
                comparable(member, "self"),
                comparable(member, "other")
            );
            if index == 0 {
                writer.line(comparison);
            } else {
                writer.line(format!("    && {}", comparison));
            }
        }
        writer.close("}");
        writer.close("}");
        writer.line(format!("impl std::cmp::Eq for {} {{}}", self.type_name));
    }

    /// Manual `Hash` for shapes holding floats, which hash by bit pattern.
    fn render_hash(&self, writer: &mut RustWriter) {
        writer.open(format!("impl std::hash::Hash for {} {{", self.type_name));
        writer.open("fn hash<H: std::hash::Hasher>(&self, state: &mut H) {");
        for member in &self.members {
            writer.line(format!(
                "std::hash::Hash::hash(&{}, state);",
                comparable(member, "self")
            ));
        }
        writer.close("}");
        writer.close("}");
    }

    fn render_builder_module(&self, writer: &mut RustWriter) {
        writer.line(format!("/// See [`{}`]({}).", self.type_name, self.path));
        writer.open(format!("pub mod {} {{", self.builder_module));
        writer.blank();
        writer.line(format!("/// A builder for [`{}`]({}).", self.type_name, self.path));
        writer.line("#[non_exhaustive]");
        writer.line("#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default)]");
        writer.open("pub struct Builder {");
        for member in &self.members {
            writer.line(format!("pub(crate) {}: {},", member.field, self.field_type(member)));
        }
        writer.close("}");
        writer.blank();

        writer.open("impl Builder {");
        for member in &self.members {
            self.render_setters(writer, member);
        }
        writer.line(format!(
            "/// Consumes the builder and constructs a [`{}`]({}).",
            self.type_name, self.path
        ));
        writer.open(format!("pub fn build(self) -> {} {{", self.path));
        writer.open(format!("{} {{", self.path));
        for member in &self.members {
            writer.line(format!("{}: self.{},", member.field, member.field));
        }
        writer.close("}");
        writer.close("}");
        writer.close("}");
        writer.blank();

        self.render_debug(writer, "Builder");
        writer.close("}");
    }

    fn render_setters(&self, writer: &mut RustWriter, member: &MemberSymbol<'_>) {
        let field = &member.field;
        let field_type = self.field_type(member);
        match &member.ty {
            RustType::List(inner) => {
                let (param, value) = setter_param(self.symbols, inner);
                writer.line(format!("/// Appends an item to `{}`.", member.plain));
                writer.line("///");
                writer.line(format!(
                    "/// To override the contents of this collection use [`set_{}`](Self::set_{}).",
                    member.plain, member.plain
                ));
                if self.symbols.include_docs() && member.documentation.is_some() {
                    writer.line("///");
                }
                self.docs(writer, member);
                writer.open(format!("pub fn {}(mut self, input: {}) -> Self {{", field, param));
                writer.line(format!("let mut v = self.{}.unwrap_or_default();", field));
                writer.line(format!("v.push({});", value));
                writer.line(format!("self.{} = std::option::Option::Some(v);", field));
                writer.line("self");
                writer.close("}");
            }
            ty => {
                let (param, value) = setter_param(self.symbols, ty);
                self.docs(writer, member);
                writer.open(format!("pub fn {}(mut self, input: {}) -> Self {{", field, param));
                writer.line(format!("self.{} = std::option::Option::Some({});", field, value));
                writer.line("self");
                writer.close("}");
            }
        }

        self.docs(writer, member);
        writer.open(format!(
            "pub fn set_{}(mut self, input: {}) -> Self {{",
            member.plain, field_type
        ));
        writer.line(format!("self.{} = input;", field));
        writer.line("self");
        writer.close("}");

        self.docs(writer, member);
        writer.open(format!(
            "pub fn get_{}(&self) -> &{} {{",
            member.plain, field_type
        ));
        writer.line(format!("&self.{}", field));
        writer.close("}");
    }
}

/// Parameter type and stored expression for a fluent setter taking one `ty`.
/// The member as compared and hashed: floats are replaced by their bit patterns.
fn comparable(member: &MemberSymbol<'_>, receiver: &str) -> String {
    match &member.ty {
        ty if ty.is_float() => format!("{}.{}.map(|value| value.to_bits())", receiver, member.field),
        RustType::List(inner) if inner.is_float() => format!(
            "{}.{}.as_ref().map(|items| items.iter().map(|value| value.to_bits()).collect::<std::vec::Vec<_>>())",
            receiver, member.field
        ),
        _ => format!("{}.{}", receiver, member.field),
    }
}

fn setter_param(symbols: &SymbolProvider<'_>, ty: &RustType) -> (String, &'static str) {
    match ty {
        RustType::String => (
            "impl std::convert::Into<std::string::String>".to_owned(),
            "input.into()",
        ),
        other => (symbols.render(other), "input"),
    }
}
