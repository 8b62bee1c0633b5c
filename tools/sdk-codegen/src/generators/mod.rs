/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Emitters for each kind of generated item. Every emitter writes fully qualified paths so the
//! output can be `include!`d into any module.

pub mod enumeration;
pub mod operation;
pub mod query_ser;
pub mod structure;

use crate::symbol::SymbolProvider;
use crate::writer::RustWriter;

/// Header written at the top of each generated file.
pub(crate) const GENERATED_HEADER: &str = "// Code generated by sdk-codegen. DO NOT EDIT.";

pub(crate) fn write_docs(writer: &mut RustWriter, symbols: &SymbolProvider<'_>, docs: Option<&str>) {
    if !symbols.include_docs() {
        return;
    }
    if let Some(docs) = docs.filter(|docs| !docs.trim().is_empty()) {
        writer.docs(docs);
    }
}
