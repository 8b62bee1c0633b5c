/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Writers for the EC2 Query protocol request body.
//!
//! The body is a `application/x-www-form-urlencoded` document that starts with the
//! `Action` and `Version` parameters, followed by one `Name=value` pair per set member.
//! Nested structure members are addressed as `Parent.Child` and list entries as
//! `Name.1`, `Name.2` and so on. EC2 lists are always flattened.

use smithy_types::instant::Format;
use smithy_types::{Instant, Number};
use std::borrow::Cow;
use urlencoding::encode;

/// Top-level writer for a query request body.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Starts a body for `action` against API `version`.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Returns a writer for the top-level parameter named `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Nothing to finish off; the body is complete once every member has been written.
    }
}

/// Writes a single value (or a nested structure or list) at a parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Returns a writer for the nested member `prefix` below this one.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Writes the boolean `value` as `true` or `false`.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a string `value`, percent-encoding it.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Writes a number `value`.
    pub fn number(self, value: Number) {
        self.string(&value.to_string())
    }

    /// Writes an instant `value` using `format`.
    pub fn instant(self, value: &Instant, format: Format) {
        self.string(&value.fmt(format));
    }

    /// Starts a flattened list at this parameter name.
    pub fn start_list(self) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix)
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&encode(&self.prefix));
        self.output.push('=');
    }
}

/// Writes the entries of a flattened list, numbered from 1.
///
/// A list with no entries writes nothing at all.
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryListWriter {
            output,
            prefix,
            next_index: 1,
        }
    }

    /// Returns a writer for the next entry of the list.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let entry_prefix = format!("{}.{}", self.prefix, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(entry_prefix))
    }

    pub fn finish(self) {
        // Entries are written eagerly and EC2 has no member for empty lists.
    }
}
