/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `Display` support for generated shapes.
//!
//! Shapes render as `{Name: value,Name: value}`. Unset members are skipped entirely, lists
//! render as `[a, b]` and sensitive members are redacted. Floats are written the way the query
//! serializer sends them, so `1.0` stays `1.0`.

use smithy_types::Number;
use std::fmt::{self, Display, Formatter, Write};

const REDACTED: &str = "*** Sensitive Data Redacted ***";

pub(crate) fn display_struct<'a, 'b>(f: &'a mut Formatter<'b>) -> DisplayStruct<'a, 'b> {
    let result = f.write_char('{');
    DisplayStruct {
        f,
        result,
        has_fields: false,
    }
}

pub(crate) struct DisplayStruct<'a, 'b> {
    f: &'a mut Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl DisplayStruct<'_, '_> {
    pub(crate) fn field<T: Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.entry(name, |f| write!(f, "{}", value));
        }
        self
    }

    pub(crate) fn number_field<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self
    where
        T: Copy + Into<Number>,
    {
        let value: Option<Number> = value.map(Into::into);
        self.field(name, &value)
    }

    pub(crate) fn list_field<T: Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            self.entry(name, |f| write_list(f, items.iter()));
        }
        self
    }

    #[allow(dead_code)] // no EC2 list holds floats
    pub(crate) fn number_list_field<T>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self
    where
        T: Copy + Into<Number>,
    {
        if let Some(items) = value {
            self.entry(name, |f| write_list(f, items.iter().map(|item| (*item).into())));
        }
        self
    }

    pub(crate) fn sensitive_field<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if value.is_some() {
            self.entry(name, |f| f.write_str(REDACTED));
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_char('}')
    }

    fn entry(&mut self, name: &str, value: impl FnOnce(&mut Formatter<'_>) -> fmt::Result) {
        let has_fields = self.has_fields;
        self.has_fields = true;
        self.result = self.result.and_then(|_| {
            if has_fields {
                self.f.write_char(',')?;
            }
            write!(self.f, "{}: ", name)?;
            value(self.f)
        });
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: impl Iterator<Item = T>) -> fmt::Result {
    f.write_char('[')?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_char(']')
}
