/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Primitive types shared by generated shapes and protocol serializers.

pub mod instant;

use std::fmt;

pub use crate::instant::Instant;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    if value < 0 {
                        Number::NegInt(value as i64)
                    } else {
                        Number::PosInt(value as u64)
                    }
                }
            }
        )*
    };
}

number_from_signed!(i8, i16, i32, i64);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Formats the number for text protocols.
///
/// Non-finite floats are written as `NaN`, `Infinity` and `-Infinity`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::PosInt(value) => f.write_str(itoa::Buffer::new().format(value)),
            Number::NegInt(value) => f.write_str(itoa::Buffer::new().format(value)),
            Number::Float(value) if value.is_nan() => f.write_str("NaN"),
            Number::Float(value) if value.is_infinite() => {
                f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(value) => f.write_str(ryu::Buffer::new().format_finite(value)),
        }
    }
}
