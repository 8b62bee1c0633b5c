/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Conversions from model names to Rust identifiers.

/// Keywords that can be used as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that can't be raw identifiers at all.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Converts a model name such as `Phase1DHGroupNumbers` into `phase1_dh_group_numbers`.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase letter, and the
/// last capital of an acronym followed by a lowercase letter (`DHGroup` is `dh_group`). A
/// single trailing capital stays with the word before it (`SizeInMiB` is `size_in_mib`).
/// Any other character acts as a separator.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            push_separator(&mut out);
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = if prev.is_ascii_lowercase() {
                let trailing_capital = next.is_none() && i >= 2 && chars[i - 2].is_ascii_uppercase();
                !trailing_capital
            } else if prev.is_ascii_digit() {
                true
            } else if prev.is_ascii_uppercase() {
                next.map_or(false, |n| n.is_ascii_lowercase())
            } else {
                false
            };
            if boundary {
                push_separator(&mut out);
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

/// Converts an arbitrary value such as `t2.micro` or `Linux/UNIX` into `T2Micro` / `LinuxUnix`.
pub fn to_pascal_case(value: &str) -> String {
    to_snake_case(value)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Rust field / method name for a structure member.
pub fn member_name(model_name: &str) -> String {
    escape_ident(to_snake_case(model_name))
}

/// Strips a raw identifier prefix, for use in derived names such as `set_type`.
pub fn unescaped(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Module name holding the builder of a structure.
pub fn builder_module_name(shape_name: &str) -> String {
    escape_ident(to_snake_case(shape_name))
}

/// Enum variant for a string enum value.
///
/// `Unknown` is reserved for the catch-all variant, and a leading digit gets a `Value` prefix.
pub fn enum_variant_name(value: &str) -> String {
    let name = to_pascal_case(value);
    if name.is_empty() {
        return "EmptyValue".to_owned();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("Value{}", name);
    }
    match name.as_str() {
        "Unknown" => "UnknownValue".to_owned(),
        "Self" => "SelfValue".to_owned(),
        _ => name,
    }
}

fn escape_ident(ident: String) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_value", ident)
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", ident)
    } else {
        ident
    }
}
