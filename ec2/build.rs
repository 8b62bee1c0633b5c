/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(
        std::env::var_os("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?,
    );
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").context("OUT_DIR is not set")?);
    let model = manifest_dir.join("model/ec2.json");
    let settings = manifest_dir.join("codegen.toml");
    println!("cargo:rerun-if-changed={}", model.display());
    println!("cargo:rerun-if-changed={}", settings.display());

    sdk_codegen::generate_to_dir(&model, &settings, &out_dir)
        .with_context(|| format!("failed to generate shapes from `{}`", model.display()))?;
    Ok(())
}
