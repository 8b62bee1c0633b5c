/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Eq, PartialEq)]
#[clap(name = "sdk-codegen", author, version, about)]
struct Args {
    /// Path to the botocore JSON service model
    #[clap(long)]
    model: PathBuf,
    /// Path to the codegen settings TOML file
    #[clap(long)]
    settings: PathBuf,
    /// Directory to write the generated Rust files into
    #[clap(long)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "error,sdk_codegen=info".to_owned()),
        )
        .init();

    let args = Args::parse();
    let written = sdk_codegen::generate_to_dir(&args.model, &args.settings, &args.out_dir)
        .with_context(|| format!("failed to generate code from `{}`", args.model.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn args_parsing() {
        assert_eq!(
            Args {
                model: PathBuf::from("model/ec2.json"),
                settings: PathBuf::from("codegen.toml"),
                out_dir: PathBuf::from("out"),
            },
            Args::try_parse_from([
                "./sdk-codegen",
                "--model",
                "model/ec2.json",
                "--settings",
                "codegen.toml",
                "--out-dir",
                "out",
            ])
            .unwrap()
        );
        assert!(Args::try_parse_from(["./sdk-codegen", "--model", "model/ec2.json"]).is_err());
    }
}
