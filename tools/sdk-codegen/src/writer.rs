/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Accumulates Rust source, tracking the current block indentation.
#[derive(Debug, Default)]
pub struct RustWriter {
    out: String,
    indent: usize,
}

const INDENT: &str = "    ";

impl RustWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a single line at the current indentation. An empty `text` writes a blank line.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes `header` (which should end in `{`) and indents what follows.
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header);
        self.indent += 1;
        self
    }

    /// Dedents and writes `footer`, usually `}`.
    pub fn close(&mut self, footer: impl AsRef<str>) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.line(footer)
    }

    /// Writes `text` as `///` doc comment lines.
    ///
    /// Lines are trimmed so that indentation in the model never turns into a doc test.
    pub fn docs(&mut self, text: &str) -> &mut Self {
        let mut previous_blank = true;
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);
        for line in &lines[..end] {
            if line.is_empty() {
                if !previous_blank {
                    self.line("///");
                }
                previous_blank = true;
            } else {
                self.line(format!("/// {}", line.replace("```", "`")));
                previous_blank = false;
            }
        }
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::RustWriter;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_blocks() {
        let mut writer = RustWriter::new();
        writer.open("impl Foo {");
        writer.open("fn foo() {");
        writer.line("bar();");
        writer.close("}");
        writer.blank();
        writer.close("}");
        assert_eq!(
            "impl Foo {\n    fn foo() {\n        bar();\n    }\n\n}\n",
            writer.finish()
        );
    }

    #[test]
    fn docs_are_trimmed() {
        let mut writer = RustWriter::new();
        writer.open("mod m {");
        writer.docs("\n  <p>The size.</p>\n\n\n      indented\n```\n\n");
        writer.close("}");
        assert_eq!(
            "mod m {\n    /// <p>The size.</p>\n    ///\n    /// indented\n    /// `\n}\n",
            writer.finish()
        );
    }
}
