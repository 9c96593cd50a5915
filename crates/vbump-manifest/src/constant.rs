use std::io::{BufRead, Write};
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::atomic::replace_atomically;
use crate::error::{ManifestError, UpdateError};

pub const DEFAULT_CONSTANT_NAME: &str = "VERSION";
pub const DEFAULT_CONSTANT_TYPE: &str = "Final[str]";

/// Recognizes and renders a `NAME: TYPE = "..."` assignment line.
#[derive(Debug, Clone)]
pub struct ConstantPattern {
    name: String,
    type_annotation: String,
    regex: Regex,
}

impl ConstantPattern {
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidConstantPattern`] if the tokens do not
    /// produce a valid expression.
    pub fn new(name: &str, type_annotation: &str) -> Result<Self, ManifestError> {
        let regex = Regex::new(&format!(
            r#"^{}\s*:\s*{}\s*=\s*".*?"\s*$"#,
            regex::escape(name),
            regex::escape(type_annotation),
        ))?;

        Ok(Self {
            name: name.to_string(),
            type_annotation: type_annotation.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_annotation(&self) -> &str {
        &self.type_annotation
    }

    /// Matches a single line with its terminator already removed.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    #[must_use]
    pub fn render(&self, version: &str) -> String {
        format!("{}: {} = \"{version}\"", self.name, self.type_annotation)
    }
}

impl Default for ConstantPattern {
    fn default() -> Self {
        Self::new(DEFAULT_CONSTANT_NAME, DEFAULT_CONSTANT_TYPE)
            .unwrap_or_else(|_| unreachable!("default constant tokens are escaped literals"))
    }
}

/// Copies `reader` to `writer`, replacing the first line that matches
/// `pattern` with a freshly rendered assignment of `version`.
///
/// Lines are handled as raw bytes so that line endings and non UTF-8
/// content pass through untouched. Returns whether a line was replaced.
///
/// # Errors
///
/// Returns any I/O error from reading or writing.
pub fn rewrite_constant(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    pattern: &ConstantPattern,
    version: &str,
) -> std::io::Result<bool> {
    let mut replaced = false;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if !replaced {
            let (body, ending) = split_line_ending(&line);
            if let Ok(text) = std::str::from_utf8(body) {
                if pattern.matches(text) {
                    writer.write_all(pattern.render(version).as_bytes())?;
                    writer.write_all(if ending.is_empty() { b"\n".as_slice() } else { ending })?;
                    replaced = true;
                    continue;
                }
            }
        }

        writer.write_all(&line)?;
    }

    Ok(replaced)
}

fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let ending_len = if line.ends_with(b"\r\n") {
        2
    } else {
        usize::from(line.ends_with(b"\n"))
    };
    line.split_at(line.len() - ending_len)
}

/// Atomically rewrites the version constant in `path`.
///
/// A file without a matching line is rewritten unchanged; the return value
/// tells the caller whether the constant was found.
///
/// # Errors
///
/// Returns [`ManifestError::UpdateFailed`] if the file cannot be rewritten.
pub fn write_constant(
    path: &Path,
    pattern: &ConstantPattern,
    version: &str,
) -> Result<bool, ManifestError> {
    let replaced = replace_atomically(path, |reader, writer| {
        rewrite_constant(reader, writer, pattern, version).map_err(UpdateError::from)
    })?;

    if replaced {
        debug!(file = %path.display(), version, "updated version constant");
    } else {
        warn!(
            file = %path.display(),
            constant = pattern.name(),
            "version constant not found, file left unchanged"
        );
    }

    Ok(replaced)
}
