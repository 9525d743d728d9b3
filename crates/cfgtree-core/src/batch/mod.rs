//! Batch replay of command lines from files and in-memory buffers.
//!
//! Lines are cleaned (comment stripped, whitespace trimmed, blanks
//! skipped) and fed to the [`Router`] one at a time. The first failing line
//! aborts the batch.
//!
//! ```text
//! # generator setup
//! generator.delegate() box BoxGenerator
//! generator.box.pdg 211        # pi+
//! generator.box
//! .momentum 0., 0., 10.
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{error, info};

use crate::command::{CommandError, ProcessMode, Router};
use crate::node::ConfigNode;

/// Origin reported for lines that came from [`Router::process_buffer`].
pub const BUFFER_ORIGIN: &str = "<buffer>";

/// Strip the comment and surrounding whitespace from a line.
///
/// The comment starts at the first `marker` not preceded by a backslash; an
/// escaped marker is kept as a literal. Returns `None` for lines with no
/// command left.
pub fn clean_line(line: &str, marker: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(line.len());
    let mut rest = line;

    if marker.is_empty() {
        cleaned.push_str(rest);
    } else {
        while let Some(pos) = rest.find(marker) {
            if rest[..pos].ends_with('\\') {
                cleaned.push_str(&rest[..pos - 1]);
                cleaned.push_str(marker);
                rest = &rest[pos + marker.len()..];
            } else {
                cleaned.push_str(&rest[..pos]);
                rest = "";
                break;
            }
        }
        cleaned.push_str(rest);
    }

    let trimmed = cleaned.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Router {
    /// Replay a command file in the given mode.
    ///
    /// `include()` directives inside the file inherit `mode`.
    pub fn process_file(
        &mut self,
        root: &mut dyn ConfigNode,
        path: &Path,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        info!(
            event = "core.batch.file_started",
            path = %path.display(),
            mode = %mode
        );

        let file = File::open(path).map_err(|source| {
            error!(
                event = "core.batch.file_open_failed",
                path = %path.display(),
                error = %source
            );
            CommandError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            lines.push(line.map_err(|source| CommandError::Io {
                path: path.to_path_buf(),
                source,
            })?);
        }

        let origin = path.display().to_string();
        self.process_lines(root, &origin, &lines, mode)?;
        info!(event = "core.batch.file_completed", path = %path.display(), mode = %mode);
        Ok(())
    }

    /// Replay raw lines in the given mode, reporting failures against `origin`.
    pub fn process_lines<S: AsRef<str>>(
        &mut self,
        root: &mut dyn ConfigNode,
        origin: &str,
        lines: &[S],
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        for (index, raw) in lines.iter().enumerate() {
            let Some(line) = clean_line(raw.as_ref(), &self.comment_marker) else {
                continue;
            };
            if let Err(e) = self.execute(root, &line, mode) {
                error!(
                    event = "core.batch.line_failed",
                    origin = origin,
                    line_number = index + 1,
                    command = %line,
                    error = %e,
                    "\"{}\" is not a valid command",
                    line
                );
                return Err(CommandError::LineFailed {
                    origin: origin.to_string(),
                    line: index + 1,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }

    /// Replay an in-memory buffer in two passes: delegates, then values.
    ///
    /// Commands may therefore address delegates that are declared later in
    /// the same buffer, or in files it includes. `delegate()` lines still run
    /// in order within the first pass, so a nested declaration must follow
    /// the declaration of its parent.
    pub fn process_buffer<S: AsRef<str>>(
        &mut self,
        root: &mut dyn ConfigNode,
        lines: &[S],
    ) -> Result<(), CommandError> {
        info!(event = "core.batch.buffer_started", lines = lines.len());
        self.process_lines(root, BUFFER_ORIGIN, lines, ProcessMode::DelegatesOnly)?;
        self.process_lines(root, BUFFER_ORIGIN, lines, ProcessMode::ValuesOnly)?;
        info!(event = "core.batch.buffer_completed");
        Ok(())
    }
}
