//! Loading the active document and writing the result back

use crate::args::DocumentArgs;
use quickprompts_core::TextBuffer;
use quickprompts_core::error::{QpError, QpResult};
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Where a document came from, and so where it goes back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug)]
pub struct LoadedDocument {
    pub source: DocumentSource,
    pub buffer: TextBuffer,
}

impl LoadedDocument {
    /// Build a document from text, selecting `--lines` or everything
    pub fn from_text(source: DocumentSource, text: String, args: &DocumentArgs) -> QpResult<Self> {
        let buffer = match args.lines {
            Some(lines) => TextBuffer::with_lines(text, lines)?,
            None => TextBuffer::select_all(text),
        };
        Ok(Self { source, buffer })
    }

    /// Write the edited text to its file, or to stdout for piped input
    pub fn write_back(&self) -> QpResult<()> {
        match &self.source {
            DocumentSource::File(path) => {
                std::fs::write(path, self.buffer.text()).map_err(|e| {
                    QpError::io_at(
                        format!("Failed to write document: {}", e),
                        path.display().to_string(),
                    )
                })
            }
            DocumentSource::Stdin => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(self.buffer.text().as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Load the active document
///
/// Returns `None` when no file is given and stdin is a terminal, which is
/// reported later as "No active document".
pub fn load(args: &DocumentArgs) -> QpResult<Option<LoadedDocument>> {
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path).map_err(|e| {
            QpError::io_at(
                format!("Failed to read document: {}", e),
                path.display().to_string(),
            )
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Loaded document from file");
        return LoadedDocument::from_text(DocumentSource::File(path.clone()), text, args)
            .map(Some);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;
    debug!(bytes = text.len(), "Loaded document from stdin");
    LoadedDocument::from_text(DocumentSource::Stdin, text, args).map(Some)
}
