//! File preview with bounded reads and binary detection.
//!
//! A preview never reads more than [`PreviewLimits::max_bytes`] from disk.
//! The sample is classified as text or binary; text is split into lines
//! and truncated to the configured line and width limits.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Bounds applied to every file preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub max_bytes: usize,
    pub max_lines: usize,
    pub max_line_width: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_bytes: 5000,
            max_lines: 50,
            max_line_width: 100,
        }
    }
}

/// One line of a text preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub text: String,
    /// `true` when the line was cut at the width limit.
    pub truncated: bool,
}

/// Read-only projection of the selected entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    /// Nothing is selected.
    #[default]
    None,
    /// A directory (or the parent sentinel); metadata only.
    Directory {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
    },
    /// A file whose sample looks like text.
    Text {
        lines: Vec<PreviewLine>,
        /// Lines in the sample beyond `max_lines`.
        more_lines: usize,
        /// `true` when the file is larger than the byte budget.
        truncated_bytes: bool,
    },
    /// A file whose sample contains control bytes.
    Binary { size: u64 },
    /// The file could not be read.
    Unreadable { message: String },
}

/// Produces a [`Preview`] for an entry.
///
/// Implementations never fail: read errors become [`Preview::Unreadable`].
pub trait PreviewReader {
    fn preview(&self, entry: Option<&FileEntry>) -> Preview;
}

/// [`PreviewReader`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPreviewer {
    limits: PreviewLimits,
}

impl FsPreviewer {
    pub fn new(limits: PreviewLimits) -> Self {
        Self { limits }
    }
}

impl PreviewReader for FsPreviewer {
    fn preview(&self, entry: Option<&FileEntry>) -> Preview {
        let Some(entry) = entry else {
            return Preview::None;
        };

        if entry.is_dir() {
            return Preview::Directory {
                name: entry.name().to_string(),
                path: entry.path().to_path_buf(),
                modified: entry.modified(),
            };
        }

        let sample = match read_sample(entry.path(), self.limits.max_bytes) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("preview failed for {}: {e}", entry.path().display());
                return Preview::Unreadable {
                    message: e.to_string(),
                };
            }
        };

        if !is_text_sample(&sample) {
            return Preview::Binary { size: entry.size() };
        }

        let (lines, more_lines) = format_lines(&sample, &self.limits);
        Preview::Text {
            lines,
            more_lines,
            truncated_bytes: entry.size() > self.limits.max_bytes as u64,
        }
    }
}

/// Reads up to `max_bytes` from the start of `path` and decodes it.
///
/// An incomplete UTF-8 sequence at the end of the budget is dropped. Other
/// invalid bytes are replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`CoreError::NotAFile`] for anything but a regular file, so
/// FIFOs and devices are never opened. Returns [`CoreError::NotFound`],
/// [`CoreError::PermissionDenied`] or [`CoreError::Io`] when the file
/// cannot be opened or read.
pub fn read_sample(path: &Path, max_bytes: usize) -> CoreResult<String> {
    let metadata = fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if !metadata.is_file() {
        return Err(CoreError::NotAFile(path.to_path_buf()));
    }
    let file = fs::File::open(path).map_err(|e| CoreError::from_io(e, path))?;
    let mut buf = Vec::with_capacity(max_bytes.min(64 * 1024));
    file.take(max_bytes as u64)
        .read_to_end(&mut buf)
        .map_err(|e| CoreError::from_io(e, path))?;

    let valid_len = complete_utf8_len(&buf);
    Ok(String::from_utf8_lossy(&buf[..valid_len]).into_owned())
}

/// Length of `buf` without a trailing, incomplete UTF-8 sequence.
fn complete_utf8_len(buf: &[u8]) -> usize {
    match std::str::from_utf8(buf) {
        Ok(_) => buf.len(),
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        Err(_) => {
            // Invalid somewhere in the middle; only inspect the tail.
            let tail_start = buf.len().saturating_sub(3);
            for start in (tail_start..buf.len()).rev() {
                let byte = buf[start];
                if byte & 0xC0 == 0x80 {
                    continue;
                }
                let needed = match byte {
                    0xC0..=0xDF => 2,
                    0xE0..=0xEF => 3,
                    0xF0..=0xF7 => 4,
                    _ => return buf.len(),
                };
                return if buf.len() - start < needed {
                    start
                } else {
                    buf.len()
                };
            }
            buf.len()
        }
    }
}

/// Returns `true` if `sample` contains no disallowed control characters.
///
/// Tab, LF and CR are allowed. Any other C0 control (including NUL) or any
/// C1 control (U+0080 to U+009F) marks the sample as binary.
pub fn is_text_sample(sample: &str) -> bool {
    sample.chars().all(|c| {
        let code = c as u32;
        if code < 0x20 {
            return matches!(c, '\t' | '\n' | '\r');
        }
        !(0x80..0xA0).contains(&code)
    })
}

fn format_lines(sample: &str, limits: &PreviewLimits) -> (Vec<PreviewLine>, usize) {
    let all: Vec<&str> = sample.split('\n').collect();
    let more_lines = all.len().saturating_sub(limits.max_lines);

    let lines = all
        .into_iter()
        .take(limits.max_lines)
        .map(|raw| {
            let cleaned = raw.replace('\r', "").replace('\t', "    ");
            truncate_line(&cleaned, limits.max_line_width)
        })
        .collect();

    (lines, more_lines)
}

fn truncate_line(line: &str, max_width: usize) -> PreviewLine {
    match line.char_indices().nth(max_width) {
        Some((cut, _)) => PreviewLine {
            text: line[..cut].to_string(),
            truncated: true,
        },
        None => PreviewLine {
            text: line.to_string(),
            truncated: false,
        },
    }
}
