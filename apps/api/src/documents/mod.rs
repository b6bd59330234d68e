//! Text source: turns an uploaded document into one whitespace-normalized string.
//!
//! Supported: `.pdf` (pdf-extract), `.docx` (zip container, `word/document.xml`), `.txt`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type '{0}'. Supported: .pdf, .docx, .txt")]
    UnsupportedFormat(String),

    #[error("Could not extract text: {0}")]
    Extraction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Resolves the kind from the file extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Result<Self, DocumentError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Txt),
            _ => Err(DocumentError::UnsupportedFormat(if ext.is_empty() {
                name.to_string()
            } else {
                format!(".{ext}")
            })),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }
}

/// Extracts the text of the document at `path`.
pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(&path.to_string_lossy())?;
    let raw = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text(path)
            .map_err(|e| DocumentError::Extraction(format!("PDF: {e}")))?,
        DocumentKind::Docx => extract_docx(path)?,
        DocumentKind::Txt => {
            let bytes = std::fs::read(path)
                .map_err(|e| DocumentError::Extraction(format!("read failed: {e}")))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };
    let text = collapse_whitespace(&raw);
    debug!("Extracted {} chars from {:?} document", text.len(), kind);
    Ok(text)
}

/// Writes uploaded bytes to a temporary file carrying the original extension and
/// extracts its text. The temporary file is removed when this returns.
pub fn extract_upload(file_name: &str, bytes: &[u8]) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(file_name)?;

    let mut tmp = tempfile::Builder::new()
        .prefix("skillgap-")
        .suffix(&format!(".{}", kind.extension()))
        .tempfile()
        .map_err(|e| DocumentError::Extraction(format!("temp file: {e}")))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| DocumentError::Extraction(format!("temp file: {e}")))?;

    extract_text(tmp.path())
}

fn extract_docx(path: &Path) -> Result<String, DocumentError> {
    let file = File::open(path).map_err(|e| DocumentError::Extraction(format!("DOCX: {e}")))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| DocumentError::Extraction(format!("DOCX: {e}")))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| DocumentError::Extraction(format!("DOCX: {e}")))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Extraction(format!("DOCX: {e}")))?;

    Ok(docx_xml_to_text(&xml))
}

/// Collects the text of every `<w:t>` run. Paragraph ends, tabs and breaks become spaces.
fn docx_xml_to_text(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_text = false;
    let mut rest = xml;

    while let Some(open) = rest.find('<') {
        if in_text {
            out.push_str(&decode_entities(&rest[..open]));
        }
        let Some(len) = rest[open..].find('>') else {
            break;
        };
        let tag = &rest[open + 1..open + len];
        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");
        match name {
            "w:t" => in_text = !tag.ends_with('/'),
            "/w:t" => in_text = false,
            "/w:p" | "w:tab" | "w:br" | "w:cr" => out.push(' '),
            _ => {}
        }
        rest = &rest[open + len + 1..];
    }
    out
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
