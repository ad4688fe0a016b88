//! Raw text extraction — binary document in, plain text out.
//!
//! Pure adapter around the PDF and DOCX decoders; no heuristics live here.
//! A decoder failure is surfaced as `AppError::Extraction`, never as an
//! empty successful result.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Declared media type of an uploaded document. Anything outside this set is
/// rejected before any decoding is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    /// Maps a declared MIME string to a supported media type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(MediaType::Docx)
            }
            _ => None,
        }
    }
}

/// Decodes a document buffer into plain text.
pub fn extract_text(buffer: &[u8], media_type: MediaType) -> Result<String, AppError> {
    match media_type {
        MediaType::Pdf => pdf_extract::extract_text_from_mem(buffer)
            .map_err(|e| AppError::Extraction(format!("PDF decode failed: {e}"))),
        MediaType::Docx => extract_docx_text(buffer),
    }
}

/// Walks the docx-rs tree collecting run text, one line per paragraph.
/// A .docx is a ZIP of XML; docx-rs gives us Paragraph → Run → Text.
fn extract_docx_text(buffer: &[u8]) -> Result<String, AppError> {
    let docx =
        read_docx(buffer).map_err(|e| AppError::Extraction(format!("DOCX decode failed: {e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut parts: Vec<&str> = Vec::new();
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            parts.push(&t.text);
                        }
                    }
                }
            }
            let para_text = parts.join("");
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }
    Ok(paragraphs.join("\n"))
}
