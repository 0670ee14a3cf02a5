//! In-memory download blobs
//!
//! Encodes a table as base64 CSV for a `data:` link instead of writing to
//! local storage.

use super::writer::table_to_csv;
use crate::error::{Error, Result};
use crate::flatten::FlatTable;
use crate::shell::escape_html;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIME type of every blob
pub const CSV_MIME: &str = "text/csv";

/// A base64-encoded CSV payload ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadBlob {
    /// Suggested file name
    pub file_name: String,
    /// Base64 of the CSV bytes
    pub payload: String,
}

impl DownloadBlob {
    /// Encode a table
    pub fn encode(table: &FlatTable, file_name: impl Into<String>) -> Result<Self> {
        let bytes = table_to_csv(table)?;
        Ok(Self {
            file_name: file_name.into(),
            payload: STANDARD.encode(bytes),
        })
    }

    /// `data:` URL carrying the payload
    pub fn href(&self) -> String {
        format!("data:{CSV_MIME};base64,{}", self.payload)
    }

    /// Anchor element with a `download` attribute
    pub fn to_anchor(&self, label: &str) -> String {
        format!(
            r#"<a href="{}" download="{}">{}</a>"#,
            self.href(),
            escape_html(&self.file_name),
            escape_html(label)
        )
    }

    /// Decode the payload back into CSV bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.payload)
            .map_err(|e| Error::output(format!("Invalid base64 payload: {e}")))
    }
}
