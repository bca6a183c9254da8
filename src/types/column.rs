use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DocviewError, Result};

/// A column as described by the document backend.
///
/// `size` is in the document's native length unit (twips for spreadsheet
/// documents), not pixels. The backend serializes sizes as decimal strings,
/// so deserialization accepts both numbers and their string spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column width in native units.
    #[serde(deserialize_with = "de_native_size")]
    pub size: f64,
    /// Header label (e.g. "A", "B", ...).
    pub text: String,
}

impl ColumnDescriptor {
    /// Check that the native size is usable for layout.
    ///
    /// # Errors
    /// Returns [`DocviewError::InvalidInput`] for non-finite or negative sizes.
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(DocviewError::InvalidInput(format!(
                "size {} for column {:?}",
                self.size, self.text
            )));
        }
        Ok(())
    }
}

/// A rendered header cell: one per visible column, ordered left-to-right.
///
/// The cell keeps its native size so widths can be recomputed when the
/// unit conversion changes (zoom) without refetching descriptors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCell {
    /// Original width in native units.
    pub size_native: f64,
    /// Header label.
    pub label: String,
    /// On-screen width in pixels, after border/seam compensation.
    ///
    /// Signed: a degenerate converter can drive the cumulative term
    /// negative, and the total must stay exact for later cells.
    pub width_px: i64,
}

/// Accepts a native size as a JSON number or a decimal string.
fn de_native_size<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
