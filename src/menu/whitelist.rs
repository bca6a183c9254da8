use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::types::DocumentType;

/// Which commands may appear in a context menu.
///
/// Split into a `general` set applied to every document type and a
/// per-document-type set. Loaded once at startup (deserializable from a
/// JSON config) and never mutated afterwards; [`Default`] supplies the
/// stock policy shipped with the viewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistPolicy {
    /// Commands eligible for all document types.
    #[serde(default)]
    pub general: HashSet<String>,
    /// Commands eligible only for a specific document type.
    #[serde(default)]
    pub per_doc_type: HashMap<DocumentType, HashSet<String>>,
}

impl WhitelistPolicy {
    /// An empty policy admitting nothing.
    pub fn empty() -> Self {
        Self {
            general: HashSet::new(),
            per_doc_type: HashMap::new(),
        }
    }

    /// Whether `command` (prefix already stripped) may be shown for
    /// `doc_type`.
    ///
    /// All four document types go through the same lookup; a type with no
    /// per-type entry simply falls back to the general set.
    pub fn admits(&self, command: &str, doc_type: DocumentType) -> bool {
        self.general.contains(command)
            || self
                .per_doc_type
                .get(&doc_type)
                .is_some_and(|set| set.contains(command))
    }
}

impl Default for WhitelistPolicy {
    fn default() -> Self {
        let general = [
            "Cut",
            "Copy",
            "Paste",
            "PasteSpecialMenu",
            "PasteUnformatted",
            "NumberingStart",
            "ContinueNumbering",
            "IncrementLevel",
            "DecrementLevel",
            "OpenHyperlinkLocation",
            "CopyHyperlinkLocation",
            "RemoveHyperlink",
            "ArrangeFrameMenu",
            "ArrangeMenu",
            "BringToFront",
            "ObjectForwardOne",
            "ObjectBackOne",
            "SendToBack",
            "RotateMenu",
            "RotateLeft",
            "RotateRight",
        ];

        let text = [
            "TableInsertMenu",
            "InsertRowsBefore",
            "InsertRowsAfter",
            "InsertColumnsBefore",
            "InsertColumnsAfter",
            "TableDeleteMenu",
            "DeleteRows",
            "DeleteColumns",
            "DeleteTable",
            "MergeCells",
            "SetOptimalColumnWidth",
            "SetOptimalRowWidth",
        ];

        let spreadsheet = [
            "MergeCells",
            "SplitCells",
            "InsertAnnotation",
            "EditAnnotation",
            "DeleteNote",
            "ShowNote",
            "HideNote",
        ];

        let to_set = |cmds: &[&str]| cmds.iter().map(|s| (*s).to_string()).collect();

        let mut per_doc_type: HashMap<DocumentType, HashSet<String>> = HashMap::new();
        per_doc_type.insert(DocumentType::Text, to_set(&text));
        per_doc_type.insert(DocumentType::Spreadsheet, to_set(&spreadsheet));
        per_doc_type.insert(DocumentType::Presentation, HashSet::new());
        per_doc_type.insert(DocumentType::Drawing, HashSet::new());

        Self {
            general: to_set(&general),
            per_doc_type,
        }
    }
}
