use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DocviewError, Result};

/// Length of the protocol-scheme prefix on command identifiers (".uno:").
pub const COMMAND_PREFIX_LEN: usize = 5;

/// The kind of document the menu is being built for.
///
/// Whitelisting is per-document-type: a command eligible in a spreadsheet
/// may be meaningless in a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Text,
    Spreadsheet,
    Presentation,
    Drawing,
}

impl std::str::FromStr for DocumentType {
    type Err = DocviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "spreadsheet" => Ok(Self::Spreadsheet),
            "presentation" => Ok(Self::Presentation),
            "drawing" => Ok(Self::Drawing),
            other => Err(DocviewError::InvalidInput(format!(
                "unknown document type {other:?}"
            ))),
        }
    }
}

/// Node kind in the backend's raw menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawNodeKind {
    Command,
    Menu,
    Separator,
}

/// Check style a command can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    Checkmark,
    Radio,
}

/// Icon shown next to a checked menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuIcon {
    Checkmark,
    Radio,
}

impl From<CheckType> for MenuIcon {
    fn from(ct: CheckType) -> Self {
        match ct {
            CheckType::Checkmark => Self::Checkmark,
            CheckType::Radio => Self::Radio,
        }
    }
}

/// A node of the raw menu tree as delivered by the document backend.
///
/// The wire format is loose: boolean flags arrive as the strings `"true"`/
/// `"false"`, submenu children nest under the key `"menu"`, and fields are
/// routinely absent. Deserialization tolerates all of that; semantic
/// validation happens in the builder.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMenuNode {
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: RawNodeKind,
    /// Full command identifier including the protocol prefix (".uno:Cut").
    #[serde(default)]
    pub command: Option<String>,
    /// Display text, possibly carrying a "~" mnemonic marker.
    #[serde(default)]
    pub text: Option<String>,
    /// Whether the item is currently actionable. Absent means enabled.
    #[serde(default = "default_true", deserialize_with = "de_flag")]
    pub enabled: bool,
    /// Check style, when the command is checkable.
    #[serde(default)]
    pub checktype: Option<CheckType>,
    /// Current check state.
    #[serde(default, deserialize_with = "de_flag")]
    pub checked: bool,
    /// Submenu children. The backend nests these under `"menu"`.
    #[serde(default, alias = "menu")]
    pub children: Vec<RawMenuNode>,
}

impl RawMenuNode {
    /// The command name with the protocol-scheme prefix stripped.
    ///
    /// # Errors
    /// Returns [`DocviewError::MalformedMenuNode`] when `command` is missing
    /// or shorter than the prefix.
    pub fn command_name(&self) -> Result<&str> {
        let command = self.command.as_deref().ok_or_else(|| {
            DocviewError::MalformedMenuNode(format!(
                "{:?} node without a command identifier",
                self.kind
            ))
        })?;
        command.get(COMMAND_PREFIX_LEN..).ok_or_else(|| {
            DocviewError::MalformedMenuNode(format!(
                "command {command:?} shorter than the protocol prefix"
            ))
        })
    }
}

/// The context-menu payload carried by the backend's "show context menu"
/// message: the top-level sibling list nests under `"menu"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextMenuPayload {
    /// Top-level raw menu entries, in display order.
    pub menu: Vec<RawMenuNode>,
}

/// A display-ready menu entry.
///
/// Built fresh on every menu open; sibling order in the containing `Vec`
/// is the authoritative rendering order. Invariants maintained by the
/// builder: a `Submenu` never has empty `children`, two `Separator`s are
/// never adjacent, and a sibling list never ends with a `Separator`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayMenuNode {
    /// Leaf entry issuing `id` to the command dispatcher when selected.
    Command {
        /// Full command identifier, as received (prefix included).
        id: String,
        /// Display text with the mnemonic marker stripped.
        label: String,
        /// Check indicator, if the command is checked.
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<MenuIcon>,
    },
    /// Nested menu with at least one child.
    Submenu {
        id: String,
        label: String,
        children: Vec<DisplayMenuNode>,
    },
    /// Visual divider between sibling groups.
    Separator,
}

impl DisplayMenuNode {
    /// Whether this entry is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

fn default_true() -> bool {
    true
}

/// Accepts a flag as a JSON bool or as the strings "true"/"false"/"1"/"0".
fn de_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Text(s) => Ok(matches!(s.as_str(), "true" | "1")),
    }
}
