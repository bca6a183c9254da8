//! Recursive filter/transform from the backend's raw menu tree to the
//! display tree.
//!
//! The raw tree carries every command the document knows about; only
//! whitelisted, enabled entries survive. Separators are normalized along
//! the way: never doubled, never trailing, and a group that loses all its
//! items loses its separator too.

use crate::error::{DocviewError, Result};
use crate::types::{DisplayMenuNode, DocumentType, MenuIcon, RawMenuNode, RawNodeKind};
use super::whitelist::WhitelistPolicy;

/// Builds display menu trees against a fixed whitelist policy.
///
/// Holds no other state; `build` is pure in its inputs and every call
/// produces a fresh tree.
#[derive(Debug, Clone, Default)]
pub struct MenuTreeBuilder {
    policy: WhitelistPolicy,
}

impl MenuTreeBuilder {
    /// Create a builder over a load-once policy.
    pub fn new(policy: WhitelistPolicy) -> Self {
        Self { policy }
    }

    /// The policy this builder filters against.
    pub fn policy(&self) -> &WhitelistPolicy {
        &self.policy
    }

    /// Build the display tree for one menu-open event.
    ///
    /// `nodes` is the raw top-level sibling list from the backend. Sibling
    /// order is preserved. Malformed command/menu nodes (missing or
    /// too-short command identifier) are skipped along with their subtrees
    /// so one bad entry cannot take down the whole menu.
    ///
    /// # Errors
    /// Returns [`DocviewError::EmptyMenu`] when filtering leaves no
    /// top-level entries; callers treat that as "show no menu".
    pub fn build(
        &self,
        nodes: &[RawMenuNode],
        doc_type: DocumentType,
    ) -> Result<Vec<DisplayMenuNode>> {
        let entries = self.build_level(nodes, doc_type);
        if entries.is_empty() {
            return Err(DocviewError::EmptyMenu);
        }
        Ok(entries)
    }

    /// Filter and transform one sibling list.
    fn build_level(&self, nodes: &[RawMenuNode], doc_type: DocumentType) -> Vec<DisplayMenuNode> {
        let mut entries: Vec<DisplayMenuNode> = Vec::new();
        // Tracks whether an item has been emitted since the last committed
        // separator; gates separator emission so they never double up.
        let mut emitted_since_separator = false;

        for node in nodes {
            if !node.enabled {
                continue;
            }

            if node.kind == RawNodeKind::Separator {
                if emitted_since_separator {
                    entries.push(DisplayMenuNode::Separator);
                    emitted_since_separator = false;
                }
                continue;
            }

            // Skip malformed nodes (and their subtrees) rather than failing
            // the whole build; the backend tree degrades gracefully.
            let Ok(name) = node.command_name() else {
                continue;
            };
            if !self.policy.admits(name, doc_type) {
                continue;
            }

            // id keeps the full command string; the dispatcher issues it
            // back to the backend verbatim.
            let id = node.command.clone().unwrap_or_default();
            let label = display_label(node);

            match node.kind {
                RawNodeKind::Command => {
                    let icon: Option<MenuIcon> =
                        node.checktype.filter(|_| node.checked).map(MenuIcon::from);
                    entries.push(DisplayMenuNode::Command { id, label, icon });
                    emitted_since_separator = true;
                }
                RawNodeKind::Menu => {
                    let children = self.build_level(&node.children, doc_type);
                    // A submenu whose items were all filtered out vanishes
                    // and does not count as emitted.
                    if children.is_empty() {
                        continue;
                    }
                    entries.push(DisplayMenuNode::Submenu {
                        id,
                        label,
                        children,
                    });
                    emitted_since_separator = true;
                }
                RawNodeKind::Separator => {}
            }
        }

        // A menu never ends with a separator.
        if entries.last().is_some_and(DisplayMenuNode::is_separator) {
            entries.pop();
        }

        entries
    }
}

/// Display text with the first mnemonic marker removed.
///
/// "~" marks the keyboard-accelerator character in the source text and has
/// no meaning in a pointer-driven context menu.
fn display_label(node: &RawMenuNode) -> String {
    node.text.as_deref().unwrap_or_default().replacen('~', "", 1)
}
