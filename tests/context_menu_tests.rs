//! Context menu builder tests
//!
//! Tests for whitelist filtering, separator normalization, submenu
//! pruning, mnemonic/icon handling, and raw payload parsing.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use docview::{
    DisplayMenuNode, DocumentType, DocviewError, MenuIcon, MenuTreeBuilder, RawMenuNode,
    WhitelistPolicy,
};
use test_case::test_case;

fn builder() -> MenuTreeBuilder {
    MenuTreeBuilder::new(WhitelistPolicy::default())
}

fn nodes(json: &str) -> Vec<RawMenuNode> {
    serde_json::from_str(json).unwrap()
}

fn labels(entries: &[DisplayMenuNode]) -> Vec<String> {
    entries
        .iter()
        .map(|e| match e {
            DisplayMenuNode::Command { label, .. } | DisplayMenuNode::Submenu { label, .. } => {
                label.clone()
            }
            DisplayMenuNode::Separator => "---".to_string(),
        })
        .collect()
}

#[test]
fn whitelisted_command_survives_with_mnemonic_stripped() {
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Cut", "text": "Cu~t", "enabled": "true"},
            {"type": "separator"},
            {"type": "command", "command": ".uno:Foo", "text": "Foo", "enabled": "true"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();

    // Foo is whitelisted nowhere; the separator would be trailing.
    assert_eq!(menu.len(), 1);
    let DisplayMenuNode::Command { id, label, icon } = &menu[0] else {
        panic!("expected a command entry");
    };
    assert_eq!(id, ".uno:Cut");
    assert_eq!(label, "Cut");
    assert!(icon.is_none());
}

#[test]
fn disabled_items_are_skipped() {
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Cut", "text": "Cut", "enabled": "false"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy", "enabled": "true"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();
    assert_eq!(labels(&menu), vec!["Copy"]);
}

#[test]
fn separators_never_double_even_when_items_between_them_vanish() {
    // Foo and Bar are not whitelisted, so both separators guard the same
    // boundary; only one may survive.
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Cut", "text": "Cut"},
            {"type": "separator"},
            {"type": "command", "command": ".uno:Foo", "text": "Foo"},
            {"type": "command", "command": ".uno:Bar", "text": "Bar"},
            {"type": "separator"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();
    assert_eq!(labels(&menu), vec!["Cut", "---", "Copy"]);
}

#[test]
fn leading_separator_is_never_emitted() {
    let raw = nodes(
        r#"[{"type": "separator"},
            {"type": "command", "command": ".uno:Paste", "text": "Paste"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Spreadsheet).unwrap();
    assert_eq!(labels(&menu), vec!["Paste"]);
}

#[test]
fn trailing_separator_is_removed() {
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Cut", "text": "Cut"},
            {"type": "separator"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();
    assert_eq!(labels(&menu), vec!["Cut"]);
    assert!(!menu.last().unwrap().is_separator());
}

#[test]
fn submenu_with_all_children_filtered_is_dropped() {
    let raw = nodes(
        r#"[{"type": "menu", "command": ".uno:RotateMenu", "text": "Rotate",
             "menu": [{"type": "command", "command": ".uno:NotWhitelisted", "text": "X"}]},
            {"type": "command", "command": ".uno:Copy", "text": "Copy"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Drawing).unwrap();
    assert_eq!(labels(&menu), vec!["Copy"]);
}

#[test]
fn dropped_submenu_does_not_count_for_separator_bookkeeping() {
    let raw = nodes(
        r#"[{"type": "menu", "command": ".uno:RotateMenu", "text": "Rotate",
             "menu": [{"type": "command", "command": ".uno:Nope", "text": "X"}]},
            {"type": "separator"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();
    // Nothing was emitted before the separator, so it must not appear.
    assert_eq!(labels(&menu), vec!["Copy"]);
}

#[test]
fn nested_submenus_filter_recursively() {
    let raw = nodes(
        r#"[{"type": "menu", "command": ".uno:ArrangeMenu", "text": "~Arrange",
             "menu": [
               {"type": "command", "command": ".uno:BringToFront", "text": "Bring to ~Front"},
               {"type": "command", "command": ".uno:Secret", "text": "Secret"},
               {"type": "menu", "command": ".uno:RotateMenu", "text": "~Rotate",
                "menu": [
                  {"type": "command", "command": ".uno:RotateLeft", "text": "Left"},
                  {"type": "command", "command": ".uno:RotateRight", "text": "Right",
                   "enabled": "false"}
                ]}
             ]}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Presentation).unwrap();

    let DisplayMenuNode::Submenu { label, children, .. } = &menu[0] else {
        panic!("expected a submenu");
    };
    assert_eq!(label, "Arrange");
    assert_eq!(labels(children), vec!["Bring to Front", "Rotate"]);

    let DisplayMenuNode::Submenu { children: inner, .. } = &children[1] else {
        panic!("expected nested submenu");
    };
    assert_eq!(labels(inner), vec!["Left"]);
}

#[test]
fn non_whitelisted_menu_drops_whole_subtree() {
    // TableInsertMenu is text-only; in a spreadsheet its whitelisted
    // descendants must not leak out.
    let raw = nodes(
        r#"[{"type": "menu", "command": ".uno:TableInsertMenu", "text": "Insert",
             "menu": [{"type": "command", "command": ".uno:Cut", "text": "Cut"}]}]"#,
    );
    let result = builder().build(&raw, DocumentType::Spreadsheet);
    assert!(matches!(result, Err(DocviewError::EmptyMenu)));
}

#[test_case(DocumentType::Text, "DeleteTable", true ; "text admits its own commands")]
#[test_case(DocumentType::Spreadsheet, "DeleteTable", false ; "spreadsheet rejects text commands")]
#[test_case(DocumentType::Spreadsheet, "SplitCells", true ; "spreadsheet admits its own commands")]
#[test_case(DocumentType::Presentation, "SplitCells", false ; "presentation has no extra commands")]
#[test_case(DocumentType::Drawing, "Copy", true ; "drawing falls back to general like every type")]
fn per_document_type_admission(doc_type: DocumentType, command: &str, admitted: bool) {
    let raw = nodes(&format!(
        r#"[{{"type": "command", "command": ".uno:{command}", "text": "{command}"}}]"#
    ));
    let result = builder().build(&raw, doc_type);
    assert_eq!(result.is_ok(), admitted);
}

#[test]
fn checkmark_and_radio_icons_require_checked() {
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Cut", "text": "Cut",
             "checktype": "checkmark", "checked": "true"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy",
             "checktype": "radio", "checked": "true"},
            {"type": "command", "command": ".uno:Paste", "text": "Paste",
             "checktype": "checkmark", "checked": "false"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();

    let icons: Vec<Option<MenuIcon>> = menu
        .iter()
        .map(|e| match e {
            DisplayMenuNode::Command { icon, .. } => *icon,
            _ => None,
        })
        .collect();
    assert_eq!(
        icons,
        vec![Some(MenuIcon::Checkmark), Some(MenuIcon::Radio), None]
    );
}

#[test]
fn malformed_nodes_are_skipped_not_fatal() {
    let raw = nodes(
        r#"[{"type": "command", "text": "No command"},
            {"type": "command", "command": ".un", "text": "Too short"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy"}]"#,
    );
    let menu = builder().build(&raw, DocumentType::Text).unwrap();
    assert_eq!(labels(&menu), vec!["Copy"]);
}

#[test]
fn all_filtered_out_signals_empty_menu() {
    let raw = nodes(r#"[{"type": "command", "command": ".uno:Foo", "text": "Foo"}]"#);
    let result = builder().build(&raw, DocumentType::Text);
    assert!(matches!(result, Err(DocviewError::EmptyMenu)));

    let result = builder().build(&[], DocumentType::Text);
    assert!(matches!(result, Err(DocviewError::EmptyMenu)));
}

#[test]
fn build_is_pure_and_order_preserving() {
    let raw = nodes(
        r#"[{"type": "command", "command": ".uno:Paste", "text": "Paste"},
            {"type": "command", "command": ".uno:Copy", "text": "Copy"},
            {"type": "command", "command": ".uno:Cut", "text": "Cut"}]"#,
    );
    let b = builder();
    let first = b.build(&raw, DocumentType::Text).unwrap();
    let second = b.build(&raw, DocumentType::Text).unwrap();
    assert_eq!(first, second);
    assert_eq!(labels(&first), vec!["Paste", "Copy", "Cut"]);
}

#[test]
fn payload_entry_point_parses_backend_wire_format() {
    let payload = r#"{"menu": [
        {"type": "command", "command": ".uno:Cut", "text": "Cu~t", "enabled": "true"},
        {"type": "separator"},
        {"type": "menu", "command": ".uno:PasteSpecialMenu", "text": "Paste ~Special",
         "menu": [{"type": "command", "command": ".uno:PasteUnformatted",
                   "text": "~Unformatted"}]}
    ]}"#;

    let menu =
        docview::context_menu_from_payload(payload, DocumentType::Spreadsheet, &builder()).unwrap();
    assert_eq!(labels(&menu), vec!["Cut", "---", "Paste Special"]);
}

#[test]
fn bad_payload_json_is_a_json_error() {
    let result = docview::context_menu_from_payload("{", DocumentType::Text, &builder());
    assert!(matches!(result, Err(DocviewError::Json(_))));
}

#[test]
fn custom_policy_replaces_the_stock_one() {
    let policy: WhitelistPolicy = serde_json::from_str(
        r#"{"general": [], "perDocType": {"drawing": ["Foo"]}}"#,
    )
    .unwrap();
    let b = MenuTreeBuilder::new(policy);
    assert!(b.policy().admits("Foo", DocumentType::Drawing));
    assert!(!b.policy().admits("Cut", DocumentType::Text));

    let raw = nodes(r#"[{"type": "command", "command": ".uno:Foo", "text": "Foo"}]"#);
    assert!(b.build(&raw, DocumentType::Drawing).is_ok());
    assert!(b.build(&raw, DocumentType::Text).is_err());
}
