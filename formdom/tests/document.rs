use formdom::{collect_focusable, Document, Element, Event, Key};

fn fixture() -> Document {
    Document::new(
        Element::body()
            .child(
                Element::div()
                    .id("row")
                    .child(Element::input().id("first"))
                    .child(
                        Element::new("ul")
                            .id("list")
                            .focusable(true)
                            .child(Element::new("li").id("item").text("Item").focusable(true))
                            .child(Element::new("li").id("header").text("Header")),
                    ),
            )
            .child(Element::input().id("second"))
            .child(Element::input().id("hidden-input").visible(false))
            .child(Element::input().id("disabled-input").disabled(true)),
    )
}

// ============================================================================
// Tree Queries
// ============================================================================

#[test]
fn test_get_and_parent() {
    let doc = fixture();

    assert_eq!(doc.get("item").map(|e| e.tag.as_str()), Some("li"));
    assert_eq!(doc.parent("item").map(|e| e.id.as_str()), Some("list"));
    assert_eq!(doc.parent("body"), None);
    assert!(doc.get("missing").is_none());
}

#[test]
fn test_contains() {
    let doc = fixture();

    assert!(doc.contains("row", "item"));
    assert!(doc.contains("row", "row"));
    assert!(!doc.contains("row", "second"));
}

#[test]
fn test_query_tag_document_order() {
    let doc = fixture();

    assert_eq!(
        doc.query_tag("input"),
        vec!["first", "second", "hidden-input", "disabled-input"]
    );
    assert_eq!(doc.query_tag("li"), vec!["item", "header"]);
}

#[test]
fn test_query_class() {
    let mut doc = fixture();
    doc.get_mut("item").unwrap().add_class("selected");
    doc.get_mut("second").unwrap().add_class("selected");

    assert_eq!(doc.query_class("selected"), vec!["item", "second"]);
    assert_eq!(
        doc.query_within("list", &|e| e.has_class("selected")),
        vec!["item"]
    );
}

#[test]
fn test_inner_text_concatenates_descendants() {
    let doc = fixture();
    assert_eq!(doc.get("list").unwrap().inner_text(), "ItemHeader");
}

#[test]
fn test_visibility_is_inherited() {
    let mut doc = fixture();
    assert!(doc.is_visible("item"));

    doc.get_mut("list").unwrap().visible = false;
    assert!(!doc.is_visible("item"));
    assert!(!doc.is_visible("list"));
    assert!(doc.is_visible("first"));
    assert!(!doc.is_visible("missing"));
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_replace_with_wraps_element() {
    let mut doc = fixture();

    let replaced = doc.replace_with("second", |old| Element::div().id("wrapper").child(old));

    assert!(replaced);
    assert_eq!(doc.parent("second").map(|e| e.id.as_str()), Some("wrapper"));
    assert_eq!(doc.parent("wrapper").map(|e| e.id.as_str()), Some("body"));
    // Position in the parent is kept
    assert_eq!(doc.root().child_elements()[1].id, "wrapper");
}

#[test]
fn test_replace_with_unknown_id() {
    let mut doc = fixture();
    assert!(!doc.replace_with("missing", |old| old));
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_skips_hidden_and_disabled() {
    let doc = fixture();
    assert_eq!(
        collect_focusable(doc.root()),
        vec!["first", "list", "item", "second"]
    );
}

#[test]
fn test_focus_emits_blur_then_focus() {
    let mut doc = fixture();

    assert_eq!(
        doc.focus("first"),
        vec![Event::Focus {
            target: "first".into()
        }]
    );
    assert_eq!(
        doc.focus("second"),
        vec![
            Event::Blur {
                target: "first".into(),
                new_target: Some("second".into())
            },
            Event::Focus {
                target: "second".into()
            },
        ]
    );
    // Re-focusing is a no-op
    assert!(doc.focus("second").is_empty());
}

#[test]
fn test_blur_only_applies_to_focused_element() {
    let mut doc = fixture();
    doc.focus("first");

    assert!(doc.blur("second").is_empty());
    assert_eq!(doc.focused(), Some("first"));

    assert_eq!(
        doc.blur("first"),
        vec![Event::Blur {
            target: "first".into(),
            new_target: None
        }]
    );
    assert_eq!(doc.focused(), None);
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_click_focusable_target() {
    let mut doc = fixture();
    doc.focus("first");

    let events = doc.click("item");
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "first".into(),
                new_target: Some("item".into())
            },
            Event::Focus {
                target: "item".into()
            },
            Event::Click {
                target: Some("item".into())
            },
        ]
    );
}

#[test]
fn test_click_moves_focus_to_focusable_ancestor() {
    let mut doc = fixture();
    doc.focus("first");

    let events = doc.click("header");
    assert_eq!(doc.focused(), Some("list"));
    assert_eq!(
        events.last(),
        Some(&Event::Click {
            target: Some("header".into())
        })
    );
}

#[test]
fn test_click_non_focusable_blurs() {
    let mut doc = fixture();
    doc.focus("first");

    let events = doc.click("body");
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "first".into(),
                new_target: None
            },
            Event::Click {
                target: Some("body".into())
            },
        ]
    );
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_click_document() {
    let mut doc = fixture();
    assert_eq!(doc.click_document(), vec![Event::Click { target: None }]);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_tab_cycles_focus() {
    let mut doc = fixture();
    doc.focus("item");

    let events = doc.press(Key::Tab);
    assert_eq!(doc.focused(), Some("second"));
    assert_eq!(
        events[0],
        Event::Blur {
            target: "item".into(),
            new_target: Some("second".into())
        }
    );

    doc.press(Key::Tab);
    assert_eq!(doc.focused(), Some("first"));

    doc.press(Key::BackTab);
    assert_eq!(doc.focused(), Some("second"));
}

#[test]
fn test_key_targets_focused_element() {
    let mut doc = fixture();
    doc.focus("first");

    assert_eq!(
        doc.press(Key::Down),
        vec![Event::Key {
            target: Some("first".into()),
            key: Key::Down
        }]
    );
}
