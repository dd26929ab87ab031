mod common;

use std::time::{Duration, Instant};

use common::*;
use formdom::{Document, Element};
use formselect::{InstanceRegistry, SelectOptions};

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_destroy_restores_native_select() {
    let (mut doc, mut registry) = setup();
    let wrapper_id = widget(&registry, "normal").wrapper_id().to_string();

    registry.destroy(&mut doc, "normal").unwrap();

    assert!(doc.get(&wrapper_id).is_none());
    let parent = doc.parent("normal").unwrap();
    assert!(parent.has_class("input-field"));
    assert!(doc.is_visible("normal"));
    // Selection made while the widget was live stays on the native control
    assert_eq!(checked_values(&doc, "normal"), vec!["3"]);
    assert!(registry.get_instance("normal").is_none());
}

#[test]
fn test_destroy_drops_focus_from_generated_elements() {
    let (mut doc, mut registry) = setup();
    let input_id = widget(&registry, "normal").input_id().to_string();
    click(&mut doc, &mut registry, &input_id);
    assert_eq!(doc.focused(), Some(input_id.as_str()));

    registry.destroy(&mut doc, "normal").unwrap();

    assert_eq!(doc.focused(), None);
}

#[test]
fn test_destroy_keeps_focus_elsewhere() {
    let (mut doc, mut registry) = setup();
    let other_input = widget(&registry, "multiple").input_id().to_string();
    click(&mut doc, &mut registry, &other_input);

    registry.destroy(&mut doc, "normal").unwrap();

    assert_eq!(doc.focused(), Some(other_input.as_str()));
}

#[test]
fn test_reinitialize_after_destroy() {
    let (mut doc, mut registry) = setup();
    registry.destroy(&mut doc, "multiple").unwrap();

    let id = registry
        .init(&mut doc, "multiple", SelectOptions::instant())
        .unwrap();

    assert!(id.is_some());
    assert_eq!(
        input_value(&doc, widget(&registry, "multiple")),
        "Option 2, Option 3"
    );
}

#[test]
fn test_destroyed_widget_ignores_events() {
    let (mut doc, mut registry) = setup();
    let input_id = widget(&registry, "normal").input_id().to_string();
    registry.destroy(&mut doc, "normal").unwrap();

    let events = doc.click(&input_id);
    registry.dispatch_all(&mut doc, &events);

    assert!(doc.get(&input_id).is_none());
}

// ============================================================================
// External Changes
// ============================================================================

#[test]
fn test_change_event_resyncs_selection() {
    let (mut doc, mut registry) = setup();

    for option in doc.query_within("normal", &|e| e.tag == "option") {
        let element = doc.get_mut(&option).unwrap();
        if element.value() == "1" {
            element.set_attr("selected", "");
        } else {
            element.remove_attr("selected");
        }
    }
    let events = doc.change("normal");
    registry.dispatch_all(&mut doc, &events);

    let select = widget(&registry, "normal");
    assert_eq!(select.display_text(), "Option 1");
    assert_eq!(input_value(&doc, select), "Option 1");
    assert_eq!(select.get_selected_values(&doc), vec!["1"]);
    assert_eq!(
        attr(&doc, &select.rows()[1].id, "aria-selected").as_deref(),
        Some("true")
    );
}

#[test]
fn test_selected_values_follow_host_edits_without_change_event() {
    let (mut doc, registry) = setup();

    for option in doc.query_within("normal", &|e| e.tag == "option") {
        let element = doc.get_mut(&option).unwrap();
        if element.value() == "1" {
            element.set_attr("selected", "");
        } else {
            element.remove_attr("selected");
        }
    }

    let select = widget(&registry, "normal");
    assert_eq!(checked_values(&doc, "normal"), vec!["1"]);
    assert_eq!(select.get_selected_values(&doc), checked_values(&doc, "normal"));
}

#[test]
fn test_change_event_picks_up_new_options() {
    let (mut doc, mut registry) = setup();

    doc.get_mut("normal")
        .unwrap()
        .child_elements_mut()
        .unwrap()
        .push(Element::option("4", "Option 4"));
    let events = doc.change("normal");
    registry.dispatch_all(&mut doc, &events);

    let (input_id, new_row) = {
        let select = widget(&registry, "normal");
        assert_eq!(select.rows().len(), 5);
        (select.input_id().to_string(), select.rows()[4].id.clone())
    };

    // The new row is wired up like the others
    click(&mut doc, &mut registry, &input_id);
    click(&mut doc, &mut registry, &new_row);
    assert_eq!(widget(&registry, "normal").get_selected_values(&doc), vec!["4"]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_native_class() {
    let mut doc = Document::new(
        Element::body()
            .child(
                Element::select()
                    .id("a")
                    .class("plain")
                    .child(Element::option("1", "One")),
            )
            .child(
                Element::select()
                    .id("b")
                    .class("browser-default")
                    .child(Element::option("1", "One")),
            ),
    );
    let mut registry = InstanceRegistry::new();
    let options = SelectOptions::instant().native_class("plain");

    registry.init_all(&mut doc, &options).unwrap();

    assert!(registry.get_instance("a").is_none());
    assert!(registry.get_instance("b").is_some());
}

#[test]
fn test_options_from_json() {
    let mut doc = fixture();
    let mut registry = InstanceRegistry::new();
    let options = SelectOptions::from_json(
        r#"{ "openAnimationDuration": 0, "closeAnimationDuration": 0 }"#,
    )
    .unwrap();

    registry.init_all(&mut doc, &options).unwrap();
    let input_id = widget(&registry, "normal").input_id().to_string();
    click(&mut doc, &mut registry, &input_id);

    assert!(!widget(&registry, "normal").is_animating());
}

#[test]
fn test_transitions_do_not_gate_state() {
    let mut doc = fixture();
    let mut registry = InstanceRegistry::new();
    let options = SelectOptions::new()
        .open_animation_duration(5_000)
        .close_animation_duration(5_000);
    registry.init_all(&mut doc, &options).unwrap();
    let (input_id, list_id) = {
        let select = widget(&registry, "normal");
        (select.input_id().to_string(), select.list_id().to_string())
    };

    click(&mut doc, &mut registry, &input_id);

    // State changes immediately, the transition is presentational
    let select = widget(&registry, "normal");
    assert!(select.is_open());
    assert!(doc.is_visible(&list_id));
    assert!(select.is_animating());
    assert!(select.popup_opacity(Instant::now()).is_some());

    registry.tick(Instant::now() + Duration::from_secs(10));
    assert!(!widget(&registry, "normal").is_animating());

    click(&mut doc, &mut registry, "body");
    let select = widget(&registry, "normal");
    assert!(!select.is_open());
    assert!(!doc.is_visible(&list_id));
    assert!(select.is_animating());
}
