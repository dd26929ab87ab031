#![allow(dead_code)]

use formdom::{Document, Element, Key};
use formselect::{InstanceRegistry, SelectOptions, SelectWidget};

fn field(select: Element) -> Element {
    Element::div().class("row").child(
        Element::div()
            .class("input-field")
            .child(select)
            .child(Element::label("Form Select")),
    )
}

fn placeholder() -> Element {
    Element::option("", "Choose your option").flag("disabled")
}

/// Single, multiple, grouped and native selects, in that order.
pub fn fixture() -> Document {
    Document::new(
        Element::body()
            .child(field(
                Element::select()
                    .id("normal")
                    .class("normal")
                    .child(placeholder())
                    .child(Element::option("1", "Option 1"))
                    .child(Element::option("2", "Option 2"))
                    .child(Element::option("3", "Option 3").flag("selected")),
            ))
            .child(field(
                Element::select()
                    .id("multiple")
                    .class("multiple")
                    .flag("multiple")
                    .child(placeholder())
                    .child(Element::option("1", "Option 1"))
                    .child(Element::option("2", "Option 2").flag("selected"))
                    .child(Element::option("3", "Option 3").flag("selected")),
            ))
            .child(field(
                Element::select()
                    .id("optgroup")
                    .class("optgroup")
                    .child(
                        Element::optgroup("team 1")
                            .child(Element::option("1", "Option 1"))
                            .child(Element::option("2", "Option 2")),
                    )
                    .child(
                        Element::optgroup("team 2")
                            .child(Element::option("3", "Option 3"))
                            .child(Element::option("4", "Option 4")),
                    )
                    .child(Element::bare_option("After optgroup")),
            ))
            .child(field(
                Element::select()
                    .id("native")
                    .class("browser-default")
                    .child(placeholder().flag("selected"))
                    .child(Element::option("1", "Option 1"))
                    .child(Element::option("2", "Option 2"))
                    .child(Element::option("3", "Option 3")),
            )),
    )
}

/// The fixture with every select initialized and instant transitions.
pub fn setup() -> (Document, InstanceRegistry) {
    setup_with(fixture())
}

pub fn setup_with(mut doc: Document) -> (Document, InstanceRegistry) {
    let mut registry = InstanceRegistry::new();
    registry
        .init_all(&mut doc, &SelectOptions::instant())
        .expect("init_all");
    (doc, registry)
}

pub fn widget<'a>(registry: &'a InstanceRegistry, select_id: &str) -> &'a SelectWidget {
    registry.get_instance(select_id).expect("instance")
}

pub fn click(doc: &mut Document, registry: &mut InstanceRegistry, id: &str) {
    let events = doc.click(id);
    registry.dispatch_all(doc, &events);
}

pub fn blur(doc: &mut Document, registry: &mut InstanceRegistry, id: &str) {
    let events = doc.blur(id);
    registry.dispatch_all(doc, &events);
}

pub fn press(doc: &mut Document, registry: &mut InstanceRegistry, key: Key) {
    let events = doc.press(key);
    registry.dispatch_all(doc, &events);
}

/// Value of the display input, as rendered in the document.
pub fn input_value(doc: &Document, widget: &SelectWidget) -> String {
    doc.get(widget.input_id())
        .map(|e| e.value().to_string())
        .unwrap_or_default()
}

/// Rows matching `li:not(.disabled):not(.optgroup)`.
pub fn selectable_rows(doc: &Document, widget: &SelectWidget) -> Vec<String> {
    doc.query_within(widget.list_id(), &|e| {
        e.tag == "li" && !e.has_class("disabled") && !e.has_class("optgroup")
    })
}

/// Rows matching `li:not(.disabled)`.
pub fn enabled_rows(doc: &Document, widget: &SelectWidget) -> Vec<String> {
    doc.query_within(widget.list_id(), &|e| e.tag == "li" && !e.has_class("disabled"))
}

pub fn attr(doc: &Document, id: &str, name: &str) -> Option<String> {
    doc.get(id).and_then(|e| e.get_attr(name)).map(str::to_string)
}

pub fn text(doc: &Document, id: &str) -> String {
    doc.get(id).map(|e| e.inner_text()).unwrap_or_default()
}

/// Values of the native select's selected options (`option:checked`).
pub fn checked_values(doc: &Document, select_id: &str) -> Vec<String> {
    doc.query_within(select_id, &|e| e.tag == "option" && e.has_attr("selected"))
        .iter()
        .filter_map(|id| doc.get(id))
        .map(|e| {
            e.get_attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| e.inner_text())
        })
        .collect()
}
