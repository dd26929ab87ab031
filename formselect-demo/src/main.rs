//! Scripted walkthrough of the select widget.
//!
//! Usage: `formselect-demo [options.json]`. Logs go to `formselect-demo.log`.

use std::fs::File;

use formdom::{Document, Element, Event};
use formselect::{InstanceRegistry, RowKind, SelectOptions, SelectWidget};
use simplelog::{Config, LevelFilter, WriteLogger};

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

fn fixture() -> Document {
    let placeholder = || Element::option("", "Choose your option").flag("disabled");

    Document::new(
        Element::body()
            .child(
                Element::select()
                    .id("flavour")
                    .child(placeholder())
                    .child(Element::option("vanilla", "Vanilla"))
                    .child(Element::option("chocolate", "Chocolate").flag("selected"))
                    .child(Element::option("mint", "Mint")),
            )
            .child(
                Element::select()
                    .id("toppings")
                    .flag("multiple")
                    .child(placeholder())
                    .child(Element::option("nuts", "Nuts"))
                    .child(Element::option("sprinkles", "Sprinkles").flag("selected"))
                    .child(Element::option("sauce", "Sauce")),
            )
            .child(
                Element::select()
                    .id("cone")
                    .child(
                        Element::optgroup("Wafer")
                            .child(Element::option("plain", "Plain wafer"))
                            .child(Element::option("sugar", "Sugar wafer")),
                    )
                    .child(
                        Element::optgroup("Waffle")
                            .child(Element::option("belgian", "Belgian waffle"))
                            .child(Element::option("dipped", "Dipped waffle")),
                    )
                    .child(Element::bare_option("Cup")),
            )
            .child(
                Element::select()
                    .id("size")
                    .class("browser-default")
                    .child(Element::option("s", "Small"))
                    .child(Element::option("l", "Large")),
            ),
    )
}

fn load_options(path: Option<&str>) -> DemoResult<SelectOptions> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(SelectOptions::from_json(&json)?)
        }
        None => Ok(SelectOptions::instant()),
    }
}

fn print_widget(doc: &Document, widget: &SelectWidget) {
    let state = if widget.is_open() { "open" } else { "closed" };
    println!(
        "{} ({}, {}): {:?} values={:?}",
        widget.source_id(),
        if widget.is_multiple() { "multiple" } else { "single" },
        state,
        widget.display_text(),
        widget.get_selected_values(doc)
    );

    for row in widget.rows() {
        let Some(element) = doc.get(&row.id) else {
            continue;
        };
        let marker = match row.kind {
            RowKind::Header => "#",
            RowKind::DisabledItem => "-",
            RowKind::SelectableItem if row.selected => "*",
            RowKind::SelectableItem => " ",
        };
        let indent = if row.indented { "    " } else { "  " };
        let aria = element
            .get_attr("aria-selected")
            .or_else(|| element.get_attr("aria-owns"))
            .unwrap_or("");
        println!("{indent}{marker} {} [{aria}]", row.text);
    }
}

fn print_all(doc: &Document, registry: &InstanceRegistry) {
    for widget in registry.iter() {
        print_widget(doc, widget);
    }
    println!();
}

fn deliver(doc: &mut Document, registry: &mut InstanceRegistry, events: Vec<Event>) {
    registry.dispatch_all(doc, &events);
}

/// Click the first row with the given text.
fn click_row(doc: &mut Document, registry: &mut InstanceRegistry, select_id: &str, text: &str) {
    let row_id = registry
        .get_instance(select_id)
        .and_then(|w| w.rows().iter().find(|r| r.text == text))
        .map(|r| r.id.clone());
    match row_id {
        Some(row_id) => {
            let events = doc.click(&row_id);
            deliver(doc, registry, events);
        }
        None => log::warn!("no row {text:?} in {select_id}"),
    }
}

fn open(doc: &mut Document, registry: &mut InstanceRegistry, select_id: &str) {
    let Some(input_id) = registry
        .get_instance(select_id)
        .map(|w| w.input_id().to_string())
    else {
        return;
    };
    let events = doc.click(&input_id);
    deliver(doc, registry, events);
}

fn run(config_path: Option<&str>) -> DemoResult<()> {
    let options = load_options(config_path)?;
    log::info!("options: {options:?}");

    let mut doc = fixture();
    let mut registry = InstanceRegistry::new();
    let created = registry.init_all(&mut doc, &options)?;
    println!("initialized {} selects (native: size)\n", created.len());
    print_all(&doc, &registry);

    println!("> pick Mint");
    open(&mut doc, &mut registry, "flavour");
    click_row(&mut doc, &mut registry, "flavour", "Mint");
    print_all(&doc, &registry);

    println!("> toggle Nuts and Sprinkles, click outside");
    open(&mut doc, &mut registry, "toppings");
    click_row(&mut doc, &mut registry, "toppings", "Nuts");
    click_row(&mut doc, &mut registry, "toppings", "Sprinkles");
    let events = doc.click("body");
    deliver(&mut doc, &mut registry, events);
    print_all(&doc, &registry);

    println!("> click the Waffle group header");
    open(&mut doc, &mut registry, "cone");
    click_row(&mut doc, &mut registry, "cone", "Waffle");
    print_all(&doc, &registry);

    for select_id in ["flavour", "toppings", "cone"] {
        registry.destroy(&mut doc, select_id)?;
    }
    println!("torn down, {} instances left", registry.len());
    Ok(())
}

fn main() {
    if let Ok(log_file) = File::create("formselect-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config_path = std::env::args().nth(1);
    if let Err(e) = run(config_path.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
