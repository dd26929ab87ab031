//! Select widget event handlers.

use formdom::{Document, Event, EventKind, Key};

use crate::handlers::HandlerRegistry;
use crate::widget::SelectWidget;

/// Register every handler the widget needs, keyed by its select's ID.
pub(crate) fn bind(widget: &SelectWidget, handlers: &mut HandlerRegistry) {
    let key = widget.source_id();

    let input = widget.input_id();
    handlers.register(input, EventKind::Focus, key, on_trigger);
    handlers.register(input, EventKind::Click, key, on_trigger);
    handlers.register(input, EventKind::Blur, key, on_blur);
    handlers.register(input, EventKind::Key, key, on_key);

    let list = widget.list_id();
    handlers.register(list, EventKind::Blur, key, on_blur);
    handlers.register(list, EventKind::Key, key, on_key);

    for row in widget.rows() {
        // Headers and disabled rows get a click handler too; it's inert.
        handlers.register(&row.id, EventKind::Click, key, on_row_click);
        if row.is_selectable() {
            handlers.register(&row.id, EventKind::Blur, key, on_blur);
            handlers.register(&row.id, EventKind::Key, key, on_key);
        }
    }

    handlers.register(key, EventKind::Change, key, on_change);
}

fn on_trigger(widget: &mut SelectWidget, doc: &mut Document, _event: &Event) {
    widget.open(doc);
}

/// Close unless focus moved to another element of the same widget.
fn on_blur(widget: &mut SelectWidget, doc: &mut Document, event: &Event) {
    let Event::Blur { new_target, .. } = event else {
        return;
    };
    if let Some(new_target) = new_target {
        if widget.owns_element(doc, new_target) {
            log::trace!("[select] {} focus stays inside ({new_target})", widget.id());
            return;
        }
    }
    widget.close(doc);
}

fn on_row_click(widget: &mut SelectWidget, doc: &mut Document, event: &Event) {
    let Some(row) = event.target().and_then(|id| widget.row_index(id)) else {
        return;
    };
    widget.activate(doc, row);
}

fn on_key(widget: &mut SelectWidget, doc: &mut Document, event: &Event) {
    let Event::Key { key, .. } = event else {
        return;
    };

    if !widget.is_open() {
        if matches!(key, Key::Down | Key::Up | Key::Enter) {
            widget.open(doc);
        }
        return;
    }

    match key {
        Key::Down => widget.move_cursor(doc, 1),
        Key::Up => widget.move_cursor(doc, -1),
        Key::Home => widget.cursor_to_edge(doc, false),
        Key::End => widget.cursor_to_edge(doc, true),
        Key::Enter => {
            widget.activate_cursor(doc);
        }
        Key::Escape => widget.close(doc),
        Key::Char(c) => widget.cursor_to_char(doc, *c),
        Key::Tab | Key::BackTab => {}
    }
}

fn on_change(widget: &mut SelectWidget, doc: &mut Document, _event: &Event) {
    if let Err(err) = widget.refresh(doc) {
        log::warn!("[select] {} refresh failed: {err}", widget.id());
    }
}
