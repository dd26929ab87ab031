//! Select widget - a dropdown mirroring a native select control.

use std::time::Instant;

use formdom::{AnimationState, Document, Element, Fade};
use uuid::Uuid;

use crate::config::SelectOptions;
use crate::error::{Result, SelectError};
use crate::rows::{PresentationRow, build_rows};
use crate::source::SourceControl;

/// Unique identifier for a select widget instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Create a new unique instance ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open,
}

/// A dropdown select bound to a native `select` element.
///
/// Initialization wraps the native control in a `div.select-wrapper` holding
/// a read-only display input and a popup list, and hides the native control.
/// All later state changes are written straight back into the document, so
/// the native control, the display input and the row attributes always agree.
#[derive(Debug)]
pub struct SelectWidget {
    id: InstanceId,
    source: SourceControl,
    rows: Vec<PresentationRow>,
    display: String,
    state: PopupState,
    /// Keyboard cursor, as a row index.
    cursor: Option<usize>,
    options: SelectOptions,
    animation: AnimationState,
    wrapper_id: String,
    input_id: String,
    list_id: String,
    source_was_visible: bool,
}

impl SelectWidget {
    /// Build the widget for the select element with the given ID.
    ///
    /// Returns `Ok(None)` without touching the document when the control opts
    /// out of the widget.
    pub fn init(
        doc: &mut Document,
        select_id: &str,
        options: SelectOptions,
    ) -> Result<Option<Self>> {
        let element = doc
            .get(select_id)
            .ok_or_else(|| SelectError::ElementNotFound(select_id.to_string()))?;
        let mut source = SourceControl::from_element(element)?;
        if SourceControl::is_passthrough(element, &options.native_class) {
            log::debug!("SelectWidget::init {select_id} uses native rendering");
            return Ok(None);
        }
        let source_was_visible = element.visible;

        source.normalize();
        source.write_selection(doc);

        let id = InstanceId::new();
        let list_id = format!("select-options-{id}");
        let rows = build_rows(&source, &list_id);
        let mut widget = Self {
            id,
            display: String::new(),
            rows,
            state: PopupState::Closed,
            cursor: None,
            options,
            animation: AnimationState::new(),
            wrapper_id: format!("select-wrapper-{id}"),
            input_id: format!("select-input-{id}"),
            list_id,
            source_was_visible,
            source,
        };
        widget.display = widget.summary();

        log::debug!(
            "SelectWidget::init id={} select={} multiple={} rows={} display={:?}",
            widget.id,
            select_id,
            widget.source.multiple,
            widget.rows.len(),
            widget.display
        );

        let wrapper = Element::div()
            .id(&widget.wrapper_id)
            .class("select-wrapper")
            .child(widget.input_element())
            .child(widget.list_element());
        doc.replace_with(select_id, |mut select| {
            select.visible = false;
            wrapper.child(select)
        });

        Ok(Some(widget))
    }

    /// Remove the generated structure and put the native control back.
    pub fn destroy(self, doc: &mut Document) -> Result<()> {
        let source_id = self.source.id.clone();
        let visible = self.source_was_visible;
        let mut restored = false;

        let generated_focus = doc
            .focused()
            .is_some_and(|f| f != source_id && self.owns_element(doc, f));
        if generated_focus {
            doc.blur_focused();
        }

        let replaced = doc.replace_with(&self.wrapper_id, |mut wrapper| {
            let Some(children) = wrapper.child_elements_mut() else {
                return wrapper;
            };
            let Some(pos) = children.iter().position(|c| c.id == source_id) else {
                return wrapper;
            };
            let mut select = children.remove(pos);
            select.visible = visible;
            restored = true;
            select
        });

        if !replaced {
            return Err(SelectError::ElementNotFound(self.wrapper_id));
        }
        if !restored {
            return Err(SelectError::ElementNotFound(source_id));
        }
        log::debug!("SelectWidget::destroy id={} select={}", self.id, source_id);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// ID of the native select element.
    pub fn source_id(&self) -> &str {
        &self.source.id
    }

    pub fn source(&self) -> &SourceControl {
        &self.source
    }

    pub fn wrapper_id(&self) -> &str {
        &self.wrapper_id
    }

    /// ID of the display input.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// ID of the popup list.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    pub fn rows(&self) -> &[PresentationRow] {
        &self.rows
    }

    pub fn row_index(&self, row_id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id == row_id)
    }

    pub fn is_multiple(&self) -> bool {
        self.source.multiple
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    /// Current text of the display input.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn placeholder(&self) -> &str {
        self.source.placeholder().unwrap_or("")
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Values of the native control's selected options, in document order.
    ///
    /// Read from the document, so host edits made without a change event are
    /// reported too.
    pub fn get_selected_values(&self, doc: &Document) -> Vec<String> {
        match SourceControl::read(doc, &self.source.id) {
            Ok(source) => source.selected_values(),
            Err(err) => {
                log::warn!("SelectWidget::get_selected_values id={}: {err}", self.id);
                self.source.selected_values()
            }
        }
    }

    /// Whether an element belongs to this widget's generated structure.
    pub fn owns_element(&self, doc: &Document, id: &str) -> bool {
        doc.contains(&self.wrapper_id, id)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating(&self.list_id)
    }

    /// Opacity of the popup while a transition runs.
    pub fn popup_opacity(&self, now: Instant) -> Option<f32> {
        self.animation.opacity(&self.list_id, now)
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        self.animation.update(now);
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Open the popup. Disabled controls never open.
    pub fn open(&mut self, doc: &mut Document) {
        if self.is_open() {
            return;
        }
        if self.source.disabled {
            log::debug!("SelectWidget::open id={} ignored, control disabled", self.id);
            return;
        }

        self.state = PopupState::Open;
        self.cursor = self
            .rows
            .iter()
            .position(|r| r.is_selectable() && r.selected);
        self.animation.start(
            &self.list_id,
            Fade::In,
            self.options.open_transition(),
            Instant::now(),
        );
        log::debug!("SelectWidget::open id={}", self.id);
        self.render(doc);
    }

    /// Close the popup. An empty selection shows the placeholder again.
    pub fn close(&mut self, doc: &mut Document) {
        if !self.is_open() {
            return;
        }

        self.state = PopupState::Closed;
        self.cursor = None;
        if self.source.selected_indices().is_empty() {
            self.display = self.placeholder().to_string();
        }
        self.animation.start(
            &self.list_id,
            Fade::Out,
            self.options.close_transition(),
            Instant::now(),
        );
        log::debug!("SelectWidget::close id={} display={:?}", self.id, self.display);
        self.render(doc);
    }

    /// Activate a row.
    ///
    /// Headers, disabled rows and rows of a closed popup are inert. Returns
    /// true if the selection changed.
    pub fn activate(&mut self, doc: &mut Document, row: usize) -> bool {
        let Some(target) = self.rows.get(row) else {
            return false;
        };
        let (true, Some(option)) = (target.is_selectable(), target.option) else {
            log::debug!("SelectWidget::activate id={} row {} is inert", self.id, row);
            return false;
        };
        if !self.is_open() {
            log::debug!("SelectWidget::activate id={} popup closed", self.id);
            return false;
        }

        self.cursor = Some(row);
        let changed = if self.source.multiple {
            let selected = &mut self.source.options[option].selected;
            *selected = !*selected;
            self.display = self.source.selected_labels().join(", ");
            true
        } else {
            let changed = !self.source.options[option].selected;
            for (i, o) in self.source.options.iter_mut().enumerate() {
                o.selected = i == option;
            }
            self.display = self.source.options[option].label.clone();
            changed
        };

        log::debug!(
            "SelectWidget::activate id={} row={} value={:?} selected={:?}",
            self.id,
            row,
            self.source.options[option].value,
            self.source.selected_values()
        );

        self.sync_rows();
        self.source.write_selection(doc);
        if self.source.multiple {
            self.render(doc);
        } else {
            self.close(doc);
        }
        changed
    }

    /// Activate the row under the keyboard cursor.
    pub fn activate_cursor(&mut self, doc: &mut Document) -> bool {
        match self.cursor {
            Some(row) => self.activate(doc, row),
            None => false,
        }
    }

    /// Move the keyboard cursor by `delta` selectable rows, clamped to the list.
    pub fn move_cursor(&mut self, doc: &mut Document, delta: isize) {
        let selectable = self.selectable_rows();
        if selectable.is_empty() {
            return;
        }

        let next = match self.cursor.and_then(|c| selectable.iter().position(|&r| r == c)) {
            Some(pos) => pos.saturating_add_signed(delta).min(selectable.len() - 1),
            None if delta < 0 => selectable.len() - 1,
            None => 0,
        };
        self.set_cursor(doc, selectable[next]);
    }

    /// Move the cursor to the first or last selectable row.
    pub fn cursor_to_edge(&mut self, doc: &mut Document, last: bool) {
        let selectable = self.selectable_rows();
        let edge = if last {
            selectable.last()
        } else {
            selectable.first()
        };
        if let Some(&row) = edge {
            self.set_cursor(doc, row);
        }
    }

    /// Move the cursor to the next selectable row whose text starts with `c`.
    pub fn cursor_to_char(&mut self, doc: &mut Document, c: char) {
        let needle = c.to_lowercase().to_string();
        let start = self.cursor.map(|r| r + 1).unwrap_or(0);
        let count = self.rows.len();

        let found = (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&i| {
                let row = &self.rows[i];
                row.is_selectable() && row.text.to_lowercase().starts_with(&needle)
            });
        if let Some(row) = found {
            self.set_cursor(doc, row);
        }
    }

    /// Re-read the native control after the host changed it.
    pub fn refresh(&mut self, doc: &mut Document) -> Result<()> {
        let mut source = SourceControl::read(doc, &self.source.id)?;
        source.normalize();
        source.write_selection(doc);
        self.source = source;
        self.rows = build_rows(&self.source, &self.list_id);
        self.cursor = None;
        self.display = self.summary();
        log::debug!(
            "SelectWidget::refresh id={} rows={} display={:?}",
            self.id,
            self.rows.len(),
            self.display
        );
        self.render(doc);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    /// Display text for the current selection: the joined labels or the placeholder.
    fn summary(&self) -> String {
        let labels = self.source.selected_labels();
        if labels.is_empty() {
            self.placeholder().to_string()
        } else {
            labels.join(", ")
        }
    }

    fn selectable_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }

    fn set_cursor(&mut self, doc: &mut Document, row: usize) {
        if self.cursor != Some(row) {
            self.cursor = Some(row);
            self.render(doc);
        }
    }

    fn sync_rows(&mut self) {
        for row in &mut self.rows {
            if let Some(option) = row.option {
                row.selected = self.source.options[option].selected;
            }
        }
    }

    fn input_element(&self) -> Element {
        let mut input = Element::input()
            .id(&self.input_id)
            .class("select-dropdown")
            .class("dropdown-trigger")
            .attr("type", "text")
            .attr("readonly", "true")
            .attr("value", &self.display)
            .attr("aria-haspopup", "listbox")
            .attr("aria-controls", &self.list_id)
            .attr("aria-expanded", if self.is_open() { "true" } else { "false" });
        if self.source.disabled {
            input = input.flag("disabled");
        }
        input
    }

    fn list_element(&self) -> Element {
        Element::new("ul")
            .id(&self.list_id)
            .class("dropdown-content")
            .class("select-dropdown")
            .attr("role", "listbox")
            .attr(
                "aria-multiselectable",
                if self.source.multiple { "true" } else { "false" },
            )
            .focusable(true)
            .visible(self.is_open())
            .children(
                self.rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| row.to_element(self.cursor == Some(i))),
            )
    }

    /// Write display input and popup list back into the document.
    fn render(&self, doc: &mut Document) {
        let input = self.input_element();
        let list = self.list_element();
        if !doc.replace_with(&self.input_id, |_| input) {
            log::warn!("SelectWidget::render id={} input missing", self.id);
        }
        if !doc.replace_with(&self.list_id, |_| list) {
            log::warn!("SelectWidget::render id={} list missing", self.id);
        }
    }
}
