//! Popup list rows generated from the native control.

use formdom::Element;

use crate::source::{SourceControl, SourceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// An `optgroup` label. Never selectable.
    Header,
    SelectableItem,
    DisabledItem,
}

/// One row of the popup list, mirroring an option or a group header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRow {
    pub id: String,
    pub kind: RowKind,
    pub text: String,
    pub selected: bool,
    /// Set on the row directly after a group header.
    pub indented: bool,
    /// Index into [`SourceControl::options`] for option rows.
    pub option: Option<usize>,
    /// Row IDs of the group's members, for header rows.
    pub owns: Vec<String>,
}

impl PresentationRow {
    pub fn is_selectable(&self) -> bool {
        self.kind == RowKind::SelectableItem
    }

    /// `aria-selected` value for option rows, `None` for headers.
    pub fn aria_selected(&self) -> Option<&'static str> {
        match self.kind {
            RowKind::Header => None,
            _ if self.selected => Some("true"),
            _ => Some("false"),
        }
    }

    /// Render the row as a list item. `active` marks the keyboard cursor.
    pub fn to_element(&self, active: bool) -> Element {
        let mut li = Element::new("li").id(&self.id).text(&self.text);

        match self.kind {
            RowKind::Header => {
                li = li
                    .class("optgroup")
                    .attr("role", "group")
                    .attr("aria-owns", self.owns.join(" "));
            }
            RowKind::SelectableItem | RowKind::DisabledItem => {
                li = li.attr("role", "option");
                if let Some(aria) = self.aria_selected() {
                    li = li.attr("aria-selected", aria);
                }
                if self.kind == RowKind::DisabledItem {
                    li = li.class("disabled").attr("aria-disabled", "true");
                } else {
                    li = li.focusable(true);
                }
                if self.selected {
                    li = li.class("selected");
                }
                if self.indented {
                    li = li.class("optgroup-option");
                }
                if active {
                    li = li.class("active");
                }
            }
        }

        li
    }
}

/// Build rows for every option and group of the control, in document order.
pub fn build_rows(source: &SourceControl, list_id: &str) -> Vec<PresentationRow> {
    let row_id = |index: usize| format!("{list_id}-{index}");

    // Row index of every option, so headers can reference their members.
    let mut option_rows = vec![0; source.options.len()];
    for (row, entry) in source.entries.iter().enumerate() {
        if let SourceEntry::Option(option) = entry {
            option_rows[*option] = row;
        }
    }

    source
        .entries
        .iter()
        .enumerate()
        .map(|(row, entry)| match *entry {
            SourceEntry::Group(group) => {
                let group = &source.groups[group];
                PresentationRow {
                    id: row_id(row),
                    kind: RowKind::Header,
                    text: group.label.clone(),
                    selected: false,
                    indented: false,
                    option: None,
                    owns: group
                        .members
                        .iter()
                        .map(|&member| row_id(option_rows[member]))
                        .collect(),
                }
            }
            SourceEntry::Option(index) => {
                let option = &source.options[index];
                PresentationRow {
                    id: row_id(row),
                    kind: if option.disabled {
                        RowKind::DisabledItem
                    } else {
                        RowKind::SelectableItem
                    },
                    text: option.label.clone(),
                    selected: option.selected,
                    indented: row > 0 && matches!(source.entries[row - 1], SourceEntry::Group(_)),
                    option: Some(index),
                    owns: Vec::new(),
                }
            }
        })
        .collect()
}
