//! Reading and writing the native select control.

use formdom::{Document, Element};

use crate::config::NATIVE_ATTR;
use crate::error::{Result, SelectError};

/// One `option` of the native control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOption {
    /// ID of the `option` element.
    pub element_id: String,
    pub value: String,
    pub label: String,
    /// Set by the option itself or by a disabled `optgroup` around it.
    pub disabled: bool,
    pub selected: bool,
    /// Index into [`SourceControl::groups`].
    pub group: Option<usize>,
}

/// One `optgroup` of the native control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub element_id: String,
    pub label: String,
    /// Indices into [`SourceControl::options`], in document order.
    pub members: Vec<usize>,
}

/// Document-order entry of the control: either an option or a group header.
/// Group members follow their group entry directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEntry {
    Option(usize),
    Group(usize),
}

/// Snapshot of a native `select` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceControl {
    pub id: String,
    pub multiple: bool,
    pub disabled: bool,
    pub options: Vec<SourceOption>,
    pub groups: Vec<SourceGroup>,
    pub entries: Vec<SourceEntry>,
}

impl SourceControl {
    /// Read the select element with the given ID.
    pub fn read(doc: &Document, id: &str) -> Result<Self> {
        let element = doc
            .get(id)
            .ok_or_else(|| SelectError::ElementNotFound(id.to_string()))?;
        Self::from_element(element)
    }

    pub fn from_element(element: &Element) -> Result<Self> {
        if element.tag != "select" {
            return Err(SelectError::NotASelect {
                id: element.id.clone(),
                tag: element.tag.clone(),
            });
        }

        let mut control = Self {
            id: element.id.clone(),
            multiple: element.has_attr("multiple"),
            disabled: element.disabled || element.has_attr("disabled"),
            options: Vec::new(),
            groups: Vec::new(),
            entries: Vec::new(),
        };

        for child in element.child_elements() {
            match child.tag.as_str() {
                "option" => control.push_option(child, None, false),
                "optgroup" => {
                    let group = control.groups.len();
                    let group_disabled = child.disabled || child.has_attr("disabled");
                    control.groups.push(SourceGroup {
                        element_id: child.id.clone(),
                        label: child.get_attr("label").unwrap_or_default().to_string(),
                        members: Vec::new(),
                    });
                    control.entries.push(SourceEntry::Group(group));
                    for option in child.child_elements().iter().filter(|c| c.tag == "option") {
                        control.push_option(option, Some(group), group_disabled);
                    }
                }
                other => log::trace!("[source] {} ignoring <{}> child", element.id, other),
            }
        }

        Ok(control)
    }

    fn push_option(&mut self, element: &Element, group: Option<usize>, group_disabled: bool) {
        let label = match element.get_attr("label") {
            Some(label) => label.to_string(),
            None => element.inner_text().trim().to_string(),
        };
        let value = match element.get_attr("value") {
            Some(value) => value.to_string(),
            None => label.clone(),
        };

        let index = self.options.len();
        self.options.push(SourceOption {
            element_id: element.id.clone(),
            value,
            label,
            disabled: group_disabled || element.disabled || element.has_attr("disabled"),
            selected: element.has_attr("selected"),
            group,
        });
        if let Some(group) = group {
            self.groups[group].members.push(index);
        }
        self.entries.push(SourceEntry::Option(index));
    }

    /// Whether the control opts out of the widget and keeps native rendering.
    pub fn is_passthrough(element: &Element, native_class: &str) -> bool {
        element.has_class(native_class) || element.has_attr(NATIVE_ATTR)
    }

    /// Resolve single-mode selection the way a native select does: the last
    /// flagged option wins, and with nothing flagged the first enabled option
    /// is selected. Multi-mode selections are left untouched.
    pub fn normalize(&mut self) {
        if self.multiple {
            return;
        }

        let chosen = self
            .options
            .iter()
            .rposition(|o| o.selected)
            .or_else(|| self.options.iter().position(|o| !o.disabled));

        for (i, option) in self.options.iter_mut().enumerate() {
            option.selected = Some(i) == chosen;
        }
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Values of all selected options, in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }

    /// Labels of all selected options, in document order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect()
    }

    /// The control's value: the first selected option's value, or empty.
    pub fn value(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// Label of the first disabled option with an empty value.
    pub fn placeholder(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.disabled && o.value.is_empty())
            .map(|o| o.label.as_str())
    }

    /// Write selectedness back onto the `option` elements.
    pub fn write_selection(&self, doc: &mut Document) {
        for option in &self.options {
            let Some(element) = doc.get_mut(&option.element_id) else {
                log::warn!("[source] {} lost option {}", self.id, option.element_id);
                continue;
            };
            if option.selected {
                element.set_attr("selected", "");
            } else {
                element.remove_attr("selected");
            }
        }
    }
}
