use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Attributes (value, label, aria-*, role, ...)
    pub attrs: HashMap<String, String>,

    // Interaction
    pub focusable: bool,
    /// Whether this element is disabled. Disabled elements don't receive focus.
    pub disabled: bool,
    /// Hidden elements and their descendants are not visible and not focusable.
    pub visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            classes: Vec::new(),
            content: Content::None,
            attrs: HashMap::new(),
            focusable: false,
            disabled: false,
            visible: true,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn body() -> Self {
        Self::new("body").id("body")
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    pub fn input() -> Self {
        Self {
            focusable: true,
            ..Self::new("input")
        }
    }

    /// A native select control. Add `option` and `optgroup` children.
    pub fn select() -> Self {
        Self {
            focusable: true,
            ..Self::new("select")
        }
    }

    /// An option with an explicit value attribute.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(label)
    }

    /// An option without a value attribute. Its value is its label.
    pub fn bare_option(label: impl Into<String>) -> Self {
        Self::new("option").text(label)
    }

    pub fn optgroup(label: impl Into<String>) -> Self {
        Self::new("optgroup").attr("label", label)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set a boolean attribute such as `selected`, `disabled` or `multiple`.
    pub fn flag(mut self, name: &str) -> Self {
        self.attrs.insert(name.to_string(), String::new());
        if name == "disabled" {
            self.disabled = true;
        }
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> bool {
        self.attrs.remove(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Concatenated text of this element and its descendants.
    pub fn inner_text(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::inner_text).collect(),
        }
    }

    /// The `value` attribute, or an empty string.
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or("")
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }
}
