use crate::element::Element;

/// Direction of sequential focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Forward,
    Backward,
}

/// The document's single focus slot.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused() == Some(id)
    }

    /// Move focus to `id`. Returns false if it already held focus.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.is_focused(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Drop focus, returning whoever held it.
    pub fn blur(&mut self) -> Option<String> {
        self.focused.take()
    }

    /// Step to the neighbouring focusable element, wrapping at either end.
    ///
    /// Without a current focus (or when the focused element is no longer
    /// focusable) Forward starts at the first element and Backward at the
    /// last. Returns the new focus, or `None` when nothing moved.
    pub fn cycle(&mut self, root: &Element, direction: FocusDirection) -> Option<String> {
        let order = collect_focusable(root);
        let len = order.len();
        if len == 0 {
            return None;
        }

        let current = self
            .focused
            .as_ref()
            .and_then(|id| order.iter().position(|o| o == id));
        let next = match (current, direction) {
            (Some(i), FocusDirection::Forward) => (i + 1) % len,
            (Some(i), FocusDirection::Backward) => (i + len - 1) % len,
            (None, FocusDirection::Forward) => 0,
            (None, FocusDirection::Backward) => len - 1,
        };

        let target = &order[next];
        self.focus(target).then(|| target.clone())
    }
}

/// IDs of every element that can take focus, in document order.
///
/// Hidden elements hide their whole subtree; disabled elements are skipped
/// but their children are still considered.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        if !element.visible {
            continue;
        }
        if element.focusable && !element.disabled {
            found.push(element.id.clone());
        }
        stack.extend(element.content.children().iter().rev());
    }
    found
}
