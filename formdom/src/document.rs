//! Host document: an element tree plus focus tracking.
//!
//! The interaction methods (`click`, `focus`, `blur`, `press`) update focus
//! the way a browser would and return the events the host should deliver,
//! in delivery order. Nothing is dispatched here.

use crate::element::{ancestors, collect_matching, find_element, find_element_mut, find_parent};
use crate::element::Element;
use crate::event::{Event, Key};
use crate::focus::{FocusDirection, FocusState};

#[derive(Debug)]
pub struct Document {
    root: Element,
    focus: FocusState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::body())
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn parent(&self, id: &str) -> Option<&Element> {
        find_parent(&self.root, id)
    }

    /// True if `id` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        ancestor == id || ancestors(&self.root, id).iter().any(|a| a == ancestor)
    }

    /// An element is visible when it and all of its ancestors are.
    pub fn is_visible(&self, id: &str) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };
        element.visible
            && ancestors(&self.root, id)
                .iter()
                .all(|a| self.get(a).is_some_and(|e| e.visible))
    }

    /// IDs of all elements with the given tag, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<String> {
        collect_matching(&self.root, &|e| e.tag == tag)
    }

    /// IDs of all elements with the given class, in document order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        collect_matching(&self.root, &|e| e.has_class(class))
    }

    /// IDs of all elements under `scope` (inclusive) matching the predicate.
    pub fn query_within(&self, scope: &str, pred: &dyn Fn(&Element) -> bool) -> Vec<String> {
        self.get(scope)
            .map(|e| collect_matching(e, pred))
            .unwrap_or_default()
    }

    /// Replace an element in place with the result of `f`.
    /// Returns false if no element has the given ID.
    pub fn replace_with(&mut self, id: &str, f: impl FnOnce(Element) -> Element) -> bool {
        if self.root.id == id {
            let old = std::mem::take(&mut self.root);
            self.root = f(old);
            return true;
        }

        let Some(parent_id) = self.parent(id).map(|p| p.id.clone()) else {
            return false;
        };
        let Some(children) = self
            .get_mut(&parent_id)
            .and_then(Element::child_elements_mut)
        else {
            return false;
        };
        let Some(pos) = children.iter().position(|c| c.id == id) else {
            return false;
        };

        let old = std::mem::take(&mut children[pos]);
        children[pos] = f(old);
        true
    }

    // -------------------------------------------------------------------------
    // Focus and interaction
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to an element.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        let mut events = Vec::new();
        if self.focus.focused() == Some(id) {
            return events;
        }
        if let Some(old) = self.focus.blur() {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        self.focus.focus(id);
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Remove focus from an element.
    /// Only the element that currently holds focus can lose it.
    pub fn blur(&mut self, id: &str) -> Vec<Event> {
        if self.focus.focused() != Some(id) {
            log::trace!("[document] blur({id}) ignored, focus is {:?}", self.focused());
            return Vec::new();
        }
        self.blur_focused()
    }

    /// Remove focus from whatever element holds it.
    pub fn blur_focused(&mut self) -> Vec<Event> {
        match self.focus.blur() {
            Some(old) => vec![Event::Blur {
                target: old,
                new_target: None,
            }],
            None => Vec::new(),
        }
    }

    /// Click an element. Focus moves to the nearest focusable element at or
    /// above the target, or leaves the current element if there is none.
    pub fn click(&mut self, id: &str) -> Vec<Event> {
        if self.get(id).is_none() {
            log::debug!("[document] click on unknown element {id}");
            return self.click_document();
        }

        let focus_target = std::iter::once(id.to_string())
            .chain(ancestors(&self.root, id))
            .find(|candidate| {
                self.get(candidate)
                    .is_some_and(|e| e.focusable && !e.disabled)
                    && self.is_visible(candidate)
            });

        let mut events = match focus_target {
            Some(target) => self.focus(&target),
            None => self.blur_focused(),
        };
        events.push(Event::Click {
            target: Some(id.to_string()),
        });
        events
    }

    /// Click on empty document space.
    pub fn click_document(&mut self) -> Vec<Event> {
        let mut events = self.blur_focused();
        events.push(Event::Click { target: None });
        events
    }

    /// Press a key. Tab and BackTab move focus, everything else is delivered
    /// to the focused element.
    pub fn press(&mut self, key: Key) -> Vec<Event> {
        let old = self.focus.focused().map(str::to_string);
        let moved = match key {
            Key::Tab => Some(self.focus.cycle(&self.root, FocusDirection::Forward)),
            Key::BackTab => Some(self.focus.cycle(&self.root, FocusDirection::Backward)),
            _ => None,
        };

        match moved {
            Some(Some(new)) => {
                let mut events = Vec::new();
                if let Some(old) = old {
                    events.push(Event::Blur {
                        target: old,
                        new_target: Some(new.clone()),
                    });
                }
                events.push(Event::Focus { target: new });
                events
            }
            Some(None) => Vec::new(),
            None => vec![Event::Key { target: old, key }],
        }
    }

    /// Signal that the host changed a form control's value.
    pub fn change(&self, id: &str) -> Vec<Event> {
        vec![Event::Change {
            target: id.to_string(),
        }]
    }
}
