//! Handler registry for routing document events to select instances.

use std::collections::HashMap;

use formdom::{Document, Event, EventKind};

use crate::widget::SelectWidget;

/// An event handler. Runs to completion on the owning widget.
pub type Handler = fn(&mut SelectWidget, &mut Document, &Event);

/// A handler bound to the widget that registered it.
#[derive(Clone)]
pub struct Binding {
    /// Key of the owning instance (its select's element ID).
    pub instance: String,
    pub handler: Handler,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("instance", &self.instance)
            .finish_non_exhaustive()
    }
}

/// Registry of handlers keyed by (element ID, event kind).
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<(String, EventKind), Binding>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's ID
    /// - `kind`: The event kind
    /// - `instance`: Key of the owning instance
    /// - `handler`: The handler function
    pub fn register(
        &mut self,
        element_id: &str,
        kind: EventKind,
        instance: &str,
        handler: Handler,
    ) {
        self.handlers.insert(
            (element_id.to_string(), kind),
            Binding {
                instance: instance.to_string(),
                handler,
            },
        );
    }

    /// Get the binding for an element event.
    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<&Binding> {
        self.handlers.get(&(element_id.to_string(), kind))
    }

    /// Remove every handler registered by an instance.
    pub fn remove_instance(&mut self, instance: &str) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|_, binding| binding.instance != instance);
        before - self.handlers.len()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
