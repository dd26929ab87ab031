//! Instance registry for live select widgets.

use std::collections::HashMap;
use std::time::Instant;

use formdom::{Document, Event, EventKind};

use crate::config::SelectOptions;
use crate::error::{Result, SelectError};
use crate::events;
use crate::handlers::HandlerRegistry;
use crate::widget::{InstanceId, SelectWidget};

/// Registry managing all live select instances.
///
/// The registry tracks:
/// - All instances, keyed by their native select's element ID
/// - Initialization order, for deterministic iteration
/// - The event handlers each instance registered
///
/// The host owns the registry and passes it the document along with each
/// event; there is no ambient global table.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    /// All live instances.
    instances: HashMap<String, SelectWidget>,

    /// Select IDs in initialization order.
    order: Vec<String>,

    /// Handlers registered by all instances.
    handlers: HandlerRegistry,
}

impl InstanceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the widget for one select element.
    ///
    /// Returns `Ok(None)` when the control uses native rendering.
    pub fn init(
        &mut self,
        doc: &mut Document,
        select_id: &str,
        options: SelectOptions,
    ) -> Result<Option<InstanceId>> {
        if self.instances.contains_key(select_id) {
            return Err(SelectError::AlreadyInitialized(select_id.to_string()));
        }

        let Some(widget) = SelectWidget::init(doc, select_id, options)? else {
            return Ok(None);
        };

        let id = widget.id();
        events::bind(&widget, &mut self.handlers);
        self.instances.insert(select_id.to_string(), widget);
        self.order.push(select_id.to_string());
        Ok(Some(id))
    }

    /// Initialize every select in the document, in document order.
    ///
    /// Already-initialized and native selects are skipped.
    pub fn init_all(
        &mut self,
        doc: &mut Document,
        options: &SelectOptions,
    ) -> Result<Vec<InstanceId>> {
        let mut created = Vec::new();
        for select_id in doc.query_tag("select") {
            if self.instances.contains_key(&select_id) {
                continue;
            }
            if let Some(id) = self.init(doc, &select_id, options.clone())? {
                created.push(id);
            }
        }
        log::debug!("InstanceRegistry::init_all created={}", created.len());
        Ok(created)
    }

    /// Tear down an instance and restore its native select.
    pub fn destroy(&mut self, doc: &mut Document, select_id: &str) -> Result<()> {
        let widget = self
            .instances
            .remove(select_id)
            .ok_or_else(|| SelectError::NoInstance(select_id.to_string()))?;
        self.order.retain(|id| id != select_id);
        let removed = self.handlers.remove_instance(select_id);
        log::debug!("InstanceRegistry::destroy {select_id} handlers_removed={removed}");
        widget.destroy(doc)
    }

    /// Get the instance for a select element.
    pub fn get_instance(&self, select_id: &str) -> Option<&SelectWidget> {
        self.instances.get(select_id)
    }

    /// Get a mutable reference to the instance for a select element.
    pub fn get_instance_mut(&mut self, select_id: &str) -> Option<&mut SelectWidget> {
        self.instances.get_mut(select_id)
    }

    /// Find an instance by its instance ID.
    pub fn find(&self, id: InstanceId) -> Option<&SelectWidget> {
        self.instances.values().find(|w| w.id() == id)
    }

    /// Get total number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if there are no live instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over all instances in initialization order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectWidget> {
        self.order.iter().filter_map(|id| self.instances.get(id))
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route one event to the widget that registered a handler for it.
    ///
    /// Clicks also close every open widget the click landed outside of.
    /// Returns true if a handler ran.
    pub fn dispatch(&mut self, doc: &mut Document, event: &Event) -> bool {
        log::trace!("InstanceRegistry::dispatch {event:?}");

        if let Event::Click { target } = event {
            self.close_outside(doc, target.as_deref());
        }

        let Some(target) = event.target() else {
            return false;
        };
        let Some(binding) = self.handlers.get(target, event.kind()).cloned() else {
            return false;
        };
        let Some(widget) = self.instances.get_mut(&binding.instance) else {
            log::warn!(
                "InstanceRegistry::dispatch stale handler on {target} for {}",
                binding.instance
            );
            return false;
        };

        (binding.handler)(widget, doc, event);

        // Rows may have been rebuilt; re-register against the new row set.
        if event.kind() == EventKind::Change {
            self.handlers.remove_instance(&binding.instance);
            if let Some(widget) = self.instances.get(&binding.instance) {
                events::bind(widget, &mut self.handlers);
            }
        }
        true
    }

    /// Route a batch of events in delivery order.
    pub fn dispatch_all(&mut self, doc: &mut Document, events: &[Event]) {
        for event in events {
            self.dispatch(doc, event);
        }
    }

    /// Prune finished open/close transitions.
    pub fn tick(&mut self, now: Instant) {
        for widget in self.instances.values_mut() {
            widget.tick(now);
        }
    }

    fn close_outside(&mut self, doc: &mut Document, target: Option<&str>) {
        for select_id in &self.order {
            let Some(widget) = self.instances.get_mut(select_id) else {
                continue;
            };
            if !widget.is_open() {
                continue;
            }
            let inside = target.is_some_and(|t| widget.owns_element(doc, t));
            if !inside {
                log::debug!("InstanceRegistry::dispatch click outside {select_id}");
                widget.close(doc);
            }
        }
    }
}
