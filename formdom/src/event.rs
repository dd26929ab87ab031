/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key { target: Option<String>, key: Key },
    /// Activation (mouse click or tap). `None` targets the document itself.
    Click { target: Option<String> },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus. `new_target` is where focus went, if anywhere.
    Blur {
        target: String,
        new_target: Option<String>,
    },
    /// A form control's value was changed by the host
    Change { target: String },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Key { .. } => EventKind::Key,
            Self::Click { .. } => EventKind::Click,
            Self::Focus { .. } => EventKind::Focus,
            Self::Blur { .. } => EventKind::Blur,
            Self::Change { .. } => EventKind::Change,
        }
    }

    /// The element the event was delivered to.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target } => target.as_deref(),
            Self::Focus { target } | Self::Blur { target, .. } | Self::Change { target } => {
                Some(target)
            }
        }
    }
}

/// Discriminant of [`Event`], used to register handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Key,
    Click,
    Focus,
    Blur,
    Change,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Home,
    End,
}
