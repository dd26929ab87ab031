pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod transitions;

pub use animation::{AnimationState, Fade};
pub use document::Document;
pub use element::Element;
pub use event::{Event, EventKind, Key};
pub use focus::{collect_focusable, FocusDirection, FocusState};
pub use transitions::{Easing, TransitionConfig};
