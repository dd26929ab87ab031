//! Dropdown select widget that mirrors a native `select` control into a
//! custom popup list inside a [`formdom::Document`].

pub mod config;
pub mod error;
mod events;
pub mod handlers;
pub mod registry;
pub mod rows;
pub mod source;
pub mod widget;

pub use config::SelectOptions;
pub use error::{Result, SelectError};
pub use handlers::{Binding, Handler, HandlerRegistry};
pub use registry::InstanceRegistry;
pub use rows::{PresentationRow, RowKind};
pub use source::{SourceControl, SourceEntry, SourceGroup, SourceOption};
pub use widget::{InstanceId, PopupState, SelectWidget};
