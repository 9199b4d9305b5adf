//! Gridboard Core Library
//!
//! Platform-agnostic interaction and state engine for the Gridboard
//! dashboard: category/widget pagination, search-driven view substitution,
//! multi-select bookkeeping, and the select/edit/save-or-cancel panel
//! lifecycle. Rendering and the platform reload primitive live behind the
//! [`shell::Shell`] seam.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod pagination;
pub mod search;
pub mod session;
pub mod shell;
pub mod view;

pub use catalog::{Catalog, Category, CategoryId, Widget, WidgetId, WidgetPatch, WIDGET_TYPES};
pub use controller::{Dashboard, DashboardEvent};
pub use error::{DashboardError, DashboardResult};
pub use pagination::{Pagination, SlideDirection, WINDOW_SIZE};
pub use session::{DraftField, EditSession, SessionMode, WidgetDraft};
pub use shell::{ListenerScope, NullShell, Shell};
pub use view::{CategoryView, PanelView, ViewModel};
