//! Renderable view model handed to the presentation layer.
//!
//! One value per render, fully resolved: the category list (filtered or
//! paginated), per-category slide affordances, and the panel content.
//! Presentation draws it and reports raw events back; it never reaches
//! into engine state.

use crate::catalog::{CategoryId, Widget, WidgetId};

/// A widget card in a category row.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetCard {
    pub id: WidgetId,
    pub name: String,
    pub text: String,
    pub placeholder: String,
}

impl WidgetCard {
    pub(crate) fn from_widget(widget: &Widget) -> Self {
        Self {
            id: widget.id,
            name: widget.name.clone(),
            text: widget.text.clone(),
            placeholder: widget.placeholder.clone(),
        }
    }
}

/// One category row.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    /// Cards currently visible: the pagination window, or every match
    /// while a search is active. Empty means presentation shows the
    /// category's empty state.
    pub cards: Vec<WidgetCard>,
    pub can_slide_left: bool,
    pub can_slide_right: bool,
}

/// One row in the panel's selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCandidate {
    pub id: WidgetId,
    pub name: String,
    pub checked: bool,
}

/// One form in the panel's edit view, pre-filled from the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm {
    pub id: WidgetId,
    pub name: String,
    pub text: String,
}

/// Content of the sliding side panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Closed,
    Selecting {
        /// Pending type label for a new widget, once picked.
        widget_type: Option<String>,
        /// Non-blank widgets of the active category, with checked flags.
        candidates: Vec<SelectionCandidate>,
    },
    Editing {
        forms: Vec<DraftForm>,
    },
}

/// The complete renderable dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// True while a search result has replaced the paginated view.
    pub search_active: bool,
    pub categories: Vec<CategoryView>,
    pub panel: PanelView,
}
