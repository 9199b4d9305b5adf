//! Catalog data model and store mutations.
//!
//! The catalog is the entire dashboard state: an ordered sequence of
//! categories, each holding an ordered sequence of widgets. It is seeded
//! once at startup from a JSON snapshot and mutated only through the
//! operations here; the order of untouched widgets is always preserved.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DashboardError, DashboardResult};

/// Placeholder content given to freshly added widgets.
pub const NEW_WIDGET_PLACEHOLDER: &str = "Widget content here";

/// Widget type labels offered by the header's type picker.
pub const WIDGET_TYPES: &[&str] = &["CSPM", "Image", "CWPP", "Ticket"];

/// Identifier for a widget. Assumed unique across the whole catalog,
/// since widget ids key UI state maps across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier for a category. Unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier.
    pub id: WidgetId,
    /// Display name; the search filter matches against it.
    pub name: String,
    /// Body text shown on the card.
    #[serde(default)]
    pub text: String,
    /// Prompt shown while the body text is empty.
    #[serde(default)]
    pub placeholder: String,
    /// Layout filler slot: keeps its place in the sequence but is excluded
    /// from pagination counts and from the edit-selection panel.
    #[serde(rename = "isBlank", default)]
    pub is_blank: bool,
}

impl Widget {
    /// Create the widget appended by an "add" action for the given type
    /// label: `New {label} Widget`, empty text, fresh id.
    pub fn new(type_label: &str) -> Self {
        Self {
            id: WidgetId::new(),
            name: format!("New {type_label} Widget"),
            text: String::new(),
            placeholder: NEW_WIDGET_PLACEHOLDER.to_string(),
            is_blank: false,
        }
    }
}

/// A named, ordered group of widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Widgets in display order. New widgets append.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    /// Iterate over the real (non-blank) widgets in display order.
    pub fn non_blank(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().filter(|w| !w.is_blank)
    }

    /// Number of non-blank widgets; the basis for all pagination math.
    pub fn non_blank_count(&self) -> usize {
        self.non_blank().count()
    }

    /// Look up a widget by id.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }
}

/// A partial update for one widget. Fields left `None` retain the
/// widget's prior value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub name: Option<String>,
    pub text: Option<String>,
}

impl WidgetPatch {
    /// Merge the provided fields into a widget.
    pub fn apply(&self, widget: &mut Widget) {
        if let Some(name) = &self.name {
            widget.name = name.clone();
        }
        if let Some(text) = &self.text {
            widget.text = text.clone();
        }
    }
}

/// The entire dashboard state: categories in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Parse a seed snapshot from JSON.
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Check whether a category exists.
    pub fn contains_category(&self, id: CategoryId) -> bool {
        self.category(id).is_some()
    }

    /// Append a fresh widget of the given type to a category.
    /// Returns the new widget's id.
    pub fn add_widget(
        &mut self,
        category_id: CategoryId,
        type_label: &str,
    ) -> DashboardResult<WidgetId> {
        let category = self
            .category_mut(category_id)
            .ok_or(DashboardError::CategoryNotFound(category_id))?;
        let widget = Widget::new(type_label);
        let id = widget.id;
        category.widgets.push(widget);
        Ok(id)
    }

    /// Remove a widget from a category's sequence.
    pub fn remove_widget(
        &mut self,
        category_id: CategoryId,
        widget_id: WidgetId,
    ) -> DashboardResult<()> {
        let category = self
            .category_mut(category_id)
            .ok_or(DashboardError::CategoryNotFound(category_id))?;
        let before = category.widgets.len();
        category.widgets.retain(|w| w.id != widget_id);
        if category.widgets.len() == before {
            return Err(DashboardError::WidgetNotFound(widget_id));
        }
        Ok(())
    }

    /// Merge patches into the widgets of a category. Widgets without an
    /// entry in `updates` are untouched; order is preserved.
    pub fn apply_updates(
        &mut self,
        category_id: CategoryId,
        updates: &HashMap<WidgetId, WidgetPatch>,
    ) -> DashboardResult<()> {
        let category = self
            .category_mut(category_id)
            .ok_or(DashboardError::CategoryNotFound(category_id))?;
        for widget in &mut category.widgets {
            if let Some(patch) = updates.get(&widget.id) {
                patch.apply(widget);
            }
        }
        Ok(())
    }
}
