//! Edit-session state machine for the side panel.
//!
//! The session is an explicit value owned by the controller, not ambient
//! process state, so several dashboards can run side by side and tests can
//! drive it directly. It tracks panel visibility, the selecting/editing
//! mode, the multi-select set, and the draft values for the selected
//! widgets. Selection and drafts are scoped to one active category at a
//! time.
//!
//! Close paths differ on purpose: `save`/`cancel` destroy all session
//! state, while `dismiss` (an outside interaction) only hides the panel
//! and leaves selection, drafts and mode in place, so reopening shows them
//! again.

use std::collections::HashMap;

use crate::catalog::{Catalog, CategoryId, WidgetId, WidgetPatch};
use crate::error::{DashboardError, DashboardResult};

/// What the open panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Checkbox list of the active category's widgets.
    #[default]
    Selecting,
    /// Edit forms for the confirmed selection.
    Editing,
}

/// Which draft field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Text,
}

/// In-progress values for one selected widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetDraft {
    pub name: String,
    pub text: String,
}

/// The transient selection/edit workflow state.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    panel_open: bool,
    mode: SessionMode,
    active_category: Option<CategoryId>,
    pending_widget_type: Option<String>,
    selected: Vec<WidgetId>,
    drafts: HashMap<WidgetId, WidgetDraft>,
}

impl EditSession {
    /// Create a closed session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is visible.
    pub fn is_open(&self) -> bool {
        self.panel_open
    }

    /// Current panel mode.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Category the session is scoped to, if one was chosen.
    pub fn active_category(&self) -> Option<CategoryId> {
        self.active_category
    }

    /// Type label a new widget would be created with.
    pub fn pending_widget_type(&self) -> Option<&str> {
        self.pending_widget_type.as_deref()
    }

    /// Ids currently checked in the selection list.
    pub fn selected(&self) -> &[WidgetId] {
        &self.selected
    }

    /// Whether a widget is in the selection.
    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.selected.contains(&id)
    }

    /// Draft values for a selected widget.
    pub fn draft(&self, id: WidgetId) -> Option<&WidgetDraft> {
        self.drafts.get(&id)
    }

    /// "Add widget" on a category slot: open the panel in selecting mode
    /// scoped to that category. Switching category clears the selection,
    /// which is only ever scoped to one category at a time.
    pub fn open_for_category(&mut self, category_id: CategoryId, widget_type: &str) {
        if self.active_category != Some(category_id) {
            self.selected.clear();
            self.drafts.clear();
        }
        self.active_category = Some(category_id);
        self.pending_widget_type = Some(widget_type.to_string());
        self.panel_open = true;
        self.mode = SessionMode::Selecting;
    }

    /// The header's global affordance: open the panel without picking a
    /// category slot.
    pub fn open(&mut self) {
        self.panel_open = true;
    }

    /// The header's type picker: record the pending type and open.
    pub fn choose_widget_type(&mut self, widget_type: &str) {
        self.pending_widget_type = Some(widget_type.to_string());
        self.panel_open = true;
    }

    /// Toggle a widget's membership in the selection.
    ///
    /// On every toggle the drafts are rebuilt wholesale from the
    /// catalog's saved values for the now-selected set, so toggling twice
    /// restores both selection and drafts exactly.
    pub fn toggle_selection(&mut self, widget_id: WidgetId, catalog: &Catalog) {
        if let Some(pos) = self.selected.iter().position(|&id| id == widget_id) {
            self.selected.remove(pos);
        } else if self.widget_exists(widget_id, catalog) {
            // Ids outside the active category never get a draft, so they
            // never get into the selection either.
            self.selected.push(widget_id);
        }
        self.rebuild_drafts(catalog);
    }

    fn widget_exists(&self, widget_id: WidgetId, catalog: &Catalog) -> bool {
        self.active_category
            .and_then(|id| catalog.category(id))
            .is_some_and(|category| category.widget(widget_id).is_some())
    }

    fn rebuild_drafts(&mut self, catalog: &Catalog) {
        self.drafts.clear();
        let Some(category) = self.active_category.and_then(|id| catalog.category(id)) else {
            return;
        };
        for id in &self.selected {
            if let Some(widget) = category.widget(*id) {
                self.drafts.insert(
                    *id,
                    WidgetDraft {
                        name: widget.name.clone(),
                        text: widget.text.clone(),
                    },
                );
            }
        }
    }

    /// Selecting -> Editing. An empty selection is legal and just yields
    /// an empty edit form.
    pub fn confirm(&mut self) {
        self.mode = SessionMode::Editing;
    }

    /// Set one field of a selected widget's draft. Only valid while
    /// editing and for ids already in the selection.
    pub fn update_draft(
        &mut self,
        widget_id: WidgetId,
        field: DraftField,
        value: &str,
    ) -> DashboardResult<()> {
        if self.mode != SessionMode::Editing {
            return Err(DashboardError::InvalidTransition(
                "draft update outside editing mode",
            ));
        }
        let draft = self.drafts.get_mut(&widget_id).ok_or(
            DashboardError::InvalidTransition("draft update for an unselected widget"),
        )?;
        match field {
            DraftField::Name => draft.name = value.to_string(),
            DraftField::Text => draft.text = value.to_string(),
        }
        Ok(())
    }

    /// Close via save: hand the drafts back as patches for the active
    /// category and destroy all session state.
    pub fn save(&mut self) -> DashboardResult<(CategoryId, HashMap<WidgetId, WidgetPatch>)> {
        if self.mode != SessionMode::Editing {
            return Err(DashboardError::InvalidTransition("save outside editing mode"));
        }
        let category_id = self
            .active_category
            .ok_or(DashboardError::InvalidTransition("save without a category"))?;
        let patches = self
            .drafts
            .drain()
            .map(|(id, draft)| {
                (
                    id,
                    WidgetPatch {
                        name: Some(draft.name),
                        text: Some(draft.text),
                    },
                )
            })
            .collect();
        self.reset();
        Ok((category_id, patches))
    }

    /// Close via cancel: discard drafts and selection. Never touches the
    /// catalog.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Outside interaction: hide the panel only. Selection, drafts and
    /// mode survive, unlike `cancel`.
    pub fn dismiss(&mut self) {
        self.panel_open = false;
    }

    /// Destroy all session state and close the panel.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
