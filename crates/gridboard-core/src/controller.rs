//! Dashboard controller: event reducer and view-model assembly.
//!
//! One synchronous reducer over presentation events. Events are processed
//! strictly one at a time; every malformed request degrades to a logged
//! no-op and the state machine stays in a valid, previously-reachable
//! state. After each event the outside-interaction listener is re-synced
//! to the panel's visibility through the shell seam.

use crate::catalog::{Catalog, CategoryId, WidgetId};
use crate::error::{DashboardError, DashboardResult};
use crate::pagination::{self, Pagination, SlideDirection};
use crate::search;
use crate::session::{DraftField, EditSession, SessionMode};
use crate::shell::{ListenerScope, NullShell, Shell};
use crate::view::{
    CategoryView, DraftForm, PanelView, SelectionCandidate, ViewModel, WidgetCard,
};

/// A presentation event routed through the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// "Add widget" affordance on a category slot.
    SelectCategorySlot {
        category_id: CategoryId,
        widget_type: String,
    },
    /// Header search box; the empty string clears the filter.
    Search(String),
    /// Checkbox toggle in the panel's selection list.
    ToggleWidgetSelection(WidgetId),
    /// Form edit of one draft field.
    UpdateDraftField {
        widget_id: WidgetId,
        field: DraftField,
        value: String,
    },
    /// Selecting -> Editing.
    ConfirmSelection,
    /// Apply drafts to the catalog and close the panel.
    SaveEdits,
    /// Discard drafts and close the panel.
    CancelEdit,
    /// Pagination arrows on a category row.
    Slide {
        category_id: CategoryId,
        direction: SlideDirection,
    },
    /// Remove button on a widget card.
    RemoveWidget {
        category_id: CategoryId,
        widget_id: WidgetId,
    },
    /// "Add New Widget" button: append a widget of the pending type to
    /// the active category.
    AddNewWidget,
    /// The header's global "Add Widget +" affordance.
    OpenPanel,
    /// The header's widget-type picker.
    ChooseWidgetType(String),
    /// Pointer event outside the panel region.
    OutsideInteraction,
    /// Delegated to the platform reload primitive.
    Refresh,
}

/// Composes catalog, pagination, search and session into one dashboard
/// instance.
pub struct Dashboard {
    catalog: Catalog,
    pagination: Pagination,
    session: EditSession,
    query: String,
    listener: ListenerScope,
}

impl Dashboard {
    /// Create a dashboard over a seeded catalog with a no-op shell.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shell(catalog, Box::new(NullShell))
    }

    /// Create a dashboard wired to a platform shell.
    pub fn with_shell(catalog: Catalog, shell: Box<dyn Shell>) -> Self {
        Self {
            catalog,
            pagination: Pagination::new(),
            session: EditSession::new(),
            query: String::new(),
            listener: ListenerScope::new(shell),
        }
    }

    /// The current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current edit session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Process one presentation event. Never fails: engine errors are
    /// logged and the event degrades to a no-op.
    pub fn handle(&mut self, event: DashboardEvent) {
        if let Err(err) = self.apply(event) {
            log::debug!("event ignored: {err}");
        }
        // Every path out of apply(), error or not, re-syncs the listener
        // to the panel's visibility.
        self.listener.sync(self.session.is_open());
    }

    fn apply(&mut self, event: DashboardEvent) -> DashboardResult<()> {
        // An event that observed the session's category vanishing is
        // dropped outright if it targets the session; applying it to the
        // freshly reset session would reopen state the reset just cleared.
        if self.evict_stale_session() && Self::session_scoped(&event) {
            return Err(DashboardError::InvalidTransition(
                "session event after its category vanished",
            ));
        }
        match event {
            DashboardEvent::SelectCategorySlot {
                category_id,
                widget_type,
            } => {
                if !self.catalog.contains_category(category_id) {
                    return Err(DashboardError::CategoryNotFound(category_id));
                }
                self.session.open_for_category(category_id, &widget_type);
                Ok(())
            }
            DashboardEvent::Search(query) => {
                self.query = query;
                Ok(())
            }
            DashboardEvent::ToggleWidgetSelection(widget_id) => {
                self.session.toggle_selection(widget_id, &self.catalog);
                Ok(())
            }
            DashboardEvent::UpdateDraftField {
                widget_id,
                field,
                value,
            } => self.session.update_draft(widget_id, field, &value),
            DashboardEvent::ConfirmSelection => {
                self.session.confirm();
                Ok(())
            }
            DashboardEvent::SaveEdits => {
                let (category_id, patches) = self.session.save()?;
                self.catalog.apply_updates(category_id, &patches)
            }
            DashboardEvent::CancelEdit => {
                self.session.cancel();
                Ok(())
            }
            DashboardEvent::Slide {
                category_id,
                direction,
            } => {
                let category = self
                    .catalog
                    .category(category_id)
                    .ok_or(DashboardError::CategoryNotFound(category_id))?;
                self.pagination.slide(category, direction);
                Ok(())
            }
            DashboardEvent::RemoveWidget {
                category_id,
                widget_id,
            } => self.catalog.remove_widget(category_id, widget_id),
            DashboardEvent::AddNewWidget => {
                let category_id = self.session.active_category().ok_or(
                    DashboardError::InvalidTransition("add widget without a category slot"),
                )?;
                let widget_type = self
                    .session
                    .pending_widget_type()
                    .ok_or(DashboardError::InvalidTransition(
                        "add widget without a widget type",
                    ))?
                    .to_string();
                self.catalog.add_widget(category_id, &widget_type)?;
                Ok(())
            }
            DashboardEvent::OpenPanel => {
                self.session.open();
                Ok(())
            }
            DashboardEvent::ChooseWidgetType(widget_type) => {
                self.session.choose_widget_type(&widget_type);
                Ok(())
            }
            DashboardEvent::OutsideInteraction => {
                self.session.dismiss();
                Ok(())
            }
            DashboardEvent::Refresh => {
                self.listener.reload();
                Ok(())
            }
        }
    }

    /// A session whose active category vanished from the catalog is reset
    /// to closed before any event is routed to it. Returns whether the
    /// eviction fired.
    fn evict_stale_session(&mut self) -> bool {
        if let Some(id) = self.session.active_category() {
            if !self.catalog.contains_category(id) {
                log::debug!("active category {id} vanished, closing session");
                self.session.reset();
                return true;
            }
        }
        false
    }

    /// Events that operate on the current session rather than the
    /// catalog or pagination.
    fn session_scoped(event: &DashboardEvent) -> bool {
        matches!(
            event,
            DashboardEvent::ToggleWidgetSelection(_)
                | DashboardEvent::UpdateDraftField { .. }
                | DashboardEvent::ConfirmSelection
                | DashboardEvent::SaveEdits
                | DashboardEvent::CancelEdit
                | DashboardEvent::OutsideInteraction
        )
    }

    /// Assemble the renderable view model for the current state.
    pub fn view(&self) -> ViewModel {
        let filtered = search::filter(&self.catalog, &self.query);
        let search_active = filtered.is_some();
        let categories = match &filtered {
            // Search supersedes pagination: all matches, no slide controls.
            Some(derived) => derived
                .iter()
                .map(|category| CategoryView {
                    id: category.id,
                    name: category.name.clone(),
                    cards: category.widgets.iter().map(WidgetCard::from_widget).collect(),
                    can_slide_left: false,
                    can_slide_right: false,
                })
                .collect(),
            None => self
                .catalog
                .categories
                .iter()
                .map(|category| {
                    let index = self.pagination.clamped_index(category);
                    CategoryView {
                        id: category.id,
                        name: category.name.clone(),
                        cards: pagination::visible_window(category, index)
                            .into_iter()
                            .map(WidgetCard::from_widget)
                            .collect(),
                        can_slide_left: pagination::can_slide_left(index),
                        can_slide_right: pagination::can_slide_right(category, index),
                    }
                })
                .collect(),
        };
        ViewModel {
            search_active,
            categories,
            panel: self.panel_view(),
        }
    }

    fn panel_view(&self) -> PanelView {
        if !self.session.is_open() {
            return PanelView::Closed;
        }
        let active = self
            .session
            .active_category()
            .and_then(|id| self.catalog.category(id));
        match self.session.mode() {
            SessionMode::Selecting => PanelView::Selecting {
                widget_type: self.session.pending_widget_type().map(str::to_string),
                candidates: active
                    .map(|category| {
                        category
                            .non_blank()
                            .map(|w| SelectionCandidate {
                                id: w.id,
                                name: w.name.clone(),
                                checked: self.session.is_selected(w.id),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            SessionMode::Editing => PanelView::Editing {
                forms: active
                    .map(|category| {
                        category
                            .non_blank()
                            .filter(|w| self.session.is_selected(w.id))
                            .map(|w| {
                                let draft = self.session.draft(w.id);
                                DraftForm {
                                    id: w.id,
                                    name: draft.map(|d| d.name.clone()).unwrap_or_default(),
                                    text: draft.map(|d| d.text.clone()).unwrap_or_default(),
                                }
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}
