//! Command parsing for the terminal shell.
//!
//! Commands address categories, cards, panel candidates and edit forms by
//! their 1-based display numbers, resolved against the view model the user
//! is currently looking at.

use gridboard_core::catalog::{CategoryId, WidgetId};
use gridboard_core::pagination::SlideDirection;
use gridboard_core::session::DraftField;
use gridboard_core::view::PanelView;
use gridboard_core::{DashboardEvent, ViewModel, WIDGET_TYPES};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(DashboardEvent),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search [term]          filter widgets by name; no term clears the filter
  slide <cat#> <left|right>
  add <cat#> <type>      open the panel for a category slot
  panel                  open the panel from the header
  type <label>           pick the widget type (CSPM, Image, CWPP, Ticket)
  toggle <n>             check/uncheck the n-th widget in the panel
  confirm                move to the edit form
  name <n> <value>       edit the n-th form's name
  text <n> <value>       edit the n-th form's text
  save | cancel          close the panel, applying or discarding edits
  new                    add a new widget of the picked type
  remove <cat#> <card#>  remove a visible widget card
  outside                click outside the panel
  refresh                reload the dashboard seed
  help | quit";

/// Parse one input line against the current view.
pub fn parse(line: &str, view: &ViewModel) -> Result<Command, String> {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    let event = match verb {
        "" => return Err("empty command, try `help`".to_string()),
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "search" => DashboardEvent::Search(rest.to_string()),
        "slide" => {
            let (cat, dir) = split_two(rest)?;
            DashboardEvent::Slide {
                category_id: category_at(view, cat)?,
                direction: direction(dir)?,
            }
        }
        "add" => {
            let (cat, label) = split_two(rest)?;
            DashboardEvent::SelectCategorySlot {
                category_id: category_at(view, cat)?,
                widget_type: label.to_string(),
            }
        }
        "panel" => DashboardEvent::OpenPanel,
        "type" => {
            if !WIDGET_TYPES.contains(&rest) {
                return Err(format!(
                    "unknown widget type `{rest}`, one of: {}",
                    WIDGET_TYPES.join(", ")
                ));
            }
            DashboardEvent::ChooseWidgetType(rest.to_string())
        }
        "toggle" => DashboardEvent::ToggleWidgetSelection(candidate_at(view, rest)?),
        "confirm" => DashboardEvent::ConfirmSelection,
        "save" => DashboardEvent::SaveEdits,
        "cancel" => DashboardEvent::CancelEdit,
        "name" | "text" => {
            let (n, value) = split_two(rest)?;
            DashboardEvent::UpdateDraftField {
                widget_id: form_at(view, n)?,
                field: if verb == "name" {
                    DraftField::Name
                } else {
                    DraftField::Text
                },
                value: value.to_string(),
            }
        }
        "new" => DashboardEvent::AddNewWidget,
        "remove" => {
            let (cat, card) = split_two(rest)?;
            let category_id = category_at(view, cat)?;
            DashboardEvent::RemoveWidget {
                category_id,
                widget_id: card_at(view, category_id, card)?,
            }
        }
        "outside" => DashboardEvent::OutsideInteraction,
        "refresh" => DashboardEvent::Refresh,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(Command::Event(event))
}

fn split_two(rest: &str) -> Result<(&str, &str), String> {
    rest.split_once(char::is_whitespace)
        .map(|(a, b)| (a, b.trim()))
        .ok_or_else(|| "missing argument, try `help`".to_string())
}

fn direction(token: &str) -> Result<SlideDirection, String> {
    match token {
        "left" => Ok(SlideDirection::Left),
        "right" => Ok(SlideDirection::Right),
        other => Err(format!("unknown direction `{other}`")),
    }
}

fn ordinal(token: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("`{token}` is not a display number"))
}

fn category_at(view: &ViewModel, token: &str) -> Result<CategoryId, String> {
    let index = ordinal(token)?;
    view.categories
        .get(index)
        .map(|c| c.id)
        .ok_or_else(|| format!("no category {token} on screen"))
}

fn card_at(view: &ViewModel, category_id: CategoryId, token: &str) -> Result<WidgetId, String> {
    let index = ordinal(token)?;
    view.categories
        .iter()
        .find(|c| c.id == category_id)
        .and_then(|c| c.cards.get(index))
        .map(|card| card.id)
        .ok_or_else(|| format!("no card {token} in that category"))
}

fn candidate_at(view: &ViewModel, token: &str) -> Result<WidgetId, String> {
    let index = ordinal(token)?;
    match &view.panel {
        PanelView::Selecting { candidates, .. } => candidates
            .get(index)
            .map(|c| c.id)
            .ok_or_else(|| format!("no widget {token} in the panel")),
        _ => Err("the selection list is not open".to_string()),
    }
}

fn form_at(view: &ViewModel, token: &str) -> Result<WidgetId, String> {
    let index = ordinal(token)?;
    match &view.panel {
        PanelView::Editing { forms } => forms
            .get(index)
            .map(|f| f.id)
            .ok_or_else(|| format!("no form {token} in the panel")),
        _ => Err("the edit form is not open".to_string()),
    }
}
