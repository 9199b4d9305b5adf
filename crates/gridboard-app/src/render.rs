//! Text rendering of the view model.

use std::fmt::Write;

use gridboard_core::view::{PanelView, ViewModel};

/// Render the full dashboard view as plain text.
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();
    if view.search_active {
        let _ = writeln!(out, "== search results ==");
    }
    for (i, category) in view.categories.iter().enumerate() {
        let left = if category.can_slide_left { "<" } else { " " };
        let right = if category.can_slide_right { ">" } else { " " };
        let _ = writeln!(out, "{}. {} [{left}] [{right}]", i + 1, category.name);
        if category.cards.is_empty() {
            let _ = writeln!(out, "   (no results found)");
        }
        for (j, card) in category.cards.iter().enumerate() {
            let body = if card.text.is_empty() {
                &card.placeholder
            } else {
                &card.text
            };
            let _ = writeln!(out, "   {}. {}: {}", j + 1, card.name, body);
        }
    }
    match &view.panel {
        PanelView::Closed => {}
        PanelView::Selecting {
            widget_type,
            candidates,
        } => {
            let label = widget_type.as_deref().unwrap_or("-");
            let _ = writeln!(out, "-- panel: select widgets to edit (type: {label}) --");
            for (i, candidate) in candidates.iter().enumerate() {
                let mark = if candidate.checked { "x" } else { " " };
                let _ = writeln!(out, "   [{mark}] {}. {}", i + 1, candidate.name);
            }
        }
        PanelView::Editing { forms } => {
            let _ = writeln!(out, "-- panel: edit widgets --");
            if forms.is_empty() {
                let _ = writeln!(out, "   (nothing selected)");
            }
            for (i, form) in forms.iter().enumerate() {
                let _ = writeln!(out, "   {}. name: {} | text: {}", i + 1, form.name, form.text);
            }
        }
    }
    out
}
