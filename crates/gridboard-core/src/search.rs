//! Search-derived catalog views.
//!
//! An active search replaces the paginated view entirely: every widget
//! whose name matches is shown, blank or not, with no windowing. Panning
//! never does that. The asymmetry is intentional: searching surfaces every
//! match, panning only pans.

use crate::catalog::{Catalog, Category};

/// Derive the filtered category list for a query.
///
/// Returns `None` for the empty query (pagination governs display).
/// Otherwise every category is retained, even when no widget matches, so
/// presentation can show a per-category empty state; matching compares
/// names case-insensitively by substring.
pub fn filter(catalog: &Catalog, query: &str) -> Option<Vec<Category>> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    Some(
        catalog
            .categories
            .iter()
            .map(|category| Category {
                id: category.id,
                name: category.name.clone(),
                widgets: category
                    .widgets
                    .iter()
                    .filter(|w| w.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryId, Widget, WidgetId};

    fn catalog() -> Catalog {
        let widget = |name: &str, is_blank: bool| Widget {
            id: WidgetId::new(),
            name: name.to_string(),
            text: String::new(),
            placeholder: String::new(),
            is_blank,
        };
        Catalog {
            categories: vec![
                Category {
                    id: CategoryId::new(),
                    name: "Cloud".to_string(),
                    widgets: vec![
                        widget("CSPM A", false),
                        widget("CSPM B", false),
                        widget("Net C", true),
                    ],
                },
                Category {
                    id: CategoryId::new(),
                    name: "Registry".to_string(),
                    widgets: vec![widget("Image Risk", false)],
                },
            ],
        }
    }

    #[test]
    fn test_empty_query_disables_filtering() {
        assert!(filter(&catalog(), "").is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = filter(&catalog(), "cspm").unwrap();
        assert_eq!(result[0].widgets.len(), 2);
    }

    #[test]
    fn test_categories_without_matches_are_retained() {
        let result = filter(&catalog(), "Image").unwrap();
        assert_eq!(result.len(), 2);
        assert!(result[0].widgets.is_empty());
        assert_eq!(result[1].widgets.len(), 1);
    }

    #[test]
    fn test_blank_widgets_can_match() {
        // Search bypasses the is_blank exclusion entirely.
        let result = filter(&catalog(), "net").unwrap();
        assert_eq!(result[0].widgets.len(), 1);
        assert!(result[0].widgets[0].is_blank);
    }
}
