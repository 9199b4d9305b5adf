//! Per-category sliding window over non-blank widgets.
//!
//! Each category shows at most [`WINDOW_SIZE`] real widgets at a time.
//! The window start is clamped to `[0, max(non_blank_count - WINDOW_SIZE, 0)]`;
//! sliding past a boundary is a no-op, never a wraparound. Blank widgets
//! pad a category's display slots and are invisible to everything here.

use std::collections::HashMap;

use crate::catalog::{Category, CategoryId, Widget};

/// Number of widget cards visible per category.
pub const WINDOW_SIZE: usize = 2;

/// Direction of a slide request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Per-category window start indices. Entries are created lazily on the
/// first navigation of a category and persist for the session.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    indices: HashMap<CategoryId, usize>,
}

impl Pagination {
    /// Create an empty pagination state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current window start for a category (0 until first navigation).
    pub fn index(&self, category: CategoryId) -> usize {
        self.indices.get(&category).copied().unwrap_or(0)
    }

    /// Window start re-clamped against the category's current contents.
    /// The stored value can lag behind removals, so every consumer reads
    /// through this.
    pub fn clamped_index(&self, category: &Category) -> usize {
        self.index(category.id).min(max_index(category))
    }

    /// Apply a clamped slide to a category's window.
    pub fn slide(&mut self, category: &Category, direction: SlideDirection) {
        let next = advance(category, self.clamped_index(category), direction);
        self.indices.insert(category.id, next);
    }
}

/// Highest legal window start for a category.
fn max_index(category: &Category) -> usize {
    category.non_blank_count().saturating_sub(WINDOW_SIZE)
}

/// Compute the window start after a slide, clamped at both boundaries.
pub fn advance(category: &Category, current: usize, direction: SlideDirection) -> usize {
    match direction {
        SlideDirection::Right => (current + 1).min(max_index(category)),
        SlideDirection::Left => current.saturating_sub(1),
    }
}

/// The slice of non-blank widgets currently visible for a category.
pub fn visible_window(category: &Category, index: usize) -> Vec<&Widget> {
    category.non_blank().skip(index).take(WINDOW_SIZE).collect()
}

/// Whether the left slide control is enabled.
pub fn can_slide_left(index: usize) -> bool {
    index > 0
}

/// Whether the right slide control is enabled.
pub fn can_slide_right(category: &Category, index: usize) -> bool {
    index + WINDOW_SIZE < category.non_blank_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WidgetId;

    fn category(non_blank: usize, blank: usize) -> Category {
        let mut widgets = Vec::new();
        for i in 0..non_blank {
            widgets.push(Widget {
                id: WidgetId::new(),
                name: format!("Widget {i}"),
                text: String::new(),
                placeholder: String::new(),
                is_blank: false,
            });
        }
        for i in 0..blank {
            widgets.push(Widget {
                id: WidgetId::new(),
                name: format!("Filler {i}"),
                text: String::new(),
                placeholder: String::new(),
                is_blank: true,
            });
        }
        Category {
            id: CategoryId::new(),
            name: "Cloud".to_string(),
            widgets,
        }
    }

    #[test]
    fn test_window_skips_blanks_and_caps_at_two() {
        let category = category(3, 2);
        let window = visible_window(&category, 0);
        assert_eq!(window.len(), 2);
        assert!(window.iter().all(|w| !w.is_blank));

        let window = visible_window(&category, 1);
        assert_eq!(window.len(), 2);
        assert_eq!(window[1].name, "Widget 2");
    }

    #[test]
    fn test_exactly_two_widgets_disables_both_controls() {
        let category = category(2, 1);
        assert!(!can_slide_left(0));
        assert!(!can_slide_right(&category, 0));
    }

    #[test]
    fn test_slide_is_idempotent_at_boundaries() {
        let category = category(2, 0);
        // Clamped at the right boundary.
        assert_eq!(advance(&category, 0, SlideDirection::Right), 0);
        // Clamped at the left boundary.
        assert_eq!(advance(&category, 0, SlideDirection::Left), 0);
    }

    #[test]
    fn test_right_then_left_round_trips() {
        let category = category(4, 0);
        let after_right = advance(&category, 1, SlideDirection::Right);
        assert_eq!(after_right, 2);
        assert_eq!(advance(&category, after_right, SlideDirection::Left), 1);
    }

    #[test]
    fn test_index_stays_within_bounds() {
        let category = category(5, 3);
        let max = category.non_blank_count() - WINDOW_SIZE;
        let mut index = 0;
        for _ in 0..10 {
            index = advance(&category, index, SlideDirection::Right);
            assert!(index <= max);
        }
        assert_eq!(index, max);
        assert!(can_slide_left(index));
        assert!(!can_slide_right(&category, index));
        for _ in 0..10 {
            index = advance(&category, index, SlideDirection::Left);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn test_clamped_index_follows_shrinking_category() {
        let mut category = category(4, 0);
        let mut pagination = Pagination::new();
        pagination.slide(&category, SlideDirection::Right);
        pagination.slide(&category, SlideDirection::Right);
        assert_eq!(pagination.index(category.id), 2);

        // The category shrinks under the stored index.
        category.widgets.truncate(2);
        assert_eq!(pagination.clamped_index(&category), 0);

        // The next slide starts from the clamped position.
        pagination.slide(&category, SlideDirection::Left);
        assert_eq!(pagination.index(category.id), 0);
    }

    #[test]
    fn test_lazy_entries_default_to_zero() {
        let category = category(3, 0);
        let mut pagination = Pagination::new();
        assert_eq!(pagination.index(category.id), 0);

        pagination.slide(&category, SlideDirection::Right);
        assert_eq!(pagination.index(category.id), 1);
    }
}
