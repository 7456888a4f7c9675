//! Top-level view state and the small per-section view models.
//!
//! The site has exactly one full-screen view active at a time. Modelling
//! that as a tagged union keeps the invalid combination (loading screen up
//! while a project is selected) unrepresentable. All transitions tolerate
//! out-of-precondition calls as no-ops: this is UI state, a stray duplicate
//! event should never take the session down.

use crate::catalog::Project;

/// The exclusive top-level view. `Loading` is the initial view and is never
/// re-entered once left.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Content,
    Detail(Project),
}

impl View {
    /// `Loading -> Content`. No-op in any other view, so a duplicate
    /// completion signal is harmless.
    pub fn finish_loading(&mut self) {
        if matches!(self, View::Loading) {
            *self = View::Content;
        }
    }

    /// `Content -> Detail(project)`. No-op unless the content view is up.
    pub fn select(&mut self, project: Project) {
        if matches!(self, View::Content) {
            *self = View::Detail(project);
        }
    }

    /// Replace the current selection with a neighbour while staying in the
    /// detail view. Drives the arrow-key previous/next navigation.
    pub fn step_selection(&mut self, neighbour: impl FnOnce(u32) -> Option<Project>) {
        if let View::Detail(current) = self {
            if let Some(project) = neighbour(current.id) {
                *self = View::Detail(project);
            }
        }
    }

    /// `Detail -> Content`, clearing the selection. No-op elsewhere.
    pub fn close(&mut self) {
        if matches!(self, View::Detail(_)) {
            *self = View::Content;
        }
    }

    pub fn selected(&self) -> Option<&Project> {
        match self {
            View::Detail(project) => Some(project),
            _ => None,
        }
    }
}

/// At most one item open at a time; toggling the open item closes it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

/// Bounded image index for the detail-view carousel. The dot controls only
/// produce in-range indices, but `set` clamps anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn set(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index.min(self.len - 1);
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }
}

/// Pointer coordinate as an offset from the viewport centre, in
/// `[-0.5, 0.5]`. Drives the decorative parallax tilts. A zero extent
/// (no layout yet) maps to the centre.
pub fn pointer_fraction(coord: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (coord / extent - 0.5).clamp(-0.5, 0.5)
}

/// Scroll position as a percentage of the scrollable range, clamped to
/// `[0, 100]`. Defined as 0 when the content is no taller than the viewport.
pub fn scroll_progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = doc_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn project(id: u32) -> Project {
        catalog::projects()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn loading_completes_into_content() {
        let mut view = View::Loading;
        assert!(view.selected().is_none());

        view.finish_loading();
        assert_eq!(view, View::Content);
        assert!(view.selected().is_none());
    }

    #[test]
    fn finish_loading_is_a_noop_outside_loading() {
        let mut view = View::Content;
        view.finish_loading();
        assert_eq!(view, View::Content);

        let mut view = View::Detail(project(1));
        view.finish_loading();
        assert_eq!(view.selected().map(|p| p.id), Some(1));
    }

    #[test]
    fn select_then_close_round_trips() {
        let mut view = View::Content;
        view.select(project(3));
        assert_eq!(view.selected().map(|p| p.id), Some(3));

        view.close();
        assert_eq!(view, View::Content);
        assert!(view.selected().is_none());
    }

    #[test]
    fn select_is_a_noop_while_loading() {
        let mut view = View::Loading;
        view.select(project(1));
        assert_eq!(view, View::Loading);
    }

    #[test]
    fn close_is_a_noop_outside_detail() {
        let mut view = View::Loading;
        view.close();
        assert_eq!(view, View::Loading);

        let mut view = View::Content;
        view.close();
        assert_eq!(view, View::Content);
    }

    #[test]
    fn selection_is_set_iff_in_detail() {
        // Walk every transition and check the invariant after each step.
        let mut view = View::Loading;
        let steps: Vec<fn(&mut View)> = vec![
            View::finish_loading,
            |v| v.select(project(2)),
            View::close,
            |v| v.select(project(5)),
            View::finish_loading,
            View::close,
        ];
        for step in steps {
            step(&mut view);
            assert_eq!(view.selected().is_some(), matches!(view, View::Detail(_)));
        }
    }

    #[test]
    fn step_selection_follows_neighbours() {
        let mut view = View::Detail(project(2));
        view.step_selection(catalog::next_after);
        assert_eq!(view.selected().map(|p| p.id), Some(3));

        view.step_selection(catalog::prev_before);
        assert_eq!(view.selected().map(|p| p.id), Some(2));

        // No neighbour: selection unchanged.
        let mut view = View::Detail(project(1));
        view.step_selection(catalog::prev_before);
        assert_eq!(view.selected().map(|p| p.id), Some(1));
    }

    #[test]
    fn accordion_toggle_is_its_own_inverse() {
        let mut accordion = Accordion::default();
        let before = accordion;
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion, before);

        accordion.toggle(3);
        let before = accordion;
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion, before);
    }

    #[test]
    fn accordion_keeps_one_item_open() {
        let mut accordion = Accordion::default();
        accordion.toggle(2);
        assert_eq!(accordion.expanded(), Some(2));

        accordion.toggle(4);
        assert_eq!(accordion.expanded(), Some(4));
        assert!(!accordion.is_open(2));

        accordion.toggle(4);
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn carousel_index_stays_in_bounds() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.index(), 0);

        carousel.set(2);
        assert_eq!(carousel.index(), 2);

        carousel.set(17);
        assert_eq!(carousel.index(), 2);

        let mut empty = Carousel::new(0);
        empty.set(5);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn pointer_fraction_is_centred_and_clamped() {
        assert_eq!(pointer_fraction(0.0, 1000.0), -0.5);
        assert_eq!(pointer_fraction(500.0, 1000.0), 0.0);
        assert_eq!(pointer_fraction(1000.0, 1000.0), 0.5);
        assert_eq!(pointer_fraction(2000.0, 1000.0), 0.5);
        assert_eq!(pointer_fraction(120.0, 0.0), 0.0);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // Overscroll and negative values stay inside the range.
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 2000.0, 1000.0), 0.0);
        // Content no taller than the viewport is defined as 0.
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
