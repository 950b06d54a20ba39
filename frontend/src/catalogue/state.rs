use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use super::data::Catalogue;
use super::models::{CategoryFilter, Treatment};

/// Items matching `filter`, in source order.
pub fn visible_items(items: &[Treatment], filter: CategoryFilter) -> Vec<&Treatment> {
    items.iter().filter(|item| filter.matches(item.category)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedItem<'a> {
    pub treatment: &'a Treatment,
    pub expanded: bool,
}

/// Visible items annotated with their expanded flag.
pub fn project<'a>(
    items: &'a [Treatment],
    filter: CategoryFilter,
    expanded: Option<&str>,
) -> Vec<ProjectedItem<'a>> {
    visible_items(items, filter)
        .into_iter()
        .map(|treatment| ProjectedItem {
            treatment,
            expanded: expanded == Some(treatment.id.as_str()),
        })
        .collect()
}

pub enum CatalogueAction {
    /// Chip label as rendered; unknown labels are ignored.
    SelectCategory(String),
    ToggleExpanded(String),
}

/// Filter and expansion state of one catalogue view.
///
/// Expansion is a single slot, so at most one treatment is ever expanded.
/// Changing the filter leaves the slot alone, even if the expanded
/// treatment is no longer visible.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogueState {
    catalogue: Rc<Catalogue>,
    filter: CategoryFilter,
    expanded: Option<String>,
}

impl CatalogueState {
    pub fn new(catalogue: Rc<Catalogue>) -> Self {
        Self {
            catalogue,
            filter: CategoryFilter::default(),
            expanded: None,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded() == Some(id)
    }

    /// Returns whether the filter changed.
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        debug!("catalogue filter: {} -> {}", self.filter.label(), filter.label());
        self.filter = filter;
        true
    }

    /// Label-based entry point used by the filter chips.
    /// Labels outside the closed set are logged and ignored.
    pub fn select_category_label(&mut self, label: &str) -> bool {
        match CategoryFilter::from_label(label) {
            Some(filter) => self.select_category(filter),
            None => {
                warn!("ignoring unknown category {:?}", label);
                false
            }
        }
    }

    /// Returns whether the expansion changed. Unknown ids are ignored.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if !self.catalogue.contains(id) {
            warn!("ignoring toggle for unknown treatment {:?}", id);
            return false;
        }
        if self.is_expanded(id) {
            debug!("collapsing {}", id);
            self.expanded = None;
        } else {
            debug!("expanding {}", id);
            self.expanded = Some(id.to_string());
        }
        true
    }

    pub fn visible_items(&self) -> Vec<&Treatment> {
        visible_items(self.catalogue.items(), self.filter)
    }

    pub fn projection(&self) -> Vec<ProjectedItem<'_>> {
        project(self.catalogue.items(), self.filter, self.expanded())
    }
}

impl Reducible for CatalogueState {
    type Action = CatalogueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CatalogueAction::SelectCategory(label) => next.select_category_label(&label),
            CatalogueAction::ToggleExpanded(id) => next.toggle_expanded(&id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::data::embedded_catalogue;
    use crate::catalogue::models::Category;

    fn treatment(id: &str, category: Category) -> Treatment {
        Treatment {
            id: id.to_string(),
            title: id.to_uppercase(),
            category,
            duration: "30 mins".to_string(),
            price: "From £—".to_string(),
            summary: String::new(),
            best_for: Vec::new(),
            highlights: Vec::new(),
            downtime: "None".to_string(),
        }
    }

    fn two_item_state() -> CatalogueState {
        let catalogue = Catalogue::new(vec![
            treatment("a", Category::Facials),
            treatment("b", Category::Massage),
        ])
        .unwrap();
        CatalogueState::new(Rc::new(catalogue))
    }

    fn ids(items: &[&Treatment]) -> Vec<String> {
        items.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn defaults_to_all_with_nothing_expanded() {
        let state = two_item_state();
        assert_eq!(state.filter(), CategoryFilter::All);
        assert_eq!(state.expanded(), None);
        assert_eq!(ids(&state.visible_items()), ["a", "b"]);
    }

    #[test]
    fn filters_return_exact_ids_in_source_order() {
        let catalogue = embedded_catalogue().unwrap();
        let items = catalogue.items();

        assert_eq!(
            ids(&visible_items(items, CategoryFilter::Only(Category::BrowsAndLips))),
            ["brow-wax-shape", "semi-permanent-brows", "semi-permanent-lips"]
        );
        assert_eq!(
            ids(&visible_items(items, CategoryFilter::Only(Category::Massage))),
            ["relaxing-massage"]
        );
        assert_eq!(
            ids(&visible_items(items, CategoryFilter::Only(Category::AdvancedSkin))),
            [
                "dmk-enzyme-therapy",
                "microdermabrasion",
                "dermaplaning",
                "microneedling",
                "chemical-peel",
                "dmk-quick-peel",
            ]
        );
        assert_eq!(
            ids(&visible_items(items, CategoryFilter::Only(Category::Facials))),
            ["signature-facial"]
        );

        let all: Vec<_> = items.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids(&visible_items(items, CategoryFilter::All)), all);
    }

    #[test]
    fn visible_items_is_idempotent_and_leaves_input_alone() {
        let catalogue = embedded_catalogue().unwrap();
        let before = catalogue.items().to_vec();
        let filter = CategoryFilter::Only(Category::AdvancedSkin);

        let first = ids(&visible_items(catalogue.items(), filter));
        let second = ids(&visible_items(catalogue.items(), filter));
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(catalogue.items(), before.as_slice());
    }

    #[test]
    fn empty_category_yields_empty_list() {
        let state = two_item_state();
        let visible = visible_items(
            state.catalogue.items(),
            CategoryFilter::Only(Category::Consultation),
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn expanding_another_item_collapses_the_first() {
        let mut state = two_item_state();
        state.toggle_expanded("a");
        state.toggle_expanded("b");
        assert!(!state.is_expanded("a"));
        assert!(state.is_expanded("b"));
    }

    #[test]
    fn toggling_twice_collapses() {
        let mut state = two_item_state();
        assert!(state.toggle_expanded("a"));
        assert!(state.is_expanded("a"));
        assert!(state.toggle_expanded("a"));
        assert!(!state.is_expanded("a"));
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn expansion_is_independent_of_the_filter() {
        let mut state = two_item_state();
        assert!(state.select_category_label("Massage"));
        assert_eq!(ids(&state.visible_items()), ["b"]);

        state.toggle_expanded("a");
        assert!(state.is_expanded("a"));

        let projection = state.projection();
        assert_eq!(projection.len(), 1);
        assert_eq!(projection[0].treatment.id, "b");
        assert!(!projection[0].expanded);

        state.select_category(CategoryFilter::All);
        let flags: Vec<_> = state.projection().iter().map(|p| p.expanded).collect();
        assert_eq!(flags, [true, false]);
    }

    #[test]
    fn selecting_all_restores_full_list_in_order() {
        let catalogue = Rc::new(embedded_catalogue().unwrap());
        let mut state = CatalogueState::new(catalogue.clone());
        for label in ["Massage", "Brows & Lips", "Facials", "All"] {
            state.select_category_label(label);
        }
        let expected: Vec<_> = catalogue.items().iter().collect();
        assert_eq!(state.visible_items(), expected);
    }

    #[test]
    fn unknown_inputs_leave_state_unchanged() {
        let mut state = two_item_state();
        state.toggle_expanded("b");
        state.select_category_label("Facials");
        let before = state.clone();

        assert!(!state.select_category_label("Nails"));
        assert!(!state.select_category_label("facials"));
        assert!(!state.toggle_expanded("missing"));
        assert_eq!(state, before);
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let state = Rc::new(two_item_state());
        let next = state
            .clone()
            .reduce(CatalogueAction::SelectCategory("All".to_string()));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state
            .clone()
            .reduce(CatalogueAction::SelectCategory("Nails".to_string()));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state
            .clone()
            .reduce(CatalogueAction::ToggleExpanded("zzz".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(two_item_state());
        let state = state.reduce(CatalogueAction::SelectCategory("Facials".to_string()));
        let state = state.reduce(CatalogueAction::ToggleExpanded("a".to_string()));
        assert_eq!(state.filter(), CategoryFilter::Only(Category::Facials));
        assert!(state.is_expanded("a"));

        let state = state.reduce(CatalogueAction::ToggleExpanded("a".to_string()));
        assert!(!state.is_expanded("a"));
    }

    #[test]
    fn separate_states_do_not_share_expansion() {
        let catalogue = Rc::new(embedded_catalogue().unwrap());
        let mut first = CatalogueState::new(catalogue.clone());
        let second = CatalogueState::new(catalogue);
        first.toggle_expanded("chemical-peel");
        assert!(first.is_expanded("chemical-peel"));
        assert!(!second.is_expanded("chemical-peel"));
    }
}
