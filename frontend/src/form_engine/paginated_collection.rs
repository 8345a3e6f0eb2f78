//! Page window and expand/collapse state over a user-editable ordered list.
//!
//! The controller never owns the items: the screen component owns the
//! collection (product variants, blog subsections) and passes it in on
//! every call. What lives here is the view state — page size, current page,
//! and the id of the single item currently shown expanded — together with
//! the transitions that keep that state consistent while the collection is
//! mutated underneath it.
//!
//! Per-item state machine: `collapsed --toggle--> expanded --toggle-->
//! collapsed`; removing an item from either state is terminal for it.

/// Identity of an item managed inside a paginated collection. Ids are
/// stable (assigned at creation, never reused) and survive reordering and
/// page navigation.
pub trait CollectionItem {
    fn item_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedCollectionController {
    page_size: usize,
    /// 1-based.
    current_page: usize,
    expanded: Option<String>,
}

impl PaginatedCollectionController {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            expanded: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Number of pages needed for `len` items, never less than one.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The items visible on the current page.
    pub fn page_slice<'a, T: CollectionItem>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.current_page.min(self.total_pages(items.len()));
        let start = (page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Moves to `page` if it is within `[1, total_pages]`; outside that
    /// range the call is a no-op, not an error.
    pub fn go_to_page(&mut self, page: usize, len: usize) {
        if (1..=self.total_pages(len)).contains(&page) {
            self.current_page = page;
        }
    }

    /// Collapses `id` when it is the expanded item, expands it otherwise
    /// (collapsing whatever was expanded before — at most one item is
    /// expanded at a time).
    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Automatic transition after an append: the new item is expanded and
    /// the view jumps to the last page, where appended items land.
    pub fn on_item_added(&mut self, new_id: &str, new_len: usize) {
        self.expanded = Some(new_id.to_string());
        self.current_page = self.total_pages(new_len);
    }

    /// Automatic transition after a removal: the expanded marker is cleared
    /// when it pointed at the removed item, and the current page is pulled
    /// back into range when the removal emptied it.
    pub fn on_item_removed(&mut self, removed_id: &str, remaining_len: usize) {
        if self.expanded.as_deref() == Some(removed_id) {
            self.expanded = None;
        }
        let total = self.total_pages(remaining_len);
        if self.current_page > total {
            self.current_page = total;
        }
    }

    /// Reactive correction: when the expanded item exists but is not on the
    /// current page (externally driven expand, reorder across a page
    /// boundary), recompute the current page to the one containing it.
    pub fn ensure_expanded_visible<T: CollectionItem>(&mut self, items: &[T]) {
        let Some(expanded) = self.expanded.as_deref() else {
            return;
        };
        if let Some(index) = items.iter().position(|item| item.item_id() == expanded) {
            let page = index / self.page_size + 1;
            if page != self.current_page {
                self.current_page = page;
            }
        }
    }

    /// Expands `id` and brings it into view — the "jump to the item that
    /// failed validation" entry point.
    pub fn expand<T: CollectionItem>(&mut self, id: &str, items: &[T]) {
        self.expanded = Some(id.to_string());
        self.ensure_expanded_visible(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: String,
    }

    impl CollectionItem for Entry {
        fn item_id(&self) -> &str {
            &self.id
        }
    }

    fn entries(count: usize) -> Vec<Entry> {
        (1..=count)
            .map(|n| Entry {
                id: format!("item-{}", n),
            })
            .collect()
    }

    fn ids(items: &[Entry]) -> Vec<&str> {
        items.iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn adding_the_fifth_item_stays_on_page_one_expanded() {
        let mut view = PaginatedCollectionController::new(5);
        let mut items = entries(4);
        items.push(Entry {
            id: "item-5".to_string(),
        });
        view.on_item_added("item-5", items.len());

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.expanded_id(), Some("item-5"));
        assert_eq!(view.page_slice(&items).len(), 5);
    }

    #[test]
    fn adding_the_sixth_item_jumps_to_page_two() {
        let mut view = PaginatedCollectionController::new(5);
        let mut items = entries(5);
        items.push(Entry {
            id: "item-6".to_string(),
        });
        view.on_item_added("item-6", items.len());

        assert_eq!(view.current_page(), 2);
        assert_eq!(ids(view.page_slice(&items)), vec!["item-6"]);
    }

    #[test]
    fn removing_the_expanded_item_keeps_a_still_valid_page() {
        // Seven items, page 2 shows items 6-7, item 6 expanded.
        let mut view = PaginatedCollectionController::new(5);
        let mut items = entries(7);
        view.go_to_page(2, items.len());
        view.toggle_expand("item-6");

        items.retain(|entry| entry.id != "item-6");
        view.on_item_removed("item-6", items.len());

        assert_eq!(view.current_page(), 2);
        assert_eq!(view.expanded_id(), None);
        assert_eq!(ids(view.page_slice(&items)), vec!["item-7"]);
    }

    #[test]
    fn removing_the_last_item_of_the_last_page_steps_back() {
        let mut view = PaginatedCollectionController::new(5);
        let mut items = entries(6);
        view.go_to_page(2, items.len());

        items.pop();
        view.on_item_removed("item-6", items.len());

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page_slice(&items).len(), 5);
    }

    #[test]
    fn go_to_page_outside_range_is_a_no_op() {
        let mut view = PaginatedCollectionController::new(5);
        let items = entries(7);

        view.go_to_page(0, items.len());
        assert_eq!(view.current_page(), 1);
        view.go_to_page(3, items.len());
        assert_eq!(view.current_page(), 1);
        view.go_to_page(2, items.len());
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn toggle_expand_collapses_and_switches() {
        let mut view = PaginatedCollectionController::new(5);

        view.toggle_expand("item-1");
        assert!(view.is_expanded("item-1"));

        // At most one item expanded at a time.
        view.toggle_expand("item-2");
        assert!(!view.is_expanded("item-1"));
        assert!(view.is_expanded("item-2"));

        view.toggle_expand("item-2");
        assert_eq!(view.expanded_id(), None);
    }

    #[test]
    fn expand_jumps_to_the_page_containing_the_item() {
        let mut view = PaginatedCollectionController::new(5);
        let items = entries(12);

        view.expand("item-11", &items);

        assert_eq!(view.current_page(), 3);
        assert_eq!(ids(view.page_slice(&items)), vec!["item-11", "item-12"]);
    }

    #[test]
    fn reorder_across_a_page_boundary_follows_the_expanded_item() {
        let mut view = PaginatedCollectionController::new(5);
        let mut items = entries(6);
        view.toggle_expand("item-5");

        // Move item 5 one slot down: it is now first on page 2.
        items.swap(4, 5);
        view.ensure_expanded_visible(&items);

        assert_eq!(view.current_page(), 2);
        assert_eq!(ids(view.page_slice(&items)), vec!["item-5"]);
    }

    #[test]
    fn page_slice_tolerates_an_emptied_collection() {
        let mut view = PaginatedCollectionController::new(5);
        let items = entries(7);
        view.go_to_page(2, items.len());

        let empty: Vec<Entry> = Vec::new();
        assert!(view.page_slice(&empty).is_empty());
        assert_eq!(view.total_pages(0), 1);
    }
}
