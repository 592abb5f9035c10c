//! Tab traversal across items
//!
//! Tab and Shift-Tab on an item's focusable control move to the neighbouring
//! item. Crossing a page boundary turns the page first; focus follows once
//! the track has finished moving.

/// Where focus goes after Tab/Shift-Tab on an item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAction {
    /// Leave the carousel through the element just before it
    ExitBefore,
    /// Jump to the first page indicator
    FocusFirstIndicator,
    /// Focus the item now; it is on the visible page
    FocusItem(usize),
    /// Turn to the previous page, then focus the item after the transition
    PrevPageThenFocus(usize),
    /// Turn to the next page, then focus the item after the transition
    NextPageThenFocus(usize),
}

/// Resolve Tab (`backward == false`) or Shift-Tab on item `index`.
pub fn tab_action(index: usize, item_count: usize, items_per_page: usize, backward: bool) -> TabAction {
    let per_page = items_per_page.max(1);

    if backward {
        if index == 0 {
            return TabAction::ExitBefore;
        }
        let target = index - 1;
        if index % per_page == 0 {
            TabAction::PrevPageThenFocus(target)
        } else {
            TabAction::FocusItem(target)
        }
    } else {
        if index + 1 >= item_count {
            return TabAction::FocusFirstIndicator;
        }
        let target = index + 1;
        if target % per_page == 0 {
            TabAction::NextPageThenFocus(target)
        } else {
            TabAction::FocusItem(target)
        }
    }
}
