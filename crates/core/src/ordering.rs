//! Ordering rules for sortable content collections.
//!
//! Hero slides, FAQs, gallery items, and content sections all share the same
//! display-order contract: rows carry an integer `sort_order`, lists are read
//! ascending by that key with `created_at` descending as the tiebreak, and
//! reordering swaps exactly the two keys of adjacent rows. This module holds
//! the pure part of that contract; the repository layer applies the resulting
//! plan inside a single transaction.

use serde::Deserialize;

use crate::types::DbId;

/// Which way a row moves relative to the current display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// The id and sort key of one row, in current display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSlot {
    pub id: DbId,
    pub sort_order: i32,
}

/// The two key assignments a swap must write atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    /// `(id, new_sort_order)` for the moved row.
    pub moved: (DbId, i32),
    /// `(id, new_sort_order)` for its displaced neighbour.
    pub neighbour: (DbId, i32),
}

/// Result of planning a move against a snapshot of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The target id is not in the collection.
    NotFound,
    /// The move would push the first row up or the last row down; a no-op
    /// that still counts as success.
    Boundary,
    /// Exchange the two sort keys.
    Swap(SwapPlan),
}

/// Default sort key for a newly created row: one past the current maximum,
/// or `0` for an empty collection.
pub fn next_sort_key(current_max: Option<i32>) -> i32 {
    match current_max {
        Some(max) => max + 1,
        None => 0,
    }
}

/// Plan an adjacent swap for `id` within `slots`.
///
/// `slots` must already be in display order (sort key ascending, creation
/// time descending on ties). All other rows keep their keys untouched, so a
/// second identical call restores the original order.
pub fn plan_swap(slots: &[SortSlot], id: DbId, direction: Direction) -> SwapOutcome {
    let Some(index) = slots.iter().position(|s| s.id == id) else {
        return SwapOutcome::NotFound;
    };

    let neighbour_index = match direction {
        Direction::Up => {
            if index == 0 {
                return SwapOutcome::Boundary;
            }
            index - 1
        }
        Direction::Down => {
            if index + 1 >= slots.len() {
                return SwapOutcome::Boundary;
            }
            index + 1
        }
    };

    let moved = slots[index];
    let neighbour = slots[neighbour_index];

    SwapOutcome::Swap(SwapPlan {
        moved: (moved.id, neighbour.sort_order),
        neighbour: (neighbour.id, moved.sort_order),
    })
}
