//! Selection re-resolution
//!
//! Modules have no identity beyond their position, so the selected index
//! goes stale after every structural edit. These functions compute where
//! the selection lands next.

/// Clamp a possibly stale index into `0..len`. An empty list resolves to 0.
#[must_use]
pub const fn clamp(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        len - 1
    } else {
        index
    }
}

/// Select the item that slid into the removed slot, or the new last item.
#[must_use]
pub const fn after_removal(removed: usize, new_len: usize) -> usize {
    clamp(removed, new_len)
}

/// Follow the selected module to its position in `new_order`.
#[must_use]
pub fn after_reorder(selected: usize, new_order: &[usize]) -> usize {
    new_order
        .iter()
        .position(|&index| index == selected)
        .unwrap_or(0)
}

/// Follow the selected module across a move from `from` to `to`.
#[must_use]
pub const fn after_move(selected: usize, from: usize, to: usize) -> usize {
    if selected == from {
        to
    } else if from < selected && selected <= to {
        selected - 1
    } else if to <= selected && selected < from {
        selected + 1
    } else {
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Skillmap;
    use crate::model::ops::{move_module, remove_module};
    use crate::test_utils::fixtures::modules_titled;

    #[test]
    fn test_after_removal_clamps() {
        // n = 4, removing i gives min(i, n - 2)
        assert_eq!(after_removal(0, 3), 0);
        assert_eq!(after_removal(2, 3), 2);
        assert_eq!(after_removal(3, 3), 2);
    }

    #[test]
    fn test_clamp_handles_empty() {
        assert_eq!(clamp(5, 0), 0);
        assert_eq!(clamp(5, 2), 1);
        assert_eq!(clamp(1, 2), 1);
    }

    #[test]
    fn test_after_reorder_follows_module() {
        assert_eq!(after_reorder(0, &[2, 0, 1]), 1);
        assert_eq!(after_reorder(2, &[2, 0, 1]), 0);
    }

    #[test]
    fn test_after_move_tracks_selected_title() {
        let doc: Skillmap = modules_titled(&["a", "b", "c", "d", "e"]);
        for from in 0..5 {
            for to in 0..5 {
                let moved = move_module(&doc, from, to).unwrap();
                for selected in 0..5 {
                    let next = after_move(selected, from, to);
                    assert_eq!(
                        moved.modules[next].title, doc.modules[selected].title,
                        "from {from} to {to} selected {selected}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_after_removal_matches_remove_module() {
        let doc = modules_titled(&["a", "b", "c"]);
        let next = remove_module(&doc, 2).unwrap();
        assert_eq!(next.modules[after_removal(2, next.modules.len())].title, "b");
    }
}
