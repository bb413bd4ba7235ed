//! Sort-key reordering for sibling collections.
//!
//! Lakes within a status group, regions within a lake, and access points
//! within a region all carry an explicit integer sort key. Reordering
//! swaps keys between exactly the two affected siblings, never a full
//! renumber, so a reorder is O(1) persistence writes. The canonical
//! order is `(sort_order asc, name asc)`; the name tie-break keeps
//! display and reordering deterministic even when keys collide (freshly
//! imported data, or a partial write that was rolled back).

use lakestats_model::{AccessPoint, LakeRegion, LakeSystemSettings};
pub use lakestats_model::SortAssignment;
use std::cmp::Ordering;

/// An entity that can be reordered within its sibling scope.
pub trait Ordered {
    /// Stable identifier, unique within the scope.
    fn id(&self) -> &str;
    /// Display name, used to break sort-key ties.
    fn name(&self) -> &str;
    fn sort_order(&self) -> i64;
    fn set_sort_order(&mut self, sort_order: i64);
}

impl Ordered for LakeSystemSettings {
    fn id(&self) -> &str {
        &self.lake_id
    }
    fn name(&self) -> &str {
        &self.lake_name
    }
    fn sort_order(&self) -> i64 {
        self.sort_order
    }
    fn set_sort_order(&mut self, sort_order: i64) {
        self.sort_order = sort_order;
    }
}

impl Ordered for LakeRegion {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn sort_order(&self) -> i64 {
        self.sort_order
    }
    fn set_sort_order(&mut self, sort_order: i64) {
        self.sort_order = sort_order;
    }
}

impl Ordered for AccessPoint {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn sort_order(&self) -> i64 {
        self.sort_order
    }
    fn set_sort_order(&mut self, sort_order: i64) {
        self.sort_order = sort_order;
    }
}

fn canonical_cmp<T: Ordered>(a: &T, b: &T) -> Ordering {
    a.sort_order()
        .cmp(&b.sort_order())
        .then_with(|| a.name().cmp(b.name()))
}

/// Sort siblings into canonical display order.
pub fn canonical_order<T: Ordered>(items: &mut [T]) {
    items.sort_by(canonical_cmp);
}

/// Indices of `items` in canonical order, without moving the items.
fn canonical_indices<T: Ordered>(items: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| canonical_cmp(&items[a], &items[b]));
    indices
}

fn swap_with_neighbor<T: Ordered>(items: &mut [T], id: &str, up: bool) -> Vec<SortAssignment> {
    let order = canonical_indices(items);
    let Some(pos) = order.iter().position(|&i| items[i].id() == id) else {
        return Vec::new();
    };
    let neighbor_pos = if up {
        let Some(p) = pos.checked_sub(1) else {
            return Vec::new();
        };
        p
    } else {
        if pos + 1 >= order.len() {
            return Vec::new();
        }
        pos + 1
    };

    let (item_idx, neighbor_idx) = (order[pos], order[neighbor_pos]);
    let item_key = items[item_idx].sort_order();
    let neighbor_key = items[neighbor_idx].sort_order();
    items[item_idx].set_sort_order(neighbor_key);
    items[neighbor_idx].set_sort_order(item_key);

    vec![
        SortAssignment {
            id: items[item_idx].id().to_string(),
            sort_order: neighbor_key,
        },
        SortAssignment {
            id: items[neighbor_idx].id().to_string(),
            sort_order: item_key,
        },
    ]
}

/// Move an entity one place earlier by swapping sort keys with its
/// canonical-order predecessor. Returns the two assignments to persist;
/// empty when the entity is already first or the id is unknown.
pub fn move_up<T: Ordered>(items: &mut [T], id: &str) -> Vec<SortAssignment> {
    swap_with_neighbor(items, id, true)
}

/// Move an entity one place later by swapping sort keys with its
/// canonical-order successor. Returns the two assignments to persist;
/// empty when the entity is already last or the id is unknown.
pub fn move_down<T: Ordered>(items: &mut [T], id: &str) -> Vec<SortAssignment> {
    swap_with_neighbor(items, id, false)
}

/// The sort key for a new entity appended to this scope: one past the
/// current maximum, or 1 for an empty scope. Existing siblings are never
/// renumbered.
pub fn next_sort_order<T: Ordered>(items: &[T]) -> i64 {
    items
        .iter()
        .map(Ordered::sort_order)
        .max()
        .map_or(1, |max| max + 1)
}

/// Apply explicit sort-key assignments to a sibling scope, e.g. after a
/// cross-scope move computed the target position. Unknown ids are
/// skipped; returns how many assignments matched.
pub fn apply_assignments<T: Ordered>(items: &mut [T], assignments: &[SortAssignment]) -> usize {
    let mut applied = 0;
    for assignment in assignments {
        if let Some(item) = items.iter_mut().find(|i| i.id() == assignment.id) {
            item.set_sort_order(assignment.sort_order);
            applied += 1;
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakestats_model::AccessType;

    fn point(id: &str, name: &str, sort_order: i64) -> AccessPoint {
        AccessPoint {
            id: id.to_string(),
            name: name.to_string(),
            access_type: AccessType::BoatRamp,
            min_safe_elevation: 3550.0,
            min_usable_elevation: 3540.0,
            google_maps_link: None,
            sort_order,
        }
    }

    fn ids_in_canonical_order(items: &[AccessPoint]) -> Vec<&str> {
        canonical_indices(items)
            .into_iter()
            .map(|i| items[i].id())
            .collect()
    }

    #[test]
    fn name_breaks_sort_key_ties() {
        // Keys {1, 2, 2} with names B, A, C: key first, then name.
        let items = vec![point("b", "B", 1), point("a", "A", 2), point("c", "C", 2)];
        assert_eq!(ids_in_canonical_order(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn move_up_swaps_keys_with_predecessor_only() {
        let mut items = vec![
            point("a", "Antelope", 1),
            point("b", "Bullfrog", 2),
            point("c", "Castle", 3),
        ];
        let assignments = move_up(&mut items, "c");
        assert_eq!(
            assignments,
            vec![
                SortAssignment { id: "c".to_string(), sort_order: 2 },
                SortAssignment { id: "b".to_string(), sort_order: 3 },
            ]
        );
        assert_eq!(ids_in_canonical_order(&items), vec!["a", "c", "b"]);
        assert_eq!(items[0].sort_order, 1, "untouched sibling keeps its key");
    }

    #[test]
    fn move_up_at_top_is_a_no_op() {
        let mut items = vec![point("a", "Antelope", 1), point("b", "Bullfrog", 2)];
        assert!(move_up(&mut items, "a").is_empty());
        assert_eq!(ids_in_canonical_order(&items), vec!["a", "b"]);
    }

    #[test]
    fn move_down_at_bottom_is_a_no_op() {
        let mut items = vec![point("a", "Antelope", 1), point("b", "Bullfrog", 2)];
        assert!(move_down(&mut items, "b").is_empty());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut items = vec![point("a", "Antelope", 1)];
        assert!(move_up(&mut items, "zzz").is_empty());
        assert!(move_down(&mut items, "zzz").is_empty());
    }

    #[test]
    fn move_up_then_down_restores_relative_order() {
        let mut items = vec![
            point("a", "Antelope", 10),
            point("b", "Bullfrog", 20),
            point("c", "Castle", 30),
        ];
        let before = ids_in_canonical_order(&items)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        assert!(!move_up(&mut items, "b").is_empty());
        assert!(!move_down(&mut items, "b").is_empty());
        assert_eq!(ids_in_canonical_order(&items), before);
    }

    #[test]
    fn append_key_is_max_plus_one() {
        let items = vec![point("a", "Antelope", 4), point("b", "Bullfrog", 9)];
        assert_eq!(next_sort_order(&items), 10);
        let empty: Vec<AccessPoint> = Vec::new();
        assert_eq!(next_sort_order(&empty), 1, "empty scope starts at 1");
    }

    #[test]
    fn bulk_assignments_apply_and_skip_unknowns() {
        let mut items = vec![point("a", "Antelope", 1), point("b", "Bullfrog", 2)];
        let applied = apply_assignments(
            &mut items,
            &[
                SortAssignment { id: "b".to_string(), sort_order: 7 },
                SortAssignment { id: "ghost".to_string(), sort_order: 1 },
            ],
        );
        assert_eq!(applied, 1);
        assert_eq!(items[1].sort_order, 7);
    }

    #[test]
    fn keys_need_not_be_contiguous() {
        let mut items = vec![
            point("a", "Antelope", -5),
            point("b", "Bullfrog", 40),
            point("c", "Castle", 41),
        ];
        let assignments = move_down(&mut items, "a");
        assert_eq!(assignments.len(), 2);
        assert_eq!(ids_in_canonical_order(&items), vec!["b", "a", "c"]);
    }
}
