/*!
A two-level binary search tree over pairs of values, backed by arenas of index-addressed nodes.

The primary tree is keyed on the value a collection of points takes at one coordinate, and each primary node holds a secondary tree keyed on the values the points with that first value take at the other coordinate.
Both trees are balanced by construction: they are built once, from sorted distinct keys, by midpoint recursion, and never rebalanced.

Nodes live in flat vectors and refer to one another by index, so the structure has no shared ownership, no parent pointers, and may be read concurrently without ceremony.

The one query of interest is [any_in_quadrant](PairTree::any_in_quadrant): whether some stored point lies in a quadrant, aka. on given sides of both axes at once.
The walk prunes any subtree on the wrong side of the query's half-plane.

```rust
# use otter_learn::generic::pair_tree::{PairTree, Side};
let tree = PairTree::build(&[(0, 0), (1, 1)]);

assert!(tree.any_in_quadrant(Side::AtMost, 0, Side::AtMost, 1));
assert!(!tree.any_in_quadrant(Side::AtMost, 0, Side::AtLeast, 1));
```
*/

use crate::structures::value::Value;

/// A side of an axis, fixing which values are admitted by a quadrant query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Values at or below the query value.
    AtMost,

    /// Values at or above the query value.
    AtLeast,
}

impl Side {
    /// True if `key` is on this side of `bound`.
    pub fn admits(&self, key: Value, bound: Value) -> bool {
        match self {
            Side::AtMost => key <= bound,
            Side::AtLeast => key >= bound,
        }
    }
}

struct PrimaryNode {
    key: Value,
    left: Option<usize>,
    right: Option<usize>,
    secondary_root: Option<usize>,
}

struct SecondaryNode {
    key: Value,
    left: Option<usize>,
    right: Option<usize>,
}

/// A two-level index over a collection of value pairs.
pub struct PairTree {
    primary: Vec<PrimaryNode>,
    secondary: Vec<SecondaryNode>,
    root: Option<usize>,
}

impl PairTree {
    /// Builds the index over the given points.
    pub fn build(points: &[(Value, Value)]) -> Self {
        let mut sorted: Vec<(Value, Value)> = points.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut tree = PairTree {
            primary: Vec::default(),
            secondary: Vec::default(),
            root: None,
        };

        // Group by first value; `sorted` guarantees each group's second values are sorted and distinct.
        let mut groups: Vec<(Value, Vec<Value>)> = Vec::default();
        for (first, second) in sorted {
            match groups.last_mut() {
                Some((key, seconds)) if *key == first => seconds.push(second),
                _ => groups.push((first, vec![second])),
            }
        }

        tree.root = tree.build_primary(&groups);
        tree
    }

    fn build_primary(&mut self, groups: &[(Value, Vec<Value>)]) -> Option<usize> {
        if groups.is_empty() {
            return None;
        }
        let midpoint = groups.len() / 2;
        let (key, seconds) = &groups[midpoint];

        let secondary_root = self.build_secondary(seconds);
        let left = self.build_primary(&groups[..midpoint]);
        let right = self.build_primary(&groups[midpoint + 1..]);

        self.primary.push(PrimaryNode {
            key: *key,
            left,
            right,
            secondary_root,
        });
        Some(self.primary.len() - 1)
    }

    fn build_secondary(&mut self, keys: &[Value]) -> Option<usize> {
        if keys.is_empty() {
            return None;
        }
        let midpoint = keys.len() / 2;

        let left = self.build_secondary(&keys[..midpoint]);
        let right = self.build_secondary(&keys[midpoint + 1..]);

        self.secondary.push(SecondaryNode {
            key: keys[midpoint],
            left,
            right,
        });
        Some(self.secondary.len() - 1)
    }

    /// True if the index holds no point.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True if some stored point is on `first_side` of `first` and on `second_side` of `second` at once.
    pub fn any_in_quadrant(
        &self,
        first_side: Side,
        first: Value,
        second_side: Side,
        second: Value,
    ) -> bool {
        self.walk_primary(self.root, first_side, first, second_side, second)
    }

    fn walk_primary(
        &self,
        node: Option<usize>,
        first_side: Side,
        first: Value,
        second_side: Side,
        second: Value,
    ) -> bool {
        let Some(index) = node else {
            return false;
        };
        let node = &self.primary[index];

        if first_side.admits(node.key, first)
            && self.walk_secondary(node.secondary_root, second_side, second)
        {
            return true;
        }

        // Prune the subtree strictly on the wrong side of the half-plane.
        let (explore_left, explore_right) = match first_side {
            Side::AtMost => (true, node.key < first),
            Side::AtLeast => (node.key > first, true),
        };

        (explore_left && self.walk_primary(node.left, first_side, first, second_side, second))
            || (explore_right
                && self.walk_primary(node.right, first_side, first, second_side, second))
    }

    fn walk_secondary(&self, node: Option<usize>, side: Side, bound: Value) -> bool {
        let Some(index) = node else {
            return false;
        };
        let node = &self.secondary[index];

        if side.admits(node.key, bound) {
            return true;
        }

        match side {
            Side::AtMost => self.walk_secondary(node.left, side, bound),
            Side::AtLeast => self.walk_secondary(node.right, side, bound),
        }
    }
}

#[cfg(test)]
mod pair_tree_tests {
    use super::*;

    #[test]
    fn empty_admits_nothing() {
        let tree = PairTree::build(&[]);
        assert!(tree.is_empty());
        assert!(!tree.any_in_quadrant(Side::AtLeast, 0, Side::AtLeast, 0));
    }

    #[test]
    fn quadrants_of_a_diagonal() {
        let tree = PairTree::build(&[(0, 0), (1, 1), (2, 2)]);

        assert!(tree.any_in_quadrant(Side::AtLeast, 1, Side::AtLeast, 1));
        assert!(tree.any_in_quadrant(Side::AtMost, 1, Side::AtMost, 1));
        assert!(tree.any_in_quadrant(Side::AtLeast, 2, Side::AtMost, 2));

        assert!(!tree.any_in_quadrant(Side::AtLeast, 1, Side::AtMost, 0));
        assert!(!tree.any_in_quadrant(Side::AtMost, 0, Side::AtLeast, 1));
    }

    #[test]
    fn duplicate_points_collapse() {
        let tree = PairTree::build(&[(3, 4), (3, 4), (3, 4)]);

        assert!(tree.any_in_quadrant(Side::AtLeast, 3, Side::AtLeast, 4));
        assert!(!tree.any_in_quadrant(Side::AtLeast, 4, Side::AtLeast, 4));
    }
}
