//! Union area of axis-aligned rectangles by sweep line.
//!
//! [`union_area`] sweeps a vertical line across the rectangles in
//! increasing `x` and keeps a [`CoverageTree`] over the compressed `y`
//! edges that knows how much of the line is currently covered. Between two
//! consecutive event columns the covered length is constant, so the area
//! accumulates as `covered * dx`.
//!
//! Coordinates are `i128` so that half-open edges like `i64::MAX + 1` fit.

/// A half-open rectangle `[x0, x1) × [y0, y1)` in cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x0: i128,
    pub x1: i128,
    pub y0: i128,
    pub y1: i128,
}

/// Segment tree over elementary intervals `[edges[i], edges[i + 1])`.
///
/// `count[node]` is how many active rectangles fully cover the node's
/// range without being pushed down; `covered[node]` is the covered length
/// within that range. Counts are never pushed down, which keeps updates
/// `O(log n)`.
#[derive(Debug)]
pub(crate) struct CoverageTree {
    edges: Vec<i128>,
    count: Vec<i32>,
    covered: Vec<u128>,
}

impl CoverageTree {
    /// Build an empty tree over sorted, deduplicated `edges`.
    pub fn new(edges: Vec<i128>) -> Self {
        let leaves = edges.len().saturating_sub(1).max(1);
        Self {
            edges,
            count: vec![0; 4 * leaves],
            covered: vec![0; 4 * leaves],
        }
    }

    /// Length currently covered by at least one active range.
    pub fn covered(&self) -> u128 {
        self.covered.first().copied().unwrap_or(0)
    }

    /// Add (`delta = 1`) or remove (`delta = -1`) the range `[lo, hi)`.
    ///
    /// Both bounds must be present in `edges`.
    pub fn update(&mut self, lo: i128, hi: i128, delta: i32) {
        let (Ok(ql), Ok(qr)) = (self.edges.binary_search(&lo), self.edges.binary_search(&hi))
        else {
            return;
        };
        if ql >= qr || self.edges.len() < 2 {
            return;
        }
        let last = self.edges.len() - 1;
        self.apply(0, 0, last, ql, qr, delta);
    }

    fn apply(&mut self, node: usize, l: usize, r: usize, ql: usize, qr: usize, delta: i32) {
        if qr <= l || r <= ql {
            return;
        }
        if ql <= l && r <= qr {
            self.count[node] += delta;
        } else {
            let mid = (l + r) / 2;
            self.apply(2 * node + 1, l, mid, ql, qr, delta);
            self.apply(2 * node + 2, mid, r, ql, qr, delta);
        }
        self.pull(node, l, r);
    }

    fn pull(&mut self, node: usize, l: usize, r: usize) {
        self.covered[node] = if self.count[node] > 0 {
            (self.edges[r] - self.edges[l]) as u128
        } else if r - l == 1 {
            0
        } else {
            self.covered[2 * node + 1] + self.covered[2 * node + 2]
        };
    }
}

/// Area of the union of `rects`.
pub(crate) fn union_area(rects: &[Rect]) -> u128 {
    if rects.is_empty() {
        return 0;
    }

    let mut edges: Vec<i128> = rects.iter().flat_map(|r| [r.y0, r.y1]).collect();
    edges.sort_unstable();
    edges.dedup();

    // (x, y0, y1, delta): entering edges open a range, leaving edges close it.
    let mut events: Vec<(i128, i128, i128, i32)> = Vec::with_capacity(rects.len() * 2);
    for r in rects {
        events.push((r.x0, r.y0, r.y1, 1));
        events.push((r.x1, r.y0, r.y1, -1));
    }
    events.sort_unstable_by_key(|e| e.0);

    let mut tree = CoverageTree::new(edges);
    let mut area: u128 = 0;
    let mut prev_x = events[0].0;
    for (x, y0, y1, delta) in events {
        let dx = (x - prev_x) as u128;
        area = area.saturating_add(tree.covered().saturating_mul(dx));
        tree.update(y0, y1, delta);
        prev_x = x;
    }
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn rect(x0: i128, x1: i128, y0: i128, y1: i128) -> Rect {
        Rect { x0, x1, y0, y1 }
    }

    #[test]
    fn empty_has_no_area() {
        assert_eq!(union_area(&[]), 0);
    }

    #[test]
    fn single_rect() {
        assert_eq!(union_area(&[rect(0, 3, 0, 2)]), 6);
    }

    #[test]
    fn overlapping_rects_count_once() {
        // Two 2x2 squares sharing one cell.
        assert_eq!(union_area(&[rect(0, 2, 0, 2), rect(1, 3, 1, 3)]), 7);
    }

    #[test]
    fn identical_rects_count_once() {
        let r = rect(-5, 5, -1, 0);
        assert_eq!(union_area(&[r, r, r]), 10);
    }

    #[test]
    fn plus_sign() {
        // Row y=0 from x=-2..=2 and column x=0 from y=-2..=2.
        let h = rect(-2, 3, 0, 1);
        let v = rect(0, 1, -2, 3);
        assert_eq!(union_area(&[h, v]), 9);
    }

    #[test]
    fn tree_tracks_nested_ranges() {
        let mut t = CoverageTree::new(vec![0, 2, 5, 9]);
        t.update(0, 9, 1);
        t.update(2, 5, 1);
        assert_eq!(t.covered(), 9);
        t.update(0, 9, -1);
        assert_eq!(t.covered(), 3);
        t.update(2, 5, -1);
        assert_eq!(t.covered(), 0);
    }

    #[test]
    fn huge_coordinates_fit() {
        let max = i128::from(i64::MAX);
        assert_eq!(union_area(&[rect(0, 1, max - 9, max + 1)]), 10);
    }

    proptest! {
        #[test]
        fn area_matches_cell_enumeration(
            raw in prop::collection::vec((-8i128..8, 1i128..5, -8i128..8, 1i128..5), 0..12),
        ) {
            let rects: Vec<Rect> = raw
                .iter()
                .map(|&(x, w, y, h)| rect(x, x + w, y, y + h))
                .collect();
            let mut cells = HashSet::new();
            for r in &rects {
                for x in r.x0..r.x1 {
                    for y in r.y0..r.y1 {
                        cells.insert((x, y));
                    }
                }
            }
            prop_assert_eq!(union_area(&rects), cells.len() as u128);
        }
    }
}
