use std::cmp::{max, min};
use std::fmt;

use itertools::iproduct;

use super::point::Point;

pub type Coord = i64;

/// An axis-aligned box over integer coordinates, bounds inclusive on every
/// axis. A box with `min > max` on some axis would be empty and is never
/// constructed; the instruction parser rejects such input before it gets
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuboid {
    pub xmin: Coord,
    pub xmax: Coord,
    pub ymin: Coord,
    pub ymax: Coord,
    pub zmin: Coord,
    pub zmax: Coord,
}

/// Outcome of splitting two intersecting cuboids along the grid induced by
/// both boxes' bounds: the cell shared by both, the cells covering only
/// `self` and the cells covering only `other`. The three parts are mutually
/// disjoint and together tile exactly the union of the two boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub common: Cuboid,
    pub self_fragments: Vec<Cuboid>,
    pub other_fragments: Vec<Cuboid>,
}

/// One axis of the split grid: an inclusive sub-interval plus which of the
/// two source intervals it lies inside.
#[derive(Debug, Clone, Copy)]
struct AxisCell {
    lo: Coord,
    hi: Coord,
    in_self: bool,
    in_other: bool,
}

impl AxisCell {
    fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

/// Cut the axis at every bound of both intervals, yielding up to three
/// sub-intervals: left stub, shared middle, right stub. Cells are classified
/// by comparing endpoints only; each candidate cell is either fully inside
/// or fully outside each source interval, so no sampling is needed and the
/// arithmetic stays exact.
fn axis_cells(self_lo: Coord, self_hi: Coord, other_lo: Coord, other_hi: Coord) -> [AxisCell; 3] {
    let mut bounds = [self_lo, self_hi, other_lo, other_hi];
    bounds.sort_unstable();
    [
        (bounds[0], bounds[1] - 1),
        (bounds[1], bounds[2]),
        (bounds[2] + 1, bounds[3]),
    ]
    .map(|(lo, hi)| AxisCell {
        lo,
        hi,
        in_self: self_lo <= lo && hi <= self_hi,
        in_other: other_lo <= lo && hi <= other_hi,
    })
}

impl Cuboid {
    pub fn new(
        xmin: Coord,
        xmax: Coord,
        ymin: Coord,
        ymax: Coord,
        zmin: Coord,
        zmax: Coord,
    ) -> Cuboid {
        debug_assert!(
            xmin <= xmax && ymin <= ymax && zmin <= zmax,
            "degenerate cuboid x={}..{},y={}..{},z={}..{}",
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax
        );
        Cuboid {
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        }
    }

    /// Number of unit cubes covered. Full-scale inputs put coordinates in
    /// the hundred-thousands, so volumes overflow 32 bits routinely; this
    /// is always computed in 64.
    pub fn volume(&self) -> u64 {
        let dx = (self.xmax - self.xmin + 1) as u64;
        let dy = (self.ymax - self.ymin + 1) as u64;
        let dz = (self.zmax - self.zmin + 1) as u64;
        dx * dy * dz
    }

    pub fn contains(&self, p: Point) -> bool {
        self.xmin <= p.x
            && p.x <= self.xmax
            && self.ymin <= p.y
            && p.y <= self.ymax
            && self.zmin <= p.z
            && p.z <= self.zmax
    }

    /// True iff the boxes share at least one unit cube. Boxes that are
    /// merely adjacent (no common integer coordinate on some axis) do not
    /// intersect.
    pub fn intersects(&self, other: &Cuboid) -> bool {
        self.xmax >= other.xmin
            && self.xmin <= other.xmax
            && self.ymax >= other.ymin
            && self.ymin <= other.ymax
            && self.zmax >= other.zmin
            && self.zmin <= other.zmax
    }

    /// The region shared by both boxes, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Cuboid) -> Option<Cuboid> {
        if !self.intersects(other) {
            return None;
        }
        Some(Cuboid::new(
            max(self.xmin, other.xmin),
            min(self.xmax, other.xmax),
            max(self.ymin, other.ymin),
            min(self.ymax, other.ymax),
            max(self.zmin, other.zmin),
            min(self.zmax, other.zmax),
        ))
    }

    /// Split `self` and `other` along the grid induced by both boxes'
    /// bounds on each axis: at most three sub-intervals per axis, 27 cells
    /// in total. Every non-empty cell lies inside both boxes (that one is
    /// `common`, always unique), inside only `self`, inside only `other`,
    /// or in a dead corner of the grid belonging to neither.
    ///
    /// Returns `None` when the boxes do not intersect at all, in which case
    /// the caller keeps both boxes whole.
    pub fn split_against(&self, other: &Cuboid) -> Option<Split> {
        let common = self.intersection(other)?;
        let xs = axis_cells(self.xmin, self.xmax, other.xmin, other.xmax);
        let ys = axis_cells(self.ymin, self.ymax, other.ymin, other.ymax);
        let zs = axis_cells(self.zmin, self.zmax, other.zmin, other.zmax);
        let mut self_fragments = Vec::new();
        let mut other_fragments = Vec::new();
        for (cx, cy, cz) in iproduct!(xs, ys, zs) {
            if cx.is_empty() || cy.is_empty() || cz.is_empty() {
                continue;
            }
            let in_self = cx.in_self && cy.in_self && cz.in_self;
            let in_other = cx.in_other && cy.in_other && cz.in_other;
            if in_self && !in_other {
                self_fragments.push(Cuboid::new(cx.lo, cx.hi, cy.lo, cy.hi, cz.lo, cz.hi));
            } else if in_other && !in_self {
                other_fragments.push(Cuboid::new(cx.lo, cx.hi, cy.lo, cy.hi, cz.lo, cz.hi));
            }
        }
        Some(Split {
            common,
            self_fragments,
            other_fragments,
        })
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}..{},y={}..{},z={}..{}",
            self.xmin, self.xmax, self.ymin, self.ymax, self.zmin, self.zmax
        )
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{Cuboid, Point};

    fn cube(lo: i64, hi: i64) -> Cuboid {
        Cuboid::new(lo, hi, lo, hi, lo, hi)
    }

    #[test]
    fn test_volume() {
        assert_eq!(cube(5, 5).volume(), 1);
        assert_eq!(cube(10, 12).volume(), 27);
        assert_eq!(Cuboid::new(-3, 2, 0, 0, 7, 9).volume(), 18);
        // sides 22466 x 35803 x 26170: far outside 32-bit range
        let far = Cuboid::new(967, 23432, 45373, 81175, 27513, 53682);
        assert_eq!(far.volume(), 22466 * 35803 * 26170);
    }

    #[test]
    fn test_contains() {
        let c = Cuboid::new(0, 4, -4, 0, 10, 10);
        assert!(c.contains(Point::new(0, -4, 10)));
        assert!(c.contains(Point::new(4, 0, 10)));
        assert!(c.contains(Point::new(2, -2, 10)));
        assert!(!c.contains(Point::new(5, -2, 10)));
        assert!(!c.contains(Point::new(2, 1, 10)));
        assert!(!c.contains(Point::new(2, -2, 9)));
    }

    #[test]
    fn test_intersects() {
        assert!(cube(0, 5).intersects(&cube(3, 8)));
        // a single shared plane of unit cubes still counts
        assert!(cube(0, 5).intersects(&cube(5, 9)));
        // adjacent with no shared integer coordinate does not
        assert!(!cube(0, 4).intersects(&cube(5, 9)));
        // overlap must hold on every axis at once
        assert!(!Cuboid::new(0, 5, 0, 5, 0, 5).intersects(&Cuboid::new(3, 8, 3, 8, 6, 9)));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(
            Cuboid::new(0, 10, 0, 10, 0, 10).intersection(&Cuboid::new(5, 15, -5, 5, 2, 3)),
            Some(Cuboid::new(5, 10, 0, 5, 2, 3))
        );
        assert_eq!(cube(0, 4).intersection(&cube(5, 9)), None);
        // intersecting with a superset clips to self
        let inner = Cuboid::new(2, 3, 2, 3, 2, 3);
        assert_eq!(inner.intersection(&cube(0, 9)), Some(inner));
    }

    #[test]
    fn test_split_disjoint_is_none() {
        assert!(cube(0, 4).split_against(&cube(6, 9)).is_none());
    }

    #[test]
    fn test_split_identical() {
        let c = cube(1, 5);
        let split = c.split_against(&c).unwrap();
        assert_eq!(split.common, c);
        assert!(split.self_fragments.is_empty());
        assert!(split.other_fragments.is_empty());
    }

    #[test]
    fn test_split_interior_cut() {
        let outer = cube(0, 8);
        let inner = cube(3, 5);
        let split = outer.split_against(&inner).unwrap();
        assert_eq!(split.common, inner);
        // a strictly interior cut produces the full 27-cell grid minus the
        // shared center
        assert_eq!(split.self_fragments.len(), 26);
        assert!(split.other_fragments.is_empty());
        let leftover: u64 = split.self_fragments.iter().map(Cuboid::volume).sum();
        assert_eq!(leftover, outer.volume() - inner.volume());
        for fragment in &split.self_fragments {
            assert_eq!(outer.intersection(fragment), Some(*fragment));
            assert!(!fragment.intersects(&inner));
        }
        for (a, b) in split.self_fragments.iter().tuple_combinations() {
            assert!(!a.intersects(b), "fragments {} and {} overlap", a, b);
        }
    }

    #[test]
    fn test_split_partial_overlap() {
        let a = cube(10, 12);
        let b = cube(11, 13);
        let split = a.split_against(&b).unwrap();
        assert_eq!(split.common, cube(11, 12));
        assert_eq!(split.self_fragments.len(), 7);
        assert_eq!(split.other_fragments.len(), 7);
        let a_leftover: u64 = split.self_fragments.iter().map(Cuboid::volume).sum();
        let b_leftover: u64 = split.other_fragments.iter().map(Cuboid::volume).sum();
        assert_eq!(split.common.volume() + a_leftover, a.volume());
        assert_eq!(split.common.volume() + b_leftover, b.volume());
        for fragment in &split.self_fragments {
            assert!(!fragment.intersects(&b));
        }
        for fragment in &split.other_fragments {
            assert!(!fragment.intersects(&a));
        }
    }

    #[test]
    fn test_split_single_axis_overlap() {
        // same extent on y and z, staggered on x: one slab each side
        let a = Cuboid::new(0, 9, 0, 4, 0, 4);
        let b = Cuboid::new(5, 14, 0, 4, 0, 4);
        let split = a.split_against(&b).unwrap();
        assert_eq!(split.common, Cuboid::new(5, 9, 0, 4, 0, 4));
        assert_eq!(split.self_fragments, vec![Cuboid::new(0, 4, 0, 4, 0, 4)]);
        assert_eq!(split.other_fragments, vec![Cuboid::new(10, 14, 0, 4, 0, 4)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Cuboid::new(-54112, -39298, -85059, -49293, -27449, 7877).to_string(),
            "x=-54112..-39298,y=-85059..-49293,z=-27449..7877"
        );
    }
}
