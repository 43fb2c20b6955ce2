//! Freespace cell and diagram for polyline pairs.
//!
//! For two segments P and Q and a radius eps, the cell is the unit square
//! in (s, t) parameter space whose free region is the set of parameter
//! pairs at distance at most eps. The cell records the boundary
//! crossings of the four edges and the set of free corners; the diagram
//! assembles an (n-1) x (m-1) grid of cells in row-major order.
//!
//! The free region of a cell is the intersection of the square with an
//! ellipse, hence convex.

use crate::geom::{
    sphere_segment_intersection, Crossing, Segment2, Sphere2, SphereSegmentIntersection,
    Tolerances, Vec2,
};

/// Cell edges, in the construction order of the boundary intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellEdge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Cell corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
}

impl Corner {
    const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Corner::BottomLeft => 1,
            Corner::TopLeft => 2,
            Corner::TopRight => 4,
            Corner::BottomRight => 8,
        }
    }
}

/// Small set of free corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerSet(u8);

impl CornerSet {
    #[inline]
    pub fn insert(&mut self, corner: Corner) {
        self.0 |= corner.bit();
    }
    #[inline]
    pub fn contains(&self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = Corner> + '_ {
        Corner::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

/// A boundary crossing tagged with the cell edge it lies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryCrossing {
    pub edge: CellEdge,
    pub crossing: Crossing,
}

/// Freespace cell of two segments.
#[derive(Clone, Debug, Default)]
pub struct FreeSpaceCell {
    crossings: Vec<BoundaryCrossing>,
    free_corners: CornerSet,
}

impl FreeSpaceCell {
    /// Build the cell for segments `p` (vertical axis) and `q`
    /// (horizontal axis) with the given radius.
    ///
    /// Boundary intersections are computed in the fixed order Left, Top,
    /// Right, Bottom; free corners are identified from the Left/Right
    /// edge crossings against `p`.
    pub fn new(p: &Segment2, q: &Segment2, radius: f64, tol: Tolerances) -> Self {
        let mut cell = FreeSpaceCell::default();
        let ball = |c: Vec2| Sphere2::new(c, radius);

        let left = sphere_segment_intersection(&ball(q.start), p, tol);
        cell.push(CellEdge::Left, &left);
        cell.identify_free_corners(&left, p, CellEdge::Left, tol);

        let top = sphere_segment_intersection(&ball(p.end), q, tol);
        cell.push(CellEdge::Top, &top);

        let right = sphere_segment_intersection(&ball(q.end), p, tol);
        cell.push(CellEdge::Right, &right);
        cell.identify_free_corners(&right, p, CellEdge::Right, tol);

        let bottom = sphere_segment_intersection(&ball(p.start), q, tol);
        cell.push(CellEdge::Bottom, &bottom);

        cell
    }

    pub fn crossings(&self) -> &[BoundaryCrossing] {
        &self.crossings
    }

    pub fn free_corners(&self) -> CornerSet {
        self.free_corners
    }

    fn push(&mut self, edge: CellEdge, intersection: &SphereSegmentIntersection) {
        for crossing in intersection.crossings() {
            self.crossings.push(BoundaryCrossing { edge, crossing });
        }
    }

    /// Mark corners adjacent to the Left/Right edges as free.
    ///
    /// A single tangency at parameter 0 or 1 frees the matching corner;
    /// a clamped crossing (sign -1) frees the corner at the clamped
    /// endpoint of `s`. Two interior crossings free nothing.
    fn identify_free_corners(
        &mut self,
        intersection: &SphereSegmentIntersection,
        s: &Segment2,
        edge: CellEdge,
        tol: Tolerances,
    ) {
        debug_assert!(matches!(edge, CellEdge::Left | CellEdge::Right));
        let (bottom, top) = match edge {
            CellEdge::Left => (Corner::BottomLeft, Corner::TopLeft),
            _ => (Corner::BottomRight, Corner::TopRight),
        };
        match intersection {
            SphereSegmentIntersection::Empty => {}
            SphereSegmentIntersection::Tangent(c) => {
                if c.ratio_sq == 1.0 {
                    self.free_corners.insert(top);
                } else if c.ratio_sq == 0.0 {
                    self.free_corners.insert(bottom);
                }
            }
            SphereSegmentIntersection::Crossings(hi, lo) => {
                if hi.sign == 1 && lo.sign == 1 {
                    return;
                }
                let orient = |c: &Crossing| {
                    if (s.start - c.point).norm_squared() < tol.eps {
                        bottom
                    } else if (s.end - c.point).norm_squared() < tol.eps {
                        top
                    } else {
                        bottom
                    }
                };
                match (hi.sign, lo.sign) {
                    (-1, -1) => {
                        let (o1, o2) = (orient(hi), orient(lo));
                        if o1 != o2 {
                            self.free_corners.insert(o1);
                            self.free_corners.insert(o2);
                        }
                    }
                    (-1, _) => self.free_corners.insert(orient(hi)),
                    (_, -1) => self.free_corners.insert(orient(lo)),
                    _ => {}
                }
            }
        }
    }
}

/// Row-major grid of freespace cells for two polylines.
#[derive(Clone, Debug)]
pub struct FreeSpaceDiagram {
    cells: Vec<FreeSpaceCell>,
    rows: usize,
    cols: usize,
}

impl FreeSpaceDiagram {
    /// Build the diagram for polylines `p` (rows) and `q` (columns).
    ///
    /// Both polylines need at least two points; the resulting grid has
    /// `(p.len() - 1) x (q.len() - 1)` cells.
    pub fn new(p: &[Vec2], q: &[Vec2], radius: f64, tol: Tolerances) -> Self {
        let rows = p.len().saturating_sub(1);
        let cols = q.len().saturating_sub(1);
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let seg_p = Segment2::new(p[i], p[i + 1]);
            for j in 0..cols {
                let seg_q = Segment2::new(q[j], q[j + 1]);
                cells.push(FreeSpaceCell::new(&seg_p, &seg_q, radius, tol));
            }
        }
        Self { cells, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &FreeSpaceCell {
        &self.cells[row * self.cols + col]
    }

    /// Cells with their grid coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &FreeSpaceCell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
