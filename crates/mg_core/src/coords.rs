/// A plain pair of coordinates.
///
/// Integer instances address lattice points of the noise grid, floating-point
/// instances address continuous positions inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// One lattice point of the infinite noise grid.
pub type GridCell = Vec2<i32>;

impl GridCell {
    /// The cell whose top-left corner encloses `point`.
    ///
    /// Uses `floor` on both axes so negative coordinates land in the cell to
    /// their left rather than being truncated towards zero. Coordinates beyond
    /// the `i32` range wrap modulo 2^32 instead of saturating, so neighbouring
    /// far-away cells stay distinct. Non-finite input maps to 0.
    pub fn containing(point: Vec2<f64>) -> Self {
        Self::new(wrap_lattice(point.x), wrap_lattice(point.y))
    }

    /// The lattice point at `corner` of this cell.
    pub fn corner(self, corner: Corner) -> Self {
        let (dx, dy) = corner.offset();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

fn wrap_lattice(value: f64) -> i32 {
    value.floor().rem_euclid(4_294_967_296.0) as u32 as i32
}

/// The four lattice points surrounding a continuous position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order the sampler blends them.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Offset of this corner from the enclosing cell's origin.
    pub const fn offset(&self) -> (i32, i32) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (1, 0),
            Corner::BottomLeft => (0, 1),
            Corner::BottomRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_positive_coordinates() {
        let cell = GridCell::containing(Vec2::new(3.75, 5.0));
        assert_eq!(cell, GridCell::new(3, 5));
    }

    #[test]
    fn containing_floors_negative_coordinates() {
        let cell = GridCell::containing(Vec2::new(-0.25, -3.5));
        assert_eq!(cell, GridCell::new(-1, -4));
    }

    #[test]
    fn containing_wraps_beyond_i32() {
        let cell = GridCell::containing(Vec2::new(3_000_000_000.5, -3_000_000_000.5));
        assert_eq!(cell, GridCell::new(-1_294_967_296, 1_294_967_295));

        let a = GridCell::containing(Vec2::new(1e12, 0.0));
        let b = GridCell::containing(Vec2::new(1e12 + 1.0, 0.0));
        assert_eq!(b.x, a.x.wrapping_add(1));
    }

    #[test]
    fn containing_maps_non_finite_to_zero() {
        let cell = GridCell::containing(Vec2::new(f64::NAN, f64::INFINITY));
        assert_eq!(cell, GridCell::new(0, 0));
    }

    #[test]
    fn corners_cover_the_unit_square() {
        let origin = GridCell::new(10, -2);
        let corners: Vec<_> = Corner::ALL.iter().map(|c| origin.corner(*c)).collect();
        assert_eq!(
            corners,
            vec![
                GridCell::new(10, -2),
                GridCell::new(11, -2),
                GridCell::new(10, -1),
                GridCell::new(11, -1),
            ]
        );
    }

    #[test]
    fn corner_offset_wraps_at_the_edge() {
        let origin = GridCell::new(i32::MAX, 0);
        assert_eq!(origin.corner(Corner::TopRight).x, i32::MIN);
    }
}
