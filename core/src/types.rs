/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn total_cells((width, height): Coord2) -> CellCount {
    (width as CellCount) * (height as CellCount)
}

/// Moore neighborhood, scanned row by row around the center.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds cells adjacent to `center`, always yielded in the same order.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }

    fn offset(&self, (dx, dy): (i8, i8)) -> Option<Coord2> {
        let x = self.center.0.checked_add_signed(dx)?;
        let y = self.center.1.checked_add_signed(dy)?;
        (x < self.bounds.0 && y < self.bounds.1).then_some((x, y))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(self.next) {
            self.next += 1;
            if let Some(coords) = self.offset(delta) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        Neighbors::new(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = collect((1, 1), (3, 3));
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_and_edge_cells_are_clipped() {
        assert_eq!(collect((0, 0), (3, 3)), vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(collect((2, 1), (3, 3)).len(), 5);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn edge_of_coordinate_space_does_not_wrap() {
        let neighbors = collect((255, 255), (255, 255));
        assert!(neighbors.iter().all(|&(x, y)| x < 255 && y < 255));
        assert_eq!(collect((254, 254), (255, 255)).len(), 3);
    }

    #[test]
    fn total_cells_does_not_overflow() {
        assert_eq!(total_cells((255, 255)), 65025);
        assert_eq!(total_cells((0, 7)), 0);
    }
}
