use core::fmt;

use ndarray::Array2;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::*;

/// What a player may know about one cell.
///
/// On the wire this is a single integer: `-1` for unknown, `9` for a mine, `0..=8` for a neighbor count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellView {
    Unknown,
    Mine,
    Count(u8),
}

impl CellView {
    pub const UNKNOWN_WIRE: i8 = -1;
    pub const MINE_WIRE: i8 = 9;

    pub const fn to_wire(self) -> i8 {
        match self {
            Self::Unknown => Self::UNKNOWN_WIRE,
            Self::Mine => Self::MINE_WIRE,
            Self::Count(count) => count as i8,
        }
    }

    /// Decodes a wire integer, as a client reading a view does.
    pub const fn from_wire(value: i8) -> Option<Self> {
        match value {
            Self::UNKNOWN_WIRE => Some(Self::Unknown),
            Self::MINE_WIRE => Some(Self::Mine),
            0..=8 => Some(Self::Count(value as u8)),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Mine => 'X',
            Self::Count(count) => (b'0' + count) as char,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Serialize for CellView {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for CellView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = i8::deserialize(deserializer)?;
        Self::from_wire(value)
            .ok_or_else(|| de::Error::custom(format_args!("invalid cell value {value}")))
    }
}

/// Player-visible snapshot of a whole board, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    cells: Array2<CellView>,
}

impl BoardView {
    pub fn new(cells: Array2<CellView>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // built from a board, so both axes fit
        (x as Coord, y as Coord)
    }

    pub fn get(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Wire layout: one inner vector per column, so `columns[x][y]`.
    pub fn to_wire_columns(&self) -> Vec<Vec<i8>> {
        self.cells
            .outer_iter()
            .map(|column| column.iter().map(|cell| cell.to_wire()).collect())
            .collect()
    }

    /// Inverse of [`BoardView::to_wire_columns`], for clients decoding a view they received.
    pub fn from_wire_columns(columns: &[Vec<i8>]) -> Option<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|column| column.len() != height) {
            return None;
        }
        let mut cells = Array2::default((width, height));
        for ((x, y), cell) in cells.indexed_iter_mut() {
            *cell = CellView::from_wire(columns[x][y])?;
        }
        Some(Self { cells })
    }

    pub fn count(&self, view: CellView) -> usize {
        self.cells.iter().filter(|&&cell| cell == view).count()
    }
}

/// One line per column, `?` for hidden cells, `X` for mines and the neighbor count otherwise.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in self.cells.outer_iter() {
            for cell in column {
                write!(f, "{}", cell.symbol())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_sentinels() {
        assert_eq!(CellView::Unknown.to_wire(), -1);
        assert_eq!(CellView::Mine.to_wire(), 9);
        assert_eq!(CellView::Count(0).to_wire(), 0);
        assert_eq!(CellView::Count(8).to_wire(), 8);
        assert_eq!(CellView::from_wire(10), None);
        assert_eq!(CellView::from_wire(-2), None);
    }

    #[test]
    fn serializes_as_integer() {
        let cells = [CellView::Unknown, CellView::Count(3), CellView::Mine];
        assert_eq!(serde_json::to_string(&cells).unwrap(), "[-1,3,9]");
        let parsed: Vec<CellView> = serde_json::from_str("[-1,3,9]").unwrap();
        assert_eq!(parsed, cells);
        assert!(serde_json::from_str::<CellView>("12").is_err());
    }

    #[test]
    fn columns_are_x_major() {
        let mut cells = Array2::default((2, 3));
        cells[[1, 2]] = CellView::Count(4);
        cells[[0, 1]] = CellView::Mine;
        let view = BoardView::new(cells);

        let columns = view.to_wire_columns();
        assert_eq!(columns, vec![vec![-1, 9, -1], vec![-1, -1, 4]]);
        assert_eq!(BoardView::from_wire_columns(&columns), Some(view.clone()));
        assert_eq!(view.size(), (2, 3));
        assert_eq!(view.to_string(), "?X?\n??4\n");
    }

    #[test]
    fn ragged_columns_are_rejected() {
        assert_eq!(BoardView::from_wire_columns(&[vec![0, 0], vec![0]]), None);
    }
}
