//! World map module - the static tile grid
//!
//! The map is a rectangular grid where each cell is a wall or empty floor.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: `(col, row)` where col grows to the right and row grows downwards.
//! A continuous point `(x, y)` belongs to cell `(floor(x), floor(y))`.
//!
//! This is the single place that decides what "inside the map" means; the
//! raycaster and the movement collision check both go through [`WorldMap::blocks`].

use glam::Vec2;
use thiserror::Error;

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    /// Parse an ASCII tile. Spawn markers are floor as far as the map is concerned.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | '1' => Some(Tile::Wall),
            '.' | '0' | ' ' | 'P' | 'E' => Some(Tile::Empty),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Errors detected while loading map data.
///
/// These only occur at load time; every per-frame query is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("level has no player start ('P')")]
    MissingPlayerStart,
    #[error("level has more than one player start (second at row {row}, column {col})")]
    MultiplePlayerStarts { row: usize, col: usize },
}

/// Immutable tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (row * width + col)
    tiles: Vec<Tile>,
}

impl WorldMap {
    /// Build a map from rows of tiles, rejecting empty or ragged grids.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MapError> {
        let width = rows.first().map(Vec::len).ok_or(MapError::Empty)?;
        if width == 0 {
            return Err(MapError::Empty);
        }

        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build a map from numeric rows where `1` is a wall and anything else is floor.
    pub fn from_bits<const W: usize>(rows: &[[u8; W]]) -> Result<Self, MapError> {
        Self::from_rows(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|&v| if v == 1 { Tile::Wall } else { Tile::Empty })
                        .collect()
                })
                .collect(),
        )
    }

    /// Parse an ASCII grid (`#`/`1` wall, `.`/`0`/space floor).
    ///
    /// Blank lines before and after the grid are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for (row, line) in grid_lines(text).enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MapError::UnknownTile { row, col, ch })?;
                cells.push(tile);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.contains(col, row) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Whether `(col, row)` lies in `[0, width) x [0, height)`.
    #[inline(always)]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Get the tile at `(col, row)`, or `None` outside the map.
    pub fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        self.index(col, row).map(|i| self.tiles[i])
    }

    /// Whether `(col, row)` is a wall. Out-of-range cells count as walls.
    #[inline(always)]
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        self.tile(col, row).map_or(true, Tile::is_wall)
    }

    /// Cell containing a continuous point.
    #[inline(always)]
    pub fn cell_of(point: Vec2) -> (i32, i32) {
        (point.x.floor() as i32, point.y.floor() as i32)
    }

    /// Whether a continuous point is non-traversable (wall or outside the map).
    #[inline(always)]
    pub fn blocks(&self, point: Vec2) -> bool {
        let (col, row) = Self::cell_of(point);
        self.is_wall(col, row)
    }

    /// Iterate every cell as `(col, row, tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            ((i % self.width) as i32, (i / self.width) as i32, tile)
        })
    }
}

/// Lines of an ASCII grid with surrounding blank lines removed.
pub(crate) fn grid_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let range = match (first, last) {
        (Some(a), Some(b)) => a..b + 1,
        _ => 0..0,
    };
    lines.into_iter().skip(range.start).take(range.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> WorldMap {
        WorldMap::parse(
            "
####
#..#
####
",
        )
        .unwrap()
    }

    #[test]
    fn test_index_calculation() {
        let map = small();
        assert_eq!(map.index(0, 0), Some(0));
        assert_eq!(map.index(3, 0), Some(3));
        assert_eq!(map.index(0, 1), Some(4));
        assert_eq!(map.index(3, 2), Some(11));
        assert_eq!(map.index(-1, 0), None);
        assert_eq!(map.index(4, 0), None);
        assert_eq!(map.index(0, 3), None);
    }

    #[test]
    fn test_out_of_range_is_wall() {
        let map = small();
        assert!(map.is_wall(-1, 1));
        assert!(map.is_wall(1, -1));
        assert!(map.is_wall(4, 1));
        assert!(map.is_wall(1, 3));
        assert!(!map.is_wall(1, 1));
    }

    #[test]
    fn test_cell_of_floors_negative_coordinates() {
        // Truncation would put -0.5 into column 0.
        assert_eq!(WorldMap::cell_of(Vec2::new(-0.5, 0.5)), (-1, 0));
        assert_eq!(WorldMap::cell_of(Vec2::new(2.99, 1.0)), (2, 1));
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let err = WorldMap::parse("###\n#.\n###").unwrap_err();
        assert_eq!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_unknown_tile_is_rejected() {
        let err = WorldMap::parse("##\n#x").unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownTile {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        assert_eq!(WorldMap::parse("\n\n").unwrap_err(), MapError::Empty);
        assert_eq!(WorldMap::from_rows(vec![]).unwrap_err(), MapError::Empty);
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let map = small();
        let walls = map.cells().filter(|(_, _, t)| t.is_wall()).count();
        assert_eq!(walls, 10);
        assert_eq!(map.cells().nth(5), Some((1, 1, Tile::Empty)));
    }
}
