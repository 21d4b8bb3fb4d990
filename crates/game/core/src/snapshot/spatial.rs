//! Sparse bucket grid used to limit perception queries to nearby entities.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{EntityId, Position};

/// Integer coordinate of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cell → entity list index for one region.
///
/// Only cells that hold at least one entity are stored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialIndex {
    cell_size: f32,
    cells: BTreeMap<CellCoord, Vec<EntityId>>,
}

impl SpatialIndex {
    pub const DEFAULT_CELL_SIZE: f32 = 64.0;

    /// Creates an empty index. Non-positive sizes use [`Self::DEFAULT_CELL_SIZE`].
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            Self::DEFAULT_CELL_SIZE
        };
        Self {
            cell_size,
            cells: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_of(&self, position: Position) -> CellCoord {
        CellCoord::new(
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, entity: EntityId, position: Position) {
        let coord = self.cell_of(position);
        self.cells.entry(coord).or_default().push(entity);
    }

    /// Entities bucketed in `coord`.
    pub fn entities_in(&self, coord: CellCoord) -> &[EntityId] {
        self.cells.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Occupied cells whose square intersects the circle, in ascending
    /// coordinate order.
    ///
    /// Walks the bounding box while it is no larger than the occupied set,
    /// otherwise walks the occupied cells, so the cost never exceeds the
    /// number of stored cells.
    pub fn cells_covering(&self, center: Position, radius: f32) -> Vec<CellCoord> {
        let radius = radius.max(0.0);
        let min = self.cell_of(Position::new(center.x - radius, center.y - radius));
        let max = self.cell_of(Position::new(center.x + radius, center.y + radius));
        let intersects = |coord: &CellCoord| self.square_distance(*coord, center) <= radius;

        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u64;
        let box_cells = span(min.x, max.x).saturating_mul(span(min.y, max.y));
        if box_cells > self.cells.len() as u64 {
            return self
                .cells
                .keys()
                .filter(|coord| (min.x..=max.x).contains(&coord.x) && (min.y..=max.y).contains(&coord.y))
                .filter(|coord| intersects(*coord))
                .copied()
                .collect();
        }

        let mut covering = Vec::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                let coord = CellCoord::new(x, y);
                if self.cells.contains_key(&coord) && intersects(&coord) {
                    covering.push(coord);
                }
            }
        }
        covering
    }

    /// Union of the entity lists of every cell covering the circle.
    ///
    /// The result is a superset of the entities inside the circle; callers
    /// still check exact distance.
    pub fn entities_near(&self, center: Position, radius: f32) -> BTreeSet<EntityId> {
        self.cells_covering(center, radius)
            .into_iter()
            .flat_map(|coord| self.entities_in(coord).iter().copied())
            .collect()
    }

    /// Distance from `point` to the nearest point of the cell's square.
    fn square_distance(&self, coord: CellCoord, point: Position) -> f32 {
        let min_x = coord.x as f32 * self.cell_size;
        let min_y = coord.y as f32 * self.cell_size;
        let nearest = Position::new(
            point.x.clamp(min_x, min_x + self.cell_size),
            point.y.clamp(min_y, min_y + self.cell_size),
        );
        point.distance(nearest)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_of_floors_negative_coordinates() {
        let index = SpatialIndex::new(10.0);
        assert_eq!(index.cell_of(Position::new(5.0, 5.0)), CellCoord::new(0, 0));
        assert_eq!(index.cell_of(Position::new(-0.5, 19.9)), CellCoord::new(-1, 1));
    }

    #[test]
    fn covering_skips_corner_cells_outside_circle() {
        let mut index = SpatialIndex::new(10.0);
        for (i, (x, y)) in (-1..=1).flat_map(|x| (-1..=1).map(move |y| (x, y))).enumerate() {
            index.insert(EntityId(i as u32), Position::new(x as f32 * 10.0 + 5.0, y as f32 * 10.0 + 5.0));
        }
        // Circle centered in cell (0,0) reaching just over its edges.
        let cells = index.cells_covering(Position::new(5.0, 5.0), 6.0);
        assert!(cells.contains(&CellCoord::new(0, 0)));
        assert!(cells.contains(&CellCoord::new(1, 0)));
        assert!(cells.contains(&CellCoord::new(0, -1)));
        // Nearest corner of (1,1) is ~7.07 away.
        assert!(!cells.contains(&CellCoord::new(1, 1)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn covering_is_sorted() {
        let mut index = SpatialIndex::new(8.0);
        for x in -6..=6 {
            for y in -6..=6 {
                let id = ((x + 6) * 13 + (y + 6)) as u32;
                index.insert(EntityId(id), Position::new(x as f32 * 8.0 + 1.0, y as f32 * 8.0 + 1.0));
            }
        }
        let cells = index.cells_covering(Position::new(0.0, 0.0), 40.0);
        assert!(!cells.is_empty());
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn entities_near_only_reads_covering_cells() {
        let mut index = SpatialIndex::new(10.0);
        index.insert(EntityId(1), Position::new(2.0, 2.0));
        index.insert(EntityId(2), Position::new(12.0, 2.0));
        index.insert(EntityId(3), Position::new(500.0, 500.0));

        let near = index.entities_near(Position::new(5.0, 5.0), 8.0);
        assert_eq!(near.into_iter().collect::<Vec<_>>(), vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn huge_radius_only_visits_occupied_cells() {
        let mut index = SpatialIndex::new(64.0);
        index.insert(EntityId(1), Position::new(10.0, 10.0));
        index.insert(EntityId(2), Position::new(-90_000.0, 150_000.0));

        let cells = index.cells_covering(Position::ORIGIN, 200_000.0);
        assert_eq!(cells.len(), 2);

        let near = index.entities_near(Position::ORIGIN, 200_000.0);
        assert_eq!(near.into_iter().collect::<Vec<_>>(), vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn infinite_radius_returns_every_entity() {
        let mut index = SpatialIndex::new(64.0);
        index.insert(EntityId(3), Position::new(1.0e9, -1.0e9));
        index.insert(EntityId(1), Position::new(5.0, 5.0));

        let near = index.entities_near(Position::new(0.0, 0.0), f32::INFINITY);
        assert_eq!(near.into_iter().collect::<Vec<_>>(), vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn sparse_walk_still_skips_corner_cells() {
        let mut index = SpatialIndex::new(10.0);
        index.insert(EntityId(1), Position::new(2.0, 2.0));
        index.insert(EntityId(2), Position::new(52.0, 52.0));
        index.insert(EntityId(3), Position::new(500.0, 2.0));

        // Cell (5,5) is inside the box but its nearest corner is ~63.6 away.
        let cells = index.cells_covering(Position::new(5.0, 5.0), 50.0);
        assert_eq!(cells, vec![CellCoord::new(0, 0)]);
    }

    #[test]
    fn invalid_cell_size_uses_default() {
        assert_eq!(SpatialIndex::new(0.0).cell_size(), SpatialIndex::DEFAULT_CELL_SIZE);
        assert_eq!(SpatialIndex::new(f32::NAN).cell_size(), SpatialIndex::DEFAULT_CELL_SIZE);
    }
}
