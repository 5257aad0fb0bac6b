use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Kind, MapCell, Pos, KIND_CNT};
use crate::vec2d::Vec2d;

/// Static layout of the burrow. Never changes during a search.
#[derive(Clone, PartialEq, Eq)]
pub struct Map {
    grid: Vec2d<MapCell>,
    rooms: Vec<(Pos, Kind)>,
    entries: [Option<Pos>; KIND_CNT],
}

impl Map {
    pub(crate) fn new(grid: Vec2d<MapCell>) -> Self {
        let rooms: Vec<_> = grid
            .positions()
            .filter_map(|pos| match grid[pos] {
                MapCell::Room(kind) => Some((pos, kind)),
                _ => None,
            })
            .collect();

        // positions are row-major so the first slot of each kind is the topmost one
        let mut entries = [None; KIND_CNT];
        for &(pos, kind) in &rooms {
            let entry = &mut entries[kind as usize];
            if entry.is_none() {
                *entry = Some(pos);
            }
        }

        Map {
            grid,
            rooms,
            entries,
        }
    }

    pub(crate) fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    /// Out of range is a wall.
    pub fn get(&self, pos: Pos) -> MapCell {
        self.grid.get(pos).cloned().unwrap_or(MapCell::Wall)
    }

    /// Every room slot with the kind that belongs there.
    pub fn rooms(&self) -> &[(Pos, Kind)] {
        &self.rooms
    }

    /// Topmost slot of the room for the kind.
    pub fn entry(&self, kind: Kind) -> Option<Pos> {
        self.entries[kind as usize]
    }

    pub fn slot_cnt(&self, kind: Kind) -> usize {
        self.rooms.iter().filter(|&&(_, k)| k == kind).count()
    }

    pub(crate) fn is_room_of(&self, pos: Pos, kind: Kind) -> bool {
        self.get(pos) == MapCell::Room(kind)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
