use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Kind, Pos, DIRECTIONS};

/// A pod somewhere on the map together with the energy it needed to get there.
///
/// Only kind and position matter when comparing states, the cost is just
/// the bookkeeping of the path segment currently being explored.
#[derive(Clone, Copy)]
pub struct Pod {
    pub kind: Kind,
    pub pos: Pos,
    pub cost: u32,
}

impl Pod {
    pub fn new(kind: Kind, pos: Pos) -> Self {
        Pod { kind, pos, cost: 0 }
    }

    pub fn with_cost(kind: Kind, pos: Pos, cost: u32) -> Self {
        Pod { kind, pos, cost }
    }

    pub fn step(self, dir: Dir) -> Pod {
        Pod::with_cost(self.kind, self.pos + dir, self.cost + self.kind.step_cost())
    }

    pub fn up(self) -> Pod {
        self.step(Dir::Up)
    }

    pub fn right(self) -> Pod {
        self.step(Dir::Right)
    }

    /// Also used to look deeper into a room.
    pub fn down(self) -> Pod {
        self.step(Dir::Down)
    }

    pub fn left(self) -> Pod {
        self.step(Dir::Left)
    }

    pub fn steps(self) -> [Pod; 4] {
        [
            self.step(DIRECTIONS[0]),
            self.step(DIRECTIONS[1]),
            self.step(DIRECTIONS[2]),
            self.step(DIRECTIONS[3]),
        ]
    }

    /// Manhattan distance weighted by the step cost of this kind.
    pub fn manhattan(self, other: Pos) -> u32 {
        self.kind.step_cost() * self.pos.dist(other)
    }
}

impl PartialEq for Pod {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.pos == other.pos
    }
}

impl Eq for Pod {}

impl Hash for Pod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.pos.hash(state);
    }
}

impl Display for Pod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.pos)
    }
}

impl Debug for Pod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.cost)
    }
}
