use std::fmt::{self, Display, Formatter};
use std::ops::Add;

pub(crate) const MAX_SIZE: usize = 255;

/// Number of pod kinds, each has its own room.
pub(crate) const KIND_CNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    A,
    B,
    C,
    D,
}

pub(crate) const KINDS: [Kind; KIND_CNT] = [Kind::A, Kind::B, Kind::C, Kind::D];

impl Kind {
    /// Energy needed to move a pod of this kind by one cell.
    pub fn step_cost(self) -> u32 {
        match self {
            Kind::A => 1,
            Kind::B => 10,
            Kind::C => 100,
            Kind::D => 1000,
        }
    }

    pub(crate) fn from_pod_char(c: char) -> Option<Kind> {
        match c {
            'A' => Some(Kind::A),
            'B' => Some(Kind::B),
            'C' => Some(Kind::C),
            'D' => Some(Kind::D),
            _ => None,
        }
    }

    pub(crate) fn from_room_char(c: char) -> Option<Kind> {
        Kind::from_pod_char(c.to_ascii_uppercase()).filter(|_| c.is_ascii_lowercase())
    }

    pub(crate) fn pod_char(self) -> char {
        match self {
            Kind::A => 'A',
            Kind::B => 'B',
            Kind::C => 'C',
            Kind::D => 'D',
        }
    }

    pub(crate) fn room_char(self) -> char {
        self.pod_char().to_ascii_lowercase()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pod_char())
    }
}

/// Static topology of one cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    /// Outside the burrow
    Void,
    Wall,
    /// Passable but pods can't stop here (in front of rooms)
    Hallway,
    /// Maneuver spot - hallway cell where pods can stop
    Spot,
    Room(Kind),
}

impl MapCell {
    pub(crate) fn is_passable(self) -> bool {
        match self {
            MapCell::Void | MapCell::Wall => false,
            MapCell::Hallway | MapCell::Spot | MapCell::Room(_) => true,
        }
    }
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Void => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
            MapCell::Hallway => write!(f, "."),
            MapCell::Spot => write!(f, "x"),
            MapCell::Room(kind) => write!(f, "{}", kind.room_char()),
        }
    }
}

/// Dynamic contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Void,
    Wall,
    Empty,
    Pod(Kind),
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Void => write!(f, " "),
            Cell::Wall => write!(f, "#"),
            Cell::Empty => write!(f, "."),
            Cell::Pod(kind) => write!(f, "{}", kind),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Packs the position into one integer (column is x, row is y).
    pub fn key(self) -> u32 {
        u32::from(self.c) << 16 | u32::from(self.r)
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [
            self + DIRECTIONS[0],
            self + DIRECTIONS[1],
            self + DIRECTIONS[2],
            self + DIRECTIONS[3],
        ]
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Add<Dir> for Pos {
    type Output = Pos;

    // wraps around - out of range positions are rejected by Vec2d::get
    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::Up => Pos::new(self.r.wrapping_sub(1), self.c),
            Dir::Right => Pos::new(self.r, self.c.wrapping_add(1)),
            Dir::Down => Pos::new(self.r.wrapping_add(1), self.c),
            Dir::Left => Pos::new(self.r, self.c.wrapping_sub(1)),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}
