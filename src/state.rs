use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::moves::Move;
use crate::pod::Pod;
use crate::vec2d::Vec2d;

/// Placement of all pods.
///
/// Equality and hashing only look at the grid so two states reached by
/// different paths are the same state.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    grid: Vec2d<Cell>,
}

impl State {
    pub(crate) fn new(grid: Vec2d<Cell>) -> Self {
        State { grid }
    }

    /// Full copy, the only way to get a state that can be modified.
    pub(crate) fn from(state: &State) -> Self {
        state.clone()
    }

    /// Out of range returns a wall.
    pub fn get(&self, pos: Pos) -> Cell {
        self.grid.get(pos).cloned().unwrap_or(Cell::Wall)
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.grid[pos] = cell;
    }

    pub(crate) fn grid(&self) -> &Vec2d<Cell> {
        &self.grid
    }

    /// Canonical text form - equal for equal placements.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(usize::from(self.grid.rows()) * (usize::from(self.grid.cols()) + 1));
        for r in 0..self.grid.rows() {
            if r > 0 {
                key.push('\n');
            }
            for c in 0..self.grid.cols() {
                key.push_str(&self.grid[Pos::new(r, c)].to_string());
            }
        }
        key
    }

    pub fn pods(&self) -> impl Iterator<Item = Pod> + '_ {
        self.grid.positions().filter_map(move |pos| match self.grid[pos] {
            Cell::Pod(kind) => Some(Pod::new(kind, pos)),
            Cell::Void | Cell::Wall | Cell::Empty => None,
        })
    }

    pub fn pod_cnt(&self) -> usize {
        self.pods().count()
    }

    /// Copy with the pod moved, panics if the move doesn't fit this state.
    pub fn apply(&self, mov: &Move) -> State {
        assert_eq!(self.get(mov.from), Cell::Pod(mov.kind), "no {} at {}", mov.kind, mov.from);
        assert_eq!(self.get(mov.to), Cell::Empty, "{} is not empty", mov.to);

        let mut new_state = State::from(self);
        new_state.set(mov.from, Cell::Empty);
        new_state.set(mov.to, Cell::Pod(mov.kind));
        new_state
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Kind;
    use crate::level::Level;

    use super::*;

    const EXAMPLE: &str = r"
#############
#xx.x.x.x.xx#
###a#b#c#d###
  #a#b#c#d#
  #########

#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    #[test]
    fn get_and_set() {
        let level: Level = EXAMPLE.parse().unwrap();
        let state = &level.state;
        assert_eq!(state.get(Pos::new(2, 3)), Cell::Pod(Kind::B));
        assert_eq!(state.get(Pos::new(1, 1)), Cell::Empty);
        assert_eq!(state.get(Pos::new(0, 0)), Cell::Wall);
        assert_eq!(state.get(Pos::new(3, 0)), Cell::Void);
        // out of range is a wall
        assert_eq!(state.get(Pos::new(200, 0)), Cell::Wall);
        assert_eq!(state.get(Pos::new(0, 13)), Cell::Wall);

        let mut copy = State::from(state);
        copy.set(Pos::new(2, 3), Cell::Empty);
        copy.set(Pos::new(1, 1), Cell::Pod(Kind::B));
        assert_eq!(copy.get(Pos::new(1, 1)), Cell::Pod(Kind::B));
        assert_eq!(state.get(Pos::new(1, 1)), Cell::Empty);
        assert_eq!(copy.pod_cnt(), state.pod_cnt());
    }

    #[test]
    fn keys() {
        let level: Level = EXAMPLE.parse().unwrap();
        let state = &level.state;
        let expected = "#############\n#...........#\n###B#C#B#D###\n  #A#D#C#A#  \n  #########  ";
        assert_eq!(state.key(), expected);

        // independently built states with the same placement
        let other: Level = EXAMPLE.parse().unwrap();
        assert_eq!(state.key(), other.state.key());
        assert_eq!(*state, other.state);

        let mut moved = State::from(state);
        moved.set(Pos::new(2, 3), Cell::Empty);
        moved.set(Pos::new(1, 1), Cell::Pod(Kind::B));
        assert_ne!(state.key(), moved.key());
        assert_ne!(*state, moved);

        // same placement reached differently
        let mut back = State::from(&moved);
        back.set(Pos::new(1, 1), Cell::Empty);
        back.set(Pos::new(2, 3), Cell::Pod(Kind::B));
        assert_eq!(state.key(), back.key());
        assert_eq!(*state, back);
    }

    #[test]
    fn listing_pods() {
        let level: Level = EXAMPLE.parse().unwrap();
        let pods: Vec<_> = level.state.pods().map(|pod| pod.to_string()).collect();
        assert_eq!(
            pods,
            vec![
                "B[2, 3]", "C[2, 5]", "B[2, 7]", "D[2, 9]", "A[3, 3]", "D[3, 5]", "C[3, 7]", "A[3, 9]",
            ]
        );
    }

    #[test]
    fn applying_moves() {
        let level: Level = EXAMPLE.parse().unwrap();
        let mov = Move::new(Kind::B, Pos::new(2, 7), Pos::new(1, 4), 4);
        let new_state = level.state.apply(&mov);
        assert_eq!(new_state.get(Pos::new(2, 7)), Cell::Empty);
        assert_eq!(new_state.get(Pos::new(1, 4)), Cell::Pod(Kind::B));
        assert_eq!(new_state.pod_cnt(), 8);
    }

    #[test]
    #[should_panic]
    fn applying_bad_move() {
        let level: Level = EXAMPLE.parse().unwrap();
        let mov = Move::new(Kind::A, Pos::new(2, 7), Pos::new(1, 4), 4);
        level.state.apply(&mov);
    }
}
