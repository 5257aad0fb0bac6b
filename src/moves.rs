use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Kind, Pos};

/// One pod going from one cell to another, possibly over many steps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: Kind,
    pub from: Pos,
    pub to: Pos,
    pub steps: u32,
}

impl Move {
    pub(crate) fn new(kind: Kind, from: Pos, to: Pos, steps: u32) -> Self {
        Move {
            kind,
            from,
            to,
            steps,
        }
    }

    pub fn cost(&self) -> u32 {
        self.steps * self.kind.step_cost()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.from, self.to)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} steps, {} energy)", self, self.steps, self.cost())
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn step_cnt(&self) -> u32 {
        self.0.iter().map(|m| m.steps).sum()
    }

    pub fn cost(&self) -> u32 {
        self.0.iter().map(Move::cost).sum()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            writeln!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            writeln!(f, "{:?}", mov)?;
        }
        Ok(())
    }
}
