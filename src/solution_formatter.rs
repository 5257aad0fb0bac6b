use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::state::State;

/// Replays moves from the initial state and prints every state on the way.
pub struct SolutionFormatter<'a> {
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step 0, energy: 0")?;
        writeln!(f, "{}", self.initial_state)?;

        let mut last_state = self.initial_state.clone();
        let mut energy = 0;
        for (i, mov) in self.moves.iter().enumerate() {
            last_state = last_state.apply(mov);
            energy += mov.cost();
            writeln!(f, "Step {}, energy: {} ({:?})", i + 1, energy, mov)?;
            writeln!(f, "{}", last_state)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
