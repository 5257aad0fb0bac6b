use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Map;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: Map,
    pub state: State,
}

impl Level {
    pub(crate) fn new(map: Map, state: State) -> Self {
        Level { map, state }
    }
}

/// Same format as the input - map, empty line, initial state.
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.map, self.state)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
