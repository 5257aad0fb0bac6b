use std::fmt::{self, Display, Formatter};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Best-first search guided by distances to rooms
    AStar,
    /// Same search without the heuristic
    Dijkstra,
}

impl Default for Method {
    fn default() -> Self {
        Method::AStar
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "a-star"),
            Method::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Bounds on how long a search can run. Unlimited by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_visited: Option<usize>,
    pub timeout: Option<Duration>,
}

impl Limits {
    pub fn new(max_visited: Option<usize>, timeout: Option<Duration>) -> Self {
        Limits {
            max_visited,
            timeout,
        }
    }
}
