use std::collections::{HashMap, VecDeque};
use std::hash::BuildHasher;

use crate::data::{Cell, Pos};
use crate::moves::{Move, Moves};
use crate::state::State;

/// The initial state is its own prev.
pub(crate) fn backtrack_prevs<'a, H: BuildHasher>(
    prevs: &HashMap<&'a State, &'a State, H>,
    final_state: &'a State,
) -> Vec<&'a State> {
    let mut ret = Vec::new();
    let mut state = final_state;
    loop {
        ret.push(state);
        let prev = prevs[state];
        if prev == state {
            ret.reverse();
            return ret;
        }
        state = prev;
    }
}

pub(crate) fn reconstruct_moves(states: &[&State]) -> Moves {
    let mut moves = Moves::default();
    for pair in states.windows(2) {
        moves.add(move_between_states(pair[0], pair[1]));
    }
    moves
}

/// The difference between them must be exactly one pod changing its position
fn move_between_states(old: &State, new: &State) -> Move {
    let mut from = None;
    let mut to = None;
    for pos in old.grid().positions() {
        match (old.get(pos), new.get(pos)) {
            (Cell::Pod(kind), Cell::Empty) => {
                assert!(from.is_none(), "Only one pod can move at a time");
                from = Some((pos, kind));
            }
            (Cell::Empty, Cell::Pod(kind)) => {
                assert!(to.is_none(), "Only one pod can move at a time");
                to = Some((pos, kind));
            }
            (a, b) => assert_eq!(a, b, "Pods can't change kinds"),
        }
    }

    let (from, kind) = from.expect("There must be exactly one move between states");
    let (to, to_kind) = to.expect("There must be exactly one move between states");
    assert_eq!(kind, to_kind);

    let steps = pod_steps(old, from, to).expect("The destination must be reachable");
    Move::new(kind, from, to, steps)
}

/// Length of the shortest path through empty cells.
fn pod_steps(state: &State, from: Pos, to: Pos) -> Option<u32> {
    let mut visited = state.grid().scratchpad();
    visited[from] = true;
    let mut to_visit = VecDeque::new();
    to_visit.push_back((from, 0));

    while let Some((cur, steps)) = to_visit.pop_front() {
        if cur == to {
            return Some(steps);
        }
        for &next in &cur.neighbors() {
            if state.get(next) == Cell::Empty && !visited[next] {
                visited[next] = true;
                to_visit.push_back((next, steps + 1));
            }
        }
    }
    None
}
