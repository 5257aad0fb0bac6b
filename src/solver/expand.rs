use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::data::{Cell, Dir, MapCell, Pos};
use crate::map::Map;
use crate::pod::Pod;
use crate::state::State;

// Terminology:
// move = a pod going from its cell to a destination where it stops, any number of steps
// step = changing pod position by one cell
// settled = in its own room with only its own kind below it, never moves again

/// All states reachable by moving one pod, each with the energy the move takes.
pub(crate) fn expand(map: &Map, state: &State) -> Vec<(State, u32)> {
    let mut new_states = Vec::new();

    for pod in state.pods() {
        if is_settled(map, state, pod) {
            continue;
        }

        // BFS so the first time we reach a cell is also the cheapest
        let mut visited = state.grid().scratchpad();
        visited[pod.pos] = true;
        let mut to_visit = VecDeque::new();
        to_visit.push_back(pod);

        while let Some(cur) = to_visit.pop_front() {
            if cur.pos != pod.pos && is_valid_destination(map, state, pod, cur.pos) {
                new_states.push((move_pod(state, pod, cur.pos), cur.cost));
            }

            for &next in &cur.steps() {
                if state.get(next.pos) == Cell::Empty && !visited[next.pos] {
                    visited[next.pos] = true;
                    to_visit.push_back(next);
                }
            }
        }
    }

    new_states
}

/// Goal is reached when this equals the number of room slots.
pub(crate) fn organization_score(map: &Map, state: &State) -> usize {
    map.rooms()
        .iter()
        .filter(|&&(pos, kind)| state.get(pos) == Cell::Pod(kind))
        .count()
}

/// Sum of weighted distances of unsettled pods to the top of their rooms.
///
/// Never overestimates - every unsettled pod has to get at least to the entry
/// of its room and can only go there through cells costing its step cost.
pub(crate) fn heuristic(map: &Map, state: &State) -> u32 {
    state
        .pods()
        .filter(|&pod| !is_settled(map, state, pod))
        .map(|pod| {
            // preprocessing makes sure every kind that has pods also has a room
            let entry = map
                .entry(pod.kind)
                .expect("Every pod kind must have a room");
            pod.manhattan(entry)
        })
        .sum()
}

/// In its room and everything below it down to the wall is its own kind.
pub(crate) fn is_settled(map: &Map, state: &State, pod: Pod) -> bool {
    if !map.is_room_of(pod.pos, pod.kind) {
        return false;
    }

    let mut cur = pod;
    while state.get(cur.pos) != Cell::Wall {
        if state.get(cur.pos) != Cell::Pod(pod.kind) {
            return false;
        }
        cur = cur.down();
    }
    true
}

/// Pods leave rooms only to maneuver spots and leave the hallway only
/// to the bottom-most free slot of their own room.
fn is_valid_destination(map: &Map, state: &State, pod: Pod, dest: Pos) -> bool {
    if state.get(dest) != Cell::Empty {
        return false;
    }

    match map.get(pod.pos) {
        MapCell::Room(_) => map.get(dest) == MapCell::Spot,
        MapCell::Spot | MapCell::Hallway => {
            map.is_room_of(dest, pod.kind)
                && state.get(dest + Dir::Down) != Cell::Empty
                && is_room_clear(map, state, pod, dest)
        }
        MapCell::Void | MapCell::Wall => unreachable!("Pod {} is inside a wall", pod),
    }
}

/// No other kinds anywhere in the room containing `slot`.
fn is_room_clear(map: &Map, state: &State, pod: Pod, slot: Pos) -> bool {
    let mut visited = FnvHashSet::default();
    visited.insert(slot.key());
    let mut to_visit = VecDeque::new();
    to_visit.push_back(slot);

    while let Some(pos) = to_visit.pop_front() {
        match state.get(pos) {
            Cell::Empty => {}
            Cell::Pod(kind) if kind == pod.kind => {}
            Cell::Pod(_) | Cell::Wall | Cell::Void => return false,
        }

        for &next in &pos.neighbors() {
            if map.is_room_of(next, pod.kind) && visited.insert(next.key()) {
                to_visit.push_back(next);
            }
        }
    }

    true
}

fn move_pod(state: &State, pod: Pod, dest: Pos) -> State {
    let mut new_state = State::from(state);
    new_state.set(dest, Cell::Pod(pod.kind));
    new_state.set(pod.pos, Cell::Empty);
    new_state
}
