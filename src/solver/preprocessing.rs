use crate::data::{MapCell, KINDS};
use crate::map::Map;
use crate::solver::{expand, SolverErr};
use crate::state::State;

/// Checks everything the search relies on so it doesn't have to.
pub(crate) fn check_level(map: &Map, state: &State) -> Result<(), SolverErr> {
    check_border(map)?;
    check_connected(map)?;

    for &kind in &KINDS {
        let pods = state.pods().filter(|pod| pod.kind == kind).count();
        let slots = map.slot_cnt(kind);
        if pods != slots {
            return Err(SolverErr::PodsRooms(kind, pods, slots));
        }
    }

    let solved = expand::organization_score(map, state) == map.rooms().len();
    let has_spots = map.grid().positions().any(|pos| map.get(pos) == MapCell::Spot);
    if !solved && !has_spots {
        return Err(SolverErr::NoSpots);
    }

    Ok(())
}

/// Pods must not be able to walk off the map.
fn check_border(map: &Map) -> Result<(), SolverErr> {
    for pos in map.grid().positions() {
        if !map.get(pos).is_passable() {
            continue;
        }
        for &next in &pos.neighbors() {
            // out of range is never passable but it's not a wall either
            match map.grid().get(next) {
                None | Some(MapCell::Void) => return Err(SolverErr::IncompleteBorder),
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn check_connected(map: &Map) -> Result<(), SolverErr> {
    let mut passable = map.grid().positions().filter(|&pos| map.get(pos).is_passable());
    let start = match passable.next() {
        Some(pos) => pos,
        None => return Ok(()),
    };

    let mut visited = map.grid().scratchpad();
    visited[start] = true;
    let mut to_visit = vec![start];
    while let Some(cur) = to_visit.pop() {
        for &next in &cur.neighbors() {
            if map.get(next).is_passable() && !visited[next] {
                visited[next] = true;
                to_visit.push(next);
            }
        }
    }

    if passable.all(|pos| visited[pos]) {
        Ok(())
    } else {
        Err(SolverErr::Disconnected)
    }
}
