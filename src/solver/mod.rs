pub(crate) mod a_star;
mod backtracking;
mod expand;
mod preprocessing;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use fnv::FnvHashMap;
use log::{debug, info, trace};
use separator::Separatable;
use typed_arena::Arena;

use crate::config::{Limits, Method};
use crate::data::Kind;
use crate::level::Level;
use crate::map::Map;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;
use crate::Solve;

pub use self::a_star::Stats;
use self::a_star::SearchNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    IncompleteBorder,
    Disconnected,
    /// kind, pods, room slots
    PodsRooms(Kind, usize, usize),
    NoSpots,
    NoSolution { visited: usize },
    VisitLimit { visited: usize },
    Timeout { visited: usize, elapsed: Duration },
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolverErr::IncompleteBorder => {
                write!(f, "Incomplete border - pods could leave the map")
            }
            SolverErr::Disconnected => write!(f, "Passable cells are not all connected"),
            SolverErr::PodsRooms(kind, pods, slots) => write!(
                f,
                "Different number of pods and room slots for {}: {} pods, {} slots",
                kind, pods, slots
            ),
            SolverErr::NoSpots => write!(f, "No maneuver spots - pods can't move"),
            SolverErr::NoSolution { visited } => write!(
                f,
                "Path not found - visited states: {}",
                visited.separated_string()
            ),
            SolverErr::VisitLimit { visited } => write!(
                f,
                "Gave up after visiting {} states",
                visited.separated_string()
            ),
            SolverErr::Timeout { visited, elapsed } => write!(
                f,
                "Gave up after {} ms - visited states: {}",
                (elapsed.as_millis() as u64).separated_string(), // separator doesn't support u128
                visited.separated_string()
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// From the initial state to the goal, both included
    pub path_states: Vec<State>,
    pub moves: Moves,
    /// Least energy required
    pub cost: u32,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(path_states: Vec<State>, moves: Moves, cost: u32, stats: Stats, method: Method) -> Self {
        Self {
            path_states,
            moves,
            cost,
            stats,
            method,
        }
    }

    /// Every state of the solution with the energy spent to get there.
    pub fn trace<'a>(&'a self, level: &'a Level) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&level.state, &self.moves)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} moves, {} energy", self.method, self.moves.move_cnt(), self.cost)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve_with(&self, method: Method, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, method, limits, print_status)
    }
}

fn solve(level: &Level, method: Method, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr> {
    debug!("Processing level...");
    preprocessing::check_level(&level.map, &level.state)?;
    debug!("Processed level");

    let heuristic: fn(&Map, &State) -> u32 = match method {
        Method::AStar => expand::heuristic,
        Method::Dijkstra => zero_heuristic,
    };
    search(&level.map, &level.state, method, limits, print_status, heuristic)
}

fn zero_heuristic(_map: &Map, _state: &State) -> u32 {
    0
}

fn search<Heuristic>(
    map: &Map,
    initial_state: &State,
    method: Method,
    limits: Limits,
    print_status: bool,
    heuristic: Heuristic,
) -> Result<SolverOk, SolverErr>
where
    Heuristic: Fn(&Map, &State) -> u32,
{
    debug!("Search called");

    let started = Instant::now();
    let deadline = limits.timeout.map(|timeout| started + timeout);
    let room_slots = map.rooms().len();

    let mut stats = Stats::new();
    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    // closed set - prev of every visited state
    let mut prevs = FnvHashMap::default();
    // open set - best known score of every state waiting to be visited
    let mut open = FnvHashMap::default();
    let mut seq = 0;
    let mut best_organization = None;

    let start: &State = arena.alloc(initial_state.clone());
    open.insert(start, 0);
    let start_node = SearchNode::new(start, None, 0, 0, heuristic(map, start), seq);
    stats.add_created(&start_node);
    to_visit.push(Reverse(start_node));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if prevs.contains_key(cur_node.state) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if open
            .get(cur_node.state)
            .map_or(false, |&best| best < cur_node.score)
        {
            // a cheaper way here was found after this node got queued
            stats.add_reached_duplicate(&cur_node);
            continue;
        }

        let visited = stats.total_unique_visited();
        if let Some(max_visited) = limits.max_visited {
            if visited >= max_visited {
                info!("Visit limit reached");
                return Err(SolverErr::VisitLimit { visited });
            }
        }
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                info!("Timed out");
                return Err(SolverErr::Timeout {
                    visited,
                    elapsed: started.elapsed(),
                });
            }
        }

        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }
        trace!("Visiting {:?}", cur_node);

        // insert here and not as soon as we discover it
        // otherwise we overwrite the shortest path with longer ones
        // initial state has no prev - hack to avoid Option
        prevs.insert(cur_node.state, cur_node.prev.unwrap_or(cur_node.state));
        open.remove(cur_node.state);

        let organization = expand::organization_score(map, cur_node.state);
        if best_organization.map_or(true, |best| organization > best) {
            best_organization = Some(organization);
            debug!(
                "Best organization so far: {}/{}, score: {}\n{}",
                organization, room_slots, cur_node.score, cur_node.state
            );
        }
        if organization == room_slots {
            info!(
                "Solved, energy: {}, visited states: {}",
                cur_node.score,
                stats.total_unique_visited()
            );
            debug!("Backtracking path");
            let path = backtracking::backtrack_prevs(&prevs, cur_node.state);
            let moves = backtracking::reconstruct_moves(&path);
            let path_states = path.into_iter().cloned().collect();
            return Ok(SolverOk::new(path_states, moves, cur_node.score, stats, method));
        }

        for (neighbor_state, cost) in expand::expand(map, cur_node.state) {
            if prevs.contains_key(&neighbor_state) {
                continue;
            }
            let score = cur_node.score + cost;
            if open.get(&neighbor_state).map_or(false, |&best| best <= score) {
                continue;
            }

            let neighbor_state: &State = arena.alloc(neighbor_state);
            open.insert(neighbor_state, score);
            seq += 1;
            let next_node = SearchNode::new(
                neighbor_state,
                Some(cur_node.state),
                cur_node.dist + 1,
                score,
                heuristic(map, neighbor_state),
                seq,
            );
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    let visited = stats.total_unique_visited();
    info!("Frontier exhausted after visiting {} states", visited);
    Err(SolverErr::NoSolution { visited })
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashSet;

    use crate::data::Pos;

    use super::*;

    const SOLVED: &str = r"
#######
#x.x.x#
##a#b##
##a#b##
 #####

#######
#.....#
##A#B##
##A#B##
 #####
";

    const SOLVED_SMALL: &str = r"
#######
#x.x.x#
##a#b##
 #####

#######
#.....#
##A#B##
 #####
";

    const SWAP: &str = r"
#######
#x.x.x#
##a#b##
 #####

#######
#.....#
##B#A##
 #####
";

    // every pod needs exactly one move through the hallway
    const TWO_ROOMS: &str = r"
#########
#xx.x.xx#
###a#b###
  #a#b#
  #####

#########
#.......#
###B#A###
  #A#B#
  #####
";

    const THREE_ROOMS: &str = r"
###########
#xx.x.x.xx#
###a#b#c###
  #a#b#c#
  #######

###########
#.........#
###C#A#B###
  #A#B#C#
  #######
";

    const STUCK: &str = r"
#######
#.x...#
##a#b##
 #####

#######
#.....#
##B#A##
 #####
";

    fn solve_str(level: &str, method: Method) -> Result<SolverOk, SolverErr> {
        let level: Level = level.parse().unwrap();
        level.solve(method, false)
    }

    #[test]
    fn already_solved() {
        for &(level, method) in &[
            (SOLVED_SMALL, Method::AStar),
            (SOLVED_SMALL, Method::Dijkstra),
            (SOLVED, Method::AStar),
            (SOLVED, Method::Dijkstra),
        ] {
            let solution = solve_str(level, method).unwrap();
            assert_eq!(solution.cost, 0);
            assert_eq!(solution.path_states.len(), 1);
            assert_eq!(solution.moves.move_cnt(), 0);
            assert_eq!(solution.stats.total_unique_visited(), 1);
        }
    }

    #[test]
    fn one_swap() {
        // A out of the way to the right (2), B to the middle spot (20),
        // B home (20), A all the way to the left room (4)
        let solution = solve_str(SWAP, Method::AStar).unwrap();
        assert_eq!(solution.cost, 2 + 20 + 20 + 4);
        assert_eq!(solution.moves.move_cnt(), 4);
        assert_eq!(solution.path_states.len(), 5);
    }

    #[test]
    fn heuristic_is_admissible() {
        for &level in &[SWAP, TWO_ROOMS, THREE_ROOMS] {
            let level: Level = level.parse().unwrap();
            let a_star = level.solve(Method::AStar, false).unwrap();
            let dijkstra = level.solve(Method::Dijkstra, false).unwrap();
            assert_eq!(a_star.cost, dijkstra.cost);

            // along an optimal path the estimate never exceeds what's actually left
            let mut spent = 0;
            for (state, mov) in a_star.path_states.iter().zip(a_star.moves.iter()) {
                let remaining = a_star.cost - spent;
                assert!(expand::heuristic(&level.map, state) <= remaining);
                spent += mov.cost();
            }
            assert_eq!(spent, a_star.cost);
        }
    }

    #[test]
    fn heuristic_never_exceeds_exact_cost() {
        // exact remaining cost of every state reachable in a few moves
        let level: Level = TWO_ROOMS.parse().unwrap();
        let mut states = FnvHashSet::default();
        states.insert(level.state.clone());
        for _ in 0..3 {
            let mut next = Vec::new();
            for state in &states {
                next.extend(expand::expand(&level.map, state).into_iter().map(|(s, _)| s));
            }
            states.extend(next);
        }
        assert!(states.len() > 10);

        for state in &states {
            let h = expand::heuristic(&level.map, state);
            let exact = search(
                &level.map,
                state,
                Method::Dijkstra,
                Limits::default(),
                false,
                zero_heuristic,
            );
            // some states are dead ends, those can't be overestimated
            if let Ok(exact) = exact {
                assert!(h <= exact.cost, "{} > {} for\n{}", h, exact.cost, state);
            }
        }
    }

    #[test]
    fn path_is_consistent() {
        let level: Level = THREE_ROOMS.parse().unwrap();
        let solution = level.solve(Method::AStar, false).unwrap();

        assert_eq!(solution.path_states.len() - 1, solution.moves.move_cnt());
        assert_eq!(solution.moves.cost(), solution.cost);
        assert_eq!(solution.path_states[0], level.state);

        // replaying the moves gets to the same goal
        let mut state = level.state.clone();
        for (mov, expected) in solution.moves.iter().zip(&solution.path_states[1..]) {
            state = state.apply(mov);
            assert_eq!(state, *expected);
        }
        let last = solution.path_states.last().unwrap();
        assert_eq!(state, *last);
        assert_eq!(expand::organization_score(&level.map, last), level.map.rooms().len());
    }

    #[test]
    fn settled_pods_stay_settled() {
        let level: Level = THREE_ROOMS.parse().unwrap();
        let solution = level.solve(Method::AStar, false).unwrap();

        for pair in solution.path_states.windows(2) {
            for pod in pair[0].pods() {
                if expand::is_settled(&level.map, &pair[0], pod) {
                    assert!(expand::is_settled(&level.map, &pair[1], pod));
                }
            }
        }
    }

    #[test]
    fn no_solution() {
        // only one spot and it's not enough to swap
        let err = solve_str(STUCK, Method::AStar).unwrap_err();
        match err {
            SolverErr::NoSolution { visited } => assert!(visited > 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn visit_limit() {
        let level: Level = THREE_ROOMS.parse().unwrap();
        let err = level
            .solve_with(Method::Dijkstra, Limits::new(Some(3), None), false)
            .unwrap_err();
        assert_eq!(err, SolverErr::VisitLimit { visited: 3 });
    }

    #[test]
    fn timeout() {
        let level: Level = THREE_ROOMS.parse().unwrap();
        let err = level
            .solve_with(Method::AStar, Limits::new(None, Some(Duration::from_secs(0))), false)
            .unwrap_err();
        match err {
            SolverErr::Timeout { visited, .. } => assert_eq!(visited, 0),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn errors_are_plain_values() {
        let err = solve_str(STUCK, Method::Dijkstra).unwrap_err();
        let copy = err;
        assert_eq!(err, copy);
        assert!(err.to_string().starts_with("Path not found"));
    }

    #[test]
    fn invalid_level() {
        let level = r"
#######
#x.x.x#
##a#b##
 #####

#######
#.....#
##B#B##
 #####
";
        assert_eq!(
            solve_str(level, Method::AStar).unwrap_err(),
            SolverErr::PodsRooms(Kind::A, 0, 1)
        );
    }

    #[test]
    fn first_move_of_swap() {
        let level: Level = SWAP.parse().unwrap();
        let solution = level.solve(Method::AStar, false).unwrap();
        let first = solution.moves.iter().next().unwrap();
        // both orders cost the same, either pod can go first
        assert!(first.from == Pos::new(2, 2) || first.from == Pos::new(2, 4));
    }
}
