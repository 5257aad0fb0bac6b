use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{Cell, Kind, MapCell, MAX_SIZE};
use crate::level::Level;
use crate::map::Map;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    NoStartBlock,
    TooLarge,
    /// Invalid character in the map block
    MapPos(usize, usize, String),
    /// Invalid character in the start block
    StatePos(usize, usize, String),
    RowCount(usize, usize),
    RowWidth(usize, String),
    /// Start block doesn't fit the map block
    Mismatch(usize, usize, String),
    NoRooms,
    /// Anything after the start block, row counted from the start of the input
    TrailingContent(usize, String),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserErr::Empty => write!(f, "Empty level"),
            ParserErr::NoStartBlock => {
                write!(f, "Missing start block (separate it from the map by an empty line)")
            }
            ParserErr::TooLarge => write!(f, "Map larger than 255 rows/columns"),
            ParserErr::MapPos(r, c, line) => {
                write!(f, "Invalid map cell at pos: [{}, {}]: `{}`", r, c, line)
            }
            ParserErr::StatePos(r, c, line) => {
                write!(f, "Invalid start cell at pos: [{}, {}]: `{}`", r, c, line)
            }
            ParserErr::RowCount(map, start) => write!(
                f,
                "Map has {} rows but the start block has {}",
                map, start
            ),
            ParserErr::RowWidth(r, line) => write!(
                f,
                "Row {} of the start block has a different width than the map: `{}`",
                r, line
            ),
            ParserErr::Mismatch(r, c, line) => write!(
                f,
                "Start cell at pos: [{}, {}] doesn't match the map: `{}`",
                r, c, line
            ),
            ParserErr::NoRooms => write!(f, "No rooms"),
            ParserErr::TrailingContent(r, line) => {
                write!(f, "Unexpected content after the start block at row {}: `{}`", r, line)
            }
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trailing whitespace is not significant, the grid gets padded anyway
    let mut lines = level
        .lines()
        .map(str::trim_end)
        .enumerate()
        .skip_while(|(_, line)| line.is_empty());
    let map_lines: Vec<&str> = lines
        .by_ref()
        .take_while(|(_, line)| !line.is_empty())
        .map(|(_, line)| line)
        .collect();
    let start_lines: Vec<&str> = lines
        .by_ref()
        .skip_while(|(_, line)| line.is_empty())
        .take_while(|(_, line)| !line.is_empty())
        .map(|(_, line)| line)
        .collect();

    if map_lines.is_empty() {
        return Err(ParserErr::Empty);
    }
    if start_lines.is_empty() {
        return Err(ParserErr::NoStartBlock);
    }
    if let Some((r, line)) = lines.find(|(_, line)| !line.is_empty()) {
        return Err(ParserErr::TrailingContent(r, line.to_string()));
    }
    if map_lines.len() > MAX_SIZE
        || map_lines
            .iter()
            .chain(&start_lines)
            .any(|line| line.chars().count() > MAX_SIZE)
    {
        return Err(ParserErr::TooLarge);
    }
    if map_lines.len() != start_lines.len() {
        return Err(ParserErr::RowCount(map_lines.len(), start_lines.len()));
    }

    let map_grid = parse_map(&map_lines)?;
    let start_grid = parse_start(&start_lines)?;

    for (r, (map_row, start_row)) in map_grid.iter().zip(&start_grid).enumerate() {
        if map_row.len() != start_row.len() {
            return Err(ParserErr::RowWidth(r, start_lines[r].to_string()));
        }
        for (c, (&map_cell, &start_cell)) in map_row.iter().zip(start_row).enumerate() {
            let fits = match (map_cell, start_cell) {
                (MapCell::Void, Cell::Void) | (MapCell::Wall, Cell::Wall) => true,
                (MapCell::Hallway, Cell::Empty)
                | (MapCell::Hallway, Cell::Pod(_))
                | (MapCell::Spot, Cell::Empty)
                | (MapCell::Spot, Cell::Pod(_))
                | (MapCell::Room(_), Cell::Empty)
                | (MapCell::Room(_), Cell::Pod(_)) => true,
                _ => false,
            };
            if !fits {
                return Err(ParserErr::Mismatch(r, c, start_lines[r].to_string()));
            }
        }
    }

    let map = Map::new(Vec2d::new(&map_grid, MapCell::Void));
    if map.rooms().is_empty() {
        return Err(ParserErr::NoRooms);
    }
    let state = State::new(Vec2d::new(&start_grid, Cell::Void));

    Ok(Level::new(map, state))
}

fn parse_map(lines: &[&str]) -> Result<Vec<Vec<MapCell>>, ParserErr> {
    let mut grid = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = match cur_char {
                ' ' => MapCell::Void,
                '#' => MapCell::Wall,
                '.' => MapCell::Hallway,
                'x' => MapCell::Spot,
                _ => match Kind::from_room_char(cur_char) {
                    Some(kind) => MapCell::Room(kind),
                    None => return Err(ParserErr::MapPos(r, c, line.to_string())),
                },
            };
            row.push(cell);
        }
        grid.push(row);
    }
    Ok(grid)
}

fn parse_start(lines: &[&str]) -> Result<Vec<Vec<Cell>>, ParserErr> {
    let mut grid = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = match cur_char {
                ' ' => Cell::Void,
                '#' => Cell::Wall,
                '.' => Cell::Empty,
                _ => match Kind::from_pod_char(cur_char) {
                    Some(kind) => Cell::Pod(kind),
                    None => return Err(ParserErr::StatePos(r, c, line.to_string())),
                },
            };
            row.push(cell);
        }
        grid.push(row);
    }
    Ok(grid)
}
