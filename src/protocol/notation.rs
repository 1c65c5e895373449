//! Board notation.
//!
//! One line per row, one character per cell:
//!
//! | char | cell |
//! |---|---|
//! | `.` | path |
//! | `#` | exit |
//! | `+` | entrance |
//! | `P` | police |
//! | `G` | granny |
//! | `c` `l` `s` `t` | city, library, school, townhall |
//! | `1`-`4` | live player of gang, mafia, politicians, cartel |

use crate::board::{CellType, GameState, Team, ALL_TEAMS, BOARD_SIZE};

/// Errors that can occur while reading a notation row.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected {expected} cells in a row, got {0}", expected = BOARD_SIZE)]
    WrongRowLength(usize),

    #[error("invalid cell character: '{0}'")]
    InvalidChar(char),
}

/// One decoded notation character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Cell(CellType),
    Player(Team),
}

pub const fn cell_char(kind: CellType) -> char {
    match kind {
        CellType::Path => '.',
        CellType::Exit => '#',
        CellType::Entrance => '+',
        CellType::Police => 'P',
        CellType::Granny => 'G',
        CellType::City => 'c',
        CellType::Library => 'l',
        CellType::School => 's',
        CellType::Townhall => 't',
    }
}

/// Encodes the grid, top row first.
pub fn encode_board(state: &GameState) -> Vec<String> {
    state
        .grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.occupied_by {
                    Some(id) => id.team.code(),
                    None => cell_char(cell.kind()),
                })
                .collect()
        })
        .collect()
}

/// Decodes one notation row.
pub fn parse_row(line: &str) -> Result<Vec<Glyph>, NotationError> {
    let glyphs = line.chars().map(parse_char).collect::<Result<Vec<_>, _>>()?;
    if glyphs.len() != BOARD_SIZE as usize {
        return Err(NotationError::WrongRowLength(glyphs.len()));
    }
    Ok(glyphs)
}

fn parse_char(c: char) -> Result<Glyph, NotationError> {
    let kind = match c {
        '.' => CellType::Path,
        '#' => CellType::Exit,
        '+' => CellType::Entrance,
        'P' => CellType::Police,
        'G' => CellType::Granny,
        'c' => CellType::City,
        'l' => CellType::Library,
        's' => CellType::School,
        't' => CellType::Townhall,
        _ => {
            return ALL_TEAMS
                .into_iter()
                .find(|t| t.code() == c)
                .map(Glyph::Player)
                .ok_or(NotationError::InvalidChar(c));
        }
    };
    Ok(Glyph::Cell(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PlayerId, Position};

    #[test]
    fn empty_board_is_all_path() {
        let lines = encode_board(&GameState::setup());
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| l == &".".repeat(20)));
    }

    #[test]
    fn players_and_units_are_drawn() {
        let mut state = GameState::setup();
        state.add_police(Position::new(0, 0));
        state.add_granny(Position::new(0, 1));
        state.occupy(Position::new(0, 2), PlayerId::new(Team::Cartel, 0));
        let lines = encode_board(&state);
        assert!(lines[0].starts_with("PG4."));
    }

    #[test]
    fn parse_row_reads_every_glyph() {
        let row = parse_row("#+PGclst1234........").unwrap();
        assert_eq!(row[0], Glyph::Cell(CellType::Exit));
        assert_eq!(row[5], Glyph::Cell(CellType::Library));
        assert_eq!(row[10], Glyph::Player(Team::Politicians));
        assert_eq!(row[19], Glyph::Cell(CellType::Path));
    }

    #[test]
    fn parse_row_errors() {
        assert_eq!(parse_row("...."), Err(NotationError::WrongRowLength(4)));
        assert_eq!(parse_row("x"), Err(NotationError::InvalidChar('x')));
    }

    #[test]
    fn encoded_rows_parse_back() {
        let mut state = GameState::setup();
        state.add_police(Position::new(7, 3));
        for line in encode_board(&state) {
            assert!(parse_row(&line).is_ok());
        }
    }
}
