//! World rendering for the terminal.
//!
//! This module prints the ground and units as text for debugging/demo.

use std::io::{self, Write};

use crate::game::grid::tile_at;
use crate::game::state::GameState;
use crate::game::types::{ItemKind, Position};

/// Text picture of the world, one line per row.
/// `██` ground, `  ` empty cell, `U` + index live unit, `xx` dead unit.
pub fn world_to_text(state: &GameState) -> String {
    let mut text = String::new();
    for y in 0..state.world_height() as i32 {
        for x in 0..state.world_width() as i32 {
            // Units are drawn over the ground, the first unit on a cell wins.
            let symbol = match state.find_unit(Position::new(x, y)) {
                Some(unit) if unit.is_alive() => {
                    let index = state.units().iter().position(|u| u.id == unit.id).unwrap_or(0);
                    let letter = match unit.kind {
                        ItemKind::Unit => 'U',
                    };
                    format!("{}{}", letter, index)
                }
                Some(_) => "xx".to_string(),
                None => match tile_at(state.ground(), x as usize, y as usize) {
                    Some(_) => "██".to_string(),
                    None => "  ".to_string(),
                },
            };
            text.push_str(&format!("{:<3}", symbol));
        }
        text.push('\n');
    }
    text
}

/// Print the world and a unit summary.
pub fn print_world<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    write!(out, "{}", world_to_text(state))?;
    for (index, unit) in state.units().iter().enumerate() {
        writeln!(
            out,
            "--- Unit {} --- position ({}, {}) {:?} facing {}°",
            index, unit.position.x, unit.position.y, unit.status, unit.orientation
        )?;
    }
    Ok(())
}
