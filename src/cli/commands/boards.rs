use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats;
use crate::core::store::{self, SessionStore};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::snapshots;
use crate::errors::{AppError, AppResult, ValidationErrors};
use crate::models::board::{Board, find_board};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Show the board catalog, optionally appending a new board first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Boards { add, icon } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut catalog = store::board_catalog(&pool.conn)?;

        if let Some(raw) = add {
            let name = raw.trim();
            if name.is_empty() {
                let mut errors = ValidationErrors::new();
                errors.push("board", "a board name is required");
                return Err(errors.into());
            }
            if find_board(&catalog, name).is_some() {
                return Err(AppError::DuplicateBoard(name.to_string()));
            }

            let glyph = icon.as_deref().unwrap_or("").trim().to_string();
            catalog.push(Board::new(name, glyph));
            snapshots::save_boards(&pool.conn, &catalog)?;

            log::write_audit(
                &pool.conn,
                "board_add",
                &format!("board {name}"),
                &format!("Board '{name}' added to the catalog"),
            )?;
            success(format!("Board '{name}' added to the catalog."));
            println!();
        }

        let sessions = SessionStore::load(pool, &[])?;
        let usage = stats::board_usage(sessions.all(), &catalog);

        println!("🏄 Board catalog:\n");
        let mut table = Table::new(vec![
            Column::new("BOARD", 10),
            Column::new("ICON", 4),
            Column::new("SESSIONS", 8),
        ]);
        table.separator = cfg.separator_char.chars().next().unwrap_or('-');
        for (board, (_, count)) in catalog.iter().zip(usage.iter()) {
            let icon_cell = if cfg.show_glyphs {
                board.icon.clone()
            } else {
                String::new()
            };
            table.add_row(vec![board.name.clone(), icon_cell, count.to_string()]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
