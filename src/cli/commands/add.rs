use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::SessionDraft;
use crate::core::store::{self, SessionStore};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::conditions::{Swell, Tide, Wind};
use crate::ui::messages::success;
use crate::utils::date;

/// Log a new surf session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        spot,
        date: date_flag,
        board,
        waves,
        mood,
        swell,
        wind,
        tide,
        notes,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let catalog = store::board_catalog(&pool.conn)?;

        // Unset flags fall back to the entry-form defaults. An empty
        // default_board in the config means "let the catalog decide".
        let board_flag = board.clone().or_else(|| {
            if cfg.default_board.is_empty() {
                None
            } else {
                Some(cfg.default_board.clone())
            }
        });

        let draft = SessionDraft {
            id: None,
            date: Some(
                date_flag
                    .clone()
                    .unwrap_or_else(|| date::today().to_string()),
            ),
            spot: Some(spot.clone()),
            board: board_flag,
            wave_count: Some(waves.unwrap_or(0)),
            mood: Some(mood.unwrap_or(4)),
            swell: Some(
                swell
                    .clone()
                    .unwrap_or_else(|| Swell::Under1m.as_str().to_string()),
            ),
            wind: Some(
                wind.clone()
                    .unwrap_or_else(|| Wind::Offshore.as_str().to_string()),
            ),
            tide: Some(
                tide.clone()
                    .unwrap_or_else(|| Tide::Mid.as_str().to_string()),
            ),
            notes: notes.clone(),
        };

        let record = draft.validate(&catalog)?;
        let spot_name = record.spot.clone();
        let date_str = record.date_str();

        let mut sessions = SessionStore::load(pool, &[])?;
        let id = sessions.add(record)?;

        log::write_audit(
            sessions.conn(),
            "add",
            &format!("session {id}"),
            &format!("Added session at {spot_name} on {date_str}"),
        )?;

        success(format!("Session #{id} added: {spot_name} on {date_str}."));
    }

    Ok(())
}
