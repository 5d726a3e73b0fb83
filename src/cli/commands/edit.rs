use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::SessionDraft;
use crate::core::store::{self, SessionStore};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Replace an existing session wholesale. Flags left unset keep the stored
/// values; an unknown id is a warning, not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        spot,
        date,
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
        let mut sessions = SessionStore::load(pool, &[])?;

        let Some(existing) = sessions.get(*id) else {
            warning(format!("No session with id {id}. Nothing to edit."));
            return Ok(());
        };

        let mut draft = SessionDraft::from_session(existing);
        if let Some(v) = spot {
            draft.spot = Some(v.clone());
        }
        if let Some(v) = date {
            draft.date = Some(v.clone());
        }
        if let Some(v) = board {
            draft.board = Some(v.clone());
        }
        if let Some(v) = waves {
            draft.wave_count = Some(*v);
        }
        if let Some(v) = mood {
            draft.mood = Some(*v);
        }
        if let Some(v) = swell {
            draft.swell = Some(v.clone());
        }
        if let Some(v) = wind {
            draft.wind = Some(v.clone());
        }
        if let Some(v) = tide {
            draft.tide = Some(v.clone());
        }
        if let Some(v) = notes {
            draft.notes = Some(v.clone());
        }

        let record = draft.validate(&catalog)?;
        let spot_name = record.spot.clone();
        let date_str = record.date_str();

        if sessions.update(*id, record)? {
            log::write_audit(
                sessions.conn(),
                "edit",
                &format!("session {id}"),
                &format!("Updated session to {spot_name} on {date_str}"),
            )?;
            success(format!("Session #{id} updated."));
        }
    }

    Ok(())
}
