use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::snapshots;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::normalize_hhmm;

/// Print or set the daily reminder time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminder { time } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match time {
            Some(raw) => {
                let normalized = normalize_hhmm(raw)?;
                snapshots::save_reminder(&pool.conn, &normalized)?;
                log::write_audit(
                    &pool.conn,
                    "reminder_set",
                    "",
                    &format!("Daily reminder set to {normalized}"),
                )?;
                success(format!("Daily surf reminder set to {normalized} 🌊"));
            }
            None => {
                let current = store::reminder(&pool.conn)?;
                info(format!("Daily surf reminder: {current}"));
            }
        }
    }

    Ok(())
}
