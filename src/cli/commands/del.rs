use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::SessionStore;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut sessions = SessionStore::load(pool, &[])?;

        // An unknown id leaves the logbook untouched and exits cleanly.
        let Some(session) = sessions.get(*id) else {
            warning(format!("No session with id {id}. Nothing to delete."));
            return Ok(());
        };
        let described = format!("{} at {}", session.date_str(), session.spot);

        if !*yes {
            let prompt =
                format!("Delete session #{id} ({described})? This action is irreversible.");
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if sessions.remove(*id)? {
            log::write_audit(
                sessions.conn(),
                "del",
                &format!("session {id}"),
                &format!("Deleted session {described}"),
            )?;
            success(format!("Session #{id} ({described}) has been deleted."));
        }
    }

    Ok(())
}
