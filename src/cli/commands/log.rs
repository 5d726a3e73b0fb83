use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::AuditLog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let mut pool = DbPool::new(&cfg.database)?;
            AuditLog::print(&mut pool)?;
        } else {
            info("Nothing to do. Use `surfsync log --print` to show the audit log.");
        }
    }

    Ok(())
}
