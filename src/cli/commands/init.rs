use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::store::{self, SessionStore};
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
///  - the snapshot seed (demo sessions, or an empty logbook with `--bare`)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let bare = matches!(cli.command, Commands::Init { bare: true });

    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = expand_tilde(custom).to_string_lossy().into_owned();
    }
    let db_path = cfg.database.clone();

    println!("🌊 Initializing SurfSync…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    // First-run seed: demo sessions unless the user asked for a bare start.
    let seed = if bare {
        Vec::new()
    } else {
        store::demo_sessions()
    };
    let store = SessionStore::load(pool, &seed)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🏄 Logbook ready with {} session(s)", store.len());

    // Audit write is best-effort here, init must not fail on it.
    if let Err(e) = log::write_audit(
        store.conn(),
        "init",
        "database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write audit entry: {}", e);
    }

    println!("🎉 SurfSync initialization completed!");
    Ok(())
}
