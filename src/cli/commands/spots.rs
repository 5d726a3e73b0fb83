use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::SessionStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::DEFAULT_SPOTS;

/// List known spots: the presets, then every logged spot not already among
/// them in first-seen order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Spots = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::load(pool, &[])?;

        let mut spots: Vec<String> = DEFAULT_SPOTS.iter().map(|s| s.to_string()).collect();
        for s in sessions.all() {
            if !spots.iter().any(|known| known == &s.spot) {
                spots.push(s.spot.clone());
            }
        }

        println!("📍 Known spots:\n");
        for (i, spot) in spots.iter().enumerate() {
            let logged = sessions.all().iter().filter(|s| &s.spot == spot).count();
            if logged > 0 {
                println!("{:>3}. {} ({} session(s))", i + 1, spot, logged);
            } else {
                println!("{:>3}. {}", i + 1, spot);
            }
        }
    }

    Ok(())
}
