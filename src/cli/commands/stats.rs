use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats;
use crate::core::store::{self, SessionStore};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::board::find_board;
use crate::utils::colors::{GREY, RESET, ansi_for_mood};
use crate::utils::formatting::{bold, glyph_label};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let catalog = store::board_catalog(&pool.conn)?;
        let store = SessionStore::load(pool, &[])?;
        let sessions = store.all();

        println!("📊 Sessions by board:");
        for (name, count) in stats::board_usage(sessions, &catalog) {
            let icon = find_board(&catalog, &name)
                .map(|b| b.icon.as_str())
                .unwrap_or("");
            let label = glyph_label(icon, &name, cfg.show_glyphs);
            if count == 0 {
                println!("  {GREY}{label}: 0 sessions{RESET}");
            } else {
                println!("  {label}: {count} session(s)");
            }
        }

        println!("\n🏆 Most surfed spot:");
        match stats::most_surfed_spot(sessions) {
            Some((spot, count)) => println!("  {} ({count} session(s))", bold(&spot)),
            None => println!("  No sessions logged yet."),
        }

        println!("\n📈 Mood trend (best mood per day):");
        let trend = stats::mood_trend(sessions);
        if trend.is_empty() {
            println!("  No sessions logged yet.");
        }
        for (date, mood) in trend {
            let color = ansi_for_mood(mood);
            let bar = "█".repeat(mood.value() as usize);
            println!(
                "  {date}  {color}{bar:<5}{RESET}  {}",
                glyph_label(mood.icon(), mood.label(), cfg.show_glyphs)
            );
        }
    }

    Ok(())
}
