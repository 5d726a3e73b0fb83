use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::SessionFilter;
use crate::core::store::{self, SessionStore};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::board::{Board, find_board};
use crate::models::mood::Mood;
use crate::models::session::SurfSession;
use crate::ui::messages::info;
use crate::utils::formatting::{ellipsize, glyph_label};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { spot, board, mood } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let catalog = store::board_catalog(&pool.conn)?;
        let sessions = SessionStore::load(pool, &[])?;

        let mood_filter = match mood {
            Some(n) => Some(parse_mood_value(*n)?),
            None => None,
        };

        let filter = SessionFilter {
            spot: spot.clone(),
            board: board.clone(),
            mood: mood_filter,
        };

        let shown = filter.apply(sessions.all());

        if shown.is_empty() {
            if filter.is_empty() {
                info("No sessions logged yet. Add one with `surfsync add <SPOT>`.");
            } else {
                info("No sessions match the given filter.");
            }
            return Ok(());
        }

        print_sessions(&shown, &catalog, cfg);

        if !filter.is_empty() {
            println!("{} of {} session(s) shown", shown.len(), sessions.len());
        }
    }
    Ok(())
}

fn parse_mood_value(n: i64) -> AppResult<Mood> {
    u8::try_from(n)
        .ok()
        .and_then(Mood::from_value)
        .ok_or_else(|| AppError::InvalidMood(format!("must be on the 1-5 scale, got {n}")))
}

fn print_sessions(sessions: &[SurfSession], catalog: &[Board], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DATE", 10),
        Column::new("SPOT", 12),
        Column::new("BOARD", 10),
        Column::new("WAVES", 5),
        Column::new("MOOD", 10),
        Column::new("SWELL", 5),
        Column::new("WIND", 8),
        Column::new("TIDE", 6),
        Column::new("NOTES", 10),
    ]);
    table.separator = cfg.separator_char.chars().next().unwrap_or('-');

    for s in sessions {
        let board_icon = find_board(catalog, &s.board)
            .map(|b| b.icon.as_str())
            .unwrap_or("");
        let mood_label = format!("{} ({})", s.mood.label(), s.mood.value());

        table.add_row(vec![
            s.id.to_string(),
            s.date_str(),
            s.spot.clone(),
            glyph_label(board_icon, &s.board, cfg.show_glyphs),
            s.wave_count.to_string(),
            glyph_label(s.mood.icon(), &mood_label, cfg.show_glyphs),
            s.swell.to_string(),
            s.wind.to_string(),
            s.tide.to_string(),
            if s.notes.is_empty() {
                "--".to_string()
            } else {
                ellipsize(&s.notes, 28)
            },
        ]);
    }

    print!("{}", table.render());
}
