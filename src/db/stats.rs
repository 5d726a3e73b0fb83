use crate::db::pool::DbPool;
use crate::db::snapshots;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Print a short report about the database file and its snapshots.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SNAPSHOT COUNTS
    //
    let sessions = snapshots::load_sessions(&pool.conn)?.unwrap_or_default();
    let boards = snapshots::load_boards(&pool.conn)?;

    println!(
        "{}• Sessions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        sessions.len(),
        RESET
    );
    match boards {
        Some(b) => println!("{}• Boards:{} {}{}{}", CYAN, RESET, GREEN, b.len(), RESET),
        None => println!("{}• Boards:{} {}presets (not yet written){}", CYAN, RESET, GREY, RESET),
    }

    let reminder = snapshots::load_reminder(&pool.conn)?;
    println!(
        "{}• Reminder:{} {}",
        CYAN,
        RESET,
        reminder.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 3) DATE RANGE
    //
    let first = sessions.iter().map(|s| s.date).min();
    let last = sessions.iter().map(|s| s.date).max();

    println!("{}• Date range:{}", CYAN, RESET);
    match (first, last) {
        (Some(f), Some(l)) => {
            println!("    from: {}", f);
            println!("    to:   {}", l);
        }
        _ => {
            println!("    from: {GREY}--{RESET}");
            println!("    to:   {GREY}--{RESET}");
        }
    }

    //
    // 4) AVERAGE WAVES / SESSION
    //
    if !sessions.is_empty() {
        let total_waves: u64 = sessions.iter().map(|s| s.wave_count as u64).sum();
        let avg = total_waves as f64 / sessions.len() as f64;
        println!("{}• Average waves/session:{} {:.1}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
