use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::stats::Dashboard;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let dashboard = StatsLogic::dashboard(&mut pool, cfg)?;

        if *json {
            let payload = serde_json::to_string_pretty(&dashboard)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{payload}");
        } else {
            print_dashboard(&dashboard, cfg);
        }
    }

    Ok(())
}

fn header(title: &str) {
    println!("\n{}", Colour::Cyan.bold().paint(title));
}

fn print_dashboard(d: &Dashboard, cfg: &Config) {
    header("📊 Events per day (newest first)");
    if d.bathroom_stats.is_empty() {
        println!("  (no events)");
    }
    for row in &d.bathroom_stats {
        println!("  {}  {:<12} {:>4}", row.date, row.event_type, row.count);
    }

    header("📍 Events per location");
    if d.location_stats.is_empty() {
        println!("  (no located events)");
    }
    for row in &d.location_stats {
        println!("  {:<12} {:<16} {:>4}", row.event_type, row.location, row.count);
    }

    header(&format!("🏆 Top names ({})", cfg.leaderboard_type));
    if d.person_stats.is_empty() {
        println!("  (no named events)");
    }
    for (rank, row) in d.person_stats.iter().enumerate() {
        println!("  {:>2}. {:<20} {:>4}", rank + 1, row.person, row.count);
    }

    header("🦷 Brushing per day (brush / floss)");
    if d.dental_stats.is_empty() {
        println!("  (no brushings)");
    }
    for row in &d.dental_stats {
        println!(
            "  {}  {:>3} / {:>3}",
            row.date, row.brush_count, row.floss_count
        );
    }

    header("🕒 Recent bathroom events");
    for ev in &d.recent_bathroom {
        println!(
            "  #{:<4} {}  {:<12} loc={:<10} who={}",
            ev.id,
            ev.timestamp,
            ev.event_type,
            ev.location.as_deref().unwrap_or("--"),
            ev.person1.as_deref().unwrap_or("--"),
        );
    }

    header("🕒 Recent brushings");
    for ev in &d.recent_dental {
        println!(
            "  #{:<4} {}  flosser={}",
            ev.id,
            ev.timestamp,
            if ev.used_flosser { "yes" } else { "no" }
        );
    }
    println!();
}
