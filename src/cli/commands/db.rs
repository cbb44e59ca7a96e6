use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Db { info: true }) {
        let pool = DbPool::new(&cfg.database)?;
        print_db_info(&pool, &cfg.database)?;
    }

    Ok(())
}

fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    let bullet = |label: &str| Colour::Cyan.paint(format!("• {label}:")).to_string();

    println!("{} {}", bullet("File"), Colour::Yellow.paint(db_path));
    println!("{} {:.2} MB", bullet("Size"), file_mb);

    let bathroom = db::count_bathroom(&pool.conn)?;
    let dental = db::count_dental(&pool.conn)?;
    println!(
        "{} {}",
        bullet("Bathroom events"),
        Colour::Green.paint(bathroom.to_string())
    );
    println!(
        "{} {}",
        bullet("Dental events"),
        Colour::Green.paint(dental.to_string())
    );

    let (b_first, b_last) = db::bathroom_timestamp_range(&pool.conn)?;
    let (d_first, d_last) = db::dental_timestamp_range(&pool.conn)?;

    println!("{}", bullet("Timestamp range"));
    println!(
        "    bathroom: {} → {}",
        b_first.as_deref().unwrap_or("--"),
        b_last.as_deref().unwrap_or("--")
    );
    println!(
        "    dental:   {} → {}",
        d_first.as_deref().unwrap_or("--"),
        d_last.as_deref().unwrap_or("--")
    );

    println!();
    Ok(())
}
