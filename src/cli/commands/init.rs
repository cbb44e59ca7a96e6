use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load()?;
    // In test mode the config file is untouched, so trust the CLI override.
    let db_path = if cli.test {
        cli.db.clone().unwrap_or(cfg.database)
    } else {
        cfg.database
    };

    println!("⚙️  Initializing lifestats…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    db::init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Non-blocking audit entry
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    Ok(())
}
