use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aliases::AliasTable;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Print or wholesale-replace the alias table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Aliases {
        print_aliases,
        replace,
    } = cmd
    {
        let doc_path = Path::new(&cfg.aliases);

        if let Some(file) = replace {
            // The replacement document must parse; a bad file must not
            // clobber the existing table.
            let text = fs::read_to_string(file)?;
            let table = AliasTable::from_json(&text)?;
            table.save(doc_path)?;
            success(format!(
                "Alias table replaced ({} canonical names).",
                table.len()
            ));

            if let Ok(pool) = DbPool::new(&cfg.database)
                && let Err(e) = ttlog(
                    &pool.conn,
                    "aliases",
                    "",
                    &format!("alias table replaced, {} entries", table.len()),
                )
            {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }

        if *print_aliases {
            let table = AliasTable::load(doc_path);
            println!("{}", table.to_json_pretty()?);
        }
    }

    Ok(())
}
