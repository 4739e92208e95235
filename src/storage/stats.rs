use super::migrate::applied_versions;
use super::{KeyValueStore, SqliteStore};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size on disk:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) NAMESPACE USAGE
    //
    let used = store.usage()?;
    match store.quota() {
        Some(q) => println!(
            "{}• Namespace:{} {}{}{} of {} bytes ({:.1}%)",
            CYAN,
            RESET,
            GREEN,
            used,
            RESET,
            q,
            used as f64 * 100.0 / q as f64
        ),
        None => println!("{}• Namespace:{} {}{}{} bytes (no quota)", CYAN, RESET, GREEN, used, RESET),
    }

    //
    // 3) KEYS
    //
    let keys = store.keys()?;
    println!("{}• Keys:{}", CYAN, RESET);
    if keys.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for k in keys {
        let size = store.get(&k)?.map(|v| v.len()).unwrap_or(0);
        println!("    {:<28} {:>8} bytes", k, size);
    }

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&store.conn)?;
    println!("{}• Migrations:{}", CYAN, RESET);
    for v in versions {
        println!("    {}", v);
    }

    println!();
    Ok(())
}
