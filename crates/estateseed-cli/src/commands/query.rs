use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

use estateseed_core::query;

use crate::args::QueryArgs;

pub async fn run(args: &QueryArgs) -> Result<()> {
    if args.list {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Query", "Description"]);
        for q in &query::QUERIES {
            table.add_row(vec![q.name, q.description]);
        }
        println!("{}", table);
        return Ok(());
    }

    let Some(name) = args.name.as_deref() else {
        bail!("query name required (or pass --list)");
    };

    let result = query::run_named(&args.db, name).await?;
    if result.rows.is_empty() {
        println!("(no rows)");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(result.columns.clone());
    for row in &result.rows {
        table.add_row(row.clone());
    }
    println!("{}", table);
    Ok(())
}
