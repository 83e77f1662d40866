use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use indicatif::{ProgressBar, ProgressStyle};

use estateseed_core::generate::generate;
use estateseed_core::output::{direct, sql};
use estateseed_core::{check, EstateSeedError};

use crate::args::GenerateArgs;
use crate::commands::profile_from;

pub async fn run(args: &GenerateArgs) -> Result<()> {
    let profile = profile_from(args.seed, args.as_of, args.scale);

    // Phase 1: Generate
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{prefix}] {msg}")
            .unwrap(),
    );
    pb.set_prefix("1/3");
    pb.set_message("Generating dataset...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let dataset = generate(&profile);
    let total_rows = dataset.total_rows();
    pb.finish_with_message(format!(
        "Generating dataset... ✓ {} rows (seed {})",
        total_rows, profile.seed
    ));

    // Phase 2: Validate
    if args.skip_validate {
        eprintln!("[2/3] Validation skipped");
    } else {
        let pb2 = ProgressBar::new_spinner();
        pb2.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{prefix}] {msg}")
                .unwrap(),
        );
        pb2.set_prefix("2/3");
        pb2.set_message("Validating integrity...");
        pb2.enable_steady_tick(std::time::Duration::from_millis(100));

        let report = check::validate(&dataset, profile.today);
        if !report.is_clean() {
            pb2.finish_with_message("Validating integrity... ✗");
            return Err(EstateSeedError::IntegrityViolations {
                violations: report.violations.len(),
                summary: report.summary(),
            }
            .into());
        }
        pb2.finish_with_message("Validating integrity... ✓ no violations");
    }

    // Phase 3: Output
    match &args.output {
        Some(path) => {
            let pb3 = ProgressBar::new_spinner();
            pb3.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} [3/3] {msg}")
                    .unwrap(),
            );
            pb3.set_message(format!("Writing SQL dump to {}...", path));
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            sql::write_sql_dump(&dataset, &mut writer)?;
            pb3.finish_with_message(format!("Writing SQL dump to {}... ✓", path));
            eprintln!("\n✓ Wrote {} rows to {}", total_rows, path);
        }
        None => {
            let pb3 = ProgressBar::new(total_rows as u64);
            pb3.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.cyan} [3/3] Seeding database... {bar:40.cyan/dim} {pos}/{len} ({eta})",
                    )
                    .unwrap()
                    .progress_chars("█▓░"),
            );

            direct::seed_database(
                &dataset,
                &args.db,
                Some(&|current, _total| {
                    pb3.set_position(current as u64);
                }),
            )
            .await?;

            pb3.finish_with_message(format!("Seeding database... ✓ ({} rows)", total_rows));
            eprintln!("\n✓ Seeded {} rows into {}", total_rows, args.db);
        }
    }

    print_row_counts(&dataset);
    Ok(())
}

fn print_row_counts(dataset: &estateseed_core::Dataset) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Table", "Rows"]);
    for (name, count) in dataset.row_counts() {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }
    eprintln!("{}", table);
}
