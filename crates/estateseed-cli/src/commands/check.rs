use anyhow::Result;

use estateseed_core::generate::generate;
use estateseed_core::{check, EstateSeedError};

use crate::args::{CheckArgs, CheckFormat};
use crate::commands::profile_from;

pub fn run(args: &CheckArgs) -> Result<()> {
    let profile = profile_from(Some(args.seed), args.as_of, args.scale);
    let dataset = generate(&profile);
    let report = check::validate(&dataset, profile.today);

    match args.format {
        CheckFormat::Text => println!("{}", report.summary()),
        CheckFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(EstateSeedError::IntegrityViolations {
            violations: report.violations.len(),
            summary: report.summary(),
        }
        .into())
    }
}
