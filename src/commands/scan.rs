//! Scan command implementation

use crate::cli::{OutputFormat, ScanArgs};
use crate::config::Settings;
use crate::models::ScanOutcome;
use crate::output;
use crate::scanner::{find_certificates, EndDateSource, NativeEndDate, OpensslEndDate};

/// Run the scan command.
///
/// Per-file failures are reported and never abort the scan; the command
/// only fails for fatal problems such as a missing root directory.
pub fn run_scan(args: &ScanArgs, settings: &Settings, quiet: bool) -> anyhow::Result<()> {
    let suffix = args
        .suffix
        .clone()
        .unwrap_or_else(|| settings.scanner.suffix.clone());

    let source: Box<dyn EndDateSource> = if args.use_tool || args.tool.is_some() {
        let program = args
            .tool
            .clone()
            .unwrap_or_else(|| settings.scanner.tool.clone());
        Box::new(OpensslEndDate::new(program))
    } else {
        Box::new(NativeEndDate)
    };

    let files = find_certificates(&args.directory, &suffix)?;

    let show_progress = !quiet && args.format == OutputFormat::Plain && files.len() > 1;
    let pb = show_progress.then(|| output::create_progress_bar(files.len() as u64, "Checking"));

    let outcomes: Vec<ScanOutcome> = files
        .into_iter()
        .map(|path| {
            let result = source.end_date(&path);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            ScanOutcome { path, result }
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match args.format {
        OutputFormat::Json => output::print_json(&outcomes)?,
        OutputFormat::Plain => {
            for outcome in &outcomes {
                output::print_scan_outcome(outcome, settings.output.expiry_warning_days);
            }
            if !quiet {
                let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
                output::print_scan_summary(outcomes.len(), failed);
            }
        }
    }

    Ok(())
}
