//! Import and export command implementations
//!
//! Import appends the records of another file to the data file; export
//! writes the data file's records to another file. Either side may use a
//! different record format, which makes these the way to convert between
//! the pipe and JSON-lines formats.

use super::shared::{open_station, persist, report_degraded};
use crate::Result;
use crate::app::services::station::Station;
use crate::cli::args::TransferArgs;
use crate::config::Config;
use colored::*;
use tracing::info;

/// Append the records of `args.path` to the data file
pub fn run_import(config: &Config, args: &TransferArgs) -> Result<()> {
    let (mut station, data_path) = open_station(config)?;

    let mut incoming = Station::with_format(args.file_format.unwrap_or(config.format));
    let stats = incoming.load_from_file(&args.path)?;
    report_degraded(&args.path, &stats);

    station.extend(incoming.measurements().iter().cloned());
    persist(&station, &data_path)?;

    info!(
        "Imported {} measurements from {} into {}",
        stats.records_loaded,
        args.path.display(),
        data_path.display()
    );
    println!(
        "{} {} measurement(s) from {}",
        "Imported".green(),
        stats.records_loaded,
        args.path.display()
    );
    Ok(())
}

/// Write the data file's records to `args.path`
pub fn run_export(config: &Config, args: &TransferArgs) -> Result<()> {
    let (station, _data_path) = open_station(config)?;

    let mut outgoing = Station::with_format(args.file_format.unwrap_or(config.format));
    outgoing.extend(station.measurements().iter().cloned());
    let stats = outgoing.save_to_file(&args.path)?;

    println!(
        "{} {} measurement(s) to {}",
        "Exported".green(),
        stats.records_written,
        args.path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::measurement_codec::RecordFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_across_formats() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("measurements.txt");
        let export_path = temp_dir.path().join("export.jsonl");
        fs::write(&data_path, "1.00|2.00|3.00|N|a\n4.00|5.00|6.00|S|b\n").unwrap();
        let config = Config::new().with_data_file(&data_path);

        run_export(
            &config,
            &TransferArgs {
                path: export_path.clone(),
                file_format: Some(RecordFormat::JsonLines),
            },
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&export_path).unwrap().lines().count(), 2);

        run_import(
            &config,
            &TransferArgs {
                path: export_path,
                file_format: Some(RecordFormat::JsonLines),
            },
        )
        .unwrap();

        let content = fs::read_to_string(&data_path).unwrap();
        assert_eq!(
            content,
            "1.00|2.00|3.00|N|a\n4.00|5.00|6.00|S|b\n1.00|2.00|3.00|N|a\n4.00|5.00|6.00|S|b\n"
        );
    }

    #[test]
    fn test_import_missing_file_fails_without_changes() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("measurements.txt");
        fs::write(&data_path, "1.00|2.00|3.00|N|a\n").unwrap();
        let config = Config::new().with_data_file(&data_path);

        let result = run_import(
            &config,
            &TransferArgs {
                path: temp_dir.path().join("missing.txt"),
                file_format: None,
            },
        );

        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(&data_path).unwrap(),
            "1.00|2.00|3.00|N|a\n"
        );
    }
}
