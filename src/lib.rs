pub mod cli;
pub mod config;
pub mod creds;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod vmanage;

use colored::Colorize;

use crate::cli::Args;
use crate::error::Error;
use crate::models::InterfaceRecord;
use crate::vmanage::VmanageClient;

/// Run the full pipeline: credentials, login, device inventory, per-device
/// interface inventory, ignore-list filter, report files.
///
/// A device whose interface fetch fails is logged and skipped; every other
/// stage failure aborts the run.
pub async fn run(args: Args) -> Result<(), Error> {
    let credential = creds::load_or_create(&args.password_file)?;

    let client = VmanageClient::new(&args.vmanage_address)?;
    let session = client.authenticate(&credential).await?;

    let devices = client.list_devices(&session).await?;
    let device_count = devices.len();

    let mut records: Vec<InterfaceRecord> = Vec::new();
    for (device_num, device) in devices.iter().enumerate() {
        log::info!(
            "Fetching interface information for device {system_ip} ({num} of {device_count})",
            system_ip = device.system_ip,
            num = device_num + 1,
        );
        match client.list_interfaces(&session, device).await {
            Ok(device_records) => records.extend(device_records),
            Err(e) => {
                log::warn!(
                    "{failed} to fetch interfaces for {system_ip}: {e}",
                    failed = "failed".on_red(),
                    system_ip = device.system_ip,
                );
            }
        }
    }

    let records = processing::filter_ignored(records, &args.ignore_list);

    output::write_reports(&records, &args.output_file)?;
    log::info!(
        "Wrote {count} interface rows to {base}.xlsx and {base}.html",
        count = records.len(),
        base = args.output_file,
    );

    Ok(())
}
