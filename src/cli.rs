//! Command-line arguments.

use clap::Parser;

/// Retrieve device and interface information from a vManage controller and
/// report the public addresses as a spreadsheet plus an HTML table.
#[derive(Parser, Debug)]
#[command(
    name = "vmanage-public-ips",
    version,
    about = "Retrieve public vEdge interface addresses from a vManage controller"
)]
pub struct Args {
    /// The IP address or hostname of the vManage server
    #[arg(short = 'a', long = "vmanage_address")]
    pub vmanage_address: String,

    /// The file to store or retrieve credentials
    #[arg(short = 'p', long = "password_file", default_value = "vManageCreds.txt")]
    pub password_file: String,

    /// The filename for logging
    #[arg(short = 'l', long = "log_file", default_value = "RetrieveCiscoPublicIP.log")]
    pub log_file: String,

    /// Base filename for the output files (omit extension, .xlsx and .html are appended)
    #[arg(short = 'o', long = "output_file", default_value = "CiscoPublicIPs")]
    pub output_file: String,

    /// Interface names to exclude from the report (space separated, e.g. "ge0/0.22 ge0/0.23")
    #[arg(short = 'i', long = "ignore_list", num_args = 1..)]
    pub ignore_list: Vec<String>,
}
