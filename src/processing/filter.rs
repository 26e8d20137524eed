//! Ignore-list filtering.

use crate::models::InterfaceRecord;

/// Drop records whose interface name appears on the ignore list.
///
/// Matching is exact and case-sensitive, no glob or prefix semantics, and the
/// input order is preserved.
pub fn filter_ignored(
    records: Vec<InterfaceRecord>,
    ignore_list: &[String],
) -> Vec<InterfaceRecord> {
    records
        .into_iter()
        .filter(|record| {
            if ignore_list.iter().any(|name| name == &record.ifname) {
                log::info!(
                    "\t{ifname} on {system_ip} is in the ignore list. Skipping.",
                    ifname = record.ifname,
                    system_ip = record.system_ip,
                );
                false
            } else {
                true
            }
        })
        .collect()
}
