//! Service time of a single request
//!
//! The cost of servicing a request from a given head position is the sum of
//! three components:
//!
//! - **Seek**: cylinder distance times the per-track seek time
//! - **Rotational delay**: forward rotation (in sectors) needed to bring the
//!   starting sector under the head; the disk only spins one way
//! - **Transfer**: request length times the per-sector rotation time
//!
//! The platter number does not enter the cost; all heads move in unison.

use super::DriveGeometry;
use crate::workload::Request;

/// Seek component in milliseconds
#[inline]
pub fn seek_time(geometry: &DriveGeometry, head_cylinder: u32, request: &Request) -> f64 {
    f64::from(request.cylinder.abs_diff(head_cylinder)) * geometry.seek_time_per_track()
}

/// Rotational delay component in milliseconds
#[inline]
pub fn rotational_delay(geometry: &DriveGeometry, head_sector: u32, request: &Request) -> f64 {
    // u64 so the wrap-around sum cannot overflow for very wide tracks
    let sectors = u64::from(geometry.sectors_per_track());
    let distance = (u64::from(request.sector) + sectors - u64::from(head_sector) % sectors) % sectors;
    distance as f64 * geometry.rotation_time_per_sector()
}

/// Transfer component in milliseconds
#[inline]
pub fn transfer_time(geometry: &DriveGeometry, request: &Request) -> f64 {
    f64::from(request.length) * geometry.rotation_time_per_sector()
}

/// Total time to service `request` with the head at (`head_cylinder`, `head_sector`)
///
/// Never negative for a valid geometry.
#[inline]
pub fn service_time(geometry: &DriveGeometry, head_cylinder: u32, head_sector: u32, request: &Request) -> f64 {
    seek_time(geometry, head_cylinder, request)
        + rotational_delay(geometry, head_sector, request)
        + transfer_time(geometry, request)
}
