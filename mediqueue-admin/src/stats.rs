//! Bed occupancy summary for the admin overview.

use std::fmt;

use crate::entity::{Bed, BedStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BedStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub reserved: usize,
}

impl BedStats {
    pub fn from_beds<'a>(beds: impl IntoIterator<Item = &'a Bed>) -> Self {
        beds.into_iter().fold(Self::default(), |mut stats, bed| {
            stats.total += 1;
            match bed.status {
                BedStatus::Available => stats.available += 1,
                BedStatus::Occupied => stats.occupied += 1,
                BedStatus::Maintenance => stats.maintenance += 1,
                BedStatus::Reserved => stats.reserved += 1,
            }
            stats
        })
    }

    /// Share of available beds, in percent. Zero when there are no beds.
    pub fn availability(&self) -> f64 {
        percentage(self.available, self.total)
    }

    /// Share of occupied beds, in percent. Zero when there are no beds.
    pub fn occupancy(&self) -> f64 {
        percentage(self.occupied, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

impl fmt::Display for BedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} beds: {} available ({:.1}%), {} occupied ({:.1}%), {} under maintenance, {} reserved",
            self.total,
            self.available,
            self.availability(),
            self.occupied,
            self.occupancy(),
            self.maintenance,
            self.reserved
        )
    }
}
