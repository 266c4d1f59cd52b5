//! Mock statistics generators.
//!
//! All draws are inclusive uniform ranges from the caller's RNG, so a seeded
//! RNG reproduces a bundle exactly.

use rand::Rng;

use crate::types::{
    AgeGroupRescue, DeviceStats, DonorAmount, HonorSummary, ProvinceDataset, Severity,
    TimelineBar, DAYS_PER_MONTH, DEVICE_COUNT, DONOR_PROVINCES, MONTHS,
};

/// Age group label with its (male, female) count ranges
struct AgeBand {
    label: &'static str,
    male: (u32, u32),
    female: (u32, u32),
}

const AGE_BANDS: [AgeBand; 5] = [
    AgeBand {
        label: "Child",
        male: (5, 19),
        female: (3, 14),
    },
    AgeBand {
        label: "Teen",
        male: (4, 21),
        female: (2, 15),
    },
    AgeBand {
        label: "Young adult",
        male: (6, 25),
        female: (4, 19),
    },
    AgeBand {
        label: "Middle-aged",
        male: (8, 29),
        female: (5, 22),
    },
    AgeBand {
        label: "Senior",
        male: (3, 14),
        female: (2, 11),
    },
];

pub const OPERATION_MINUTES: (u32, u32) = (20, 99);
pub const DEVICE_RESCUES: (u32, u32) = (10, 59);
pub const DONOR_AMOUNT: (u32, u32) = (100, 599);
pub const SAVED_LIVES: (u32, u32) = (200, 999);
pub const TIMELINE_VALUE: (u32, u32) = (0, 100);
/// Tenths: 1.0 to 6.0
const SHOCK_TENTHS: (u32, u32) = (10, 60);
/// Tenths: 0.5 to 2.5
const HEARTBEAT_TENTHS: (u32, u32) = (5, 25);

fn draw<R: Rng>(rng: &mut R, (low, high): (u32, u32)) -> u32 {
    rng.gen_range(low..=high)
}

pub fn rescue_by_age_group<R: Rng>(rng: &mut R) -> Vec<AgeGroupRescue> {
    AGE_BANDS
        .iter()
        .map(|band| AgeGroupRescue {
            label: band.label.to_string(),
            male_count: draw(rng, band.male),
            female_count: draw(rng, band.female),
        })
        .collect()
}

pub fn device_stats<R: Rng>(rng: &mut R) -> Vec<DeviceStats> {
    (1..=DEVICE_COUNT)
        .map(|i| DeviceStats {
            device_id: format!("Device {}", i),
            operation_minutes: draw(rng, OPERATION_MINUTES),
            rescue_count: draw(rng, DEVICE_RESCUES),
        })
        .collect()
}

pub fn donors_by_province<R: Rng>(rng: &mut R) -> Vec<DonorAmount> {
    DONOR_PROVINCES
        .iter()
        .map(|name| DonorAmount {
            province: (*name).to_string(),
            amount: draw(rng, DONOR_AMOUNT),
        })
        .collect()
}

pub fn honor_summary<R: Rng>(rng: &mut R) -> HonorSummary {
    HonorSummary {
        shock_count: f64::from(draw(rng, SHOCK_TENTHS)) / 10.0,
        heartbeat_count: f64::from(draw(rng, HEARTBEAT_TENTHS)) / 10.0,
        saved_lives: draw(rng, SAVED_LIVES),
    }
}

pub fn timeline_bars<R: Rng>(rng: &mut R) -> Vec<TimelineBar> {
    let mut bars = Vec::with_capacity(MONTHS.len() * DAYS_PER_MONTH as usize);
    for (month_index, month) in MONTHS.iter().enumerate() {
        for day in 1..=DAYS_PER_MONTH {
            let value = draw(rng, TIMELINE_VALUE);
            bars.push(TimelineBar {
                month: (*month).to_string(),
                month_index: month_index as u8,
                day,
                value,
                severity: Severity::from_value(value),
            });
        }
    }
    bars
}

/// Generate a complete bundle for one province.
pub fn province_dataset<R: Rng>(rng: &mut R) -> ProvinceDataset {
    ProvinceDataset {
        rescue_by_age_group: rescue_by_age_group(rng),
        device_stats: device_stats(rng),
        donors_by_province: donors_by_province(rng),
        honor_summary: honor_summary(rng),
        timeline_bars: timeline_bars(rng),
    }
}
