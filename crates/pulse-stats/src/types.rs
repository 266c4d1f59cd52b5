use serde::{Deserialize, Serialize};

/// Number of rows in the device performance chart
pub const DEVICE_COUNT: usize = 24;

/// Days sampled per month on the timeline chart
pub const DAYS_PER_MONTH: u8 = 10;

/// Solar Hijri month labels, in calendar order
pub const MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Number of bars on the timeline chart
pub const TIMELINE_LEN: usize = MONTHS.len() * DAYS_PER_MONTH as usize;

/// Provinces listed on the donor chart
pub const DONOR_PROVINCES: [&str; 9] = [
    "Tehran",
    "Khorasan",
    "Tabriz",
    "Ardabil",
    "Kerman",
    "Mazandaran",
    "Sistan",
    "Semnan",
    "Isfahan",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroupRescue {
    pub label: String,
    pub male_count: u32,
    pub female_count: u32,
}

impl AgeGroupRescue {
    pub fn total(&self) -> u32 {
        self.male_count + self.female_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStats {
    pub device_id: String,
    pub operation_minutes: u32,
    pub rescue_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorAmount {
    pub province: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HonorSummary {
    /// One decimal place
    pub shock_count: f64,
    /// One decimal place
    pub heartbeat_count: f64,
    pub saved_lives: u32,
}

/// Bar colouring bucket on the timeline chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn from_value(value: u32) -> Self {
        match value {
            0..=39 => Self::Low,
            40..=74 => Self::Moderate,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub month: String,
    pub month_index: u8,
    pub day: u8,
    pub value: u32,
    pub severity: Severity,
}

/// Every chart's data for one province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceDataset {
    pub rescue_by_age_group: Vec<AgeGroupRescue>,
    pub device_stats: Vec<DeviceStats>,
    pub donors_by_province: Vec<DonorAmount>,
    pub honor_summary: HonorSummary,
    pub timeline_bars: Vec<TimelineBar>,
}

impl ProvinceDataset {
    pub fn total_rescues(&self) -> u32 {
        self.rescue_by_age_group.iter().map(AgeGroupRescue::total).sum()
    }

    pub fn total_donations(&self) -> u32 {
        self.donors_by_province.iter().map(|d| d.amount).sum()
    }

    pub fn timeline_bar(&self, index: usize) -> Option<&TimelineBar> {
        self.timeline_bars.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_value(0), Severity::Low);
        assert_eq!(Severity::from_value(39), Severity::Low);
        assert_eq!(Severity::from_value(40), Severity::Moderate);
        assert_eq!(Severity::from_value(74), Severity::Moderate);
        assert_eq!(Severity::from_value(75), Severity::High);
        assert_eq!(Severity::from_value(100), Severity::High);
    }

    #[test]
    fn test_timeline_len() {
        assert_eq!(TIMELINE_LEN, 120);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }
}
