use serde::{Deserialize, Serialize};

/// Display icon for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    #[default]
    Sunny,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShower,
    SnowShower,
    Thunderstorm,
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::RainShower => "rain-shower",
            Self::SnowShower => "snow-shower",
            Self::Thunderstorm => "thunderstorm",
        }
    }

    /// Material Symbols (outlined) glyph name
    pub fn material_name(&self) -> &'static str {
        match self {
            Self::Sunny => "wb_sunny",
            Self::PartlyCloudy => "wb_cloudy",
            Self::Overcast | Self::Fog => "cloud",
            Self::Drizzle | Self::Rain | Self::RainShower => "water_drop",
            Self::Snow | Self::SnowShower => "ac_unit",
            Self::Thunderstorm => "bolt",
        }
    }
}

/// Tint applied to the weather icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IconColor {
    #[default]
    YellowStrong,
    YellowSoft,
    GraySoft,
    GrayMedium,
    BluePale,
    BlueSoft,
    BlueMedium,
    BlueStrong,
    PurpleSoft,
}

impl IconColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YellowStrong => "yellow-strong",
            Self::YellowSoft => "yellow-soft",
            Self::GraySoft => "gray-soft",
            Self::GrayMedium => "gray-medium",
            Self::BluePale => "blue-pale",
            Self::BlueSoft => "blue-soft",
            Self::BlueMedium => "blue-medium",
            Self::BlueStrong => "blue-strong",
            Self::PurpleSoft => "purple-soft",
        }
    }

    /// Utility CSS class used by web renderers
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::YellowStrong => "text-yellow-500",
            Self::YellowSoft => "text-yellow-400",
            Self::GraySoft => "text-gray-400",
            Self::GrayMedium => "text-gray-500",
            Self::BluePale => "text-blue-200",
            Self::BlueSoft => "text-blue-300",
            Self::BlueMedium => "text-blue-400",
            Self::BlueStrong => "text-blue-500",
            Self::PurpleSoft => "text-purple-400",
        }
    }
}

/// Map a WMO weather code to its icon and tint.
/// See: https://open-meteo.com/en/docs#weathervariables
///
/// Total over all integers; unknown codes fall back to sunny.
pub fn icon_for_code(code: i32) -> (WeatherIcon, IconColor) {
    match code {
        0 => (WeatherIcon::Sunny, IconColor::YellowStrong),
        1 | 2 => (WeatherIcon::PartlyCloudy, IconColor::YellowSoft),
        3 => (WeatherIcon::Overcast, IconColor::GraySoft),
        45..=48 => (WeatherIcon::Fog, IconColor::GrayMedium),
        51..=57 => (WeatherIcon::Drizzle, IconColor::BlueSoft),
        61..=67 => (WeatherIcon::Rain, IconColor::BlueMedium),
        71..=77 => (WeatherIcon::Snow, IconColor::BluePale),
        80..=82 => (WeatherIcon::RainShower, IconColor::BlueStrong),
        85..=86 => (WeatherIcon::SnowShower, IconColor::BluePale),
        95..=99 => (WeatherIcon::Thunderstorm, IconColor::PurpleSoft),
        _ => (WeatherIcon::Sunny, IconColor::YellowStrong),
    }
}

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Current conditions as reported by the forecast service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub weather_code: i32,
}

impl CurrentConditions {
    /// Temperature rounded half away from zero
    pub fn rounded_temperature(&self) -> i32 {
        self.temperature.round() as i32
    }
}

/// Display-ready weather state for the selected city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: Option<i32>,
    pub icon: WeatherIcon,
    pub icon_color: IconColor,
    pub loading: bool,
}

impl Default for WeatherSnapshot {
    /// Nothing fetched yet; the widget shows a spinner.
    fn default() -> Self {
        Self {
            temperature: None,
            icon: WeatherIcon::Sunny,
            icon_color: IconColor::YellowStrong,
            loading: true,
        }
    }
}

impl WeatherSnapshot {
    pub fn from_conditions(conditions: &CurrentConditions) -> Self {
        let (icon, icon_color) = icon_for_code(conditions.weather_code);
        Self {
            temperature: Some(conditions.rounded_temperature()),
            icon,
            icon_color,
            loading: false,
        }
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather service returned status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
