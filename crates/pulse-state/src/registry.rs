//! Static city registry and city → province grouping.

use pulse_weather::Coordinate;

/// Province used for any city missing from the grouping table (the capital's).
pub const DEFAULT_PROVINCE: &str = "Tehran";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        coordinate: Coordinate::new(latitude, longitude),
    }
}

/// Cities offered in the picker, in display order.
static CITIES: [City; 20] = [
    city("Tehran", 35.6892, 51.3890),
    city("Mashhad", 36.2605, 59.6168),
    city("Isfahan", 32.6546, 51.6680),
    city("Shiraz", 29.5918, 52.5837),
    city("Tabriz", 38.0800, 46.2919),
    city("Karaj", 35.8400, 50.9391),
    city("Ahvaz", 31.3183, 48.6706),
    city("Qom", 34.6401, 50.8764),
    city("Kermanshah", 34.3142, 47.0650),
    city("Urmia", 37.5527, 45.0761),
    city("Rasht", 37.2808, 49.5832),
    city("Zahedan", 29.4963, 60.8629),
    city("Kerman", 30.2839, 57.0834),
    city("Hamadan", 34.7990, 48.5150),
    city("Yazd", 31.8974, 54.3569),
    city("Ardabil", 38.2498, 48.2933),
    city("Bandar Abbas", 27.1865, 56.2808),
    city("Qazvin", 36.2688, 50.0041),
    city("Sanandaj", 35.3219, 46.9862),
    city("Gorgan", 36.8427, 54.4353),
];

/// (province, capital city)
static PROVINCE_CAPITALS: [(&str, &str); 20] = [
    ("Tehran", "Tehran"),
    ("Khorasan Razavi", "Mashhad"),
    ("Isfahan", "Isfahan"),
    ("Fars", "Shiraz"),
    ("East Azerbaijan", "Tabriz"),
    ("Alborz", "Karaj"),
    ("Khuzestan", "Ahvaz"),
    ("Qom", "Qom"),
    ("Kermanshah", "Kermanshah"),
    ("West Azerbaijan", "Urmia"),
    ("Gilan", "Rasht"),
    ("Sistan and Baluchestan", "Zahedan"),
    ("Kerman", "Kerman"),
    ("Hamadan", "Hamadan"),
    ("Yazd", "Yazd"),
    ("Ardabil", "Ardabil"),
    ("Hormozgan", "Bandar Abbas"),
    ("Qazvin", "Qazvin"),
    ("Kurdistan", "Sanandaj"),
    ("Golestan", "Gorgan"),
];

pub fn cities() -> impl Iterator<Item = &'static City> {
    CITIES.iter()
}

pub fn find(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

pub fn lookup_coordinates(name: &str) -> Option<Coordinate> {
    find(name).map(|c| c.coordinate)
}

/// Province a city belongs to, or [`DEFAULT_PROVINCE`] when unmapped.
pub fn province_of(name: &str) -> &'static str {
    PROVINCE_CAPITALS
        .iter()
        .find(|(_, capital)| *capital == name)
        .map(|(province, _)| *province)
        .unwrap_or(DEFAULT_PROVINCE)
}

pub fn provinces() -> impl Iterator<Item = &'static str> {
    PROVINCE_CAPITALS.iter().map(|(province, _)| *province)
}
