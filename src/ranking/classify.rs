//! Coarse weather classes over the WMO code table.

/// The classes the activity scorers care about.
///
/// | WMO codes           | Class                |
/// |---------------------|----------------------|
/// | 0–3                 | `ClearOrPartlyCloudy`|
/// | 51–67, 80–99        | `RainOrStorm`        |
/// | 71–77               | `Snow`               |
/// | anything else       | `Other` (fog, ...)   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherClass {
    ClearOrPartlyCloudy,
    RainOrStorm,
    Snow,
    Other,
}

impl WeatherClass {
    pub const fn from_wmo_code(code: i64) -> Self {
        match code {
            0..=3 => Self::ClearOrPartlyCloudy,
            51..=67 | 80..=99 => Self::RainOrStorm,
            71..=77 => Self::Snow,
            _ => Self::Other,
        }
    }

    pub fn is_clear_or_partly_cloudy(self) -> bool {
        self == Self::ClearOrPartlyCloudy
    }

    pub fn is_rain_or_storm(self) -> bool {
        self == Self::RainOrStorm
    }

    pub fn is_snow(self) -> bool {
        self == Self::Snow
    }
}
