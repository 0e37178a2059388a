//! Length units named on a deck's title card

use std::fmt;

/// Length unit of a deck
///
/// Geometry is carried in deck units; the unit is recorded in the output
/// database header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Inches (the only unit of dialect 1 decks)
    #[default]
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    Meters,
}

impl Units {
    /// Parse a unit name from the title card (`in`, `ft`, `mm`, `cm`, `m`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Units::Inches),
            "ft" => Some(Units::Feet),
            "mm" => Some(Units::Millimeters),
            "cm" => Some(Units::Centimeters),
            "m" => Some(Units::Meters),
            _ => None,
        }
    }

    /// Short name as written to the database
    pub fn name(&self) -> &'static str {
        match self {
            Units::Inches => "in",
            Units::Feet => "ft",
            Units::Millimeters => "mm",
            Units::Centimeters => "cm",
            Units::Meters => "m",
        }
    }

    /// Size of one unit in millimeters
    pub fn millimeters(&self) -> f64 {
        match self {
            Units::Inches => 25.4,
            Units::Feet => 304.8,
            Units::Millimeters => 1.0,
            Units::Centimeters => 10.0,
            Units::Meters => 1000.0,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Units::from_name("in"), Some(Units::Inches));
        assert_eq!(Units::from_name("MM"), Some(Units::Millimeters));
        assert_eq!(Units::from_name("m "), Some(Units::Meters));
        assert_eq!(Units::from_name("yd"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for u in [Units::Inches, Units::Feet, Units::Millimeters, Units::Centimeters, Units::Meters] {
            assert_eq!(Units::from_name(u.name()), Some(u));
        }
        assert_eq!(Units::Feet.millimeters(), 304.8);
    }
}
