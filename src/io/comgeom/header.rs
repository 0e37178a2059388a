//! Title and control cards

use super::record_reader::Line;
use crate::config::Dialect;
use crate::types::Units;

/// Contents of the title card
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCard {
    pub title: String,
    pub units: Units,
    /// Unit name that was not recognized; `units` fell back to inches
    pub unknown_units: Option<String>,
}

impl TitleCard {
    /// Parse the first deck line
    pub fn parse(line: &Line, dialect: Dialect) -> Self {
        if dialect == Dialect::V1 {
            return Self {
                title: line.text.trim().to_string(),
                units: Units::Inches,
                unknown_units: None,
            };
        }

        let unit_name = line.str(0, 2).to_ascii_lowercase();
        let title = line.str(2, usize::MAX).to_string();
        match Units::from_name(&unit_name) {
            Some(units) => Self {
                title,
                units,
                unknown_units: None,
            },
            None => Self {
                title,
                units: Units::Inches,
                unknown_units: Some(unit_name),
            },
        }
    }
}

/// Declared totals from the control card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlCard {
    pub solid_total: usize,
    pub region_total: usize,
}

impl ControlCard {
    /// Parse the line after the title. Negative totals read as zero.
    pub fn parse(line: &Line, dialect: Dialect) -> Self {
        let width = if dialect == Dialect::V4 { 3 } else { 5 };
        Self {
            solid_total: line.int(0, width).max(0) as usize,
            region_total: line.int(width, width).max(0) as usize,
        }
    }

    /// Whether the card selects the OR-clause region grammar
    pub fn selects_dynamic_regions(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Dynamic => true,
            Dialect::V4 | Dialect::V5 => self.region_total == 0,
            Dialect::V1 => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_units() {
        let card = TitleCard::parse(&Line::new(1, "cmM60 turret   "), Dialect::V5);
        assert_eq!(card.units, Units::Centimeters);
        assert_eq!(card.title, "M60 turret");
        assert!(card.unknown_units.is_none());

        let card = TitleCard::parse(&Line::new(1, "m Bridge"), Dialect::V4);
        assert_eq!(card.units, Units::Meters);
        assert_eq!(card.title, "Bridge");
    }

    #[test]
    fn test_unknown_units_fall_back_to_inches() {
        let card = TitleCard::parse(&Line::new(1, "xyDeck"), Dialect::V5);
        assert_eq!(card.units, Units::Inches);
        assert_eq!(card.unknown_units.as_deref(), Some("xy"));
    }

    #[test]
    fn test_v1_title_is_whole_line() {
        let card = TitleCard::parse(&Line::new(1, "  mm old deck  "), Dialect::V1);
        assert_eq!(card.title, "mm old deck");
        assert_eq!(card.units, Units::Inches);
    }

    #[test]
    fn test_control_card_widths() {
        let v4 = ControlCard::parse(&Line::new(2, " 12  3"), Dialect::V4);
        assert_eq!((v4.solid_total, v4.region_total), (12, 3));

        let v5 = ControlCard::parse(&Line::new(2, "   12    3"), Dialect::V5);
        assert_eq!((v5.solid_total, v5.region_total), (12, 3));
        assert!(!v5.selects_dynamic_regions(Dialect::V5));
    }

    #[test]
    fn test_zero_regions_selects_dynamic_grammar() {
        let card = ControlCard::parse(&Line::new(2, "    3    0"), Dialect::V5);
        assert!(card.selects_dynamic_regions(Dialect::V5));
        assert!(card.selects_dynamic_regions(Dialect::V4));
        assert!(!card.selects_dynamic_regions(Dialect::V1));

        let declared = ControlCard::parse(&Line::new(2, "    3    2"), Dialect::Dynamic);
        assert!(declared.selects_dynamic_regions(Dialect::Dynamic));
    }
}
