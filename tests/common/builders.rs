//! Deck builders for integration tests.
//!
//! [`DeckBuilder`] lays out cards in the column format of the chosen
//! dialect so tests can describe decks by content instead of by column.

#![allow(dead_code)]

use comgeom::Dialect;

/// Assembles a deck line by line.
pub struct DeckBuilder {
    dialect: Dialect,
    lines: Vec<String>,
    printed: usize,
}

fn field(value: f64) -> String {
    let text = value.to_string();
    assert!(text.len() <= 10, "field {text} does not fit in 10 columns");
    format!("{:>10}", text)
}

impl DeckBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            lines: Vec::new(),
            printed: 0,
        }
    }

    fn legacy(&self) -> bool {
        matches!(self.dialect, Dialect::V1 | Dialect::V4)
    }

    /// Title card; `units` is ignored in dialect 1
    pub fn title(mut self, units: &str, title: &str) -> Self {
        let line = if self.dialect == Dialect::V1 {
            title.to_string()
        } else {
            format!("{:<2}{}", units, title)
        };
        self.lines.push(line);
        self
    }

    /// Control card with declared totals
    pub fn control(mut self, solids: usize, regions: usize) -> Self {
        let line = if self.dialect == Dialect::V4 {
            format!("{:>3}{:>3}", solids, regions)
        } else {
            format!("{:>5}{:>5}", solids, regions)
        };
        self.lines.push(line);
        self
    }

    fn header(&self, printed: &str, tag: &str) -> String {
        if self.legacy() {
            format!("{:>3}{:<7}", printed, tag)
        } else {
            format!("{:>5}{:<5}", printed, tag)
        }
    }

    fn push_cards(&mut self, mut first: Option<String>, fields: &[f64]) {
        if fields.is_empty() {
            if let Some(header) = first.take() {
                self.lines.push(header);
            }
            return;
        }
        for chunk in fields.chunks(6) {
            let mut line = first.take().unwrap_or_else(|| " ".repeat(10));
            for v in chunk {
                line.push_str(&field(*v));
            }
            self.lines.push(line);
        }
    }

    /// Solid with an explicit printed number
    pub fn solid_as(mut self, printed: &str, tag: &str, fields: &[f64]) -> Self {
        let header = self.header(printed, tag);
        self.push_cards(Some(header), fields);
        self
    }

    /// Solid numbered in deck order
    pub fn solid(mut self, tag: &str, fields: &[f64]) -> Self {
        self.printed += 1;
        let printed = self.printed.to_string();
        self.solid_as(&printed, tag, fields)
    }

    /// Solid whose header fields are followed by lists that each start on a
    /// fresh card (ars, arbn, wir)
    pub fn solid_lists(mut self, tag: &str, header_fields: &[f64], lists: &[Vec<f64>]) -> Self {
        self.printed += 1;
        let header = self.header(&self.printed.to_string(), tag);
        self.push_cards(Some(header), header_fields);
        for list in lists {
            self.push_cards(None, list);
        }
        self
    }

    /// Unit sphere at `(x, 0, 0)`
    pub fn sphere(self, x: f64) -> Self {
        self.solid("sph", &[x, 0.0, 0.0, 1.0])
    }

    /// Region card(s); continuation cards carry a blank region number.
    /// Each member is `(flag, number)`; flags are ignored in dialects 1/4.
    pub fn region(mut self, number: i64, members: &[(&str, i64)]) -> Self {
        let mut first = true;
        let chunks: Vec<&[(&str, i64)]> = if members.is_empty() {
            vec![members]
        } else {
            members.chunks(9).collect()
        };
        for chunk in chunks {
            let mut line = if first {
                format!("{:>5} ", number)
            } else {
                " ".repeat(6)
            };
            first = false;
            for (flag, n) in chunk {
                if self.legacy() {
                    line.push_str(&format!("{:>7}", n));
                } else {
                    line.push_str(&format!("{:<2}{:>5}", flag, n));
                }
            }
            self.lines.push(line);
        }
        self
    }

    /// Ident table line
    pub fn ident(mut self, region: i64, id: i64, air: i64, material: i64, los: i64) -> Self {
        let width = if self.dialect == Dialect::V4 { 10 } else { 5 };
        let line = [region, id, air, material, los]
            .iter()
            .map(|v| format!("{:>width$}", v, width = width))
            .collect::<String>();
        self.lines.push(line);
        self
    }

    /// `end` card
    pub fn end(self) -> Self {
        self.line("end")
    }

    /// Arbitrary line
    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut deck = self.lines.join("\n");
        deck.push('\n');
        deck
    }
}

/// Single-sphere, single-region deck in dialect 5
pub fn single_sphere_deck(ident: i64) -> String {
    DeckBuilder::new(Dialect::V5)
        .title("in", "single sphere")
        .control(1, 1)
        .sphere(0.0)
        .end()
        .region(1, &[("", 1)])
        .end()
        .ident(1, ident, 0, 1, 100)
        .build()
}
