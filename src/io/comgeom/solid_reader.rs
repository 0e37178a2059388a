//! Solid section reader

use super::record_reader::{DeckReader, Line};
use super::solid_kind::SolidKind;
use super::write_object;
use crate::config::{Dialect, Naming};
use crate::database::Database;
use crate::error::{ComGeomError, Result, SolidError};
use crate::notification::{NotificationCollection, NotificationType};
use crate::primitives::{Arbn, ArbnInput, Ars, Pipe, PrimitiveDefinition};
use crate::types::{Tolerance, Vector3};
use ahash::AHashSet;
use std::io::BufRead;
use tracing::{debug, info};

/// Numeric fields per solid card
const FIELDS_PER_CARD: usize = 6;
/// Width of one numeric field
const FIELD_WIDTH: usize = 10;
/// Column of the first numeric field
const FIRST_FIELD: usize = 10;
/// Largest point, curve or plane count a header may declare
const MAX_COUNT: usize = 1_000_000;

/// Column layout of a solid header card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidLayout {
    pub tag_start: usize,
    pub tag_len: usize,
}

impl SolidLayout {
    pub fn for_dialect(dialect: Dialect) -> Self {
        if dialect.is_legacy_layout() {
            Self {
                tag_start: 3,
                tag_len: 7,
            }
        } else {
            Self {
                tag_start: 5,
                tag_len: 5,
            }
        }
    }

    /// Lower-cased type tag of a header card
    pub fn tag(&self, line: &Line) -> String {
        line.str(self.tag_start, self.tag_len).to_ascii_lowercase()
    }

    /// Whether a line can continue the current payload
    pub fn is_continuation(&self, line: &Line) -> bool {
        line.is_blank_at(self.tag_start, self.tag_len) && !line.is_end()
    }
}

fn card_fields(line: &Line) -> [f64; FIELDS_PER_CARD] {
    std::array::from_fn(|i| line.double(FIRST_FIELD + FIELD_WIDTH * i, FIELD_WIDTH))
}

/// Failure while decoding one solid
#[derive(Debug)]
pub enum DecodeError {
    /// The solid is reported and skipped
    Solid(SolidError),
    /// The run stops
    Fatal(ComGeomError),
}

impl From<SolidError> for DecodeError {
    fn from(e: SolidError) -> Self {
        DecodeError::Solid(e)
    }
}

impl From<ComGeomError> for DecodeError {
    fn from(e: ComGeomError) -> Self {
        DecodeError::Fatal(e)
    }
}

/// Reads the numeric payload of one solid, pulling continuation cards on
/// demand
pub struct PayloadReader<'a, R: BufRead> {
    deck: &'a mut DeckReader<R>,
    layout: SolidLayout,
    card: [f64; FIELDS_PER_CARD],
    next: usize,
    taken: usize,
    context: String,
}

impl<'a, R: BufRead> PayloadReader<'a, R> {
    /// Start at the first field of `header`
    pub fn new(deck: &'a mut DeckReader<R>, layout: SolidLayout, header: &Line, context: String) -> Self {
        Self {
            deck,
            layout,
            card: card_fields(header),
            next: 0,
            taken: 0,
            context,
        }
    }

    /// Total fields consumed so far
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// Read the next `n` fields, continuing onto following cards
    pub fn take(&mut self, n: usize) -> std::result::Result<Vec<f64>, DecodeError> {
        let mut values = Vec::with_capacity(n.min(FIELDS_PER_CARD * 64));
        for remaining in (1..=n).rev() {
            if self.next == FIELDS_PER_CARD {
                self.advance(self.taken + remaining)?;
            }
            values.push(self.card[self.next]);
            self.next += 1;
            self.taken += 1;
        }
        Ok(values)
    }

    /// Read `n` fields starting on a new card; the rest of the current card
    /// is ignored
    pub fn take_fresh(&mut self, n: usize) -> std::result::Result<Vec<f64>, DecodeError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        self.next = FIELDS_PER_CARD;
        self.take(n)
    }

    /// Read `n` points of three fields each, starting on a new card
    pub fn take_points(&mut self, n: usize) -> std::result::Result<Vec<Vector3>, DecodeError> {
        let fields = self.take_fresh(field_total(n, 3)?)?;
        Ok(fields.chunks_exact(3).map(Vector3::from_slice).collect())
    }

    fn advance(&mut self, needed: usize) -> std::result::Result<(), DecodeError> {
        let line = self.deck.next_line()?.ok_or_else(|| ComGeomError::PrematureEof {
            context: self.context.clone(),
            line: self.deck.line_number(),
        })?;
        if !self.layout.is_continuation(&line) {
            self.deck.push_back(line);
            return Err(SolidError::InsufficientFields {
                needed,
                found: self.taken,
            }
            .into());
        }
        self.card = card_fields(&line);
        self.next = 0;
        Ok(())
    }
}

/// Non-negative count from a header field, at most `MAX_COUNT`
fn count(value: f64, what: &str) -> std::result::Result<usize, SolidError> {
    if value < 0.0 || !value.is_finite() {
        return Err(SolidError::InvalidParameter(format!(
            "{} must not be negative, got {}",
            what, value
        )));
    }
    if value > MAX_COUNT as f64 {
        return Err(SolidError::InvalidParameter(format!(
            "{} {} exceeds the limit of {}",
            what, value, MAX_COUNT
        )));
    }
    Ok(value as usize)
}

/// Number of fields in `n` groups of `per` fields
fn field_total(n: usize, per: usize) -> std::result::Result<usize, SolidError> {
    n.checked_mul(per).ok_or_else(|| {
        SolidError::InvalidParameter(format!("{} groups of {} fields overflow", n, per))
    })
}

/// A decoded primitive plus any non-fatal remarks about it
pub struct Decoded {
    pub primitive: PrimitiveDefinition,
    pub remarks: Vec<String>,
}

impl From<PrimitiveDefinition> for Decoded {
    fn from(primitive: PrimitiveDefinition) -> Self {
        Self {
            primitive,
            remarks: Vec::new(),
        }
    }
}

/// Outcome of the solid section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidTable {
    /// Headers processed, failed ones included
    pub processed: usize,
    /// Primitives created in the database
    pub written: usize,
    failed: AHashSet<usize>,
}

impl SolidTable {
    /// Whether solid `index` (deck ordinal, 1-based) was not created
    pub fn is_missing(&self, index: usize) -> bool {
        index == 0 || index > self.processed || self.failed.contains(&index)
    }

    /// Number of solids that were not created
    pub fn failed(&self) -> usize {
        self.failed.len()
    }
}

/// Reads solid cards up to the `end` card
pub struct SolidReader<'a, R: BufRead> {
    deck: &'a mut DeckReader<R>,
    dialect: Dialect,
    layout: SolidLayout,
    naming: &'a Naming,
}

impl<'a, R: BufRead> SolidReader<'a, R> {
    pub fn new(deck: &'a mut DeckReader<R>, dialect: Dialect, naming: &'a Naming) -> Self {
        Self {
            deck,
            dialect,
            layout: SolidLayout::for_dialect(dialect),
            naming,
        }
    }

    /// Read the solid section, creating one primitive per decodable solid
    pub fn read_solids<D: Database>(
        &mut self,
        database: &mut D,
        notifications: &mut NotificationCollection,
    ) -> Result<SolidTable> {
        let mut table = SolidTable::default();

        loop {
            let Some(line) = self.deck.next_line()? else {
                notifications.notify(
                    NotificationType::Warning,
                    "end of input before the solid section end card",
                );
                break;
            };
            let tag = self.layout.tag(&line);
            if tag == "end" || line.is_end() {
                break;
            }
            if tag.is_empty() {
                if !line.is_blank() {
                    notifications.notify_at(
                        NotificationType::Warning,
                        line.number,
                        "stray continuation card skipped",
                    );
                }
                continue;
            }

            table.processed += 1;
            let index = table.processed;
            let name = self.naming.solid(index);
            debug!(solid = %name, tag = %tag, line = line.number, "decoding solid");

            let Some(kind) = SolidKind::from_tag(&tag, self.dialect) else {
                notifications.notify_at(
                    NotificationType::NotSupported,
                    line.number,
                    format!("{}: {}, skipped", name, SolidError::UnknownType(tag)),
                );
                table.failed.insert(index);
                self.skip_continuations()?;
                continue;
            };

            match self.decode(kind, &line, &name) {
                Ok(decoded) => {
                    for remark in decoded.remarks {
                        notifications.notify_at(
                            NotificationType::Warning,
                            line.number,
                            format!("{}: {}", name, remark),
                        );
                    }
                    let created = write_object(
                        database.create_primitive(&name, &decoded.primitive),
                        &name,
                        notifications,
                    )?;
                    if created {
                        table.written += 1;
                    } else {
                        table.failed.insert(index);
                    }
                }
                Err(DecodeError::Solid(e)) => {
                    notifications.notify_at(
                        NotificationType::Error,
                        line.number,
                        format!("{} ({}): {}", name, tag, e),
                    );
                    table.failed.insert(index);
                    self.skip_continuations()?;
                }
                Err(DecodeError::Fatal(e)) => return Err(e),
            }
        }

        info!(
            processed = table.processed,
            written = table.written,
            failed = table.failed(),
            "solid section done"
        );
        Ok(table)
    }

    /// Consume continuation cards left over from a rejected solid
    fn skip_continuations(&mut self) -> Result<()> {
        while let Some(line) = self.deck.next_line()? {
            if !self.layout.is_continuation(&line) {
                self.deck.push_back(line);
                break;
            }
        }
        Ok(())
    }

    fn decode(
        &mut self,
        kind: SolidKind,
        header: &Line,
        name: &str,
    ) -> std::result::Result<Decoded, DecodeError> {
        let context = format!("solid {}", name);
        let mut payload = PayloadReader::new(&mut *self.deck, self.layout, header, context);

        if let Some(n) = kind.fixed_fields() {
            let fields = payload.take(n)?;
            return Ok(kind.reconstruct(&fields)?.into());
        }

        match kind {
            SolidKind::Ars => read_ars(&mut payload),
            SolidKind::Arbn => read_arbn(&mut payload),
            SolidKind::Wir => read_wire(&mut payload),
            _ => Err(SolidError::UnknownType(format!("{:?}", kind)).into()),
        }
    }
}

fn read_ars<R: BufRead>(payload: &mut PayloadReader<'_, R>) -> std::result::Result<Decoded, DecodeError> {
    let header = payload.take(2)?;
    let curve_count = count(header[0], "ars curve count")?;
    let points_per_curve = count(header[1], "ars points per curve")?;

    let mut curves = Vec::with_capacity(curve_count.min(1024));
    for _ in 0..curve_count {
        curves.push(payload.take_points(points_per_curve)?);
    }
    Ok(PrimitiveDefinition::from(Ars::new(curves)?).into())
}

fn read_arbn<R: BufRead>(payload: &mut PayloadReader<'_, R>) -> std::result::Result<Decoded, DecodeError> {
    let header = payload.take(4)?;
    let point_count = count(header[0], "arbn point count")?;
    let triple_count = count(header[1], "arbn vertex-triple plane count")?;
    let equation_count = count(header[2], "arbn plane equation count")?;
    let az_el_count = count(header[3], "arbn az/el plane count")?;

    let points = payload.take_points(point_count)?;
    let vertex_triples = payload
        .take_fresh(field_total(triple_count, 3)?)?
        .chunks_exact(3)
        .map(|c| [c[0] as i64, c[1] as i64, c[2] as i64])
        .collect();
    let equations = payload
        .take_fresh(field_total(equation_count, 4)?)?
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();
    let az_el = payload
        .take_fresh(field_total(az_el_count, 3)?)?
        .chunks_exact(3)
        .map(|c| (c[0], c[1], c[2] as i64))
        .collect();

    let input = ArbnInput {
        points,
        vertex_triples,
        equations,
        az_el,
    };
    let build = Arbn::from_input(&input, &Tolerance::ARBN)?;
    debug!(
        planes = build.arbn.planes.len(),
        vertices = build.vertices.len(),
        "arbn built"
    );
    Ok(Decoded {
        primitive: build.arbn.into(),
        remarks: build.skipped,
    })
}

fn read_wire<R: BufRead>(payload: &mut PayloadReader<'_, R>) -> std::result::Result<Decoded, DecodeError> {
    let header = payload.take(4)?;
    let point_count = count(header[0], "wire point count")?;
    let points = payload.take_points(point_count)?;
    Ok(PrimitiveDefinition::from(Pipe::wire(&points, header[1], header[2], header[3])?).into())
}
