//! COMGEOM deck reader
//!
//! A deck is read in one forward pass: title card, control card, solid
//! section, region section and ident table. Every object is created in the
//! output [`Database`] as soon as it is complete, then the regions are
//! gathered into ident-range groups under a single top assembly.

mod header;
mod record_reader;
mod region_reader;
mod solid_kind;
mod solid_reader;

pub use header::{ControlCard, TitleCard};
pub use record_reader::{field_double, field_int, field_is_blank, field_str, DeckReader, Line};
pub use region_reader::{RegionGrammar, PROVISIONAL_REGION_LIMIT};
pub use solid_kind::SolidKind;
pub use solid_reader::{PayloadReader, SolidLayout};

use region_reader::{finalize_without_idents, Finalized, RegionReader};
use solid_reader::SolidReader;

use crate::config::{ConversionConfiguration, Dialect, Naming};
use crate::csg::{Combination, GroupTable};
use crate::database::Database;
use crate::error::{ComGeomError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Units;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Counts and diagnostics of a finished conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub title: String,
    pub units: Units,
    /// Region grammar the deck was read with
    pub dynamic_regions: bool,
    /// Solid total from the control card
    pub declared_solids: Option<usize>,
    /// Region total from the control card, or the total inferred from the
    /// region section when none was declared
    pub region_limit: usize,
    pub solids_processed: usize,
    pub solids_written: usize,
    pub solids_failed: usize,
    pub regions_written: usize,
    pub aliases: usize,
    pub groups_written: usize,
    /// Whether the top assembly was created
    pub top_written: bool,
    pub notifications: NotificationCollection,
}

/// Apply the duplicate-name policy to a database call: a duplicate is a
/// warning and yields `false`, any other failure stops the run
pub(crate) fn write_object(
    result: Result<()>,
    name: &str,
    notifications: &mut NotificationCollection,
) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(ComGeomError::DuplicateName(_)) => {
            notifications.notify(
                NotificationType::Warning,
                format!("{} already exists in the database, not replaced", name),
            );
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Converts one COMGEOM deck into a CSG database
pub struct ComGeomReader<R: Read> {
    deck: DeckReader<BufReader<R>>,
    config: ConversionConfiguration,
}

impl ComGeomReader<File> {
    /// Open a deck file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ComGeomReader<R> {
    /// Create a new deck reader from any reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            deck: DeckReader::new(BufReader::new(reader)),
            config: ConversionConfiguration::default(),
        }
    }

    /// Set the conversion configuration
    pub fn with_configuration(mut self, config: ConversionConfiguration) -> Self {
        self.deck.set_encoding(config.encoding);
        self.config = config;
        self
    }

    /// Read the whole deck, creating every object in `database`
    pub fn convert<D: Database>(mut self, mut database: D) -> Result<ConversionSummary> {
        let dialect = self.config.dialect;
        let naming = self.config.naming();
        let mut summary = ConversionSummary::default();
        let mut notifications = NotificationCollection::new();

        let title_line = self.deck.next_line()?.ok_or(ComGeomError::EmptyInput)?;
        let title = TitleCard::parse(&title_line, dialect);
        if let Some(unknown) = &title.unknown_units {
            notifications.notify_at(
                NotificationType::Warning,
                title_line.number,
                format!("unknown units '{}', using inches", unknown),
            );
        }
        database.write_header(&title.title, title.units)?;
        info!(title = %title.title, units = %title.units, dialect = %dialect, "converting deck");
        summary.title = title.title;
        summary.units = title.units;

        let control = if dialect.has_control_card() {
            let line = self
                .deck
                .next_line()?
                .ok_or(ComGeomError::MissingControlCard)?;
            let card = ControlCard::parse(&line, dialect);
            debug!(solids = card.solid_total, regions = card.region_total, "control card");
            Some(card)
        } else {
            None
        };
        let grammar = match control {
            Some(card) if card.selects_dynamic_regions(dialect) => {
                if dialect != Dialect::Dynamic {
                    info!("control card declares no regions, reading OR-clause regions");
                }
                RegionGrammar::Dynamic
            }
            _ => RegionGrammar::Positional,
        };
        summary.dynamic_regions = grammar == RegionGrammar::Dynamic;
        summary.declared_solids = control.map(|c| c.solid_total);

        let solids = SolidReader::new(&mut self.deck, dialect, &naming)
            .read_solids(&mut database, &mut notifications)?;
        summary.solids_processed = solids.processed;
        summary.solids_written = solids.written;
        summary.solids_failed = solids.failed();

        if let Some(expected) = summary.declared_solids {
            if solids.processed < expected {
                return Err(ComGeomError::SolidCountMismatch {
                    expected,
                    actual: solids.processed,
                });
            }
            if solids.processed > expected {
                notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "{} solids read, only {} declared",
                        solids.processed, expected
                    ),
                );
            }
        }

        let limit = match control {
            Some(card) if card.region_total > 0 => Some(card.region_total),
            _ => None,
        };
        let mut regions = RegionReader::new(&mut self.deck, dialect, &naming);
        let mut table = regions.read_regions(grammar, limit, &solids, &mut notifications)?;
        summary.region_limit = table.limit();

        let finalized = if dialect.has_ident_table() {
            regions.read_idents(&mut table, &mut notifications)?
        } else {
            finalize_without_idents(&mut table, &naming)
        };

        let mut groups = GroupTable::new();
        for entry in finalized {
            match entry {
                Finalized::Alias(number) => {
                    notifications.notify(
                        NotificationType::Warning,
                        format!("region {} is an alias with no members, not written", number),
                    );
                    summary.aliases += 1;
                }
                Finalized::Region(done) => {
                    for clause in &done.clauses {
                        write_object(
                            database.create_combination(clause),
                            &clause.name,
                            &mut notifications,
                        )?;
                    }
                    let name = done.region.name.clone();
                    let ident = done.region.attributes.id;
                    let region = Combination::from(done.region);
                    if !write_object(database.create_combination(&region), &name, &mut notifications)? {
                        continue;
                    }
                    summary.regions_written += 1;
                    match groups.add_region(&name, ident) {
                        Some(group) => debug!(region = %name, ident, group, "region grouped"),
                        None => notifications.notify(
                            NotificationType::Warning,
                            format!("region {} ident {} matches no group", name, ident),
                        ),
                    }
                }
            }
        }

        let (groups_written, top_written) =
            write_groups(&mut database, &groups, &naming, &mut notifications)?;
        summary.groups_written = groups_written;
        summary.top_written = top_written;
        database.flush()?;

        info!(
            solids = summary.solids_written,
            regions = summary.regions_written,
            groups = summary.groups_written,
            diagnostics = notifications.len(),
            "conversion finished"
        );
        summary.notifications = notifications;
        Ok(summary)
    }
}

/// Write every non-empty group, then the top assembly over the groups
/// that were written
fn write_groups<D: Database>(
    database: &mut D,
    groups: &GroupTable,
    naming: &Naming,
    notifications: &mut NotificationCollection,
) -> Result<(usize, bool)> {
    let mut written = Vec::new();
    for group in groups.non_empty() {
        let name = naming.group(&group.name);
        let comb = Combination::union_of(name.clone(), group.members.iter().cloned());
        if write_object(database.create_combination(&comb), &name, notifications)? {
            written.push(name);
        }
    }

    if written.is_empty() {
        notifications.notify(
            NotificationType::Warning,
            format!("no groups written, top assembly {} skipped", naming.top()),
        );
        return Ok((0, false));
    }

    let count = written.len();
    let top = Combination::union_of(naming.top(), written);
    let top_written = write_object(database.create_combination(&top), &top.name, notifications)?;
    Ok((count, top_written))
}
