//! Region membership cards and the ident table

use super::record_reader::{DeckReader, Line};
use super::solid_reader::SolidTable;
use crate::config::{Dialect, Naming};
use crate::csg::region::FinishedRegion;
use crate::csg::{Operator, RegionAttributes, RegionBuilder};
use crate::error::{ComGeomError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use ahash::RandomState;
use indexmap::IndexMap;
use std::io::BufRead;
use tracing::{debug, info};

/// Region table size while the total is still unknown
pub const PROVISIONAL_REGION_LIMIT: usize = 9999;

const SLOT_COUNT: usize = 9;
const SLOT_WIDTH: usize = 7;
const FIRST_SLOT: usize = 6;

/// Region card grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionGrammar {
    /// One member per slot, `end` closes the section
    Positional,
    /// OR-separated clauses, a negative region number closes the section
    Dynamic,
}

/// One non-empty member slot of a region card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Lower-cased flag, empty when absent
    pub flag: String,
    pub number: i64,
}

/// Member slots of a region card; zero slots are dropped
pub fn parse_slots(line: &Line, dialect: Dialect) -> Vec<Slot> {
    (0..SLOT_COUNT)
        .filter_map(|i| {
            let start = FIRST_SLOT + SLOT_WIDTH * i;
            let slot = if dialect.is_legacy_layout() {
                Slot {
                    flag: String::new(),
                    number: line.int(start, SLOT_WIDTH),
                }
            } else {
                Slot {
                    flag: line.str(start, 2).to_ascii_lowercase(),
                    number: line.int(start + 2, SLOT_WIDTH - 2),
                }
            };
            (slot.number != 0).then_some(slot)
        })
        .collect()
}

/// Parse an ident table line into its region number and attributes
pub fn parse_ident(line: &Line, dialect: Dialect) -> (i64, RegionAttributes) {
    let width = if dialect == Dialect::V4 { 10 } else { 5 };
    let field = |i: usize| line.int(width * i, width);
    (
        field(0),
        RegionAttributes::new(field(1), field(2), field(3), field(4)),
    )
}

/// Result of looking up a region for finalization
#[derive(Debug)]
pub enum Claim {
    /// No membership card named this region
    Unknown,
    /// The region was already finalized
    Finalized,
    Pending(RegionBuilder),
}

/// Region builders by region number, in order of first appearance
#[derive(Debug, Clone)]
pub struct RegionTable {
    limit: usize,
    regions: IndexMap<usize, Option<RegionBuilder>, RandomState>,
}

impl RegionTable {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            regions: IndexMap::default(),
        }
    }

    /// Highest legal region number
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Highest region number that received a membership card
    pub fn highest_number(&self) -> usize {
        self.regions.keys().copied().max().unwrap_or(0)
    }

    fn check_range(&self, number: i64, line: usize) -> Result<usize> {
        if number < 1 || number as u64 > self.limit as u64 {
            return Err(ComGeomError::RegionOutOfRange {
                region: number,
                limit: self.limit,
                line,
            });
        }
        Ok(number as usize)
    }

    fn builder(&mut self, number: usize) -> &mut RegionBuilder {
        self.regions
            .entry(number)
            .or_insert_with(|| Some(RegionBuilder::new(number)))
            .get_or_insert_with(|| RegionBuilder::new(number))
    }

    /// Take a pending region for finalization
    pub fn claim(&mut self, number: usize) -> Claim {
        match self.regions.get_mut(&number) {
            None => Claim::Unknown,
            Some(slot) => slot.take().map_or(Claim::Finalized, Claim::Pending),
        }
    }

    /// Take every region still pending, by region number
    pub fn drain_pending(&mut self) -> Vec<RegionBuilder> {
        let mut pending: Vec<RegionBuilder> =
            self.regions.values_mut().filter_map(Option::take).collect();
        pending.sort_by_key(RegionBuilder::number);
        pending
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// A region leaving the table, in write order
#[derive(Debug)]
pub enum Finalized {
    Region(FinishedRegion),
    /// A region with no members; nothing is written for it
    Alias(usize),
}

/// Reads the region section and the ident table
pub struct RegionReader<'a, R: BufRead> {
    deck: &'a mut DeckReader<R>,
    dialect: Dialect,
    naming: &'a Naming,
}

impl<'a, R: BufRead> RegionReader<'a, R> {
    pub fn new(deck: &'a mut DeckReader<R>, dialect: Dialect, naming: &'a Naming) -> Self {
        Self {
            deck,
            dialect,
            naming,
        }
    }

    /// Read membership cards up to the end of the section.
    ///
    /// `limit` is the declared region total, or `None` when it is unknown.
    /// An undeclared total under the dynamic grammar becomes the highest
    /// region number seen.
    pub fn read_regions(
        &mut self,
        grammar: RegionGrammar,
        limit: Option<usize>,
        solids: &SolidTable,
        notifications: &mut NotificationCollection,
    ) -> Result<RegionTable> {
        let mut table = RegionTable::new(limit.unwrap_or(PROVISIONAL_REGION_LIMIT));
        let mut current: Option<usize> = None;

        loop {
            let Some(line) = self.deck.next_line()? else {
                notifications.notify(
                    NotificationType::Warning,
                    "end of input before the region section end card",
                );
                break;
            };
            if line.is_end() {
                break;
            }
            if line.is_blank() {
                continue;
            }

            let number = line.int(0, 5);
            if number < 0 {
                if grammar == RegionGrammar::Dynamic {
                    break;
                }
                return Err(ComGeomError::InvalidRecord {
                    line: line.number,
                    message: format!("negative region number {}", number),
                });
            }
            if number > 0 {
                let number = table.check_range(number, line.number)?;
                debug!(region = number, line = line.number, "region card");
                current = Some(number);
            }
            let Some(region) = current else {
                return Err(ComGeomError::InvalidRecord {
                    line: line.number,
                    message: "continuation card before the first region".to_string(),
                });
            };

            let builder = table.builder(region);
            for slot in parse_slots(&line, self.dialect) {
                let reference = add_member(builder, &slot, grammar, self.dialect, self.naming);
                if let Some(index) = reference {
                    if solids.is_missing(index) {
                        notifications.notify_at(
                            NotificationType::Warning,
                            line.number,
                            format!(
                                "region {} references solid {} which was not created",
                                self.naming.region(region),
                                self.naming.solid(index)
                            ),
                        );
                    }
                }
            }
        }

        if grammar == RegionGrammar::Dynamic && limit.is_none() {
            table.limit = table.highest_number();
        }
        info!(regions = table.len(), limit = table.limit(), "region section done");
        Ok(table)
    }

    /// Read the ident table, finalizing regions in table order.
    ///
    /// Regions with membership but no ident line are reported and dropped.
    pub fn read_idents(
        &mut self,
        table: &mut RegionTable,
        notifications: &mut NotificationCollection,
    ) -> Result<Vec<Finalized>> {
        let mut finalized = Vec::new();

        while let Some(line) = self.deck.next_line()? {
            if line.is_blank() {
                break;
            }
            let (number, attributes) = parse_ident(&line, self.dialect);
            let number = table.check_range(number, line.number)?;
            match table.claim(number) {
                Claim::Unknown => notifications.notify_at(
                    NotificationType::Warning,
                    line.number,
                    format!("ident for region {} which has no members", number),
                ),
                Claim::Finalized => notifications.notify_at(
                    NotificationType::Warning,
                    line.number,
                    format!("duplicate ident for region {}", number),
                ),
                Claim::Pending(builder) => {
                    finalized.push(finalize(builder, attributes, self.naming));
                }
            }
        }

        for builder in table.drain_pending() {
            notifications.notify(
                NotificationType::Warning,
                format!(
                    "region {} has no ident entry, not written",
                    self.naming.region(builder.number())
                ),
            );
        }
        Ok(finalized)
    }
}

/// Finalize every pending region with zero attributes
pub fn finalize_without_idents(table: &mut RegionTable, naming: &Naming) -> Vec<Finalized> {
    table
        .drain_pending()
        .into_iter()
        .map(|builder| finalize(builder, RegionAttributes::default(), naming))
        .collect()
}

fn finalize(builder: RegionBuilder, attributes: RegionAttributes, naming: &Naming) -> Finalized {
    let number = builder.number();
    match builder.finalize(attributes, naming) {
        Some(done) => Finalized::Region(done),
        None => Finalized::Alias(number),
    }
}

/// Add one slot to a region. Returns the solid index the member refers to,
/// if it refers to a solid.
fn add_member(
    builder: &mut RegionBuilder,
    slot: &Slot,
    grammar: RegionGrammar,
    dialect: Dialect,
    naming: &Naming,
) -> Option<usize> {
    let index = slot.number.unsigned_abs() as usize;

    if grammar == RegionGrammar::Dynamic {
        if slot.flag == "or" {
            builder.begin_clause();
        }
        builder.push_clause_term(slot.number, naming.solid(index));
        return Some(index);
    }

    match (dialect, slot.flag.as_str()) {
        (Dialect::V5, "or") => {
            builder.push(Operator::Union, naming.solid(index));
            Some(index)
        }
        (Dialect::V5, "rg") => {
            builder.push(Operator::from_sign(slot.number), naming.region(index));
            None
        }
        _ => {
            builder.push(Operator::from_sign(slot.number), naming.solid(index));
            Some(index)
        }
    }
}
