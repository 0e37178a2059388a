//! Regions and the builder that accumulates them across membership cards

use super::{Combination, CsgNode, Operator};
use crate::config::Naming;

/// Numeric attributes assigned to a region by the ident table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RegionAttributes {
    /// Region ident, used for group classification
    pub id: i64,
    /// Air code
    pub air: i64,
    /// Material code
    pub material: i64,
    /// Line-of-sight thickness percentage
    pub los: i64,
}

impl RegionAttributes {
    pub fn new(id: i64, air: i64, material: i64, los: i64) -> Self {
        Self {
            id,
            air,
            material,
            los,
        }
    }
}

/// A finished region: immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub number: usize,
    pub name: String,
    pub members: Vec<CsgNode>,
    pub attributes: RegionAttributes,
}

/// A finalized region together with the clause combinations it unions
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedRegion {
    pub region: Region,
    /// Dynamic-grammar clause combinations; written before the region
    pub clauses: Vec<Combination>,
}

/// Accumulates the membership of one region across many cards.
///
/// Positional cards append members directly; dynamic cards build OR
/// clauses. [`RegionBuilder::finalize`] consumes the builder once the
/// attributes are known.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBuilder {
    number: usize,
    members: Vec<CsgNode>,
    clauses: Vec<Vec<CsgNode>>,
}

impl RegionBuilder {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            members: Vec::new(),
            clauses: Vec::new(),
        }
    }

    /// Region number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Append a member; the first member of a region is always a union
    pub fn push(&mut self, op: Operator, name: impl Into<String>) {
        let op = if self.members.is_empty() {
            Operator::Union
        } else {
            op
        };
        self.members.push(CsgNode::new(op, name));
    }

    /// Close the current clause; the next term starts a new one
    pub fn begin_clause(&mut self) {
        if self.clauses.last().map_or(true, |c| !c.is_empty()) {
            self.clauses.push(Vec::new());
        }
    }

    /// Append a term to the current clause.
    ///
    /// The first term of a clause is a union; later terms subtract when
    /// `number` is negative and intersect otherwise.
    pub fn push_clause_term(&mut self, number: i64, name: impl Into<String>) {
        if self.clauses.is_empty() {
            self.clauses.push(Vec::new());
        }
        if let Some(clause) = self.clauses.last_mut() {
            let op = if clause.is_empty() {
                Operator::Union
            } else {
                Operator::from_sign(number)
            };
            clause.push(CsgNode::new(op, name));
        }
    }

    /// Whether no member has been added yet
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.clauses.iter().all(Vec::is_empty)
    }

    /// Finish the region. Returns `None` for an empty region, which the
    /// caller treats as an alias.
    pub fn finalize(self, attributes: RegionAttributes, naming: &Naming) -> Option<FinishedRegion> {
        if self.is_empty() {
            return None;
        }
        let name = naming.region(self.number);

        let clauses: Vec<Combination> = self
            .clauses
            .into_iter()
            .filter(|c| !c.is_empty())
            .enumerate()
            .map(|(k, members)| Combination::new(naming.clause(self.number, k + 1), members))
            .collect();

        let mut members = self.members;
        members.extend(clauses.iter().map(|c| CsgNode::union(c.name.clone())));

        Some(FinishedRegion {
            region: Region {
                number: self.number,
                name,
                members,
                attributes,
            },
            clauses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_member_is_union() {
        let mut b = RegionBuilder::new(1);
        b.push(Operator::Subtract, "s1");
        b.push(Operator::Subtract, "s2");
        let done = b.finalize(RegionAttributes::default(), &Naming::default()).unwrap();
        assert_eq!(done.region.members[0], CsgNode::union("s1"));
        assert_eq!(done.region.members[1], CsgNode::new(Operator::Subtract, "s2"));
        assert!(done.clauses.is_empty());
    }

    #[test]
    fn test_or_clauses() {
        // s1 OR s2 -s3
        let mut b = RegionBuilder::new(7);
        b.push_clause_term(1, "s1");
        b.begin_clause();
        b.push_clause_term(2, "s2");
        b.push_clause_term(-3, "s3");
        let done = b
            .finalize(RegionAttributes::new(100, 0, 1, 50), &Naming::default())
            .unwrap();

        assert_eq!(done.clauses.len(), 2);
        assert_eq!(done.clauses[0].name, "r7c1");
        assert_eq!(done.clauses[0].members, vec![CsgNode::union("s1")]);
        assert_eq!(
            done.clauses[1].members,
            vec![CsgNode::union("s2"), CsgNode::new(Operator::Subtract, "s3")]
        );
        assert_eq!(
            done.region.members,
            vec![CsgNode::union("r7c1"), CsgNode::union("r7c2")]
        );
        assert_eq!(done.region.name, "r7");
        assert_eq!(done.region.attributes.id, 100);
    }

    #[test]
    fn test_empty_region_is_alias() {
        let mut b = RegionBuilder::new(3);
        b.begin_clause();
        assert!(b.is_empty());
        assert!(b.finalize(RegionAttributes::default(), &Naming::default()).is_none());
    }

    #[test]
    fn test_leading_or_does_not_make_empty_clause() {
        let mut b = RegionBuilder::new(2);
        b.begin_clause();
        b.push_clause_term(4, "s4");
        let done = b.finalize(RegionAttributes::default(), &Naming::default()).unwrap();
        assert_eq!(done.clauses.len(), 1);
    }
}
