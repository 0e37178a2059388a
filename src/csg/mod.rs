//! CSG tree types: boolean members, combinations, regions and groups

use std::fmt;

pub mod group;
pub mod region;

pub use group::{Group, GroupTable};
pub use region::{Region, RegionAttributes, RegionBuilder};

/// Boolean operator applied to a combination member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Union,
    Intersect,
    Subtract,
}

impl Operator {
    /// Single-character database symbol
    pub fn symbol(&self) -> char {
        match self {
            Operator::Union => 'u',
            Operator::Intersect => '+',
            Operator::Subtract => '-',
        }
    }

    /// Operator for a later term of a chain: negative numbers subtract,
    /// positive numbers intersect
    pub fn from_sign(number: i64) -> Self {
        if number < 0 {
            Operator::Subtract
        } else {
            Operator::Intersect
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One member of a combination: an operator and the name it applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CsgNode {
    pub op: Operator,
    pub name: String,
}

impl CsgNode {
    pub fn new(op: Operator, name: impl Into<String>) -> Self {
        Self {
            op,
            name: name.into(),
        }
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self::new(Operator::Union, name)
    }
}

impl fmt::Display for CsgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.name)
    }
}

/// A named boolean combination, as handed to the output database
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub name: String,
    pub members: Vec<CsgNode>,
    /// Whether the combination is a region (a material-carrying leaf)
    pub is_region: bool,
    pub attributes: Option<RegionAttributes>,
}

impl Combination {
    /// Plain (non-region) combination
    pub fn new(name: impl Into<String>, members: Vec<CsgNode>) -> Self {
        Self {
            name: name.into(),
            members,
            is_region: false,
            attributes: None,
        }
    }

    /// Union of the given names
    pub fn union_of<I, S>(name: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, names.into_iter().map(CsgNode::union).collect())
    }

    /// Member names in order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }
}

impl From<Region> for Combination {
    fn from(region: Region) -> Self {
        Self {
            name: region.name,
            members: region.members,
            is_region: true,
            attributes: Some(region.attributes),
        }
    }
}
