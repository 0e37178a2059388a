//! Ident-range groups of regions

/// Named collection of regions whose ident falls in `[lo, hi]`
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Group name without the run's name suffix
    pub name: String,
    pub lo: i64,
    pub hi: i64,
    /// Region names in the order they were added
    pub members: Vec<String>,
}

impl Group {
    /// Create an empty group over an inclusive ident range
    pub fn new(name: impl Into<String>, lo: i64, hi: i64) -> Self {
        Self {
            name: name.into(),
            lo,
            hi,
            members: Vec::new(),
        }
    }

    /// Check if an ident falls in this group's range
    pub fn contains_ident(&self, ident: i64) -> bool {
        self.lo <= ident && ident <= self.hi
    }

    /// Add a region; a name already present is not added twice
    pub fn add_region(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.members.contains(&name) {
            self.members.push(name);
        }
    }

    /// Get the number of regions in the group
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The fixed table of 21 ident-range groups
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTable {
    groups: Vec<Group>,
}

impl GroupTable {
    /// Number of groups in the table
    pub const SIZE: usize = 21;

    /// Highest ident any group accepts
    pub const MAX_IDENT: i64 = 32767;

    /// Build the standard table: `g00` for ident 0, `g0`..`g9` for
    /// hundreds up to 999, `g10`..`g18` for thousands up to 9999, and
    /// `g19` for 10000..=32767
    pub fn new() -> Self {
        let mut groups = Vec::with_capacity(Self::SIZE);
        groups.push(Group::new("g00", 0, 0));
        groups.push(Group::new("g0", 1, 99));
        for i in 1..10 {
            groups.push(Group::new(format!("g{}", i), i * 100, i * 100 + 99));
        }
        for i in 1..10 {
            groups.push(Group::new(format!("g{}", i + 9), i * 1000, i * 1000 + 999));
        }
        groups.push(Group::new("g19", 10000, Self::MAX_IDENT));
        Self { groups }
    }

    /// Index of the group whose range contains `ident`, scanning from the
    /// end of the table
    pub fn classify(&self, ident: i64) -> Option<usize> {
        self.groups.iter().rposition(|g| g.contains_ident(ident))
    }

    /// Place a region by ident. Returns the group name, or `None` when no
    /// range matches.
    pub fn add_region(&mut self, region_name: &str, ident: i64) -> Option<&str> {
        let index = self.classify(ident)?;
        let group = &mut self.groups[index];
        group.add_region(region_name);
        Some(group.name.as_str())
    }

    /// Iterate over all groups in table order
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Iterate over groups that received at least one region
    pub fn non_empty(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    /// Get a group by name
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new()
    }
}
