//! Packages and the package lookup table.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Location;

/// A parcel addressed to a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package identifier, e.g. `PKG001`.
    pub id: String,
    /// Where the package must be delivered.
    pub destination: Location,
}

impl Package {
    /// Creates a package.
    pub fn new(id: impl Into<String>, destination: impl Into<Location>) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
        }
    }
}

/// Packages keyed by id, plus the pending destinations in load order.
///
/// Inserting a package whose id is already present replaces the stored
/// package; its previous destination stays pending only if another package
/// still targets it.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Package, PackageTable};
///
/// let mut table = PackageTable::new();
/// table.insert(Package::new("PKG001", "B"));
/// table.insert(Package::new("PKG002", "D"));
/// table.insert(Package::new("PKG003", "B"));
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("PKG002").map(|p| p.destination.code()), Some("D"));
/// let pending = table.pending();
/// let codes: Vec<&str> = pending.iter().map(|l| l.code()).collect();
/// assert_eq!(codes, vec!["B", "D"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    packages: Vec<Package>,
    index: HashMap<String, usize>,
}

impl PackageTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a package, replacing any package with the same id.
    ///
    /// Returns the replaced package, if any.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        match self.index.get(&package.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.packages[slot], package)),
            None => {
                self.index.insert(package.id.clone(), self.packages.len());
                self.packages.push(package);
                None
            }
        }
    }

    /// Looks up a package by id.
    pub fn get(&self, id: &str) -> Option<&Package> {
        self.index.get(id).map(|&slot| &self.packages[slot])
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if the table holds no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    /// Distinct destinations in first-seen order.
    pub fn pending(&self) -> Vec<Location> {
        let mut seen = HashSet::new();
        self.packages
            .iter()
            .map(|p| &p.destination)
            .filter(|&d| seen.insert(d))
            .cloned()
            .collect()
    }

    /// Ids of the packages addressed to `location`, in load order.
    pub fn ids_for(&self, location: &Location) -> Vec<String> {
        self.packages
            .iter()
            .filter(|p| &p.destination == location)
            .map(|p| p.id.clone())
            .collect()
    }
}

impl FromIterator<Package> for PackageTable {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut table = Self::new();
        for p in iter {
            table.insert(p);
        }
        table
    }
}
