//! Resolution of command-line method arguments into the set of methods to strip.

use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Argument that selects every catalog method when passed on its own.
pub const ALL_KEYWORD: &str = "all";

/// The console methods selected for removal. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: BTreeSet<String>,
}

impl MethodSet {
    /// Build the set from the arguments following the target path.
    ///
    /// A single `all` argument expands to the whole catalog. Anything else is
    /// split on commas and every token is kept verbatim, including names the
    /// catalog does not know; those simply never match a line.
    pub fn resolve<S: AsRef<str>>(args: &[S], catalog: &Catalog) -> Self {
        if let [only] = args {
            if only.as_ref() == ALL_KEYWORD {
                return Self::all(catalog);
            }
        }

        let methods = args
            .iter()
            .flat_map(|arg| arg.as_ref().split(','))
            .map(str::to_string)
            .collect();

        MethodSet { methods }
    }

    pub fn all(catalog: &Catalog) -> Self {
        MethodSet {
            methods: catalog.methods().iter().cloned().collect(),
        }
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Selected method names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    /// Tokens that are not catalog methods
    pub fn unknown<'a>(&'a self, catalog: &'a Catalog) -> Vec<&'a str> {
        self.iter().filter(|m| !catalog.is_catalog_method(m)).collect()
    }
}
