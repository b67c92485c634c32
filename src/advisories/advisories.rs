use std::{collections::BTreeMap, fmt::Display};

use super::lookups::{CAUTIONARY_LOOKUP, DEPRECATED_LOOKUP};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Category {
    Deprecated,
    Cautionary,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Deprecated => write!(f, "deprecated"),
            Category::Cautionary => write!(f, "cautionary"),
        }
    }
}

/// One immutable identifier -> message table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisories {
    category: Category,
    entries: BTreeMap<String, String>,
}

impl Advisories {
    pub fn new<I, K, V>(category: Category, entries: I) -> Advisories
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Advisories {
            category,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn deprecated() -> Advisories {
        Advisories::new(
            Category::Deprecated,
            DEPRECATED_LOOKUP.iter().map(|(k, v)| (*k, *v)),
        )
    }

    pub fn cautionary() -> Advisories {
        Advisories::new(
            Category::Cautionary,
            CAUTIONARY_LOOKUP.iter().map(|(k, v)| (*k, *v)),
        )
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn get_entry(&self, identifier: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(identifier)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
