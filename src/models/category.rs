//! Category mapping model
//!
//! An ordered list of categories, each with the keywords that select it.
//! Declaration order is match priority, so the mapping is a `Vec` and
//! (de)serializes through map access in document order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category assigned when no keyword matches
pub const UNCATEGORIZED: &str = "uncategorized";

/// A category and its keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Category name
    pub name: String,

    // Keywords as configured, and their uppercased copies at the same index.
    // Both are fixed at construction.
    keywords: Vec<String>,
    upper_keywords: Vec<String>,
}

impl CategoryRule {
    /// Create a rule from a name and keyword list
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        let upper_keywords = keywords.iter().map(|k| k.to_uppercase()).collect();
        Self {
            name: name.into(),
            keywords,
            upper_keywords,
        }
    }

    /// Keywords as configured (matched case-insensitively)
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The first keyword contained in an already-uppercased description
    pub fn matching_keyword(&self, upper_description: &str) -> Option<&str> {
        self.upper_keywords
            .iter()
            .position(|k| upper_description.contains(k.as_str()))
            .map(|i| self.keywords[i].as_str())
    }

    /// Check whether any keyword occurs in an already-uppercased description
    pub fn matches(&self, upper_description: &str) -> bool {
        self.matching_keyword(upper_description).is_some()
    }
}

/// Ordered category -> keywords configuration
///
/// Immutable once built; share it by reference between classifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    rules: Vec<CategoryRule>,
}

impl CategoryMapping {
    /// Build a mapping from rules in priority order
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in priority order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Look up a rule by category name
    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for CategoryMapping {
    /// The built-in mapping for Finnish merchants
    fn default() -> Self {
        let table: [(&str, &[&str]); 6] = [
            (
                "food",
                &[
                    "LIDL", "K-MARKET", "K MARKET", "S-MARKET", "ALEPA", "PRISMA",
                    "CITYMARKET", "SALE", "TOKMANNI", "RUOHONJUURI",
                ],
            ),
            (
                "transport",
                &[
                    "HSL", "VR", "FINNAIR", "NORWEGIAN", "TAXI", "TAKSI", "UBER", "BOLT.EU",
                    "VANTAAN TAKSI", "LÄHITAKSI",
                ],
            ),
            (
                "utilities",
                &[
                    "HELEN", "VANTAAN ENERGIA", "CARUNA", "HSY", "DNA OYJ", "ELISA", "TELIA",
                    "FORTUM",
                ],
            ),
            (
                "entertainment",
                &[
                    "NETFLIX", "SPOTIFY", "HBO", "ELOKUVA", "FINNKINO", "ZYNGA", "STEAM",
                    "SUPERCELL", "NINTENDO", "PLAYSTATION",
                ],
            ),
            (
                "health",
                &[
                    "APTEEKKI", "YLIOPISTON APTEEKKI", "MEHILÄINEN", "TERVEYSTALO", "AAVA",
                    "HAMMASLÄÄKÄRI", "FYSIOS", "HOITO",
                ],
            ),
            (
                "rent",
                &[
                    "VUOKRA", "VUOKRANANTAJA", "SATO", "LUMO", "KOJAMO", "ASUNTO OY", "RENTAL",
                    "MAANVUOKRA",
                ],
            ),
        ];

        Self::new(
            table
                .iter()
                .map(|(name, keywords)| CategoryRule::new(*name, keywords.iter().copied()))
                .collect(),
        )
    }
}

impl Serialize for CategoryMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.name, &rule.keywords)?;
        }
        map.end()
    }
}

struct CategoryMappingVisitor;

impl<'de> Visitor<'de> for CategoryMappingVisitor {
    type Value = CategoryMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of category names to lists of keywords")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut rules: Vec<CategoryRule> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, keywords)) = access.next_entry::<String, Vec<String>>()? {
            if rules.iter().any(|r| r.name == name) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate category '{}'",
                    name
                )));
            }
            rules.push(CategoryRule::new(name, keywords));
        }
        Ok(CategoryMapping::new(rules))
    }
}

impl<'de> Deserialize<'de> for CategoryMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryMappingVisitor)
    }
}
