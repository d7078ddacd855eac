//! Game-content catalog tables and the search repository trait.
//!
//! Each table has a fixed list of searchable columns. Only these names are
//! ever interpolated into SQL; search input is always bound as a parameter.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// One database row rendered as a JSON object.
pub type EntityRecord = serde_json::Value;

/// The searchable game-content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTable {
    Equipment,
    ArmorShields,
    Consumables,
    Weapons,
    Monsters,
    Spells,
    MagicItems,
}

impl CatalogTable {
    pub const ALL: [CatalogTable; 7] = [
        CatalogTable::Equipment,
        CatalogTable::ArmorShields,
        CatalogTable::Consumables,
        CatalogTable::Weapons,
        CatalogTable::Monsters,
        CatalogTable::Spells,
        CatalogTable::MagicItems,
    ];

    /// Database table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            CatalogTable::Equipment => "equipment",
            CatalogTable::ArmorShields => "armor_shields",
            CatalogTable::Consumables => "consumables",
            CatalogTable::Weapons => "weapons",
            CatalogTable::Monsters => "monsters",
            CatalogTable::Spells => "spells",
            CatalogTable::MagicItems => "magic_items",
        }
    }

    /// URL path segment.
    pub fn slug(&self) -> &'static str {
        match self {
            CatalogTable::Equipment => "equipment",
            CatalogTable::ArmorShields => "armor",
            CatalogTable::Consumables => "consumables",
            CatalogTable::Weapons => "weapons",
            CatalogTable::Monsters => "monsters",
            CatalogTable::Spells => "spells",
            CatalogTable::MagicItems => "magic-items",
        }
    }

    /// Columns matched by a catalog search.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            CatalogTable::Equipment => &[
                "id", "name", "type", "description", "weight", "cost", "tags",
            ],
            CatalogTable::ArmorShields => &[
                "id", "type", "name", "AC", "strength", "stealth", "weight", "cost",
                "don_time", "doff_time",
            ],
            CatalogTable::Consumables => &[
                "id", "name", "effect", "duration", "value", "uses", "restores", "rarity",
            ],
            CatalogTable::Weapons => &[
                "id", "name", "type", "cost", "damage", "weight", "properties",
            ],
            CatalogTable::Monsters => &[
                "id",
                "name",
                "size",
                "type",
                "alignment",
                "armor_class",
                "armor_type",
                "hit_points",
                "hit_dice",
                "hit_points_roll",
                "speed_walk",
                "strength",
                "dexterity",
                "constitution",
                "intelligence",
                "wisdom",
                "charisma",
                "saving_throws",
                "damage_vulnerabilities",
                "damage_resistances",
                "damage_immunities",
                "condition_immunities",
                "darkvision",
                "passive_perception",
                "languages",
                "challenge_rating",
                "proficiency_bonus",
                "xp",
                "special_abilities",
                "actions",
                "legendary_actions",
                "image_url",
            ],
            CatalogTable::Spells => &[
                "id",
                "name",
                "level",
                "school",
                "casting_time",
                "range",
                "duration",
                "description",
                "components",
                "concentration",
                "ritual",
                "attack_type",
                "damage",
                "higher_level",
                "classes",
                "subclasses",
            ],
            CatalogTable::MagicItems => &[
                "id", "name", "category", "rarity", "description", "image_url",
            ],
        }
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for CatalogTable {
    type Err = AppError;

    /// Accepts either the URL slug or the table name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|table| table.slug() == wanted || table.table_name() == wanted)
            .ok_or_else(|| AppError::NotFound(format!("Unknown catalog table: {}", s)))
    }
}

/// Normalized catalog search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// Input that parsed as an integer; matches columns equal to it
    Number(i64),

    /// Lower-cased text; matches columns containing it
    Text(String),
}

impl SearchTerm {
    /// Derive a search term from raw user input.
    ///
    /// Surrounding whitespace is dropped. Integers become [`SearchTerm::Number`],
    /// anything else becomes lower-cased [`SearchTerm::Text`].
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Search query must not be empty".into()));
        }

        Ok(match trimmed.parse::<i64>() {
            Ok(number) => SearchTerm::Number(number),
            Err(_) => SearchTerm::Text(trimmed.to_lowercase()),
        })
    }

    /// Bind value for the SQL predicate.
    ///
    /// Numbers compare as their decimal text. Text becomes an `ILIKE`
    /// pattern with `\`, `%` and `_` escaped so they match literally.
    pub fn sql_pattern(&self) -> String {
        match self {
            SearchTerm::Number(number) => number.to_string(),
            SearchTerm::Text(text) => {
                let mut escaped = String::with_capacity(text.len() + 2);
                escaped.push('%');
                for ch in text.chars() {
                    if matches!(ch, '\\' | '%' | '_') {
                        escaped.push('\\');
                    }
                    escaped.push(ch);
                }
                escaped.push('%');
                escaped
            }
        }
    }
}

/// Repository trait for catalog searches.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find the first row (by id) of `table` where any searchable column
    /// satisfies `term`.
    async fn search(
        &self,
        table: CatalogTable,
        term: &SearchTerm,
    ) -> Result<Option<EntityRecord>, AppError>;
}
