//! Static schema descriptors for the three entity kinds.
//!
//! Continent, country and region share one structural pattern: an
//! engine-assigned identifier, a set of required columns, a set of nullable
//! columns, and foreign keys pointing at other kinds. Each kind is described
//! once as an [`EntitySchema`] value and every query is rendered from it, so
//! the search and upsert code paths exist exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three record categories stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Continent,
    Country,
    Region,
}

impl EntityKind {
    /// All kinds, in foreign-key dependency order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Continent, EntityKind::Country, EntityKind::Region];

    /// The schema descriptor for this kind.
    pub fn schema(self) -> &'static EntitySchema {
        match self {
            EntityKind::Continent => &CONTINENT,
            EntityKind::Country => &COUNTRY,
            EntityKind::Region => &REGION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Continent => "continent",
            EntityKind::Country => "country",
            EntityKind::Region => "region",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Continent => "continents",
            EntityKind::Country => "countries",
            EntityKind::Region => "regions",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column participates in writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Primary key, assigned by the engine
    Identifier,
    /// Never null
    Required,
    /// Nullable; the empty string is stored as NULL
    Optional,
}

/// A single column of an entity table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub role: ColumnRole,
    /// Kind whose identifier this column must reference, if any.
    pub references: Option<EntityKind>,
}

impl Column {
    pub const fn identifier(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Identifier,
            references: None,
        }
    }

    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Required,
            references: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Optional,
            references: None,
        }
    }

    pub const fn foreign_key(name: &'static str, target: EntityKind) -> Self {
        Self {
            name,
            role: ColumnRole::Required,
            references: Some(target),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.role == ColumnRole::Optional
    }
}

/// Descriptor for one entity table.
///
/// `columns` lists the identifier first, followed by the remaining columns in
/// the positional order rows are mapped in.
#[derive(Debug)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub table: &'static str,
    pub columns: &'static [Column],
    /// Columns a search request may constrain, in request order.
    pub search_fields: &'static [&'static str],
}

pub static CONTINENT: EntitySchema = EntitySchema {
    kind: EntityKind::Continent,
    table: "continent",
    columns: &[
        Column::identifier("continent_id"),
        Column::required("continent_code"),
        Column::required("name"),
    ],
    search_fields: &["continent_code", "name"],
};

pub static COUNTRY: EntitySchema = EntitySchema {
    kind: EntityKind::Country,
    table: "country",
    columns: &[
        Column::identifier("country_id"),
        Column::required("country_code"),
        Column::required("name"),
        Column::foreign_key("continent_id", EntityKind::Continent),
        Column::optional("wikipedia_link"),
        Column::optional("keywords"),
    ],
    search_fields: &["country_code", "name"],
};

pub static REGION: EntitySchema = EntitySchema {
    kind: EntityKind::Region,
    table: "region",
    columns: &[
        Column::identifier("region_id"),
        Column::required("region_code"),
        Column::required("local_code"),
        Column::required("name"),
        Column::foreign_key("continent_id", EntityKind::Continent),
        Column::foreign_key("country_id", EntityKind::Country),
        Column::optional("wikipedia_link"),
        Column::optional("keywords"),
    ],
    search_fields: &["region_code", "local_code", "name"],
};

/// Tables a storage file must contain before the engine will touch it.
pub const REQUIRED_TABLES: [&str; 3] = ["continent", "country", "region"];

impl EntitySchema {
    /// The primary-key column name.
    pub fn id_column(&self) -> &'static str {
        self.columns[0].name
    }

    /// Every column except the identifier, in positional order.
    pub fn data_columns(&self) -> &'static [Column] {
        &self.columns[1..]
    }

    /// Columns carrying a foreign key.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| c.references.is_some())
    }

    pub fn is_search_field(&self, name: &str) -> bool {
        self.search_fields.contains(&name)
    }

    /// Comma-separated list of all columns, identifier first.
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `SELECT <all columns> FROM <table>` without any restriction.
    pub fn select_sql(&self) -> String {
        format!("SELECT {} FROM {}", self.select_list(), self.table)
    }

    /// Point lookup by identifier.
    pub fn select_by_id_sql(&self) -> String {
        format!("{} WHERE {} = ?1", self.select_sql(), self.id_column())
    }

    /// Insert of every column; the identifier is bound as `?1`.
    pub fn insert_sql(&self) -> String {
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.table,
            self.select_list()
        )
    }

    /// Overwrite of every data column; the identifier is bound last.
    pub fn update_sql(&self) -> String {
        let assignments = self
            .data_columns()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ?{}", c.name, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {assignments} WHERE {} = ?{}",
            self.table,
            self.id_column(),
            self.columns.len()
        )
    }

    /// Next free identifier; yields 1 on an empty table.
    pub fn next_id_sql(&self) -> String {
        format!(
            "SELECT COALESCE(MAX({}), 0) + 1 FROM {}",
            self.id_column(),
            self.table
        )
    }
}
