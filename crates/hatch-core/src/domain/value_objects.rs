//! Domain value objects: ServiceCategory, Driver, TemplateKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one defines its string representation and its `FromStr` parser.
//! The only rule that lives here is the driver → template mapping in
//! [`TemplateKind::resolve`], because it is a total function over the two
//! closed enums.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the arm in `TemplateKind::resolve` (the compiler insists)
//! 4. Ship a template for the new kind in `hatch-adapters`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ServiceCategory ──────────────────────────────────────────────────────────

/// What kind of service the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    Generic,
    Database,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [Self::Generic, Self::Database];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Database => "database",
        }
    }

    /// Whether services of this category are backed by a database driver.
    pub const fn needs_driver(self) -> bool {
        matches!(self, Self::Database)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "database" | "db" => Ok(Self::Database),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

// ── Driver ───────────────────────────────────────────────────────────────────

/// A database backend for a database-backed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Memory,
    MongoDb,
    MySql,
    MariaDb,
    NeDb,
    Postgres,
    Sqlite,
    MsSql,
}

impl Driver {
    /// Every driver, in the order they are offered to the user.
    pub const ALL: [Driver; 8] = [
        Self::Memory,
        Self::MongoDb,
        Self::MySql,
        Self::MariaDb,
        Self::NeDb,
        Self::Postgres,
        Self::Sqlite,
        Self::MsSql,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::MongoDb => "mongodb",
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::NeDb => "nedb",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::MsSql => "mssql",
        }
    }

    /// Human-facing name shown in prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Memory => "Memory",
            Self::MongoDb => "MongoDB",
            Self::MySql => "MySQL",
            Self::MariaDb => "MariaDB",
            Self::NeDb => "NeDB",
            Self::Postgres => "PostgreSQL",
            Self::Sqlite => "SQLite",
            Self::MsSql => "SQL Server",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "mysql" => Ok(Self::MySql),
            "mariadb" => Ok(Self::MariaDb),
            "nedb" => Ok(Self::NeDb),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            "mssql" | "sqlserver" => Ok(Self::MsSql),
            other => Err(DomainError::UnknownDriver(other.to_string())),
        }
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// Which service template renders a given service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Generic,
    Memory,
    NeDb,
    Mongoose,
    Sequelize,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        Self::Generic,
        Self::Memory,
        Self::NeDb,
        Self::Mongoose,
        Self::Sequelize,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Memory => "memory",
            Self::NeDb => "nedb",
            Self::Mongoose => "mongoose",
            Self::Sequelize => "sequelize",
        }
    }

    /// Map a (category, driver) pair to the template that renders it.
    ///
    /// Generic services ignore the driver; a database service without a
    /// driver falls back to the generic template.
    pub const fn resolve(category: ServiceCategory, driver: Option<Driver>) -> Self {
        match (category, driver) {
            (ServiceCategory::Generic, _) => Self::Generic,
            (ServiceCategory::Database, None) => Self::Generic,
            (ServiceCategory::Database, Some(driver)) => Self::for_driver(driver),
        }
    }

    pub const fn for_driver(driver: Driver) -> Self {
        match driver {
            Driver::Sqlite | Driver::MsSql | Driver::MySql | Driver::MariaDb | Driver::Postgres => {
                Self::Sequelize
            }
            Driver::MongoDb => Self::Mongoose,
            Driver::Memory => Self::Memory,
            Driver::NeDb => Self::NeDb,
        }
    }

    /// Like [`Self::for_driver`] for untyped input (stored defaults, config
    /// files). Unrecognised names map to [`TemplateKind::Generic`].
    pub fn for_driver_name(name: &str) -> Self {
        name.parse::<Driver>()
            .map(Self::for_driver)
            .unwrap_or(Self::Generic)
    }

    /// Whether services of this kind need a persisted model definition.
    pub const fn requires_model(self) -> bool {
        matches!(self, Self::Mongoose | Self::Sequelize)
    }

    /// One-line description for `hatch templates`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Generic => "Plain service class with stub CRUD methods",
            Self::Memory => "In-memory store (feathers-memory)",
            Self::NeDb => "Embedded NeDB datastore (feathers-nedb)",
            Self::Mongoose => "MongoDB through a Mongoose model (feathers-mongoose)",
            Self::Sequelize => "SQL databases through a Sequelize model (feathers-sequelize)",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "memory" => Ok(Self::Memory),
            "nedb" => Ok(Self::NeDb),
            "mongoose" => Ok(Self::Mongoose),
            "sequelize" => Ok(Self::Sequelize),
            other => Err(DomainError::InvalidTemplate(format!(
                "unknown template kind: {other}"
            ))),
        }
    }
}
