//! Relational mapping declarations and their validation against a live
//! schema snapshot.
//!
//! Each persisted entity declares, once and statically, the table it lives
//! in, its primary key, the column bound to each attribute and the foreign
//! keys that wire it to other entities. At startup the declarations are
//! compared against the schema loaded through the
//! [`SchemaSnapshotRepository`] port; every disagreement is collected and
//! reported together as a [`MappingConfigurationError`].

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::ports::{SchemaSnapshotRepository, SchemaSnapshotRepositoryError};
use crate::domain::{SchemaColumn, SchemaDiagram};

/// Column types used by the mapping, named as PostgreSQL's `format_type`
/// reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Integer,
    Text,
    Date,
    Timestamptz,
}

impl SqlType {
    /// Catalog spelling of the type.
    pub fn catalog_name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Date => "date",
            Self::Timestamptz => "timestamp with time zone",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

/// Binding of one entity attribute to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub attribute: &'static str,
    pub column: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
}

/// How an entity relates to the table its foreign key points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// Owned child; removed together with its owner.
    OwnedBy,
    /// Reference to an independent entity; the target keeps no collection.
    References,
}

/// Foreign-key wiring declared on the referencing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationMapping {
    pub kind: AssociationKind,
    pub foreign_key: &'static str,
    pub referenced_table: &'static str,
    /// Collection on the referenced entity, when navigation is bidirectional.
    pub reverse_collection: Option<&'static str>,
}

/// Full mapping for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMapping {
    pub entity: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnMapping],
    pub associations: &'static [AssociationMapping],
}

impl EntityMapping {
    fn column(&self, name: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|column| column.column == name)
    }
}

/// One disagreement between the mapping and the schema, or inside the
/// mapping itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingMismatch {
    MissingTable {
        entity: &'static str,
        table: &'static str,
    },
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    TypeMismatch {
        table: &'static str,
        column: &'static str,
        expected: SqlType,
        actual: String,
    },
    NullabilityMismatch {
        table: &'static str,
        column: &'static str,
        expected_nullable: bool,
    },
    PrimaryKeyMismatch {
        table: &'static str,
        expected: &'static str,
        actual: Vec<String>,
    },
    MissingForeignKey {
        table: &'static str,
        column: &'static str,
        referenced_table: &'static str,
    },
    UnboundPrimaryKey {
        entity: &'static str,
        column: &'static str,
    },
    UnboundForeignKey {
        entity: &'static str,
        column: &'static str,
    },
    UndeclaredReferencedTable {
        entity: &'static str,
        referenced_table: &'static str,
    },
}

impl fmt::Display for MappingMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTable { entity, table } => {
                write!(f, "table {table} for entity {entity} is missing")
            }
            Self::MissingColumn { table, column } => {
                write!(f, "column {table}.{column} is missing")
            }
            Self::TypeMismatch {
                table,
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {table}.{column} has type {actual}, expected {expected}"
            ),
            Self::NullabilityMismatch {
                table,
                column,
                expected_nullable,
            } => {
                let expected = if *expected_nullable {
                    "nullable"
                } else {
                    "not null"
                };
                write!(f, "column {table}.{column} should be {expected}")
            }
            Self::PrimaryKeyMismatch {
                table,
                expected,
                actual,
            } => write!(
                f,
                "table {table} primary key is [{}], expected [{expected}]",
                actual.join(", ")
            ),
            Self::MissingForeignKey {
                table,
                column,
                referenced_table,
            } => write!(
                f,
                "foreign key {table}.{column} -> {referenced_table} is missing"
            ),
            Self::UnboundPrimaryKey { entity, column } => write!(
                f,
                "entity {entity} declares primary key {column} without a column binding"
            ),
            Self::UnboundForeignKey { entity, column } => write!(
                f,
                "entity {entity} declares foreign key {column} without a column binding"
            ),
            Self::UndeclaredReferencedTable {
                entity,
                referenced_table,
            } => write!(
                f,
                "entity {entity} references table {referenced_table}, which no entity maps"
            ),
        }
    }
}

/// Startup failure raised when the mapping cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingConfigurationError {
    /// The mapping disagrees with the live schema or with itself.
    #[error(
        "relational mapping has {} mismatch(es): {}",
        .mismatches.len(),
        describe(.mismatches)
    )]
    Mismatched { mismatches: Vec<MappingMismatch> },
    /// The schema could not be read.
    #[error(transparent)]
    Snapshot(#[from] SchemaSnapshotRepositoryError),
}

fn describe(mismatches: &[MappingMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Compare `mappings` against `diagram`, returning every mismatch found.
///
/// # Examples
///
/// ```
/// use backend::domain::{
///     ColumnMapping, EntityMapping, MappingMismatch, SchemaDiagram, SqlType,
///     find_mapping_mismatches,
/// };
///
/// const TAGS: EntityMapping = EntityMapping {
///     entity: "Tag",
///     table: "tags",
///     primary_key: "tag_id",
///     columns: &[ColumnMapping {
///         attribute: "id",
///         column: "tag_id",
///         sql_type: SqlType::Integer,
///         nullable: false,
///     }],
///     associations: &[],
/// };
///
/// let mismatches = find_mapping_mismatches(&[TAGS], &SchemaDiagram::default());
/// assert_eq!(
///     mismatches,
///     vec![MappingMismatch::MissingTable { entity: "Tag", table: "tags" }]
/// );
/// ```
pub fn find_mapping_mismatches(
    mappings: &[EntityMapping],
    diagram: &SchemaDiagram,
) -> Vec<MappingMismatch> {
    let mut mismatches = registry_mismatches(mappings);
    for mapping in mappings {
        schema_mismatches(mapping, diagram, &mut mismatches);
    }
    mismatches
}

/// Check `mappings` against `diagram`, failing on any mismatch.
pub fn validate_mappings(
    mappings: &[EntityMapping],
    diagram: &SchemaDiagram,
) -> Result<(), MappingConfigurationError> {
    let mismatches = find_mapping_mismatches(mappings, diagram);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(MappingConfigurationError::Mismatched { mismatches })
    }
}

fn registry_mismatches(mappings: &[EntityMapping]) -> Vec<MappingMismatch> {
    let tables: BTreeSet<&str> = mappings.iter().map(|mapping| mapping.table).collect();
    let mut mismatches = Vec::new();
    for mapping in mappings {
        if mapping.column(mapping.primary_key).is_none() {
            mismatches.push(MappingMismatch::UnboundPrimaryKey {
                entity: mapping.entity,
                column: mapping.primary_key,
            });
        }
        for association in mapping.associations {
            if mapping.column(association.foreign_key).is_none() {
                mismatches.push(MappingMismatch::UnboundForeignKey {
                    entity: mapping.entity,
                    column: association.foreign_key,
                });
            }
            if !tables.contains(association.referenced_table) {
                mismatches.push(MappingMismatch::UndeclaredReferencedTable {
                    entity: mapping.entity,
                    referenced_table: association.referenced_table,
                });
            }
        }
    }
    mismatches
}

fn schema_mismatches(
    mapping: &EntityMapping,
    diagram: &SchemaDiagram,
    mismatches: &mut Vec<MappingMismatch>,
) {
    let Some(table) = diagram.table(mapping.table) else {
        mismatches.push(MappingMismatch::MissingTable {
            entity: mapping.entity,
            table: mapping.table,
        });
        return;
    };

    for column in mapping.columns {
        match table.column(column.column) {
            Some(actual) => column_mismatches(mapping.table, column, actual, mismatches),
            None => mismatches.push(MappingMismatch::MissingColumn {
                table: mapping.table,
                column: column.column,
            }),
        }
    }

    let actual_keys: Vec<String> = table
        .columns
        .iter()
        .filter(|column| column.is_primary_key)
        .map(|column| column.name.clone())
        .collect();
    if actual_keys.as_slice() != [mapping.primary_key] {
        mismatches.push(MappingMismatch::PrimaryKeyMismatch {
            table: mapping.table,
            expected: mapping.primary_key,
            actual: actual_keys,
        });
    }

    for association in mapping.associations {
        if !diagram.has_foreign_key(
            mapping.table,
            association.foreign_key,
            association.referenced_table,
        ) {
            mismatches.push(MappingMismatch::MissingForeignKey {
                table: mapping.table,
                column: association.foreign_key,
                referenced_table: association.referenced_table,
            });
        }
    }
}

fn column_mismatches(
    table: &'static str,
    expected: &ColumnMapping,
    actual: &SchemaColumn,
    mismatches: &mut Vec<MappingMismatch>,
) {
    if actual.data_type != expected.sql_type.catalog_name() {
        mismatches.push(MappingMismatch::TypeMismatch {
            table,
            column: expected.column,
            expected: expected.sql_type,
            actual: actual.data_type.clone(),
        });
    }
    if actual.is_nullable != expected.nullable {
        mismatches.push(MappingMismatch::NullabilityMismatch {
            table,
            column: expected.column,
            expected_nullable: expected.nullable,
        });
    }
}

/// Domain service validating a mapping registry against the live schema.
#[derive(Debug, Clone, Copy)]
pub struct MappingValidationService {
    mappings: &'static [EntityMapping],
}

impl MappingValidationService {
    /// Construct a validator for `mappings`.
    pub fn new(mappings: &'static [EntityMapping]) -> Self {
        Self { mappings }
    }

    /// Load a schema snapshot and check every mapping against it.
    pub fn validate(
        &self,
        repository: &dyn SchemaSnapshotRepository,
    ) -> Result<(), MappingConfigurationError> {
        let diagram = repository.load_schema_diagram()?;
        validate_mappings(self.mappings, &diagram)
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
