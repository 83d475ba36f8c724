//! Live schema introspection over the PostgreSQL system catalogs.
//!
//! Used at startup and by the `schema-check` binary to compare the mapping
//! registry with the tables the migrations actually created. Runs on a
//! blocking `postgres::Client`; async callers wrap it in `spawn_blocking`.

use std::collections::BTreeMap;

use postgres::{Client, NoTls};

use crate::domain::ports::{SchemaSnapshotRepository, SchemaSnapshotRepositoryError};
use crate::domain::{SchemaColumn, SchemaDiagram, SchemaRelationship, SchemaTable};

/// Diesel's own bookkeeping table, never part of the mapped model.
const MIGRATIONS_TABLE: &str = "__diesel_schema_migrations";

const TABLES_SQL: &str = concat!(
    "SELECT cls.relname AS table_name ",
    "FROM pg_catalog.pg_class cls ",
    "JOIN pg_catalog.pg_namespace ns ON ns.oid = cls.relnamespace ",
    "WHERE ns.nspname = 'public' ",
    "  AND cls.relkind IN ('r', 'p') ",
    "ORDER BY cls.relname"
);

const COLUMNS_SQL: &str = concat!(
    "SELECT ",
    "  cls.relname AS table_name, ",
    "  attr.attname AS column_name, ",
    "  pg_catalog.format_type(attr.atttypid, attr.atttypmod) AS data_type, ",
    "  NOT attr.attnotnull AS is_nullable, ",
    "  EXISTS (",
    "    SELECT 1 FROM pg_catalog.pg_index idx ",
    "    WHERE idx.indrelid = cls.oid ",
    "      AND idx.indisprimary ",
    "      AND attr.attnum = ANY(idx.indkey)",
    "  ) AS is_primary_key ",
    "FROM pg_catalog.pg_attribute attr ",
    "JOIN pg_catalog.pg_class cls ON cls.oid = attr.attrelid ",
    "JOIN pg_catalog.pg_namespace ns ON ns.oid = cls.relnamespace ",
    "WHERE ns.nspname = 'public' ",
    "  AND cls.relkind IN ('r', 'p') ",
    "  AND attr.attnum > 0 ",
    "  AND NOT attr.attisdropped ",
    "ORDER BY cls.relname, attr.attnum"
);

const FOREIGN_KEYS_SQL: &str = concat!(
    "SELECT ",
    "  source.relname AS referencing_table, ",
    "  source_attr.attname AS referencing_column, ",
    "  target.relname AS referenced_table, ",
    "  target_attr.attname AS referenced_column, ",
    "  NOT source_attr.attnotnull AS referencing_is_nullable ",
    "FROM pg_catalog.pg_constraint con ",
    "JOIN pg_catalog.pg_class source ON source.oid = con.conrelid ",
    "JOIN pg_catalog.pg_namespace source_ns ON source_ns.oid = source.relnamespace ",
    "JOIN pg_catalog.pg_class target ON target.oid = con.confrelid ",
    "JOIN unnest(con.conkey) WITH ORDINALITY AS source_key(attnum, ord) ON TRUE ",
    "JOIN unnest(con.confkey) WITH ORDINALITY AS target_key(attnum, ord) ",
    "  ON source_key.ord = target_key.ord ",
    "JOIN pg_catalog.pg_attribute source_attr ",
    "  ON source_attr.attrelid = source.oid AND source_attr.attnum = source_key.attnum ",
    "JOIN pg_catalog.pg_attribute target_attr ",
    "  ON target_attr.attrelid = target.oid AND target_attr.attnum = target_key.attnum ",
    "WHERE con.contype = 'f' ",
    "  AND source_ns.nspname = 'public' ",
    "ORDER BY source.relname, source_attr.attname, con.conname"
);

/// Reads schema metadata from PostgreSQL system catalogs.
#[derive(Debug, Clone)]
pub struct PostgresSchemaSnapshotRepository {
    database_url: String,
}

impl PostgresSchemaSnapshotRepository {
    /// Construct a repository from a PostgreSQL connection URL.
    ///
    /// ```rust
    /// use backend::outbound::persistence::PostgresSchemaSnapshotRepository;
    ///
    /// let repository =
    ///     PostgresSchemaSnapshotRepository::new("postgres://trucks@localhost/directory");
    /// let _ = repository;
    /// ```
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

impl SchemaSnapshotRepository for PostgresSchemaSnapshotRepository {
    fn load_schema_diagram(&self) -> Result<SchemaDiagram, SchemaSnapshotRepositoryError> {
        let mut client = Client::connect(self.database_url.as_str(), NoTls)
            .map_err(|error| SchemaSnapshotRepositoryError::connection(error.to_string()))?;

        let tables: Vec<String> = query(&mut client, TABLES_SQL)?
            .into_iter()
            .map(|row| row.get("table_name"))
            .collect();

        let columns = query(&mut client, COLUMNS_SQL)?
            .into_iter()
            .map(|row| {
                (
                    row.get("table_name"),
                    SchemaColumn {
                        name: row.get("column_name"),
                        data_type: row.get("data_type"),
                        is_primary_key: row.get("is_primary_key"),
                        is_nullable: row.get("is_nullable"),
                    },
                )
            })
            .collect();

        let relationships = query(&mut client, FOREIGN_KEYS_SQL)?
            .into_iter()
            .map(|row| SchemaRelationship {
                referencing_table: row.get("referencing_table"),
                referencing_column: row.get("referencing_column"),
                referenced_table: row.get("referenced_table"),
                referenced_column: row.get("referenced_column"),
                referencing_is_nullable: row.get("referencing_is_nullable"),
            })
            .collect();

        Ok(assemble_diagram(tables, columns, relationships))
    }
}

fn query(
    client: &mut Client,
    sql: &str,
) -> Result<Vec<postgres::Row>, SchemaSnapshotRepositoryError> {
    client
        .query(sql, &[])
        .map_err(|error| SchemaSnapshotRepositoryError::query(error.to_string()))
}

/// Group catalog rows into a diagram, dropping the migrations table.
fn assemble_diagram(
    tables: Vec<String>,
    columns: Vec<(String, SchemaColumn)>,
    relationships: Vec<SchemaRelationship>,
) -> SchemaDiagram {
    let mut columns_by_table: BTreeMap<String, Vec<SchemaColumn>> = BTreeMap::new();
    for (table, column) in columns {
        columns_by_table.entry(table).or_default().push(column);
    }

    let tables = tables
        .into_iter()
        .filter(|name| name != MIGRATIONS_TABLE)
        .map(|name| SchemaTable {
            columns: columns_by_table.remove(&name).unwrap_or_default(),
            name,
        })
        .collect();

    let relationships = relationships
        .into_iter()
        .filter(|rel| rel.referencing_table != MIGRATIONS_TABLE)
        .collect();

    SchemaDiagram {
        tables,
        relationships,
    }
}
