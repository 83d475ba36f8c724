//! Live relational schema snapshot.
//!
//! Adapters describe the tables, columns and foreign keys they find in the
//! store using these types, so mapping validation can run without touching
//! persistence details.

/// A full schema snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDiagram {
    pub tables: Vec<SchemaTable>,
    pub relationships: Vec<SchemaRelationship>,
}

impl SchemaDiagram {
    /// Return a stable, deterministically ordered clone of the diagram.
    ///
    /// # Examples
    ///
    /// ```
    /// use backend::domain::{SchemaDiagram, SchemaTable};
    ///
    /// let diagram = SchemaDiagram {
    ///     tables: vec![
    ///         SchemaTable { name: "tags".to_owned(), columns: vec![] },
    ///         SchemaTable { name: "locations".to_owned(), columns: vec![] },
    ///     ],
    ///     relationships: vec![],
    /// };
    ///
    /// assert_eq!(diagram.normalized().tables[0].name, "locations");
    /// ```
    pub fn normalized(&self) -> Self {
        let mut tables = self.tables.clone();
        for table in &mut tables {
            table
                .columns
                .sort_by(|left, right| left.name.cmp(&right.name));
        }
        tables.sort_by(|left, right| left.name.cmp(&right.name));

        let mut relationships = self.relationships.clone();
        relationships.sort_by(|left, right| {
            (
                left.referencing_table.as_str(),
                left.referencing_column.as_str(),
                left.referenced_table.as_str(),
                left.referenced_column.as_str(),
            )
                .cmp(&(
                    right.referencing_table.as_str(),
                    right.referencing_column.as_str(),
                    right.referenced_table.as_str(),
                    right.referenced_column.as_str(),
                ))
        });

        Self {
            tables,
            relationships,
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&SchemaTable> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Whether a foreign key runs from `table.column` to `referenced_table`.
    pub fn has_foreign_key(&self, table: &str, column: &str, referenced_table: &str) -> bool {
        self.relationships.iter().any(|relationship| {
            relationship.referencing_table == table
                && relationship.referencing_column == column
                && relationship.referenced_table == referenced_table
        })
    }
}

/// A database table with typed columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTable {
    pub name: String,
    pub columns: Vec<SchemaColumn>,
}

impl SchemaTable {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&SchemaColumn> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// A typed database column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaColumn {
    pub name: String,
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_nullable: bool,
}

/// A single foreign-key relationship between two columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRelationship {
    pub referencing_table: String,
    pub referencing_column: String,
    pub referenced_table: String,
    pub referenced_column: String,
    pub referencing_is_nullable: bool,
}
