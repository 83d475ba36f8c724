//! Unit tests for mapping validation.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockSchemaSnapshotRepository;
use crate::domain::{SchemaRelationship, SchemaTable};

const LOCATIONS: EntityMapping = EntityMapping {
    entity: "Location",
    table: "locations",
    primary_key: "location_id",
    columns: &[
        ColumnMapping {
            attribute: "id",
            column: "location_id",
            sql_type: SqlType::Integer,
            nullable: false,
        },
        ColumnMapping {
            attribute: "name",
            column: "location_name",
            sql_type: SqlType::Text,
            nullable: false,
        },
    ],
    associations: &[],
};

const SCHEDULES: EntityMapping = EntityMapping {
    entity: "Schedule",
    table: "schedules",
    primary_key: "schedule_id",
    columns: &[
        ColumnMapping {
            attribute: "id",
            column: "schedule_id",
            sql_type: SqlType::Integer,
            nullable: false,
        },
        ColumnMapping {
            attribute: "location_id",
            column: "location_id",
            sql_type: SqlType::Integer,
            nullable: false,
        },
        ColumnMapping {
            attribute: "scheduled_start",
            column: "start_time",
            sql_type: SqlType::Timestamptz,
            nullable: false,
        },
    ],
    associations: &[AssociationMapping {
        kind: AssociationKind::References,
        foreign_key: "location_id",
        referenced_table: "locations",
        reverse_collection: None,
    }],
};

static REGISTRY: [EntityMapping; 2] = [LOCATIONS, SCHEDULES];

fn column(name: &str, data_type: &str, is_primary_key: bool) -> SchemaColumn {
    SchemaColumn {
        name: name.to_owned(),
        data_type: data_type.to_owned(),
        is_primary_key,
        is_nullable: false,
    }
}

#[fixture]
fn matching_diagram() -> SchemaDiagram {
    SchemaDiagram {
        tables: vec![
            SchemaTable {
                name: "locations".to_owned(),
                columns: vec![
                    column("location_id", "integer", true),
                    column("location_name", "text", false),
                ],
            },
            SchemaTable {
                name: "schedules".to_owned(),
                columns: vec![
                    column("schedule_id", "integer", true),
                    column("location_id", "integer", false),
                    column("start_time", "timestamp with time zone", false),
                ],
            },
        ],
        relationships: vec![SchemaRelationship {
            referencing_table: "schedules".to_owned(),
            referencing_column: "location_id".to_owned(),
            referenced_table: "locations".to_owned(),
            referenced_column: "location_id".to_owned(),
            referencing_is_nullable: false,
        }],
    }
}

fn table_mut<'a>(diagram: &'a mut SchemaDiagram, name: &str) -> &'a mut SchemaTable {
    diagram
        .tables
        .iter_mut()
        .find(|table| table.name == name)
        .expect("fixture table exists")
}

#[rstest]
fn matching_schema_passes(matching_diagram: SchemaDiagram) {
    assert_eq!(validate_mappings(&REGISTRY, &matching_diagram), Ok(()));
}

#[rstest]
fn missing_table_is_reported(mut matching_diagram: SchemaDiagram) {
    matching_diagram
        .tables
        .retain(|table| table.name != "locations");
    let mismatches = find_mapping_mismatches(&REGISTRY, &matching_diagram);
    assert_eq!(
        mismatches,
        vec![MappingMismatch::MissingTable {
            entity: "Location",
            table: "locations"
        }]
    );
}

#[rstest]
fn missing_column_is_reported(mut matching_diagram: SchemaDiagram) {
    table_mut(&mut matching_diagram, "schedules")
        .columns
        .retain(|column| column.name != "start_time");
    assert_eq!(
        find_mapping_mismatches(&REGISTRY, &matching_diagram),
        vec![MappingMismatch::MissingColumn {
            table: "schedules",
            column: "start_time"
        }]
    );
}

#[rstest]
fn type_and_nullability_mismatches_are_both_reported(mut matching_diagram: SchemaDiagram) {
    let table = table_mut(&mut matching_diagram, "locations");
    table.columns[1].data_type = "character varying(100)".to_owned();
    table.columns[1].is_nullable = true;

    assert_eq!(
        find_mapping_mismatches(&REGISTRY, &matching_diagram),
        vec![
            MappingMismatch::TypeMismatch {
                table: "locations",
                column: "location_name",
                expected: SqlType::Text,
                actual: "character varying(100)".to_owned(),
            },
            MappingMismatch::NullabilityMismatch {
                table: "locations",
                column: "location_name",
                expected_nullable: false,
            },
        ]
    );
}

#[rstest]
fn primary_key_mismatch_is_reported(mut matching_diagram: SchemaDiagram) {
    let table = table_mut(&mut matching_diagram, "schedules");
    table.columns[0].is_primary_key = false;
    table.columns[1].is_primary_key = true;

    assert_eq!(
        find_mapping_mismatches(&REGISTRY, &matching_diagram),
        vec![MappingMismatch::PrimaryKeyMismatch {
            table: "schedules",
            expected: "schedule_id",
            actual: vec!["location_id".to_owned()],
        }]
    );
}

#[rstest]
fn missing_foreign_key_is_reported(mut matching_diagram: SchemaDiagram) {
    matching_diagram.relationships.clear();
    assert_eq!(
        find_mapping_mismatches(&REGISTRY, &matching_diagram),
        vec![MappingMismatch::MissingForeignKey {
            table: "schedules",
            column: "location_id",
            referenced_table: "locations"
        }]
    );
}

#[rstest]
fn registry_must_be_self_consistent(matching_diagram: SchemaDiagram) {
    let orphan = [SCHEDULES];
    assert_eq!(
        find_mapping_mismatches(&orphan, &matching_diagram),
        vec![MappingMismatch::UndeclaredReferencedTable {
            entity: "Schedule",
            referenced_table: "locations"
        }]
    );
}

#[rstest]
fn error_lists_every_mismatch() {
    let err = validate_mappings(&REGISTRY, &SchemaDiagram::default())
        .expect_err("empty schema cannot match");
    let message = err.to_string();
    assert!(message.starts_with("relational mapping has 2 mismatch(es)"));
    assert!(message.contains("table locations for entity Location is missing"));
    assert!(message.contains("table schedules for entity Schedule is missing"));
}

#[rstest]
fn service_loads_snapshot_through_port(matching_diagram: SchemaDiagram) {
    let mut repository = MockSchemaSnapshotRepository::new();
    repository
        .expect_load_schema_diagram()
        .times(1)
        .return_once(move || Ok(matching_diagram));

    let service = MappingValidationService::new(&REGISTRY);
    assert_eq!(service.validate(&repository), Ok(()));
}

#[rstest]
fn service_surfaces_snapshot_failures() {
    let mut repository = MockSchemaSnapshotRepository::new();
    repository
        .expect_load_schema_diagram()
        .return_once(|| Err(SchemaSnapshotRepositoryError::connection("refused")));

    let service = MappingValidationService::new(&REGISTRY);
    assert!(matches!(
        service.validate(&repository),
        Err(MappingConfigurationError::Snapshot(_))
    ));
}
