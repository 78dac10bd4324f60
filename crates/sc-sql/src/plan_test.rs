use super::*;
use chrono::{TimeZone, Utc};

fn version() -> MigrationVersion {
    MigrationVersion::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
}

fn planned(raw: &str) -> MigrationPlan {
    match plan_migration(raw, "Add CRM fields", version()) {
        GenerateOutcome::Planned(plan) => plan,
        GenerateOutcome::NoChanges => panic!("expected a plan for {raw:?}"),
    }
}

#[test]
fn test_empty_diff_is_no_changes() {
    assert_eq!(
        plan_migration("", "anything", version()),
        GenerateOutcome::NoChanges
    );
    assert_eq!(
        plan_migration("/* Checking Table: accounts */\nSELECT 1;\n", "x", version()),
        GenerateOutcome::NoChanges
    );
}

#[test]
fn test_one_step_per_statement_in_order() {
    let raw = "CREATE TABLE foo (id int);\n\
               CREATE UNIQUE INDEX idx_bar ON foo (bar);\n\
               ALTER TABLE foo ADD baz VARCHAR(10);\n\
               DROP TABLE legacy;\n";
    let plan = planned(raw);

    assert_eq!(plan.steps.len(), 4);
    let statements: Vec<&str> = plan.steps.iter().map(|s| s.statement.as_str()).collect();
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE foo (id int)",
            "CREATE UNIQUE INDEX idx_bar ON foo (bar)",
            "ALTER TABLE foo ADD baz VARCHAR(10)",
            "DROP TABLE legacy",
        ]
    );

    let labels: Vec<&str> = plan.steps.iter().map(|s| s.kind.label()).collect();
    assert_eq!(labels, vec!["create table", "create index", "add column", "other"]);
    assert_eq!(plan.guarded_count(), 3);
}

#[test]
fn test_guard_follows_classification() {
    let plan = planned("CREATE TABLE foo (id int);\nDROP TABLE foo;\n");
    for step in &plan.steps {
        assert_eq!(step.guard, Guard::for_kind(&step.kind));
    }
    assert_eq!(plan.steps[0].guard.to_string(), "table foo does not exist");
    assert_eq!(plan.steps[1].guard, Guard::Unguarded);
}

#[test]
fn test_plan_keeps_version() {
    let plan = planned("DROP TABLE foo;");
    assert_eq!(plan.version.class_name(), "Version20240101120000");
}

#[test]
fn test_description_collapsed_to_one_line() {
    let plan = MigrationPlan::from_statements(
        version(),
        "  Add\n  industry   field\t",
        vec![DdlStatement::new("DROP TABLE x").unwrap()],
    );
    assert_eq!(plan.description, "Add industry field");
}

#[test]
fn test_blank_description_uses_default() {
    let plan = MigrationPlan::from_statements(
        version(),
        " \n ",
        vec![DdlStatement::new("DROP TABLE x").unwrap()],
    );
    assert_eq!(plan.description, DEFAULT_DESCRIPTION);
}

#[test]
fn test_plan_serializes_for_templates() {
    let plan = planned("ALTER TABLE foo ADD baz int;");
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["version"], "20240101120000");
    assert_eq!(json["steps"][0]["statement"], "ALTER TABLE foo ADD baz int");
    assert_eq!(json["steps"][0]["guard"]["type"], "column_absent");
    assert_eq!(json["steps"][0]["guard"]["column"], "baz");
}
