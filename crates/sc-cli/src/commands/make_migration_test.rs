use super::*;
use chrono::{TimeZone, Utc};
use sc_host::{FileDiffSource, FsMigrationStore};
use std::fs;
use tempfile::tempdir;

const REPAIR_DIFF: &str = "\
CREATE TABLE aos_invoices (id char(36) NOT NULL, name varchar(255) NULL, PRIMARY KEY (id));
CREATE INDEX idx_inv_name ON aos_invoices (name);
ALTER TABLE accounts ADD COLUMN rating_c varchar(100) NULL;
DROP TABLE legacy_tmp;
/* Table : bugs */
ALTER TABLE bugs ADD COLUMN severity_c varchar(20) NULL;
SELECT COUNT(*) FROM accounts;
";

fn version() -> MigrationVersion {
    MigrationVersion::from_datetime(Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap())
}

fn dump(dir: &std::path::Path, sql: &str) -> FileDiffSource {
    let path = dir.join("diff.sql");
    fs::write(&path, sql).unwrap();
    FileDiffSource::new(path)
}

#[tokio::test]
async fn test_generate_renders_guarded_steps() {
    let dir = tempdir().unwrap();
    let source = dump(dir.path(), REPAIR_DIFF);
    let renderer = TemplateRenderer::new().unwrap();

    let generated = generate(&source, &renderer, "DoctrineMigrations", "Invoices", version())
        .await
        .unwrap()
        .expect("statements should produce a migration");

    assert_eq!(generated.plan.steps.len(), 4);
    assert_eq!(generated.plan.guarded_count(), 3);
    assert_eq!(generated.rendered.class_name, "Version20240301081500");

    let php = &generated.rendered.contents;
    assert!(php.contains("final class Version20240301081500 extends AbstractMigration"));
    assert!(php.contains("return 'Invoices';"));
    assert!(php.contains("if (!$sm->tablesExist(['aos_invoices'])) {"));
    assert!(php.contains("->hasIndex('idx_inv_name')"));
    assert!(php.contains("->hasColumn('rating_c')"));
    assert!(php.contains("$this->addSql('DROP TABLE legacy_tmp');"));
    assert!(!php.contains("SELECT COUNT"));
    assert!(!php.contains("severity_c"));
    assert_eq!(php.matches("$this->addSql(").count(), 4);
}

#[tokio::test]
async fn test_generate_empty_diff_is_no_changes() {
    let dir = tempdir().unwrap();
    let source = dump(dir.path(), "/* nothing to repair */\nSELECT 1;\n");
    let renderer = TemplateRenderer::new().unwrap();

    let generated = generate(&source, &renderer, "DoctrineMigrations", "x", version())
        .await
        .unwrap();
    assert!(generated.is_none());
}

#[tokio::test]
async fn test_generate_propagates_source_failure() {
    let source = FileDiffSource::new("/nonexistent/diff.sql");
    let renderer = TemplateRenderer::new().unwrap();

    let err = generate(&source, &renderer, "DoctrineMigrations", "x", version())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to compute schema diff"));
}

#[tokio::test]
async fn test_generated_migration_persists() {
    let dir = tempdir().unwrap();
    let source = dump(dir.path(), "CREATE TABLE foo (id int);\n");
    let renderer = TemplateRenderer::new().unwrap();
    let store = FsMigrationStore::new(dir.path().join("migrations"));

    let generated = generate(&source, &renderer, "App\\Migrations", "", version())
        .await
        .unwrap()
        .unwrap();
    let path = store
        .persist(&generated.plan.version, &generated.rendered.contents)
        .unwrap();

    let written = fs::read_to_string(path).unwrap();
    assert!(written.contains("namespace App\\Migrations;"));
    assert!(written.contains("return 'Schema update';"));
}
