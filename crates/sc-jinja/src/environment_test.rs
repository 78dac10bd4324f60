use super::*;
use chrono::{TimeZone, Utc};
use sc_core::{MapEnv, MigrationVersion};
use sc_sql::{plan_migration, GenerateOutcome};

fn plan(raw: &str, description: &str) -> MigrationPlan {
    let version =
        MigrationVersion::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    match plan_migration(raw, description, version) {
        GenerateOutcome::Planned(plan) => plan,
        GenerateOutcome::NoChanges => panic!("expected statements"),
    }
}

fn render(raw: &str) -> RenderedMigration {
    TemplateRenderer::new()
        .unwrap()
        .render_migration(&plan(raw, "Schema update"), "DoctrineMigrations")
        .unwrap()
}

#[test]
fn test_class_header() {
    let migration = render("DROP TABLE foo;");
    assert_eq!(migration.class_name, "Version20240101120000");
    assert!(migration.contents.starts_with("<?php\n"));
    assert!(migration.contents.contains("namespace DoctrineMigrations;"));
    assert!(migration
        .contents
        .contains("final class Version20240101120000 extends AbstractMigration"));
    assert!(migration.contents.contains("return 'Schema update';"));
    assert!(migration.contents.ends_with("}\n"));
}

#[test]
fn test_create_table_guard_rendered() {
    let migration = render("CREATE TABLE foo (id int);");
    assert!(migration.contents.contains(
        "        if (!$sm->tablesExist(['foo'])) {\n            $this->addSql('CREATE TABLE foo (id int)');\n        }\n"
    ));
}

#[test]
fn test_create_index_guard_rendered() {
    let migration = render("CREATE UNIQUE INDEX idx_bar ON foo (bar);");
    assert!(migration
        .contents
        .contains("->introspectTable('foo')->hasIndex('idx_bar')"));
    assert!(migration
        .contents
        .contains("$this->addSql('CREATE UNIQUE INDEX idx_bar ON foo (bar)');"));
}

#[test]
fn test_add_column_guard_rendered() {
    let migration = render("ALTER TABLE foo ADD baz VARCHAR(10);");
    assert!(migration
        .contents
        .contains("->introspectTable('foo')->hasColumn('baz')"));
}

#[test]
fn test_other_statement_unguarded() {
    let migration = render("DROP TABLE foo;");
    assert!(migration
        .contents
        .contains("\n        $this->addSql('DROP TABLE foo');\n"));
    assert!(!migration.contents.contains("tablesExist"));
}

#[test]
fn test_one_add_sql_per_statement_in_order() {
    let migration = render(
        "CREATE TABLE foo (id int);\nALTER TABLE foo ADD baz int;\nDROP TABLE old;\nCREATE INDEX i ON foo (baz);\n",
    );
    let body = &migration.contents;
    assert_eq!(body.matches("$this->addSql(").count(), 4);

    let positions: Vec<usize> = [
        "CREATE TABLE foo",
        "ALTER TABLE foo ADD baz",
        "DROP TABLE old",
        "CREATE INDEX i ON foo",
    ]
    .iter()
    .map(|needle| body.find(needle).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_statement_quotes_escaped() {
    let migration = render("ALTER TABLE foo ADD status varchar(10) DEFAULT 'new';");
    assert!(migration
        .contents
        .contains("$this->addSql('ALTER TABLE foo ADD status varchar(10) DEFAULT \\'new\\'');"));
}

#[test]
fn test_description_escaped() {
    let renderer = TemplateRenderer::new().unwrap();
    let migration = renderer
        .render_migration(&plan("DROP TABLE foo;", "Fix O'Brien's \\ fields"), "App\\Migrations")
        .unwrap();
    assert!(migration
        .contents
        .contains("return 'Fix O\\'Brien\\'s \\\\ fields';"));
    assert!(migration.contents.contains("namespace App\\Migrations;"));
}

#[test]
fn test_down_is_placeholder() {
    let migration = render("CREATE TABLE foo (id int);");
    let down = migration.contents.split("public function down").nth(1).unwrap();
    assert!(down.contains("TODO"));
    assert!(!down.contains("addSql"));
}

#[test]
fn test_render_legacy_config_defaults() {
    let config = LegacyConfig::from_env(&MapEnv::new()).unwrap();
    let php = TemplateRenderer::new()
        .unwrap()
        .render_legacy_config(&config)
        .unwrap();

    assert!(php.starts_with("<?php\n"));
    assert!(php.contains("'db_host_name' => 'db',"));
    assert!(php.contains("'db_port' => 3306,"));
    assert!(php.contains("$sugar_config['session']['sessionHandler'] = 'redis';"));
    assert!(php.contains("'port' => 6379,"));
    assert!(php.contains("'port' => 1025,"));
    assert!(php.contains("'port' => 9200,"));
    assert!(php.contains("'enabled' => true,"));
    assert!(php.contains("$sugar_config['logger']['level'] = 'fatal';"));
    assert!(php.contains("$sugar_config['site_url'] = 'http://localhost:8080';"));
    assert!(php.contains("$sugar_config['log_dir'] = 'logs/';"));
}

#[test]
fn test_render_legacy_config_escapes_secrets() {
    let env = MapEnv::new().with("DB_PASSWORD", "p@ss'w\\rd$1");
    let config = LegacyConfig::from_env(&env).unwrap();
    let php = TemplateRenderer::new()
        .unwrap()
        .render_legacy_config(&config)
        .unwrap();
    assert!(php.contains("'db_password' => 'p@ss\\'w\\\\rd$1',"));
}
