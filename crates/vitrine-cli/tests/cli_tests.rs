//! Integration tests for the vitrine CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vitrine_cmd() -> Command {
    Command::cargo_bin("vitrine").unwrap()
}

#[test]
fn parse_shows_explanation_and_chips() {
    vitrine_cmd()
        .arg("parse")
        .arg("jean bleu t40")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recherche dans les jeans"))
        .stdout(predicate::str::contains("Affiner :"));
}

#[test]
fn parse_off_topic_exits_with_distinct_code() {
    vitrine_cmd()
        .arg("parse")
        .arg("météo demain")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("recherche classique"));
}

#[test]
fn parse_ambiguous_lists_three_choices() {
    vitrine_cmd()
        .arg("parse")
        .arg("mode")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode Femme"))
        .stdout(predicate::str::contains("Mode Homme"))
        .stdout(predicate::str::contains("Chaussures"));
}

#[test]
fn parse_json_format_is_tagged() {
    vitrine_cmd()
        .arg("--format")
        .arg("json")
        .arg("parse")
        .arg("chemise lin blanche M <60€")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"parsed\""))
        .stdout(predicate::str::contains("\"category\": \"chemise\""))
        .stdout(predicate::str::contains("\"max\": 60"));
}

#[test]
fn verbose_flag_enables_parse_logging() {
    vitrine_cmd()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .arg("parse")
        .arg("jean bleu t40")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed query"));
}

#[test]
fn parse_logging_is_quiet_by_default() {
    vitrine_cmd()
        .env_remove("RUST_LOG")
        .arg("parse")
        .arg("jean bleu t40")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed query").not());
}

#[test]
fn search_demo_catalog_filters_items() {
    vitrine_cmd()
        .arg("search")
        .arg("jean bleu")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jean slim stretch"))
        .stdout(predicate::str::contains("Jean droit brut"))
        .stdout(predicate::str::contains("Robe fluide").not());
}

#[test]
fn search_respects_price_bound() {
    vitrine_cmd()
        .arg("search")
        .arg("jean moins de 60")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jean slim stretch"))
        .stdout(predicate::str::contains("Jean droit brut").not());
}

#[test]
fn search_off_topic_exits_with_distinct_code() {
    vitrine_cmd()
        .arg("search")
        .arg("recette de cuisine")
        .assert()
        .code(2);
}

#[test]
fn search_reads_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[{
            "id": "x1",
            "name": "Jean de test",
            "brand": "Castaluna",
            "price": 30.0,
            "category": "jean",
            "colors": ["Bleu"],
            "sizes": ["40"],
            "description": "Jean de test",
            "inStock": true,
            "fastDelivery": false
        }]"#,
    )
    .unwrap();

    vitrine_cmd()
        .arg("search")
        .arg("jean")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jean de test"));
}

#[test]
fn search_rejects_unreadable_catalog() {
    vitrine_cmd()
        .arg("search")
        .arg("jean")
        .arg("--catalog")
        .arg("/nonexistent/catalog.json")
        .assert()
        .failure();
}

#[test]
fn search_reports_zero_results() {
    vitrine_cmd()
        .arg("search")
        .arg("combinaison verte")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucun article ne correspond."));
}
