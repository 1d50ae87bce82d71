use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const CATALOG: &str = "\
Title1
Author1
ISBN1
2020
15.99
Title2
Author2
ISBN2
2021
10.99
Another Title
Author1
ISBN3
2019
20.99
";

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.current_dir(home)
        .env("SHELF_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_menu_add_and_save() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Add one book, save to the default catalog file, exit
    let script = "1\nDune\nHerbert\nD1\n1965\n9.5\n9\n\n14\n";
    shelf(temp_dir.path())
        .arg("menu")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Library Management System"))
        .stdout(predicate::str::contains("Book added successfully!"))
        .stdout(predicate::str::contains("Saved 1 books to"))
        .stdout(predicate::str::contains("Exiting program..."));

    let saved = fs::read_to_string(temp_dir.path().join("books.txt")).unwrap();
    assert_eq!(saved, "Dune\nHerbert\nD1\n1965\n9.5\n");
}

#[test]
fn test_menu_autoloads_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("books.txt"), CATALOG).unwrap();

    shelf(temp_dir.path())
        .write_stdin("10\n14\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 books from"))
        .stdout(predicate::str::contains("Total books in the library: 3"));
}

#[test]
fn test_menu_ends_on_closed_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .write_stdin("abc\n99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a number between 1 and 14.",
        ))
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 14.",
        ))
        .stdout(predicate::str::contains("Exiting program..."));
}

#[test]
fn test_autosave_writes_on_exit() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["config", "autosave", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autosave set to true"));

    shelf(temp_dir.path())
        .write_stdin("1\nEmma\nAusten\nE1\n1815\n4\n14\n")
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("books.txt")).unwrap();
    assert!(saved.starts_with("Emma\nAusten\nE1\n1815\n4\n"));
}

const DAMAGED_CATALOG: &str = "\
T1
A1
I1
2000
1
T2
A2
I2
two thousand
2
T3
A3
I3
2002
3
";

#[test]
fn test_autoload_warns_about_unreadable_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("books.txt"), DAMAGED_CATALOG).unwrap();

    shelf(temp_dir.path())
        .write_stdin("10\n14\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 books from"))
        .stdout(predicate::str::contains(
            "Ignored unreadable data after book 1 in",
        ))
        .stdout(predicate::str::contains("Total books in the library: 1"));
}

#[test]
fn test_autosave_keeps_partly_read_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(&catalog, DAMAGED_CATALOG).unwrap();
    fs::write(temp_dir.path().join("config.json"), r#"{"autosave": true}"#).unwrap();

    shelf(temp_dir.path())
        .write_stdin("14\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Autosave skipped"));

    assert_eq!(fs::read_to_string(&catalog).unwrap(), DAMAGED_CATALOG);
}

#[test]
fn test_explicit_save_still_overwrites_partly_read_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(&catalog, DAMAGED_CATALOG).unwrap();

    shelf(temp_dir.path())
        .write_stdin("9\n\n14\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 books to"));

    assert_eq!(fs::read_to_string(&catalog).unwrap(), "T1\nA1\nI1\n2000\n1\n");
}

#[test]
fn test_list_shows_readable_part_of_damaged_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("books.txt"), DAMAGED_CATALOG).unwrap();

    shelf(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("T1"))
        .stdout(predicate::str::contains("T3").not())
        .stderr(predicate::str::contains(
            "Ignored unreadable data after book 1 in",
        ));
}

#[test]
fn test_list_sorted_by_price() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("books.txt"), CATALOG).unwrap();

    let output = shelf(temp_dir.path())
        .args(["list", "--sort", "price"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();

    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("Title2"));
    assert!(rows[1].starts_with("Title1"));
    assert!(rows[2].starts_with("Another Title"));
}

#[test]
fn test_list_filters_by_author_and_title() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("books.txt"), CATALOG).unwrap();

    shelf(temp_dir.path())
        .args(["list", "--author", "author1", "--title", "another"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Another Title"))
        .stdout(predicate::str::contains("Title1").not());

    shelf(temp_dir.path())
        .args(["ls", "--title", "nothing like it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn test_list_with_explicit_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("other.txt"), CATALOG).unwrap();

    shelf(temp_dir.path())
        .args(["list", "-f", "other.txt", "--sort", "year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Another Title"));
}

#[test]
fn test_list_missing_catalog_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("books.txt"));
}

#[test]
fn test_config_show_and_set() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = books.txt"))
        .stdout(predicate::str::contains("autoload = true"));

    shelf(temp_dir.path())
        .args(["config", "data-file", "catalog.txt"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["config", "data-file"])
        .assert()
        .success()
        .stdout(predicate::str::diff("catalog.txt\n"));

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn test_config_rejects_bad_value() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["config", "autoload", "maybe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autoload"));

    assert!(!temp_dir.path().join("config.json").exists());
}
