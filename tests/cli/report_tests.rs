use predicates::prelude::*;

use crate::common::{Workspace, csvstats};

#[test]
fn summarizes_numeric_columns() {
    let ws = Workspace::new();
    let path = ws.file(
        "sales.csv",
        "region,units,price\nnorth,3,1.5\nsouth,1,2.5\neast,2,\n",
    );

    let expected = "File: sales.csv\nRows: 3\nColumns: 3\n\nColumn summaries:\n\
                    ---------------------------------\n\
                    units  min=1, max=3, mean=2\n\
                    price  min=1.5, max=2.5, mean=2\n";
    csvstats().arg(&path).assert().success().stdout(expected);
}

#[test]
fn sniffs_semicolons_and_thousands_separators() {
    let ws = Workspace::new();
    let path = ws.file(
        "cities.txt",
        "city;population\n\"Tokyo, JP\";\"37,400,068\"\n\"Osaka, JP\";\"19,059,856\"\n",
    );

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "population  min=19059856, max=37400068, mean=28229962",
        ))
        .stdout(predicate::str::contains("city ").not());
}

#[test]
fn blank_headers_and_short_rows() {
    let ws = Workspace::new();
    let path = ws.file("ragged.csv", "a,,c\n1,10\n3,20,x\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns: 3"))
        .stdout(predicate::str::contains("a      min=1, max=3, mean=2"))
        .stdout(predicate::str::contains("col_1  min=10, max=20, mean=15"))
        .stdout(predicate::str::contains("\nc ").not());
}

#[test]
fn empty_file_succeeds() {
    let ws = Workspace::new();
    let path = ws.file("empty.csv", "");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout("File: empty.csv\nRows: 0\nColumns: 0\n\n(Empty file)\n");
}

#[test]
fn header_only_file_is_empty() {
    let ws = Workspace::new();
    let path = ws.file("header.csv", "a,b\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Columns: 2\n\n(Empty file)\n"));
}

#[test]
fn text_only_file_has_no_numeric_columns() {
    let ws = Workspace::new();
    let path = ws.file("names.csv", "first,last\nAda,Lovelace\nAlan,Turing\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("No numeric columns detected.\n"));
}

#[test]
fn nan_cells_are_ignored_and_infinity_prints_na() {
    let ws = Workspace::new();
    let path = ws.file("special.csv", "v,w\nNaN,1\n4,inf\n6,2\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("v  min=4, max=6, mean=5"))
        .stdout(predicate::str::contains("w  min=1, max=NA, mean=NA"));
}

#[test]
fn forced_delimiter_overrides_sniffing() {
    let ws = Workspace::new();
    let path = ws.file("pipes.csv", "a|b\n1|2\n3|4\n");

    csvstats()
        .args(["--delimiter", ","])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns: 1"))
        .stdout(predicate::str::ends_with("No numeric columns detected.\n"));
}

#[test]
fn undecodable_record_is_skipped_or_fatal_with_strict() {
    let ws = Workspace::new();
    let path = ws.bytes("latin1.csv", b"name,qty\ncaf\xe9,2\ntea,4\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 1"))
        .stdout(predicate::str::contains("qty  min=4, max=4, mean=4"))
        .stderr(predicate::str::contains("skipping record"));

    csvstats()
        .arg("--strict")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed CSV"));
}

#[test]
fn sniffs_space_separated_columns() {
    let ws = Workspace::new();
    let path = ws.file("space.txt", "a b c\n1 2 3\n4 5 6\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns: 3"))
        .stdout(predicate::str::contains("a  min=1, max=4, mean=2.5"))
        .stdout(predicate::str::contains("c  min=3, max=6, mean=4.5"));
}

#[test]
fn blank_lines_count_as_rows() {
    let ws = Workspace::new();
    let path = ws.file("gaps.csv", "a,b\n1,2\n\n3,4\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 3\n"))
        .stdout(predicate::str::contains("a  min=1, max=3, mean=2"));
}

#[test]
fn underscore_digit_groups_are_numbers() {
    let ws = Workspace::new();
    let path = ws.file("groups.csv", "v\n1_000\n2\n");

    csvstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("v  min=2, max=1000, mean=501"));
}
