//! CLI integration tests.

mod support;

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use support::snapshot::{write_temp, CHAIN_SNAPSHOT};

fn evetrade(snapshot: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("evetrade");
    cmd.arg("--snapshot").arg(snapshot).arg("--no-color");
    cmd
}

#[test]
fn help_lists_commands() {
    cargo_bin_cmd!("evetrade")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sell-price"))
        .stdout(predicate::str::contains("buy-price"))
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn sell_price_prints_cheapest_order() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args(["--quiet", "sell-price", "--type", "34", "--station", "60000001"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5.10\n"));
}

#[test]
fn sell_price_without_orders_reports_zero() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args(["--json", "sell-price", "--type", "35", "--station", "60000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":false"));
}

#[test]
fn buy_price_respects_range() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    // Station 2 is one jump from the 6.00 order at station 3.
    evetrade(&path)
        .args(["--quiet", "buy-price", "--type", "34", "--station", "60000002"])
        .assert()
        .success()
        .stdout(predicate::str::diff("6.00\n"));

    // Station 1 is two jumps away; the 7.00 order is station-only.
    evetrade(&path)
        .args(["--quiet", "buy-price", "--type", "34", "--station", "60000001"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn fill_reports_insufficient_volume() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args(["fill", "--type", "34", "--station", "60000001", "--volume", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient volume"));
}

#[test]
fn partial_fill_succeeds() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args([
            "--json", "fill", "--type", "34", "--station", "60000001", "--volume", "500",
            "--partial",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filled\":200"))
        .stdout(predicate::str::contains("\"shortfall\":300"));
}

#[test]
fn quote_between_stations() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    // Buy 50 at 4.00 in station 4, sell at 7.00 there: 150 ISK before tax.
    evetrade(&path)
        .args([
            "--quiet", "quote", "--type", "34", "--from", "60000004", "--to", "60000004",
            "--volume", "50", "--standing", "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("150.00\n"));
}

#[test]
fn quote_rejects_standing_out_of_range() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args([
            "quote", "--type", "34", "--from", "60000004", "--to", "60000004",
            "--volume", "50", "--standing", "-20",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid corporation standing"));
}

#[test]
fn station_tax_needs_no_snapshot() {
    cargo_bin_cmd!("evetrade")
        .args(["--no-color", "station-tax", "--standing", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.00%"));
}

#[test]
fn names_resolve_from_snapshot() {
    let (_dir, path) = write_temp("market.json", CHAIN_SNAPSHOT);

    evetrade(&path)
        .args(["--quiet", "names", "--no-cache", "1000035", "42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Caldari Navy\n(unknown)\n"));
}

#[test]
fn invalid_config_fails() {
    let (_dir, path) = write_temp("config.toml", "[market]\ncorp_standing = 11\n");

    cargo_bin_cmd!("evetrade")
        .arg("--config")
        .arg(&path)
        .args(["station-tax"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corp_standing"));
}

#[test]
fn missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();

    evetrade(&dir.path().join("absent.json"))
        .args(["sell-price", "--type", "34", "--station", "60000001"])
        .assert()
        .failure();
}
