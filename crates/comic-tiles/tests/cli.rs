use std::fs;

use assert_cmd::Command;
use image::{GrayImage, Luma};
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("comic-tiles").unwrap()
}

fn save_square_page(path: &std::path::Path) {
    let img = GrayImage::from_fn(200, 200, |x, y| {
        let inked = (10..190).contains(&x) && (10..190).contains(&y);
        Luma([if inked { 0 } else { 255 }])
    });
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(path).unwrap();
}

#[test]
fn detect_merge_pending_on_a_data_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    save_square_page(&root.join("comics/0001.png"));
    fs::write(root.join("comics/0002.png"), vec![255u8; 16]).unwrap();

    cli()
        .args(["--root", root.to_str().unwrap(), "--ids", "0..5"])
        .args(["--log-level", "off", "detect", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 comics analyzed, 1 valid (100%)"));
    assert_eq!(
        fs::read_to_string(root.join("tiles_detected/0001.txt")).unwrap(),
        "10 10 189 189\n"
    );

    let report = root.join("merge.json");
    cli()
        .args(["--root", root.to_str().unwrap(), "--ids", "0..5"])
        .args(["merge", "--report", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records merged"));
    assert_eq!(
        fs::read_to_string(root.join("tiles/0001.txt")).unwrap(),
        "10 10 189 189\n"
    );
    let json = fs::read_to_string(&report).unwrap();
    assert!(json.contains("\"merge\""), "{json}");

    // 0002 never decoded, so it still waits for detection or annotation
    cli()
        .args(["--root", root.to_str().unwrap(), "--ids", "0..5", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0002 Undetected"))
        .stdout(predicate::str::contains("0001").not());
}

#[test]
fn rejects_bad_id_range() {
    cli()
        .args(["--ids", "9..3", "merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty range"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("params.json");
    fs::write(&config, r#"{"min_fill_ratio": 1.5}"#).unwrap();

    cli()
        .args(["--root", dir.path().to_str().unwrap(), "--ids", "0..1"])
        .args(["detect", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_fill_ratio"));
}
