use super::*;
use std::path::PathBuf;

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(1.0), "1.000000");
    assert_eq!(format_f64_6(-0.1234567), "-0.123457");
}

#[test]
fn test_write_text_creates_parent() {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "bulletband_report_{}",
        std::process::id()
    ));
    let path = dir.join("nested").join("out.txt");
    write_text(&path, "hello\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}
