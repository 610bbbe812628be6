use super::*;

#[test]
fn test_default_records_table() {
    let records = default_records();
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Revenue", "Profit", "Order Size", "New Customers", "Satisfaction"]
    );
    assert!(records.iter().all(|r| r.ranges_ascending()));
}

#[test]
fn test_ranges_ascending_detects_unsorted() {
    let r = KpiRecord::new("X", "", [3.0, 2.0, 4.0], [1.0, 2.0], 3.0);
    assert!(!r.ranges_ascending());
    let equal = KpiRecord::new("Y", "", [2.0, 2.0, 2.0], [1.0, 2.0], 3.0);
    assert!(equal.ranges_ascending());
}

#[test]
fn test_record_serializes_with_array_fields() {
    let r = &default_records()[1];
    let v = serde_json::to_value(r).unwrap();
    assert_eq!(v["title"], "Profit");
    assert_eq!(v["ranges"][2], 30.0);
    assert_eq!(v["measures"][0], 21.0);
    assert_eq!(v["marker"], 26.0);
}
