use super::*;

#[test]
fn test_samples_reject_length_mismatch() {
    let err = Samples::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_samples_reject_non_finite() {
    assert!(Samples::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
    assert!(Samples::new(vec![1.0, 2.0], vec![f64::INFINITY, 2.0]).is_err());
}

#[test]
fn test_select_keeps_pairs() {
    let s = Samples::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap();
    let r = s.select(&[2, 2, 0]);
    assert_eq!(r.x, vec![3.0, 3.0, 1.0]);
    assert_eq!(r.y, vec![30.0, 30.0, 10.0]);
}

#[test]
fn test_band_widths() {
    let band = Band {
        lo: vec![1.0, 2.0],
        hi: vec![1.5, 4.0],
    };
    assert_eq!(band.widths(), vec![0.5, 2.0]);
}

#[test]
fn test_distinct_counts() {
    let s = Samples::new(vec![1.0, 1.0, 2.0, 1.0], vec![3.0, 3.0, 5.0, 4.0]).unwrap();
    assert_eq!(s.distinct_x(), 2);
    assert_eq!(s.distinct_points(), 3);
}
