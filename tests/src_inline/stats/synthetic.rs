use super::*;

#[test]
fn test_generate_samples_shape_and_range() {
    let params = SyntheticParams::default_v1();
    let samples = generate_samples(&params).unwrap();
    assert_eq!(samples.len(), params.n);
    assert!(
        samples
            .x
            .iter()
            .all(|&x| x >= params.x_min && x < params.x_max)
    );
}

#[test]
fn test_generate_samples_seeded() {
    let params = SyntheticParams::default_v1();
    let a = generate_samples(&params).unwrap();
    let b = generate_samples(&params).unwrap();
    assert_eq!(a, b);
    let c = generate_samples(&SyntheticParams {
        seed: 7,
        ..params
    })
    .unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_generate_samples_rejects_bad_params() {
    let base = SyntheticParams::default_v1();
    assert!(generate_samples(&SyntheticParams { n: 2, ..base.clone() }).is_err());
    assert!(
        generate_samples(&SyntheticParams {
            x_min: 5.0,
            x_max: 5.0,
            ..base.clone()
        })
        .is_err()
    );
    assert!(generate_samples(&SyntheticParams {
        noise_sd: -1.0,
        ..base.clone()
    })
    .is_err());
    assert!(generate_samples(&SyntheticParams {
        noise_sd: f64::NAN,
        ..base
    })
    .is_err());
}

#[test]
fn test_generate_samples_zero_noise_on_line() {
    let params = SyntheticParams {
        noise_sd: 0.0,
        ..SyntheticParams::default_v1()
    };
    let samples = generate_samples(&params).unwrap();
    assert_eq!(samples.len(), params.n);
    for (&x, &y) in samples.x.iter().zip(samples.y.iter()) {
        assert_eq!(y, params.slope * x + params.intercept);
    }
}
