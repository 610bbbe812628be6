use super::*;
use crate::model::params::SyntheticParams;
use crate::stats::synthetic::generate_samples;

fn least_squares(samples: &Samples) -> (f64, f64, f64) {
    let n = samples.len() as f64;
    let mx = samples.x.iter().sum::<f64>() / n;
    let my = samples.y.iter().sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&x, &y) in samples.x.iter().zip(samples.y.iter()) {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
    }
    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let rss: f64 = samples
        .x
        .iter()
        .zip(samples.y.iter())
        .map(|(&x, &y)| (y - slope * x - intercept).powi(2))
        .sum();
    (slope, intercept, (rss / n).sqrt())
}

#[test]
fn test_fit_matches_least_squares() {
    let samples = generate_samples(&SyntheticParams::default_v1()).unwrap();
    let fit = fit_line(&samples, [2.0, 2.0, 2.0]).unwrap();
    let (slope, intercept, sigma) = least_squares(&samples);
    assert!(fit.converged);
    assert!((fit.params.slope - slope).abs() < 1e-4, "{fit:?}");
    assert!((fit.params.intercept - intercept).abs() < 1e-4, "{fit:?}");
    assert!((fit.params.sigma - sigma).abs() < 1e-4, "{fit:?}");
}

#[test]
fn test_fit_recovers_generating_line() {
    let params = SyntheticParams {
        n: 500,
        slope: -0.7,
        intercept: 12.0,
        noise_sd: 0.5,
        ..SyntheticParams::default_v1()
    };
    let samples = generate_samples(&params).unwrap();
    let fit = fit_line(&samples, [2.0, 2.0, 2.0]).unwrap();
    assert!((fit.params.slope + 0.7).abs() < 0.05);
    assert!((fit.params.intercept - 12.0).abs() < 0.25);
    assert!((fit.params.sigma - 0.5).abs() < 0.1);
    assert!((fit.predict(2.0) - (fit.params.slope * 2.0 + fit.params.intercept)).abs() < 1e-12);
}

#[test]
fn test_fit_too_few_samples() {
    let samples = Samples::new(vec![1.0, 3.0], vec![2.0, 7.0]).unwrap();
    assert_eq!(
        fit_line(&samples, [2.0, 2.0, 2.0]).unwrap_err(),
        FitError::TooFewSamples {
            needed: 3,
            found: 2
        }
    );
}

#[test]
fn test_fit_rejects_single_x_value() {
    let samples = Samples::new(vec![4.0, 4.0, 4.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(
        fit_line(&samples, [2.0, 2.0, 2.0]).unwrap_err(),
        FitError::DegenerateX(1)
    );
}

#[test]
fn test_fit_three_points_two_x_values() {
    let samples = Samples::new(vec![0.0, 0.0, 2.0], vec![1.0, 3.0, 6.0]).unwrap();
    let fit = fit_line(&samples, [2.0, 2.0, 2.0]).unwrap();
    // MLE passes through the mean at x = 0 and the single point at x = 2.
    assert!((fit.params.intercept - 2.0).abs() < 1e-3, "{fit:?}");
    assert!((fit.params.slope - 2.0).abs() < 1e-3, "{fit:?}");
    assert!((fit.params.sigma - (2.0f64 / 3.0).sqrt()).abs() < 1e-3, "{fit:?}");
}

#[test]
fn test_fit_rejects_non_positive_sigma_guess() {
    let samples = Samples::new(vec![0.0, 1.0, 2.0], vec![0.1, 1.2, 1.9]).unwrap();
    assert!(matches!(
        fit_line(&samples, [1.0, 0.0, 0.0]),
        Err(FitError::BadInitialGuess(_))
    ));
}

#[test]
fn test_fit_reports_iteration_limit() {
    let samples = generate_samples(&SyntheticParams::default_v1()).unwrap();
    let options = FitOptions {
        max_iter: 5,
        ..FitOptions::default()
    };
    let fit = fit_line_with(&samples, [2.0, 2.0, 2.0], &options).unwrap();
    assert!(!fit.converged);
    assert!(fit.iterations <= 5);
    assert!(fit.params.sigma > 0.0);
}
