use whittaker_rs::prelude::*;

fn model(lambda: f64) -> WhittakerModel<f64> {
    Whittaker::new().lambda(lambda).build().unwrap()
}

#[test]
fn test_concrete_scenario_between_knots() {
    // Quadratic-ish samples; the curvature penalty pulls the mid-gap value
    // above the linear average of the neighbors (2.5).
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let y = model(1.0).interpolate(1.5, &x_table, &y_table, 1).unwrap();

    assert_eq!(y.len(), 1);
    assert!(y[0] > 2.0 && y[0] < 3.0, "got {}", y[0]);
    assert!(y[0] > 2.5, "curvature penalty should lift above 2.5, got {}", y[0]);
    assert!((y[0] - 2.8157894736842).abs() < 1e-9, "got {}", y[0]);
}

#[test]
fn test_deterministic_across_calls() {
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut m = model(1.0);
    let first = m.interpolate(1.5, &x_table, &y_table, 1).unwrap();
    let second = m.interpolate(1.5, &x_table, &y_table, 1).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_straight_line_recovery() {
    // An affine trend has zero second difference, so the penalty vanishes
    // and the fit reproduces it exactly, inside and outside the knot range.
    let x_table = [0.0, 0.7, 1.3, 2.9, 4.0];
    let y_table: Vec<f64> = x_table.iter().map(|&x| 2.0 + 3.0 * x).collect();

    let mut m = model(1.0);
    for q in [-1.0, 0.35, 2.0, 5.5] {
        let y = m.interpolate(q, &x_table, &y_table, 1).unwrap();
        let expected = 2.0 + 3.0 * q;
        assert!(
            (y[0] - expected).abs() < 1e-8,
            "query {}: got {}, expected {}",
            q,
            y[0],
            expected
        );
    }
}

#[test]
fn test_channel_independence() {
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let ch0 = [0.0, 1.0, 4.0, 9.0];
    let ch1 = [5.0, 2.0, 7.0, 1.0];
    let interleaved = [0.0, 5.0, 1.0, 2.0, 4.0, 7.0, 9.0, 1.0];

    let mut m = model(1.0);
    let separate0 = m.interpolate(1.5, &x_table, &ch0, 1).unwrap();
    let separate1 = m.interpolate(1.5, &x_table, &ch1, 1).unwrap();
    let joint = m.interpolate(1.5, &x_table, &interleaved, 2).unwrap();

    assert_eq!(joint[0], separate0[0]);
    assert_eq!(joint[1], separate1[0]);
}

#[test]
fn test_minimal_two_knots_is_linear() {
    let x_table = [0.0, 1.0];
    let y_table = [1.0, 3.0];

    let mut m = model(1.0);
    for (q, expected) in [(0.5, 2.0), (2.0, 5.0), (-1.0, -1.0)] {
        let y = m.interpolate(q, &x_table, &y_table, 1).unwrap();
        assert!(
            (y[0] - expected).abs() < 1e-9,
            "query {}: got {}, expected {}",
            q,
            y[0],
            expected
        );
    }
}

#[test]
fn test_query_at_knot_tracks_sample() {
    // Querying exactly at a knot returns the smoothed value there; the gap
    // to the raw sample shrinks with the penalty's relative weight.
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let loose = model(1.0).interpolate(2.0, &x_table, &y_table, 1).unwrap();
    assert!((loose[0] - 4.0).abs() < 0.5, "got {}", loose[0]);

    let tight = model(1e-6).interpolate(2.0, &x_table, &y_table, 1).unwrap();
    assert!((tight[0] - 4.0).abs() < 1e-4, "got {}", tight[0]);
}

#[test]
fn test_lambda_increases_smoothing() {
    // At the knot x = 1 the raw sample is 1.0; heavier smoothing pulls the
    // fitted value monotonically toward the global trend.
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut prev = f64::NEG_INFINITY;
    for lambda in [0.01, 0.1, 1.0, 10.0, 100.0] {
        let y = model(lambda).interpolate(1.0, &x_table, &y_table, 1).unwrap();
        assert!(
            y[0] > prev,
            "lambda {}: expected monotone increase, got {} after {}",
            lambda,
            y[0],
            prev
        );
        prev = y[0];
    }
}

#[test]
fn test_extrapolation_is_finite() {
    let x_table = [0.0, 1.0, 2.0, 3.0];
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut m = model(1.0);
    for q in [-10.0, -0.5, 3.5, 10.0] {
        let y = m.interpolate(q, &x_table, &y_table, 1).unwrap();
        assert!(y[0].is_finite(), "query {}: got {}", q, y[0]);
    }
}

#[test]
fn test_interpolate_into_reuses_buffer() {
    let x_table = [0.0, 1.0, 2.0];
    let y_table = [0.0, 5.0, 1.0, 6.0, 2.0, 7.0];

    // Buffer longer than y_stride: only the first two slots are written.
    let mut buffer = [f64::NAN, f64::NAN, 42.0];
    let mut m = model(1.0);
    m.interpolate_into(0.5, &x_table, &y_table, 2, &mut buffer)
        .unwrap();

    assert!((buffer[0] - 0.5).abs() < 1e-9);
    assert!((buffer[1] - 5.5).abs() < 1e-9);
    assert_eq!(buffer[2], 42.0);
}

#[test]
fn test_interpolate_into_untouched_on_error() {
    let x_table = [0.0, 1.0, 1.0, 3.0]; // duplicate abscissa
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut buffer = [7.0];
    let err = model(1.0)
        .interpolate_into(1.5, &x_table, &y_table, 1, &mut buffer)
        .unwrap_err();

    assert!(matches!(err, WhittakerError::NonIncreasingAbscissas { index: 1 }));
    assert_eq!(buffer[0], 7.0);
}

#[test]
fn test_required_data_points() {
    assert_eq!(required_data_points(0), 2);
    assert_eq!(required_data_points(1), 2);
    assert_eq!(required_data_points(2), 3);
    assert_eq!(required_data_points(5), 6);
}

#[test]
fn test_rejects_mismatched_lengths() {
    let err = model(1.0)
        .interpolate(0.5, &[0.0, 1.0, 2.0], &[0.0, 1.0], 1)
        .unwrap_err();
    assert!(matches!(
        err,
        WhittakerError::MismatchedInputs {
            x_len: 3,
            y_len: 2,
            y_stride: 1
        }
    ));
}

#[test]
fn test_rejects_zero_stride() {
    let err = model(1.0)
        .interpolate(0.5, &[0.0, 1.0], &[0.0, 1.0], 0)
        .unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidStride));
}

#[test]
fn test_rejects_too_few_knots() {
    let err = model(1.0).interpolate(0.5, &[0.0], &[1.0], 1).unwrap_err();
    assert!(matches!(err, WhittakerError::TooFewPoints { got: 1, min: 2 }));
}

#[test]
fn test_rejects_non_finite_inputs() {
    let mut m = model(1.0);

    let err = m
        .interpolate(f64::NAN, &[0.0, 1.0], &[0.0, 1.0], 1)
        .unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidNumericValue(_)));

    let err = m
        .interpolate(0.5, &[0.0, f64::INFINITY], &[0.0, 1.0], 1)
        .unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidNumericValue(_)));

    let err = m
        .interpolate(0.5, &[0.0, 1.0], &[0.0, f64::NAN], 1)
        .unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidNumericValue(_)));
}

#[test]
fn test_rejects_short_output_buffer() {
    let x_table = [0.0, 1.0];
    let y_table = [0.0, 5.0, 1.0, 6.0];

    let mut buffer = [0.0];
    let err = model(1.0)
        .interpolate_into(0.5, &x_table, &y_table, 2, &mut buffer)
        .unwrap_err();
    assert!(matches!(err, WhittakerError::OutputTooSmall { got: 1, need: 2 }));
}

#[test]
fn test_rejects_invalid_lambda() {
    let err = Whittaker::new().lambda(0.0).build().unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidLambda(_)));

    let err = Whittaker::new().lambda(-1.0).build().unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidLambda(_)));

    let err = Whittaker::new().lambda(f64::NAN).build().unwrap_err();
    assert!(matches!(err, WhittakerError::InvalidLambda(_)));
}

#[test]
fn test_default_lambda_is_one() {
    let m: WhittakerModel<f64> = Whittaker::new().build().unwrap();
    assert_eq!(m.lambda(), 1.0);
}
