use tempseries::{MIN_TEMPERATURE, Series, SeriesError};

#[test]
fn average_equals_sum_over_count() {
    let inputs = [
        vec![-1.0],
        vec![3.0, -5.0, 1.0, 5.0],
        vec![MIN_TEMPERATURE, 0.0, 100.5, 36.6, 36.6],
        vec![0.1, 0.2, 0.3],
    ];

    for temps in inputs {
        let count = temps.len() as f64;
        let series = Series::new(temps).unwrap();
        assert_eq!(series.sum() / count, series.average().unwrap());
    }
}

#[test]
fn read_only_queries_are_repeatable() {
    let series = Series::new(vec![12.5, -3.25, 7.0, 7.0, -40.0]).unwrap();

    let first = (
        series.sum(),
        series.min().unwrap(),
        series.max().unwrap(),
        series.deviation().unwrap(),
        series.find_temp_closest_to_value(7.1).unwrap(),
    );
    for _ in 0..3 {
        let again = (
            series.sum(),
            series.min().unwrap(),
            series.max().unwrap(),
            series.deviation().unwrap(),
            series.find_temp_closest_to_value(7.1).unwrap(),
        );
        assert_eq!(first, again);
    }
}

#[test]
fn capacity_grows_by_powers_of_two() {
    let mut series = Series::new(vec![1.0, 2.0, 3.0]).unwrap();

    let temps: Vec<f64> = (0..20).map(f64::from).collect();
    let capacity = series.add_temps(&temps);

    assert_eq!(capacity, 24);
    assert_eq!(capacity, series.capacity());
    assert_eq!(series.len(), 23);
    assert_eq!(series.empty_slots(), 1);
    assert_eq!(&series.values()[..3], &[1.0, 2.0, 3.0]);
    assert_eq!(&series.values()[3..], temps.as_slice());
}

#[test]
fn empty_series_errors_display() {
    let series = Series::new(Vec::new()).unwrap();
    let err = series.summary_statistics().unwrap_err();
    assert_eq!(err, SeriesError::EmptySeries);
    assert_eq!(err.to_string(), "series must not be empty");
}

#[test]
fn invalid_input_reports_position() {
    let err = Series::new(vec![0.0, 1.0, -500.0, -600.0]).unwrap_err();
    assert_eq!(
        err,
        SeriesError::InvalidInput {
            value: -500.0,
            index: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "temperature at index 2 must be at least -273, but is -500"
    );
}
