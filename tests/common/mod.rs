use almagest::ObservationRequest;

/// Route `log` output of the crate to the test harness; safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Apollo 11 landing: 1969-07-20T20:17:00Z, Tranquility Base projected on the Earth.
#[allow(dead_code)]
pub fn moon_landing() -> ObservationRequest {
    ObservationRequest::from_civil(1969, 7, 20, 20, 17, 0, 0.67, 23.47, 0.0)
        .expect("valid moon landing request")
}

/// Absolute difference between two longitudes, wrapped into [0, 180].
#[allow(dead_code)]
pub fn longitude_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
