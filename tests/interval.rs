use approx::assert_relative_eq;
use kinematics_calculator::config::load_scenario;
use kinematics_calculator::update::{DistanceModel, KinematicsError};
use kinematics_calculator::{IntervalError, IntervalInputs, run_interval};

#[test]
fn reference_interval_matches_hand_calculation() {
    let report = run_interval(&IntervalInputs::default()).expect("reference interval");
    assert_relative_eq!(report.velocity_kmh, 48_880.0, max_relative = 1e-12);
    assert_relative_eq!(report.distance_km, 10_000.0, max_relative = 1e-12);
    assert_relative_eq!(report.remaining_fuel_kg, 3_200.0, max_relative = 1e-12);
    assert_eq!(report.distance_model, DistanceModel::Linear);
    assert_eq!(report.burn_time_remaining_s, Some(6_400.0));
}

#[test]
fn kinematic_model_flows_through_the_interval() {
    let inputs = IntervalInputs {
        distance_model: DistanceModel::ConstantAcceleration,
        ..IntervalInputs::default()
    };
    let report = run_interval(&inputs).expect("kinematic interval");
    assert_relative_eq!(report.distance_km, 29_440.0, max_relative = 1e-12);
    assert_relative_eq!(report.velocity_kmh, 48_880.0, max_relative = 1e-12);
}

#[test]
fn depletion_aborts_without_partial_report() {
    let inputs = IntervalInputs {
        remaining_fuel_kg: 100.0,
        burn_rate_kg_s: 1.0,
        duration_s: 200.0,
        ..IntervalInputs::default()
    };
    let err = run_interval(&inputs).unwrap_err();
    assert!(err.is_fuel_depletion());
    assert!(matches!(err, IntervalError::Fuel(_)));
}

#[test]
fn first_failing_update_is_reported() {
    let inputs = IntervalInputs {
        velocity_kmh: f64::NAN,
        ..IntervalInputs::default()
    };
    let err = run_interval(&inputs).unwrap_err();
    assert!(matches!(err, IntervalError::Velocity(_)));
    assert!(matches!(
        err.kinematics(),
        KinematicsError::InvalidArgument {
            name: "velocity_kmh",
            ..
        }
    ));

    let inputs = IntervalInputs {
        initial_distance_km: -1.0,
        ..IntervalInputs::default()
    };
    let err = run_interval(&inputs).unwrap_err();
    assert!(matches!(err, IntervalError::Distance(_)));
    assert!(!err.is_fuel_depletion());
}

#[test]
fn zero_burn_rate_has_no_depletion_time() {
    let inputs = IntervalInputs {
        burn_rate_kg_s: 0.0,
        ..IntervalInputs::default()
    };
    let report = run_interval(&inputs).expect("coasting interval");
    assert_eq!(report.remaining_fuel_kg, 5_000.0);
    assert_eq!(report.burn_time_remaining_s, None);
}

#[test]
fn scenario_file_drives_the_interval() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("brake.yaml");
    std::fs::write(
        &path,
        "velocity_kmh: 36.0\nacceleration_m_s2: -2.0\nduration_s: 10.0\ninitial_distance_km: 1.0\n",
    )
    .expect("write scenario");

    let report = run_interval(&load_scenario(&path).expect("scenario")).expect("interval");
    assert_relative_eq!(report.velocity_kmh, -36.0, max_relative = 1e-12);
    assert_relative_eq!(report.distance_km, 1.1, max_relative = 1e-12);
    assert_relative_eq!(report.remaining_fuel_kg, 4_995.0, max_relative = 1e-12);
}

#[test]
fn report_serializes_with_kebab_case_model() {
    let report = run_interval(&IntervalInputs::default()).expect("interval");
    let value = serde_json::to_value(&report).expect("json");
    assert_eq!(value["distance_model"], "linear");
    assert_eq!(value["burn_time_remaining_s"], 6_400.0);
}

#[test]
fn unrepresentable_burn_time_fails_instead_of_reporting_infinity() {
    let inputs = IntervalInputs {
        burn_rate_kg_s: 1e-320,
        ..IntervalInputs::default()
    };
    let err = run_interval(&inputs).unwrap_err();
    assert!(matches!(err, IntervalError::Fuel(_)));
    assert!(matches!(
        err.kinematics(),
        KinematicsError::InvalidArgument {
            name: "burn_time_s",
            ..
        }
    ));
}
