//! Integration tests for Gaussian elimination
//!
//! Reference systems and expected solutions from the classical textbook
//! examples used to validate pivoting and precision behaviour.

use approx::assert_abs_diff_eq;
use math_gauss::{
    GaussConfig, GaussError, NoTrace, PivotSearch, Precision, STATUS_INCONSISTENT, Solution,
    SubstitutionPolicy, back_substitute_into, crout_solve, eliminate, round_to_digits, solve,
    status_code,
};
use ndarray::{Array1, Array2, array, s};

const EPSILON: f64 = 1e-4;

fn classical_system() -> Array2<f64> {
    array![
        [0.0, 2.0, 0.0, 1.0, 0.0],
        [2.0, 2.0, 3.0, 2.0, -2.0],
        [4.0, -3.0, 0.0, 1.0, -7.0],
        [6.0, 1.0, -6.0, -5.0, 6.0],
    ]
}

fn five_by_six_system() -> Array2<f64> {
    array![
        [13.0, 4.0, 5.0, 0.0, 9.0, 101.0],
        [33.0, -2.0, -7.0, 8.0, 0.0, 3.0],
        [23.0, 32.0, 9.0, 5.0, 1.0, 7.0],
        [54.0, 34.0, 87.0, 2.0, 4.0, 66.0],
        [-5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
    ]
}

const FIVE_BY_SIX_SOLUTION: [f64; 5] = [1.7424, -0.0149, -0.5640, -7.3098, 9.0253];

fn max_residual(system: &Array2<f64>, x: &Array1<f64>) -> f64 {
    let n = system.ncols() - 1;
    let coeffs = system.slice(s![.., ..n]);
    let rhs = system.column(n);
    (coeffs.dot(x) - rhs)
        .iter()
        .fold(0.0, |acc: f64, r| acc.max(r.abs()))
}

fn solve_values(system: &Array2<f64>, config: &GaussConfig) -> Solution<f64> {
    let mut a = system.clone();
    solve(&mut a, config)
        .expect("solve should succeed")
        .expect("augmented system yields a solution")
}

#[test]
fn test_classical_system_with_pivoting() {
    let solution = solve_values(&classical_system(), &GaussConfig::default());

    assert!(solution.is_complete());
    let expected = [-0.5, 1.0, 0.3333, -2.0];
    for (i, &e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(solution.values[i], e, epsilon = EPSILON);
    }
    assert!(max_residual(&classical_system(), &solution.values) < 1e-12);
}

#[test]
fn test_classical_system_without_pivoting() {
    let config = GaussConfig::default().with_pivoting(false);
    let solution = solve_values(&classical_system(), &config);

    // The zero leading pivot poisons every unknown that depends on it
    for i in 1..4 {
        assert!(solution.is_solved(i));
        assert!(solution.values[i].is_nan(), "x[{}] should be NaN", i);
    }
    // x[0] only appears in the first row, where its coefficient is zero
    assert!(!solution.is_solved(0));
    assert!(solution.values[0].is_nan());
}

#[test]
fn test_classical_system_reused_buffer() {
    // Reusing the output buffer of a pivoted run keeps the value of x[0],
    // which the unpivoted run never touches
    let config = GaussConfig::default();
    let mut solution = Solution::new(4);

    let mut a = classical_system();
    eliminate(&mut a, &config).unwrap();
    back_substitute_into(&a, &mut solution, &config, &mut NoTrace).unwrap();

    let config = config.with_pivoting(false);
    let mut a = classical_system();
    eliminate(&mut a, &config).unwrap();
    solution.reset_flags();
    back_substitute_into(&a, &mut solution, &config, &mut NoTrace).unwrap();

    assert_abs_diff_eq!(solution.values[0], -0.5, epsilon = EPSILON);
    assert!(!solution.is_solved(0));
    for i in 1..4 {
        assert!(solution.values[i].is_nan());
    }
}

#[test]
fn test_five_by_six_system() {
    for pivoting in [true, false] {
        let config = GaussConfig::default().with_pivoting(pivoting);
        let solution = solve_values(&five_by_six_system(), &config);

        for (i, &e) in FIVE_BY_SIX_SOLUTION.iter().enumerate() {
            assert_abs_diff_eq!(solution.values[i], e, epsilon = EPSILON);
        }
        assert!(max_residual(&five_by_six_system(), &solution.values) < 1e-10);
    }
}

#[test]
fn test_five_by_six_system_magnitude_search() {
    let config = GaussConfig::default().with_pivot_search(PivotSearch::Magnitude);
    let solution = solve_values(&five_by_six_system(), &config);
    for (i, &e) in FIVE_BY_SIX_SOLUTION.iter().enumerate() {
        assert_abs_diff_eq!(solution.values[i], e, epsilon = EPSILON);
    }
}

#[test]
fn test_limited_precision_tracks_digit_budget() {
    let scale = FIVE_BY_SIX_SOLUTION
        .iter()
        .fold(0.0, |acc: f64, v| acc.max(v.abs()));

    for digits in 3..=6 {
        let config = GaussConfig::default().with_precision(Precision::Digits(digits));
        let solution = solve_values(&five_by_six_system(), &config);
        let tolerance = 10f64.powi(1 - digits as i32) * scale;

        for (i, &e) in FIVE_BY_SIX_SOLUTION.iter().enumerate() {
            assert_abs_diff_eq!(solution.values[i], e, epsilon = tolerance);
        }
        // Every stored value respects the digit budget
        for &v in solution.values.iter() {
            assert_eq!(round_to_digits(v, digits), v);
        }
    }
}

#[test]
fn test_exact_nonsingular_residual() {
    let n = 8;
    let system = Array2::from_shape_fn((n, n + 1), |(i, j)| {
        if i == j {
            10.0 + i as f64
        } else {
            ((i * 5 + j * 3) % 11) as f64 - 5.0
        }
    });
    let solution = solve_values(&system, &GaussConfig::default());
    assert!(solution.is_complete());
    assert!(max_residual(&system, &solution.values) < 1e-10);
}

#[test]
fn test_inconsistent_system() {
    let mut a = array![[1.0, 2.0, 3.0], [2.0, 4.0, 7.0]];
    let result = solve(&mut a, &GaussConfig::default());
    assert!(matches!(result, Err(GaussError::Inconsistent { .. })));
    assert_eq!(status_code(&result), STATUS_INCONSISTENT);

    // No value is fabricated for the contradictory row
    let mut solution = Solution::<f64>::new(2);
    let result = back_substitute_into(&a, &mut solution, &GaussConfig::default(), &mut NoTrace);
    assert!(result.is_err());
    assert!(solution.solved_flags().iter().all(|&s| !s));
    assert!(solution.values.iter().all(|v| v.is_nan()));
}

#[test]
fn test_free_variable_assignment() {
    let system = array![[1.0, 1.0, 1.0, 6.0], [0.0, 1.0, 1.0, 3.0]];
    let solution = solve_values(&system, &GaussConfig::default());

    assert_eq!(solution.free_variables(), &[2]);
    assert_eq!(solution.values[2], 1.0);
    assert_abs_diff_eq!(solution.values[1], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.values[0], 3.0, epsilon = 1e-12);
    assert!(max_residual(&system, &solution.values) < 1e-12);
}

#[test]
fn test_free_variables_in_single_row() {
    // x0 + 2 x1 + 3 x2 = 10 with x1 = x2 = 1
    let system = array![[1.0, 2.0, 3.0, 10.0]];
    let solution = solve_values(&system, &GaussConfig::default());

    assert_eq!(solution.free_variables(), &[1, 2]);
    assert_eq!(solution.values[1], 1.0);
    assert_eq!(solution.values[2], 1.0);
    assert_abs_diff_eq!(solution.values[0], 5.0, epsilon = 1e-12);
}

#[test]
fn test_strict_policy() {
    let mut a = array![[1.0, 1.0, 1.0, 6.0], [0.0, 1.0, 1.0, 3.0]];
    let config = GaussConfig::default().with_substitution(SubstitutionPolicy::Strict);
    let result = solve(&mut a, &config);
    assert!(matches!(
        result,
        Err(GaussError::InsufficientEquations { row: 1, .. })
    ));
    assert_eq!(status_code(&result), -1);
}

#[test]
fn test_rounding_properties() {
    for d in 1..=15 {
        assert_eq!(round_to_digits(0.0_f64, d), 0.0);
    }

    let values = [
        std::f64::consts::PI,
        -std::f64::consts::E,
        1234.5678,
        0.000987654,
        -42.0,
        6.02214076e23,
        1.602176634e-19,
        1e6,
        1356614.2298,
        -3.7e-28,
    ];
    for &v in &values {
        for d in 1..=10 {
            let once = round_to_digits(v, d);
            assert_eq!(round_to_digits(once, d), once, "v = {}, d = {}", v, d);
        }
    }
}

#[test]
fn test_config_from_json_drives_solve() {
    let config: GaussConfig =
        serde_json::from_str(r#"{ "pivoting": true, "precision": 4 }"#).unwrap();
    let solution = solve_values(&classical_system(), &config);
    let expected = [-0.5, 1.0, 0.3333, -2.0];
    for (i, &e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(solution.values[i], e, epsilon = 2e-3);
    }
}

#[test]
fn test_crout_matches_elimination() {
    let system = five_by_six_system();
    let coeffs = system.slice(s![.., ..5]).to_owned();
    let rhs = system.column(5).to_owned();

    let x = crout_solve(&coeffs, &rhs, Precision::Exact).expect("Crout solve should succeed");
    for (i, &e) in FIVE_BY_SIX_SOLUTION.iter().enumerate() {
        assert_abs_diff_eq!(x[i], e, epsilon = EPSILON);
    }
}
