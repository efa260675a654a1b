use genopt::{error::GeneticError, evolution::GeneticOptimizationParams};

fn is_configuration_error<T: std::fmt::Debug>(result: Result<T, GeneticError>) -> bool {
    matches!(result, Err(GeneticError::Configuration(_)))
}

#[test]
fn test_valid_params() {
    let params = GeneticOptimizationParams::new(1000, 5000, 0.05, 0.01).unwrap();

    assert_eq!(params.get_population_size(), 1000);
    assert_eq!(params.get_max_generations(), 5000);
    assert_eq!(params.get_selection_percent(), 0.05);
    assert_eq!(params.get_mutation_prob(), 0.01);
    assert_eq!(params.get_target_value(), f64::INFINITY);
    assert!(!params.has_target());
}

#[test]
fn test_boundary_values_are_accepted() {
    assert!(GeneticOptimizationParams::new(1, 1, 1.0, 0.0).is_ok());
    assert!(GeneticOptimizationParams::new(1, 1, 1.0, 1.0).is_ok());
}

#[test]
fn test_invalid_sizes() {
    assert!(is_configuration_error(GeneticOptimizationParams::new(0, 10, 0.5, 0.1)));
    assert!(is_configuration_error(GeneticOptimizationParams::new(10, 0, 0.5, 0.1)));
}

#[test]
fn test_invalid_selection_percent() {
    for selection_percent in [0.0, -0.1, 1.000_001, 2.0, f64::NAN, f64::INFINITY] {
        assert!(
            is_configuration_error(GeneticOptimizationParams::new(10, 10, selection_percent, 0.1)),
            "selection percent {} accepted",
            selection_percent
        );
    }
}

#[test]
fn test_invalid_mutation_prob() {
    for mutation_prob in [-0.01, 1.01, f64::NAN, f64::NEG_INFINITY] {
        assert!(
            is_configuration_error(GeneticOptimizationParams::new(10, 10, 0.5, mutation_prob)),
            "mutation probability {} accepted",
            mutation_prob
        );
    }
}

#[test]
fn test_invalid_target_value() {
    let mut params = GeneticOptimizationParams::new(10, 10, 0.5, 0.1).unwrap();

    for target_value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(is_configuration_error(params.set_target_value(target_value)));
    }
    assert!(!params.has_target());

    params.set_target_value(-3.5).unwrap();
    assert_eq!(params.get_target_value(), -3.5);
}

#[test]
fn test_builder_validates() {
    let params = GeneticOptimizationParams::builder()
        .population_size(1000)
        .max_generations(10000)
        .selection_percent(0.15)
        .mutation_prob(0.01)
        .target_value(0.0)
        .target_tolerance(0.01)
        .build()
        .unwrap();

    assert_eq!(params.get_selection_size(), 150);
    assert_eq!(params.get_target_tolerance(), 0.01);

    assert!(is_configuration_error(
        GeneticOptimizationParams::builder().population_size(0).build()
    ));
    assert!(is_configuration_error(
        GeneticOptimizationParams::builder().target_value(f64::NAN).build()
    ));
    assert!(is_configuration_error(
        GeneticOptimizationParams::builder().target_tolerance(-0.5).build()
    ));
}
