use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// Number of individuals kept when `selection_percent` of `population_size` survive.
///
/// This is `floor(selection_percent * population_size)`.
pub fn selection_size(population_size: usize, selection_percent: f64) -> Result<usize> {
    if !(selection_percent > 0.0 && selection_percent <= 1.0) {
        return Err(GeneticError::Configuration(format!(
            "Selection percent must be in (0, 1], found {}",
            selection_percent
        )));
    }
    Ok(kept_count(population_size, selection_percent))
}

/// `floor(selection_percent * population_size)` for an already validated percent.
pub(crate) fn kept_count(population_size: usize, selection_percent: f64) -> usize {
    (selection_percent * population_size as f64).floor() as usize
}

fn check_scored<G>(selected: &[Individual<G>]) -> Result<()> {
    selected.iter().try_for_each(|individual| {
        individual.scored_fitness().map(|_| ())
    })
}

/// Copies the `floor(selection_percent * n)` lowest-fitness individuals out of a
/// population ranked ascending by fitness.
///
/// The input is never modified. The copies keep their ascending order.
pub fn select_lowest<G: Clone>(
    population: &[Individual<G>],
    selection_percent: f64,
) -> Result<Vec<Individual<G>>> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let keep = selection_size(population.len(), selection_percent)?;
    let selected = &population[..keep];
    check_scored(selected)?;
    Ok(selected.to_vec())
}

/// Copies the `floor(selection_percent * n)` highest-fitness individuals out of a
/// population ranked ascending by fitness.
///
/// The input is never modified. The copies keep their ascending order.
pub fn select_highest<G: Clone>(
    population: &[Individual<G>],
    selection_percent: f64,
) -> Result<Vec<Individual<G>>> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let keep = selection_size(population.len(), selection_percent)?;
    let selected = &population[population.len() - keep..];
    check_scored(selected)?;
    Ok(selected.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(fitness: &[f64]) -> Vec<Individual<f64>> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual::with_fitness(i as f64, f).unwrap())
            .collect()
    }

    #[test]
    fn test_selection_size() {
        assert_eq!(selection_size(10, 0.15).unwrap(), 1);
        assert_eq!(selection_size(10, 1.0).unwrap(), 10);
        assert_eq!(selection_size(1000, 0.05).unwrap(), 50);
        assert_eq!(selection_size(3, 0.2).unwrap(), 0);
        assert!(selection_size(10, 0.0).is_err());
        assert!(selection_size(10, 1.01).is_err());
        assert!(selection_size(10, f64::NAN).is_err());
    }

    #[test]
    fn test_select_lowest() {
        let population = ranked(&[0.1, 0.3, 0.5, 0.8, 0.9]);
        let before = population.clone();

        let selected = select_lowest(&population, 0.4).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].fitness(), Some(0.1));
        assert_eq!(selected[1].fitness(), Some(0.3));
        assert_eq!(population, before);
    }

    #[test]
    fn test_select_highest() {
        let population = ranked(&[0.1, 0.3, 0.5, 0.8, 0.9]);

        let selected = select_highest(&population, 0.4).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].fitness(), Some(0.8));
        assert_eq!(selected[1].fitness(), Some(0.9));
    }

    #[test]
    fn test_select_empty_population() {
        let population: Vec<Individual<f64>> = Vec::new();
        assert!(matches!(
            select_lowest(&population, 0.5),
            Err(GeneticError::EmptyPopulation)
        ));
        assert!(matches!(
            select_highest(&population, 0.5),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_select_unscored_population() {
        let population = vec![Individual::new(1.0).unwrap(), Individual::new(2.0).unwrap()];
        assert!(matches!(
            select_lowest(&population, 1.0),
            Err(GeneticError::DomainValue(_))
        ));
    }
}
