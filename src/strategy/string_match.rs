//! # String matching
//!
//! Evolve random strings towards a fixed target string. Fitness is the sum of the
//! absolute differences between the character codes of a candidate and the
//! target, position by position, so the target itself scores `0.0`.
//!
//! ## Example
//!
//! ```rust
//! use genopt::rng::RandomNumberGenerator;
//! use genopt::strategy::{Alphabet, StringMatchStrategy};
//!
//! let strategy = StringMatchStrategy::new(
//!     "Hello",
//!     Alphabet::default(),
//!     RandomNumberGenerator::from_seed(42),
//! )
//! .unwrap();
//!
//! assert_eq!(strategy.distance("Hello"), 0.0);
//! assert_eq!(strategy.distance("Hellp"), 1.0);
//! ```

use rand::{rngs::StdRng, Rng};

use crate::breeding::{
    crossover_population, mutate_loci, mutate_population, random_splice, redraw_index,
};
use crate::error::{GeneticError, Result};
use crate::individual::{Individual, Population};
use crate::parallel::{self, Execution};
use crate::rng::RandomNumberGenerator;
use crate::selection::Objective;
use crate::strategy::ProblemStrategy;

/// Digits, ASCII letters and the space character.
pub const DEFAULT_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz ";

/// The set of characters random strings are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the distinct characters of `symbols`, in order of first appearance.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut distinct: Vec<char> = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }

        if distinct.len() < 2 {
            return Err(GeneticError::DomainValue(format!(
                "Alphabet needs at least 2 distinct characters, found {}",
                distinct.len()
            )));
        }

        Ok(Self { symbols: distinct })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn generate_char(&self, rng: &mut StdRng) -> char {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }

    /// Generates a string of `len` characters drawn uniformly from the alphabet.
    pub fn generate_string(&self, len: usize, rng: &mut StdRng) -> String {
        (0..len).map(|_| self.generate_char(rng)).collect()
    }

    /// Draws a character different from `current`.
    pub fn redraw_char(&self, current: char, rng: &mut StdRng) -> char {
        match self.symbols.iter().position(|&symbol| symbol == current) {
            Some(index) => self.symbols[redraw_index(index, self.symbols.len(), rng)],
            None => self.generate_char(rng),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StringMatchStrategy {
    target: Vec<char>,
    alphabet: Alphabet,
    rng: RandomNumberGenerator,
    execution: Execution,
}

impl StringMatchStrategy {
    /// Creates a strategy searching for `target`.
    ///
    /// The target must be non-empty and written only with characters of `alphabet`,
    /// otherwise it could never be reached.
    pub fn new(target: &str, alphabet: Alphabet, rng: RandomNumberGenerator) -> Result<Self> {
        if target.is_empty() {
            return Err(GeneticError::DomainValue(
                "Target string must not be empty".to_string(),
            ));
        }
        if let Some(symbol) = target.chars().find(|&symbol| !alphabet.contains(symbol)) {
            return Err(GeneticError::DomainValue(format!(
                "Target character {:?} is not part of the alphabet",
                symbol
            )));
        }

        Ok(Self {
            target: target.chars().collect(),
            alphabet,
            rng,
            execution: Execution::Sequential,
        })
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Sum of absolute character code differences between `candidate` and the target.
    ///
    /// `candidate` is expected to have the target's length; extra characters on
    /// either side are ignored.
    pub fn distance(&self, candidate: &str) -> f64 {
        candidate
            .chars()
            .zip(&self.target)
            .map(|(found, &wanted)| (found as u32).abs_diff(wanted as u32) as f64)
            .sum()
    }

    fn validate_candidate(&self, candidate: &str) -> Result<()> {
        let len = candidate.chars().count();
        if len != self.target.len() {
            return Err(GeneticError::DomainValue(format!(
                "Candidate must have {} characters, found {}",
                self.target.len(),
                len
            )));
        }
        Ok(())
    }
}

impl ProblemStrategy for StringMatchStrategy {
    type Genes = String;

    fn generate_initial_population(&mut self, size: usize) -> Result<Population<String>> {
        let len = self.target.len();
        let alphabet = &self.alphabet;
        parallel::generate(self.execution, size, self.rng.split(), |_, rng| {
            Individual::new(alphabet.generate_string(len, rng))
        })
    }

    fn calculate_fitness(&mut self, population: &mut [Individual<String>]) -> Result<()> {
        population
            .iter()
            .try_for_each(|individual| self.validate_candidate(individual.genes()))?;

        let strategy = &*self;
        parallel::evaluate(self.execution, population, |candidate| {
            strategy.distance(candidate)
        })
    }

    fn best_individual<'a>(
        &self,
        population: &'a [Individual<String>],
    ) -> Result<&'a Individual<String>> {
        Objective::Minimize.best(population)
    }

    fn selection(
        &self,
        population: &[Individual<String>],
        selection_percent: f64,
    ) -> Result<Population<String>> {
        Objective::Minimize.select(population, selection_percent)
    }

    fn crossover(
        &mut self,
        sub_population: &[Individual<String>],
        target_size: usize,
    ) -> Result<Population<String>> {
        crossover_population(
            self.execution,
            sub_population,
            target_size,
            self.rng.split(),
            |first, second, rng| {
                let first: Vec<char> = first.chars().collect();
                let second: Vec<char> = second.chars().collect();
                Ok(random_splice(&first, &second, rng)?.into_iter().collect())
            },
        )
    }

    fn mutate(&mut self, population: &mut [Individual<String>], mutation_prob: f64) -> Result<()> {
        let alphabet = &self.alphabet;
        mutate_population(
            self.execution,
            population,
            mutation_prob,
            self.rng.split(),
            |genes, prob, rng| {
                let mut symbols: Vec<char> = genes.chars().collect();
                if mutate_loci(&mut symbols, prob, rng, |&c, r| alphabet.redraw_char(c, r)) > 0 {
                    *genes = symbols.into_iter().collect();
                }
            },
        )
    }
}
