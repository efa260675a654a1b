//! # N-Queens
//!
//! Place `n` queens on an `n x n` board so that no two attack each other.
//! A board holds one queen per column: `board[column]` is the queen's row.
//! Fitness is the number of attacking pairs, so a solution scores `0.0`.
//!
//! ## Example
//!
//! ```rust
//! use genopt::strategy::NQueensStrategy;
//!
//! assert_eq!(NQueensStrategy::conflict_score(&[1, 3, 0, 2]), 0);
//! assert_eq!(NQueensStrategy::conflict_score(&[0, 0, 0, 0]), 6);
//! ```

use rand::Rng;

use crate::breeding::{
    crossover_population, mutate_loci, mutate_population, random_splice, redraw_index,
};
use crate::error::{GeneticError, Result};
use crate::individual::{Individual, Population};
use crate::parallel::{self, Execution};
use crate::rng::RandomNumberGenerator;
use crate::selection::Objective;
use crate::strategy::ProblemStrategy;

/// Smallest board with a solution other than the trivial 1x1 board.
pub const MIN_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct NQueensStrategy {
    n: usize,
    rng: RandomNumberGenerator,
    execution: Execution,
}

impl NQueensStrategy {
    /// Creates a strategy for an `n x n` board. Fails for `n < 4`.
    pub fn new(n: usize, rng: RandomNumberGenerator) -> Result<Self> {
        if n < MIN_BOARD_SIZE {
            return Err(GeneticError::DomainValue(format!(
                "Board size must be at least {}, found {}",
                MIN_BOARD_SIZE, n
            )));
        }
        Ok(Self {
            n,
            rng,
            execution: Execution::Sequential,
        })
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn board_size(&self) -> usize {
        self.n
    }

    /// Checks that a board fits this problem: length `n`, every row below `n`.
    pub fn validate_board(&self, board: &[usize]) -> Result<()> {
        if board.len() != self.n {
            return Err(GeneticError::DomainValue(format!(
                "Board must have {} columns, found {}",
                self.n,
                board.len()
            )));
        }
        if let Some(&row) = board.iter().find(|&&row| row >= self.n) {
            return Err(GeneticError::DomainValue(format!(
                "Row {} is outside a board of size {}",
                row, self.n
            )));
        }
        Ok(())
    }

    /// Counts attacking pairs. Each pair is counted once, whether it shares a row or a diagonal.
    pub fn conflict_score(board: &[usize]) -> usize {
        let mut score = 0;
        for (column, &row) in board.iter().enumerate() {
            for (other_column, &other_row) in board.iter().enumerate().skip(column + 1) {
                if row == other_row || row.abs_diff(other_row) == other_column - column {
                    score += 1;
                }
            }
        }
        score
    }

    /// Draws the board as text: `Q` marks a queen and `*` an empty square.
    pub fn render(board: &[usize]) -> String {
        let mut text = String::with_capacity(board.len() * (board.len() * 2 + 1));
        for row in 0..board.len() {
            for &queen_row in board {
                text.push_str(if queen_row == row { "Q " } else { "* " });
            }
            text.push('\n');
        }
        text
    }
}

impl ProblemStrategy for NQueensStrategy {
    type Genes = Vec<usize>;

    fn generate_initial_population(&mut self, size: usize) -> Result<Population<Vec<usize>>> {
        let n = self.n;
        parallel::generate(self.execution, size, self.rng.split(), |_, rng| {
            let board = (0..n).map(|_| rng.gen_range(0..n)).collect();
            Individual::new(board)
        })
    }

    fn calculate_fitness(&mut self, population: &mut [Individual<Vec<usize>>]) -> Result<()> {
        population
            .iter()
            .try_for_each(|individual| self.validate_board(individual.genes()))?;

        parallel::evaluate(self.execution, population, |board| {
            Self::conflict_score(board) as f64
        })
    }

    fn best_individual<'a>(
        &self,
        population: &'a [Individual<Vec<usize>>],
    ) -> Result<&'a Individual<Vec<usize>>> {
        Objective::Minimize.best(population)
    }

    fn selection(
        &self,
        population: &[Individual<Vec<usize>>],
        selection_percent: f64,
    ) -> Result<Population<Vec<usize>>> {
        Objective::Minimize.select(population, selection_percent)
    }

    fn crossover(
        &mut self,
        sub_population: &[Individual<Vec<usize>>],
        target_size: usize,
    ) -> Result<Population<Vec<usize>>> {
        crossover_population(
            self.execution,
            sub_population,
            target_size,
            self.rng.split(),
            |first, second, rng| random_splice(first, second, rng),
        )
    }

    fn mutate(
        &mut self,
        population: &mut [Individual<Vec<usize>>],
        mutation_prob: f64,
    ) -> Result<()> {
        let n = self.n;
        mutate_population(
            self.execution,
            population,
            mutation_prob,
            self.rng.split(),
            |board, prob, rng| {
                mutate_loci(board, prob, rng, |&row, r| redraw_index(row, n, r));
            },
        )
    }
}
