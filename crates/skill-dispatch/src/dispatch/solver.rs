use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use serde::Serialize;
use tracing::{debug, warn};

use super::model::{AssignmentModel, ModelConstraint, Objective, VarIndex};

/// Outcome states reported by a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unknown,
}

impl SolveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::Unknown => "UNKNOWN",
        }
    }

    /// Whether the run produced an assignment that can be read back.
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

/// Status plus the boolean value of every model variable, in model order.
///
/// `values` is empty unless the status carries a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    values: Vec<bool>,
}

impl SolverOutcome {
    pub fn solved(status: SolveStatus, values: Vec<bool>) -> Self {
        Self { status, values }
    }

    pub fn unsolved(status: SolveStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
        }
    }

    pub fn value(&self, index: VarIndex) -> bool {
        self.values.get(index.0).copied().unwrap_or(false)
    }

    /// Number of variables set to true; the objective value of a solved model.
    pub fn selected(&self) -> usize {
        self.values.iter().filter(|value| **value).count()
    }
}

/// Seam between dispatch orchestration and the optimization backend.
pub trait AssignmentSolver: Send + Sync {
    fn solve(&self, model: &AssignmentModel) -> SolverOutcome;
}

/// Solves assignment models as 0/1 programs with the pure-Rust `microlp` backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicroLpSolver;

impl AssignmentSolver for MicroLpSolver {
    fn solve(&self, model: &AssignmentModel) -> SolverOutcome {
        let mut problem_variables = ProblemVariables::new();
        let decisions: Vec<Variable> = model
            .variables()
            .iter()
            .map(|var| problem_variables.add(variable().binary().name(var.name.clone())))
            .collect();

        let sum_of = |indices: &[VarIndex]| -> Expression {
            indices.iter().map(|index| decisions[index.0]).sum()
        };

        let objective = match model.objective() {
            Objective::MinimizeSum { variables } => sum_of(variables.as_slice()),
        };

        let mut problem = problem_variables.minimise(objective).using(microlp);
        for model_constraint in model.constraints() {
            problem = match model_constraint {
                ModelConstraint::ExactlyOne { variables, .. } => {
                    let total = sum_of(variables.as_slice());
                    problem.with(constraint!(total == 1))
                }
                ModelConstraint::ForcedFalse { variable } => {
                    let pinned = decisions[variable.0];
                    problem.with(constraint!(pinned == 0))
                }
            };
        }

        match problem.solve() {
            Ok(solution) => {
                let values = decisions
                    .iter()
                    .map(|decision| solution.value(*decision) > 0.5)
                    .collect();
                let outcome = SolverOutcome::solved(SolveStatus::Optimal, values);
                debug!(
                    variables = decisions.len(),
                    objective = outcome.selected(),
                    "assignment model solved"
                );
                outcome
            }
            Err(ResolutionError::Infeasible) => {
                debug!(variables = decisions.len(), "assignment model infeasible");
                SolverOutcome::unsolved(SolveStatus::Infeasible)
            }
            Err(error) => {
                warn!(%error, "solver returned without a usable status");
                SolverOutcome::unsolved(SolveStatus::Unknown)
            }
        }
    }
}
