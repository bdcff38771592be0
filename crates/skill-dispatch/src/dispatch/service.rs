use std::sync::Arc;

use tracing::{debug, warn};

use super::model::AssignmentModel;
use super::plan::AssignmentPlan;
use super::roster::Roster;
use super::solver::{AssignmentSolver, SolveStatus};

/// Builds a fresh model from the roster and solves it on every call.
pub struct DispatchService<S> {
    roster: Roster,
    solver: Arc<S>,
}

impl<S> DispatchService<S>
where
    S: AssignmentSolver + 'static,
{
    pub fn new(roster: Roster, solver: Arc<S>) -> Self {
        Self { roster, solver }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Solve the roster's assignment model and read the plan back.
    pub fn optimize(&self) -> Result<AssignmentPlan, DispatchError> {
        let model = AssignmentModel::build(&self.roster);
        debug!(
            technicians = model.technicians().len(),
            services = model.services().len(),
            constraints = model.constraints().len(),
            "assignment model built"
        );

        let outcome = self.solver.solve(&model);
        if !outcome.status.has_solution() {
            warn!(status = outcome.status.label(), "no feasible assignment");
            return Err(DispatchError::Infeasible {
                status: outcome.status,
            });
        }

        let plan = AssignmentPlan::from_outcome(&model, &outcome);
        for assignment in &plan.assignments {
            let required = self
                .roster
                .service(&assignment.service)
                .map(|ticket| ticket.required_skills.len())
                .unwrap_or_default();
            let held = assignment
                .technician
                .as_ref()
                .and_then(|id| self.roster.technician(id))
                .map(|technician| technician.skills.len());
            debug!(
                service = %assignment.service,
                technician = assignment.technician.as_ref().map(|id| id.0.as_str()),
                required_skills = required,
                held_skills = held,
                "service assigned"
            );
        }
        debug!(
            status = plan.status.label(),
            objective = plan.objective,
            "assignment plan ready"
        );
        Ok(plan)
    }
}

/// Error raised by the dispatch service.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no feasible assignment (solver status {})", .status.label())]
    Infeasible { status: SolveStatus },
}
