//! Skill-constrained technician dispatch.
//!
//! A [`Roster`] of technicians and service tickets is turned into a 0/1
//! [`AssignmentModel`] (exactly one technician per service, unqualified pairs
//! pinned to zero), handed to an [`AssignmentSolver`], and read back as an
//! [`AssignmentPlan`].

pub mod model;
pub mod plan;
pub mod roster;
pub mod router;
pub mod service;
pub mod solver;

pub use model::{AssignmentModel, DecisionVariable, ModelConstraint, Objective, VarIndex};
pub use plan::{Assignment, AssignmentPlan, AssignmentPlanView};
pub use roster::{Roster, ServiceId, ServiceTicket, Technician, TechnicianId};
pub use router::dispatch_router;
pub use service::{DispatchError, DispatchService};
pub use solver::{AssignmentSolver, MicroLpSolver, SolveStatus, SolverOutcome};
