use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::AssignmentModel;
use super::roster::{ServiceId, TechnicianId};
use super::solver::{SolveStatus, SolverOutcome};

/// The technician chosen for one service, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub service: ServiceId,
    pub technician: Option<TechnicianId>,
}

/// Per-service assignment read back from a solved model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPlan {
    pub status: SolveStatus,
    pub objective: usize,
    pub assignments: Vec<Assignment>,
}

impl AssignmentPlan {
    /// Walk services in model order, taking the first selected technician for each.
    pub fn from_outcome(model: &AssignmentModel, outcome: &SolverOutcome) -> Self {
        let assignments = model
            .services()
            .iter()
            .enumerate()
            .map(|(s, service)| {
                let technician = model
                    .technicians()
                    .iter()
                    .enumerate()
                    .find(|(t, _)| {
                        model
                            .variable_at(*t, s)
                            .is_some_and(|index| outcome.value(index))
                    })
                    .map(|(_, technician)| technician.clone());
                Assignment {
                    service: service.clone(),
                    technician,
                }
            })
            .collect();

        Self {
            status: outcome.status,
            objective: outcome.selected(),
            assignments,
        }
    }

    pub fn technician_for(&self, service: &ServiceId) -> Option<&TechnicianId> {
        self.assignments
            .iter()
            .find(|assignment| &assignment.service == service)
            .and_then(|assignment| assignment.technician.as_ref())
    }

    pub fn view(&self, solved_at: DateTime<Utc>) -> AssignmentPlanView {
        AssignmentPlanView {
            status: self.status,
            objective: self.objective,
            solved_at,
            assignments: self.assignments.clone(),
        }
    }
}

/// Plain-text rendering served by `/optimize`.
impl fmt::Display for AssignmentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Solución:")?;
        for assignment in &self.assignments {
            match &assignment.technician {
                Some(technician) => write!(
                    f,
                    "\nServicio {} asignado a técnico {}",
                    assignment.service, technician
                )?,
                None => write!(f, "\nServicio {}: sin asignación", assignment.service)?,
            }
        }
        Ok(())
    }
}

/// JSON rendering of a plan for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentPlanView {
    pub status: SolveStatus,
    pub objective: usize,
    pub solved_at: DateTime<Utc>,
    pub assignments: Vec<Assignment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::roster::Roster;
    use chrono::TimeZone;

    fn standard_outcome(values: [bool; 6]) -> (AssignmentModel, SolverOutcome) {
        let model = AssignmentModel::build(&Roster::standard());
        let outcome = SolverOutcome::solved(SolveStatus::Optimal, values.to_vec());
        (model, outcome)
    }

    #[test]
    fn renders_one_line_per_service() {
        // T1: S1, S2 / T2: S3
        let (model, outcome) = standard_outcome([true, true, false, false, false, true]);
        let plan = AssignmentPlan::from_outcome(&model, &outcome);

        assert_eq!(plan.objective, 3);
        assert_eq!(
            plan.to_string(),
            "Solución:\n\
             Servicio S1 asignado a técnico T1\n\
             Servicio S2 asignado a técnico T1\n\
             Servicio S3 asignado a técnico T2"
        );
    }

    #[test]
    fn unassigned_services_are_called_out() {
        let (model, outcome) = standard_outcome([false, true, false, false, false, false]);
        let plan = AssignmentPlan::from_outcome(&model, &outcome);

        assert!(plan.technician_for(&ServiceId("S1".to_string())).is_none());
        assert_eq!(
            plan.to_string(),
            "Solución:\n\
             Servicio S1: sin asignación\n\
             Servicio S2 asignado a técnico T1\n\
             Servicio S3: sin asignación"
        );
    }

    #[test]
    fn first_selected_technician_wins() {
        let (model, outcome) = standard_outcome([true, true, false, true, false, true]);
        let plan = AssignmentPlan::from_outcome(&model, &outcome);
        assert_eq!(
            plan.technician_for(&ServiceId("S1".to_string())),
            Some(&TechnicianId("T1".to_string()))
        );
    }

    #[test]
    fn view_serializes_missing_technicians_as_null() {
        let (model, outcome) = standard_outcome([false, true, false, false, false, true]);
        let solved_at = Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let view = AssignmentPlan::from_outcome(&model, &outcome).view(solved_at);

        let json = serde_json::to_value(&view).expect("serializes");
        assert_eq!(json["status"], "OPTIMAL");
        assert_eq!(json["objective"], 2);
        assert_eq!(json["solved_at"], "2025-03-14T09:30:00Z");
        assert_eq!(json["assignments"][0]["service"], "S1");
        assert!(json["assignments"][0]["technician"].is_null());
        assert_eq!(json["assignments"][2]["technician"], "T2");
    }
}
