use serde::Serialize;

use super::roster::{Roster, ServiceId, TechnicianId};

/// Position of a decision variable inside an [`AssignmentModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VarIndex(pub usize);

/// Boolean unknown: true iff `technician` is assigned `service`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionVariable {
    pub name: String,
    pub technician: TechnicianId,
    pub service: ServiceId,
}

/// Linear constraints understood by the solver adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConstraint {
    /// The listed variables sum to exactly one.
    ExactlyOne {
        service: ServiceId,
        variables: Vec<VarIndex>,
    },
    /// The variable is pinned to zero.
    ForcedFalse { variable: VarIndex },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "sense", rename_all = "snake_case")]
pub enum Objective {
    MinimizeSum { variables: Vec<VarIndex> },
}

/// Declarative dispatch model: variables, constraints and objective.
///
/// Variables are laid out technician-major, so the pair (technician `t`,
/// service `s`) lives at `t * services + s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentModel {
    technicians: Vec<TechnicianId>,
    services: Vec<ServiceId>,
    variables: Vec<DecisionVariable>,
    constraints: Vec<ModelConstraint>,
    objective: Objective,
}

impl AssignmentModel {
    pub fn build(roster: &Roster) -> Self {
        let technicians: Vec<TechnicianId> = roster
            .technicians
            .iter()
            .map(|technician| technician.id.clone())
            .collect();
        let services: Vec<ServiceId> = roster
            .services
            .iter()
            .map(|service| service.id.clone())
            .collect();

        let mut variables = Vec::with_capacity(technicians.len() * services.len());
        for technician in &roster.technicians {
            for service in &roster.services {
                variables.push(DecisionVariable {
                    name: format!("asignacion_{}_{}", technician.id, service.id),
                    technician: technician.id.clone(),
                    service: service.id.clone(),
                });
            }
        }

        let mut model = Self {
            technicians,
            services,
            variables,
            constraints: Vec::new(),
            objective: Objective::MinimizeSum {
                variables: Vec::new(),
            },
        };

        for (s, service) in roster.services.iter().enumerate() {
            let column = (0..model.technicians.len())
                .map(|t| model.index(t, s))
                .collect();
            model.constraints.push(ModelConstraint::ExactlyOne {
                service: service.id.clone(),
                variables: column,
            });
        }

        for (t, technician) in roster.technicians.iter().enumerate() {
            for (s, service) in roster.services.iter().enumerate() {
                if !technician.qualifies_for(service) {
                    model.constraints.push(ModelConstraint::ForcedFalse {
                        variable: model.index(t, s),
                    });
                }
            }
        }

        model.objective = Objective::MinimizeSum {
            variables: (0..model.variables.len()).map(VarIndex).collect(),
        };

        model
    }

    fn index(&self, technician: usize, service: usize) -> VarIndex {
        VarIndex(technician * self.services.len() + service)
    }

    /// Index of the variable for the `technician`-th and `service`-th roster entries.
    pub fn variable_at(&self, technician: usize, service: usize) -> Option<VarIndex> {
        if technician < self.technicians.len() && service < self.services.len() {
            Some(self.index(technician, service))
        } else {
            None
        }
    }

    pub fn technicians(&self) -> &[TechnicianId] {
        &self.technicians
    }

    pub fn services(&self) -> &[ServiceId] {
        &self.services
    }

    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[ModelConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }
}
