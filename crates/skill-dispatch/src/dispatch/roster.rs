use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for field technicians.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TechnicianId(pub String);

/// Identifier wrapper for service tickets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

impl fmt::Display for TechnicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A technician and the skill tags they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub id: TechnicianId,
    pub skills: BTreeSet<String>,
}

impl Technician {
    pub fn new(id: &str, skills: &[&str]) -> Self {
        Self {
            id: TechnicianId(id.to_string()),
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
        }
    }

    /// True when every skill the ticket requires is held by this technician.
    pub fn qualifies_for(&self, service: &ServiceTicket) -> bool {
        service.required_skills.is_subset(&self.skills)
    }
}

/// A service ticket and the skill tags needed to work it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTicket {
    pub id: ServiceId,
    pub required_skills: BTreeSet<String>,
}

impl ServiceTicket {
    pub fn new(id: &str, required_skills: &[&str]) -> Self {
        Self {
            id: ServiceId(id.to_string()),
            required_skills: required_skills
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
        }
    }
}

/// Ordered technician and service tables a dispatch model is built from.
///
/// Order matters: plans list services in roster order and, for each service,
/// report the first technician in roster order that the solver selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub technicians: Vec<Technician>,
    pub services: Vec<ServiceTicket>,
}

impl Roster {
    pub fn new(technicians: Vec<Technician>, services: Vec<ServiceTicket>) -> Self {
        Self {
            technicians,
            services,
        }
    }

    /// The fixed field-operations roster served by `/optimize`.
    pub fn standard() -> Self {
        Self::new(
            vec![
                Technician::new("T1", &["Fibra Óptica", "Routers"]),
                Technician::new("T2", &["Fibra Óptica", "Configuración de Red"]),
            ],
            vec![
                ServiceTicket::new("S1", &["Fibra Óptica"]),
                ServiceTicket::new("S2", &["Routers"]),
                ServiceTicket::new("S3", &["Fibra Óptica", "Configuración de Red"]),
            ],
        )
    }

    pub fn technician(&self, id: &TechnicianId) -> Option<&Technician> {
        self.technicians.iter().find(|technician| &technician.id == id)
    }

    pub fn service(&self, id: &ServiceId) -> Option<&ServiceTicket> {
        self.services.iter().find(|service| &service.id == id)
    }
}
