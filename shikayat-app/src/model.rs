//! Application state shared by the pages.

use shikayat_router::Entity;

/// Who is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Citizen,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Resolved => "Resolved",
        }
    }

    /// The status an administrator moves a complaint to next.
    pub fn advance(&self) -> Self {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress | Status::Resolved => Status::Resolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: u32,
    pub department: &'static str,
    pub filed_by: String,
    pub status: Status,
}

/// Session and complaint store, standing in for browser storage and the backend.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub complaints: Vec<Complaint>,
    next_id: u32,
}

impl AppState {
    pub fn sign_in(&mut self, name: impl Into<String>, role: Role) {
        self.user = Some(User {
            name: name.into(),
            role,
        });
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn is_admin(&self) -> bool {
        matches!(&self.user, Some(user) if user.role == Role::Admin)
    }

    /// File a complaint for the signed-in user. Returns its id.
    pub fn file(&mut self, department: &'static str) -> Option<u32> {
        let filed_by = self.user.as_ref()?.name.clone();
        self.next_id += 1;
        let id = self.next_id;
        self.complaints.push(Complaint {
            id,
            department,
            filed_by,
            status: Status::Pending,
        });
        Some(id)
    }

    pub fn complaint(&self, id: u32) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    pub fn complaint_mut(&mut self, id: u32) -> Option<&mut Complaint> {
        self.complaints.iter_mut().find(|c| c.id == id)
    }

    /// Complaints filed by the signed-in user.
    pub fn own_complaints(&self) -> Vec<&Complaint> {
        let Some(user) = &self.user else {
            return Vec::new();
        };
        self.complaints
            .iter()
            .filter(|c| c.filed_by == user.name)
            .collect()
    }
}

pub type SharedState = Entity<AppState>;

#[derive(Debug, Clone, Copy)]
pub struct Officer {
    pub role: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

/// A government department complaints are routed to.
#[derive(Debug, Clone, Copy)]
pub struct Authority {
    pub id: &'static str,
    pub name: &'static str,
    pub name_hindi: &'static str,
    pub hours: &'static str,
    pub personnel: &'static [Officer],
    pub responsibilities: &'static [&'static str],
    pub resolution_rate: &'static str,
    pub avg_response_time: &'static str,
}

pub const AUTHORITIES: &[Authority] = &[
    Authority {
        id: "municipal",
        name: "Municipal Corporation",
        name_hindi: "नगर निगम",
        hours: "Mon-Fri: 9:00 AM - 6:00 PM, Sat: 9:00 AM - 1:00 PM",
        personnel: &[
            Officer { role: "Commissioner", name: "Dr. Rajesh Kumar", email: "commissioner@municipal.gov.in" },
            Officer { role: "Deputy Commissioner", name: "Ms. Priya Sharma", email: "deputy@municipal.gov.in" },
            Officer { role: "Chief Engineer", name: "Er. Amit Verma", email: "engineer@municipal.gov.in" },
        ],
        responsibilities: &[
            "Garbage collection and disposal",
            "Street cleaning and maintenance",
            "Public parks and gardens",
            "Building permits and approvals",
        ],
        resolution_rate: "86%",
        avg_response_time: "2.5 days",
    },
    Authority {
        id: "police",
        name: "Police Department",
        name_hindi: "पुलिस विभाग",
        hours: "24/7 Emergency Services",
        personnel: &[
            Officer { role: "Commissioner of Police", name: "Shri Rakesh Asthana", email: "cp@delhipolice.gov.in" },
            Officer { role: "DCP (Central)", name: "Ms. Shweta Singh", email: "dcp-central@delhipolice.gov.in" },
        ],
        responsibilities: &[
            "Law and order maintenance",
            "Traffic management",
            "Women and child safety",
        ],
        resolution_rate: "90%",
        avg_response_time: "1.2 days",
    },
    Authority {
        id: "electricity",
        name: "Electricity Board",
        name_hindi: "बिजली बोर्ड",
        hours: "Mon-Sat: 9:00 AM - 6:00 PM, Emergency: 24/7",
        personnel: &[
            Officer { role: "CEO", name: "Mr. Amal Sinha", email: "ceo@bses.co.in" },
            Officer { role: "Customer Care Head", name: "Ms. Neha Gupta", email: "customercare@bses.co.in" },
        ],
        responsibilities: &["Power supply", "Street lighting", "Meter and billing disputes"],
        resolution_rate: "89%",
        avg_response_time: "1.8 days",
    },
    Authority {
        id: "water",
        name: "Water Supply Department",
        name_hindi: "जल आपूर्ति विभाग",
        hours: "Mon-Fri: 9:00 AM - 5:00 PM, Emergency: 24/7",
        personnel: &[
            Officer { role: "CEO", name: "Shri Udit Prakash Rai", email: "ceo@delhijal.gov.in" },
            Officer { role: "Chief Engineer", name: "Er. Vinod Kumar", email: "ce@delhijal.gov.in" },
        ],
        responsibilities: &["Drinking water supply", "Pipeline leaks", "Sewer overflow"],
        resolution_rate: "86%",
        avg_response_time: "2.1 days",
    },
    Authority {
        id: "roads",
        name: "Public Works Department (Roads)",
        name_hindi: "लोक निर्माण विभाग (सड़कें)",
        hours: "Mon-Fri: 9:00 AM - 5:00 PM",
        personnel: &[
            Officer { role: "Chief Engineer", name: "Er. Ashok Verma", email: "ce-pwd@delhi.gov.in" },
            Officer { role: "Superintending Engineer", name: "Er. Sunita Rao", email: "se-pwd@delhi.gov.in" },
        ],
        responsibilities: &["Potholes and road repair", "Footpaths", "Flyovers and bridges"],
        resolution_rate: "87%",
        avg_response_time: "3.2 days",
    },
];

pub fn authority(id: &str) -> Option<&'static Authority> {
    AUTHORITIES.iter().find(|a| a.id == id)
}
