use serde::Deserialize;
use strum::{Display, EnumString};

/// Queues a ticket can be filed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TicketDepartment {
    Billing,
    Technical,
    Sales,
    Abuse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Normal,
    High,
    Urgent,
}

/// Support ticket as submitted from the contact form.
///
/// `department` and `priority` stay raw strings here so a bad value becomes a
/// field violation instead of a deserialization failure.
#[derive(Clone, Debug, Deserialize)]
pub struct TicketInput {
    pub email: String,
    pub subject: String,
    pub message: String,
    pub department: String,
    pub priority: String,
}
