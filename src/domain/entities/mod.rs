pub mod pricing_plan;
pub mod server_order;
pub mod support_ticket;

pub use pricing_plan::PlanInput;
pub use server_order::ServerInput;
pub use support_ticket::{TicketDepartment, TicketInput, TicketPriority};
