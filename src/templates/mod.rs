pub mod messages;
pub mod render;
pub mod roles;

pub use render::{render_message, render_role, RoleData, TemplateError};
pub use render::{EscalationData, HandoffData, MessageData, NudgeData, SpawnData};
