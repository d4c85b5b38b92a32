use regex::Regex;
use std::fmt;

use crate::templates::messages::message_template;
use crate::templates::roles::role_template;

#[derive(Debug)]
pub enum TemplateError {
    UnknownTemplate(String),
    MissingField { template: String, field: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownTemplate(name) => {
                write!(f, "Unknown template: {}", name)
            }
            TemplateError::MissingField { template, field } => {
                write!(
                    f,
                    "Template {} references field {} not present in the data",
                    template, field
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Data for rendering a role briefing.
#[derive(Debug, Clone, Default)]
pub struct RoleData {
    pub role: String,
    pub rig_name: String,
    pub town_root: String,
    pub work_dir: String,
    pub polecat: String,
    pub polecats: Vec<String>,
    pub beads_dir: String,
    pub issue_prefix: String,
}

impl RoleData {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Role", self.role.clone()),
            ("RigName", self.rig_name.clone()),
            ("TownRoot", self.town_root.clone()),
            ("WorkDir", self.work_dir.clone()),
            ("Polecat", self.polecat.clone()),
            ("Polecats", bullet_list(&self.polecats)),
            ("BeadsDir", self.beads_dir.clone()),
            ("IssuePrefix", self.issue_prefix.clone()),
        ]
    }
}

/// Field source for message templates. Each message kind supplies its own
/// placeholder values.
pub trait MessageData {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Data for a spawn assignment message.
#[derive(Debug, Clone, Default)]
pub struct SpawnData {
    pub issue: String,
    pub title: String,
    pub priority: u32,
    pub description: String,
    pub branch: String,
    pub rig_name: String,
    pub polecat: String,
}

impl MessageData for SpawnData {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Issue", self.issue.clone()),
            ("Title", self.title.clone()),
            ("Priority", self.priority.to_string()),
            ("Description", self.description.clone()),
            ("Branch", self.branch.clone()),
            ("RigName", self.rig_name.clone()),
            ("Polecat", self.polecat.clone()),
        ]
    }
}

/// Data for a nudge message.
#[derive(Debug, Clone, Default)]
pub struct NudgeData {
    pub polecat: String,
    pub reason: String,
    pub nudge_count: u32,
    pub max_nudges: u32,
    pub issue: String,
    pub status: String,
}

impl MessageData for NudgeData {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Polecat", self.polecat.clone()),
            ("Reason", self.reason.clone()),
            ("NudgeCount", self.nudge_count.to_string()),
            ("MaxNudges", self.max_nudges.to_string()),
            ("Issue", self.issue.clone()),
            ("Status", self.status.clone()),
        ]
    }
}

/// Data for an escalation message.
#[derive(Debug, Clone, Default)]
pub struct EscalationData {
    pub polecat: String,
    pub issue: String,
    pub reason: String,
    pub nudge_count: u32,
    pub last_status: String,
    pub suggestions: Vec<String>,
}

impl MessageData for EscalationData {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Polecat", self.polecat.clone()),
            ("Issue", self.issue.clone()),
            ("Reason", self.reason.clone()),
            ("NudgeCount", self.nudge_count.to_string()),
            ("LastStatus", self.last_status.clone()),
            ("Suggestions", bullet_list(&self.suggestions)),
        ]
    }
}

/// Data for a session handoff message.
#[derive(Debug, Clone, Default)]
pub struct HandoffData {
    pub role: String,
    pub current_work: String,
    pub status: String,
    pub next_steps: Vec<String>,
    pub notes: String,
    pub pending_mail: u32,
    pub git_branch: String,
    pub git_dirty: bool,
}

impl MessageData for HandoffData {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Role", self.role.clone()),
            ("CurrentWork", self.current_work.clone()),
            ("Status", self.status.clone()),
            ("NextSteps", bullet_list(&self.next_steps)),
            ("Notes", self.notes.clone()),
            ("PendingMail", self.pending_mail.to_string()),
            ("GitBranch", self.git_branch.clone()),
            ("GitDirty", if self.git_dirty { "dirty" } else { "clean" }.to_string()),
        ]
    }
}

/// Render a role briefing template.
pub fn render_role(role: &str, data: &RoleData) -> Result<String, TemplateError> {
    let template =
        role_template(role).ok_or_else(|| TemplateError::UnknownTemplate(role.to_string()))?;
    render(role, template, &data.fields())
}

/// Render a message template.
pub fn render_message(name: &str, data: &impl MessageData) -> Result<String, TemplateError> {
    let template =
        message_template(name).ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;
    render(name, template, &data.fields())
}

/// Names of the available role templates.
pub fn role_names() -> &'static [&'static str] {
    &["mayor", "witness", "refinery", "polecat", "crew"]
}

/// Names of the available message templates.
pub fn message_names() -> &'static [&'static str] {
    &["spawn", "nudge", "escalation", "handoff"]
}

/// Substitute every {{Field}} placeholder in the template from the field
/// list. A placeholder with no matching field fails the whole render; no
/// partial output is produced.
fn render(
    name: &str,
    template: &str,
    fields: &[(&'static str, String)],
) -> Result<String, TemplateError> {
    let re = Regex::new(r"\{\{(\w+)\}\}").unwrap();

    let mut output = String::with_capacity(template.len());
    let mut last = 0;
    for caps in re.captures_iter(template) {
        let placeholder = caps.get(0).unwrap();
        let field = &caps[1];
        let value = fields
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, value)| value)
            .ok_or_else(|| TemplateError::MissingField {
                template: name.to_string(),
                field: field.to_string(),
            })?;
        output.push_str(&template[last..placeholder.start()]);
        output.push_str(value);
        last = placeholder.end();
    }
    output.push_str(&template[last..]);
    Ok(output)
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
