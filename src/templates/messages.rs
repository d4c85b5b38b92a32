pub const SPAWN_TEMPLATE: &str = r#"# Assignment: {{Issue}}

{{Polecat}}, you have been assigned issue {{Issue}} on the {{RigName}} rig.

**Title:** {{Title}}
**Priority:** {{Priority}}
**Branch:** {{Branch}}

## Description

{{Description}}

Work the issue on the branch above and hand it to the refinery when the
tests pass. Update the issue if you get blocked.
"#;

pub const NUDGE_TEMPLATE: &str = r#"# Nudge {{NudgeCount}}/{{MaxNudges}}: {{Polecat}}

{{Polecat}}, you appear to be stalled on issue {{Issue}}.

**Reason:** {{Reason}}
**Last known status:** {{Status}}

If you are still working, post a status update on the issue. If you are
blocked, say what is blocking you. After {{MaxNudges}} nudges this
escalates to the mayor.
"#;

pub const ESCALATION_TEMPLATE: &str = r#"# Escalation: {{Polecat}} on {{Issue}}

Polecat {{Polecat}} has failed to respond after {{NudgeCount}} nudges.

**Issue:** {{Issue}}
**Reason:** {{Reason}}
**Last status:** {{LastStatus}}

## Suggested actions

{{Suggestions}}

This needs a decision: reassign the issue, restart the polecat, or take
the work back into the pool.
"#;

pub const HANDOFF_TEMPLATE: &str = r#"# Session handoff - {{Role}}

**Current work:** {{CurrentWork}}
**Status:** {{Status}}
**Git branch:** {{GitBranch}} ({{GitDirty}})
**Pending mail:** {{PendingMail}}

## Next steps

{{NextSteps}}

## Notes

{{Notes}}
"#;

/// Look up a message template by name.
pub fn message_template(name: &str) -> Option<&'static str> {
    match name {
        "spawn" => Some(SPAWN_TEMPLATE),
        "nudge" => Some(NUDGE_TEMPLATE),
        "escalation" => Some(ESCALATION_TEMPLATE),
        "handoff" => Some(HANDOFF_TEMPLATE),
        _ => None,
    }
}
