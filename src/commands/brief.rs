use std::io;

use crate::templates::render::role_names;
use crate::templates::{render_role, RoleData};

#[derive(Debug, Clone, Default)]
pub struct BriefOptions {
    pub role: String,
    pub rig: String,
    pub town_root: String,
    pub work_dir: String,
    pub polecat: String,
    pub polecats: Vec<String>,
    pub beads_dir: String,
    pub issue_prefix: String,
}

pub fn run(options: BriefOptions) -> io::Result<()> {
    let data = RoleData {
        role: options.role.clone(),
        rig_name: options.rig,
        town_root: options.town_root,
        work_dir: options.work_dir,
        polecat: options.polecat,
        polecats: options.polecats,
        beads_dir: options.beads_dir,
        issue_prefix: options.issue_prefix,
    };

    let rendered = render_role(&options.role, &data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} (available roles: {})", e, role_names().join(", ")),
        )
    })?;

    print!("{}", rendered);
    Ok(())
}
