use clap::{Args, Parser, Subcommand};

mod commands;
mod convoy;
mod templates;
mod utils;

const LONG_ABOUT: &str = "\
Convoy manages the subscriber metadata embedded in convoy descriptions and
renders the briefings and coordination messages used around them.

A convoy description is free-form text owned by the issue tracker. One line
of it is machine-readable: a `Subscribers:` line holding a comma-separated
list of notification targets. Convoy reads and rewrites that one line while
leaving every other line untouched, and transparently migrates descriptions
still using the deprecated `Notify:` form of the same line.

Descriptions are read from a file (or stdin with `-`); rewritten text goes
to stdout unless --in-place writes it back to the file. Convoy never talks
to the tracker itself.";

const AFTER_HELP: &str = "\
EXAMPLES:
    List the subscribers of a convoy:
        $ convoy list description.txt

    Subscribe the mayor and a human:
        $ convoy add description.txt mayor/ human@email.com --in-place

    Unsubscribe a polecat:
        $ convoy remove description.txt deacon/ --in-place

    Rewrite the list wholesale, reading the description from stdin:
        $ bd show gt-42 --description-only | convoy set - mayor/ deacon/

    Render the witness briefing for a rig:
        $ convoy brief witness --rig gastown --polecats furiosa --polecats nux

METADATA FORMAT:
    Subscribers: mayor/, deacon/, human@email.com

    The deprecated form `Notify:` is still read, and is replaced by
    `Subscribers:` the first time the description is rewritten.

Learn more: run `convoy <command> --help` for per-command details.";

#[derive(Parser)]
#[command(name = "convoy")]
#[command(version)]
#[command(about = "Subscriber metadata tools for convoy descriptions")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the subscribers recorded in a description
    #[command(
        long_about = "\
List the subscribers recorded in a description.

Scans the description for its metadata line (`Subscribers:` first, then the
deprecated `Notify:`) and prints each subscriber token on its own line, in
the order they appear. A description with no metadata line, or an empty
payload, prints nothing and still exits 0.

A warning is printed on stderr when the description still uses the
deprecated `Notify:` form."
    )]
    List {
        /// Description file to read, or - for stdin
        description: String,
    },

    /// Replace the subscriber list wholesale
    #[command(
        long_about = "\
Replace the subscriber list wholesale.

Rewrites the description's metadata line to hold exactly the given
subscribers, in the given order, always in the current `Subscribers:`
format. A deprecated `Notify:` line is replaced in place; if no metadata
line exists one is appended. Every other line is preserved verbatim.

With no subscribers the line is kept with an empty payload."
    )]
    Set {
        /// Description file to read, or - for stdin
        description: String,

        /// Subscriber tokens, in notification order
        subscribers: Vec<String>,

        /// Write the result back to the description file instead of stdout
        #[arg(long)]
        in_place: bool,
    },

    /// Add subscribers, keeping existing ones
    #[command(
        long_about = "\
Add subscribers, keeping existing ones.

Reads the current list, appends each given token that is not already
present, and rewrites the metadata line. Existing subscribers keep their
position; new ones are appended in the order given."
    )]
    Add {
        /// Description file to read, or - for stdin
        description: String,

        /// Subscriber tokens to add
        #[arg(required = true)]
        subscribers: Vec<String>,

        /// Write the result back to the description file instead of stdout
        #[arg(long)]
        in_place: bool,
    },

    /// Remove subscribers from the list
    #[command(
        long_about = "\
Remove subscribers from the list.

Reads the current list, drops every occurrence of the given tokens, and
rewrites the metadata line. Tokens not present are ignored."
    )]
    Remove {
        /// Description file to read, or - for stdin
        description: String,

        /// Subscriber tokens to remove
        #[arg(required = true)]
        subscribers: Vec<String>,

        /// Write the result back to the description file instead of stdout
        #[arg(long)]
        in_place: bool,
    },

    /// Render a role briefing to stdout
    #[command(
        long_about = "\
Render a role briefing to stdout.

Available roles: mayor, witness, refinery, polecat, crew. The briefing is
filled from the flags below; an unknown role fails with an error on
stderr."
    )]
    Brief {
        /// Role to brief: mayor, witness, refinery, polecat, crew
        role: String,

        /// Rig name, e.g. gastown
        #[arg(long, default_value = "")]
        rig: String,

        /// Town root directory
        #[arg(long, default_value = "")]
        town_root: String,

        /// Working directory for the session
        #[arg(long, default_value = "")]
        work_dir: String,

        /// Polecat name (polecat role)
        #[arg(long, default_value = "")]
        polecat: String,

        /// Polecat names to watch (witness role; repeatable)
        #[arg(long = "polecats")]
        polecats: Vec<String>,

        /// Issue database directory
        #[arg(long, default_value = "")]
        beads_dir: String,

        /// Issue prefix, e.g. gt
        #[arg(long, default_value = "")]
        issue_prefix: String,
    },

    /// Render a coordination message to stdout
    #[command(subcommand)]
    Notice(NoticeKind),
}

#[derive(Subcommand)]
enum NoticeKind {
    /// Spawn assignment message for a polecat
    Spawn(SpawnArgs),
    /// Nudge message for a stalled polecat
    Nudge(NudgeArgs),
    /// Escalation message after repeated failed nudges
    Escalation(EscalationArgs),
    /// Session handoff message
    Handoff(HandoffArgs),
}

#[derive(Args)]
struct SpawnArgs {
    #[arg(long, default_value = "")]
    issue: String,
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value_t = 2)]
    priority: u32,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    branch: String,
    #[arg(long, default_value = "")]
    rig: String,
    #[arg(long, default_value = "")]
    polecat: String,
}

#[derive(Args)]
struct NudgeArgs {
    #[arg(long, default_value = "")]
    polecat: String,
    #[arg(long, default_value = "")]
    reason: String,
    #[arg(long, default_value_t = 1)]
    nudge_count: u32,
    #[arg(long, default_value_t = 3)]
    max_nudges: u32,
    #[arg(long, default_value = "")]
    issue: String,
    #[arg(long, default_value = "")]
    status: String,
}

#[derive(Args)]
struct EscalationArgs {
    #[arg(long, default_value = "")]
    polecat: String,
    #[arg(long, default_value = "")]
    issue: String,
    #[arg(long, default_value = "")]
    reason: String,
    #[arg(long, default_value_t = 3)]
    nudge_count: u32,
    #[arg(long, default_value = "")]
    last_status: String,
    /// Suggested action (repeatable)
    #[arg(long = "suggestion")]
    suggestions: Vec<String>,
}

#[derive(Args)]
struct HandoffArgs {
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long, default_value = "")]
    current_work: String,
    #[arg(long, default_value = "")]
    status: String,
    /// Next step for the incoming session (repeatable)
    #[arg(long = "next-step")]
    next_steps: Vec<String>,
    #[arg(long, default_value = "")]
    notes: String,
    #[arg(long, default_value_t = 0)]
    pending_mail: u32,
    #[arg(long, default_value = "")]
    git_branch: String,
    #[arg(long)]
    git_dirty: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { description } => commands::list::run(&description),
        Commands::Set {
            description,
            subscribers,
            in_place,
        } => commands::set::run(&description, &subscribers, in_place),
        Commands::Add {
            description,
            subscribers,
            in_place,
        } => commands::add::run(&description, &subscribers, in_place),
        Commands::Remove {
            description,
            subscribers,
            in_place,
        } => commands::remove::run(&description, &subscribers, in_place),
        Commands::Brief {
            role,
            rig,
            town_root,
            work_dir,
            polecat,
            polecats,
            beads_dir,
            issue_prefix,
        } => commands::brief::run(commands::brief::BriefOptions {
            role,
            rig,
            town_root,
            work_dir,
            polecat,
            polecats,
            beads_dir,
            issue_prefix,
        }),
        Commands::Notice(kind) => match kind {
            NoticeKind::Spawn(args) => commands::notice::run(
                "spawn",
                &templates::SpawnData {
                    issue: args.issue,
                    title: args.title,
                    priority: args.priority,
                    description: args.description,
                    branch: args.branch,
                    rig_name: args.rig,
                    polecat: args.polecat,
                },
            ),
            NoticeKind::Nudge(args) => commands::notice::run(
                "nudge",
                &templates::NudgeData {
                    polecat: args.polecat,
                    reason: args.reason,
                    nudge_count: args.nudge_count,
                    max_nudges: args.max_nudges,
                    issue: args.issue,
                    status: args.status,
                },
            ),
            NoticeKind::Escalation(args) => commands::notice::run(
                "escalation",
                &templates::EscalationData {
                    polecat: args.polecat,
                    issue: args.issue,
                    reason: args.reason,
                    nudge_count: args.nudge_count,
                    last_status: args.last_status,
                    suggestions: args.suggestions,
                },
            ),
            NoticeKind::Handoff(args) => commands::notice::run(
                "handoff",
                &templates::HandoffData {
                    role: args.role,
                    current_work: args.current_work,
                    status: args.status,
                    next_steps: args.next_steps,
                    notes: args.notes,
                    pending_mail: args.pending_mail,
                    git_branch: args.git_branch,
                    git_dirty: args.git_dirty,
                },
            ),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
