use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "classroom",
    about = "Classroom Admin - teacher assignments and profiles",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, env = "CLASSROOM_ASSIGN_URL", global = true, help = "Root of the assignment API")]
    pub assign_url: Option<String>,

    #[arg(long, env = "CLASSROOM_TEACHER_URL", global = true, help = "Root of the teacher API")]
    pub teacher_url: Option<String>,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(short, long, global = true, help = "Answer yes to every confirmation prompt")]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "List teachers available for assignment")]
    Teachers,

    #[command(about = "List current teacher-to-class assignments")]
    Assignments {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Assign a teacher to a class")]
    Assign {
        #[arg(short, long, help = "Teacher ID")]
        teacher: String,

        #[arg(short, long, help = "Class label, \"Class 1\" to \"Class 10\"")]
        class: String,
    },

    #[command(about = "Remove an assignment")]
    Unassign {
        #[arg(help = "Assignment ID")]
        id: i64,
    },

    #[command(subcommand, about = "Manage teacher profiles")]
    Profile(ProfileCommands),
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    #[command(about = "List all teacher profiles")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Add a teacher (all fields required)")]
    Add(ProfileFields),

    #[command(about = "Edit a teacher; omitted fields keep their value")]
    Update {
        #[arg(help = "Teacher ID")]
        id: i64,

        #[command(flatten)]
        fields: ProfileFields,
    },

    #[command(about = "Delete a teacher")]
    Delete {
        #[arg(help = "Teacher ID")]
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub class: Option<String>,
    #[arg(long)]
    pub attendance: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
}
