use crate::export::ExportFormat;
use crate::models::garden::{ACTIVE_NO, ACTIVE_YES};
use crate::models::report::ReportFilter;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rVolunteerLog
#[derive(Parser)]
#[command(
    name = "rvolunteerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log volunteer garden hours and build filtered hour reports on a local SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting user email; falls back to $RVOLUNTEERLOG_USER
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the database and the default gardens
    Init {
        #[arg(long = "admin", help = "Email address of the administrator")]
        admin: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Submit volunteer hours (public form)
    Submit {
        #[arg(long = "name", help = "Volunteer name")]
        name: String,

        #[arg(long = "email", help = "Volunteer email (receives the confirmation)")]
        email: String,

        #[arg(long = "start", help = "First day worked (YYYY-MM-DD)")]
        start: String,

        #[arg(long = "end", help = "Last day worked (YYYY-MM-DD); defaults to --start")]
        end: Option<String>,

        #[arg(
            long = "garden",
            required = true,
            help = "Garden worked in; repeat for several gardens"
        )]
        gardens: Vec<String>,

        #[arg(long = "hours", default_value = "0", help = "Hours worked")]
        hours: String,

        #[arg(long = "comments")]
        comments: Option<String>,
    },

    /// List the active gardens offered on the public form
    Gardens {
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage the gardens list (admin)
    Garden {
        #[command(subcommand)]
        action: GardenAction,
    },

    /// Build a filtered volunteer hours report (admin)
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "json", help = "Print the report envelope as JSON")]
        json: bool,
    },

    /// Show overall volunteer statistics (admin)
    Stats {
        #[arg(long = "json")]
        json: bool,
    },

    /// Export a filtered report to a file (admin)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Check whether the acting user is the administrator
    Whoami {
        #[arg(long = "json")]
        json: bool,
    },

    /// Append three demo entries
    Sample,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum GardenAction {
    /// List every garden with its row id
    List {
        #[arg(long = "json")]
        json: bool,
    },

    /// Add a new (active) garden
    Add {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "location", default_value = "")]
        location: String,
    },

    /// Update a garden; omitted fields keep their value
    Update {
        /// Row id as shown by `garden list`
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "active", value_enum)]
        active: Option<ActiveFlag>,
    },

    /// Delete a garden row
    Delete {
        /// Row id as shown by `garden list`
        id: i64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ActiveFlag {
    Yes,
    No,
}

impl ActiveFlag {
    pub fn as_flag(&self) -> &'static str {
        match self {
            ActiveFlag::Yes => ACTIVE_YES,
            ActiveFlag::No => ACTIVE_NO,
        }
    }
}

/// Report filter flags shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "from", value_name = "DATE", help = "Range start (needs --to)")]
    pub from: Option<String>,

    #[arg(long = "to", value_name = "DATE", help = "Range end (needs --from)")]
    pub to: Option<String>,

    #[arg(long = "name", help = "Volunteer name contains (case-insensitive)")]
    pub name: Option<String>,

    #[arg(long = "garden", help = "Gardens contain (case-insensitive)")]
    pub garden: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ReportFilter {
        ReportFilter {
            start_date: self.from.clone(),
            end_date: self.to.clone(),
            volunteer_name: self.name.clone(),
            garden: self.garden.clone(),
        }
    }
}
