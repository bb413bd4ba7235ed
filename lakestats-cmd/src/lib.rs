//! Command implementations for the lakestats CLI.
//!
//! Provides the collection run that publishes conditions documents, the
//! admin lake-management commands (list, add, status moves, reordering),
//! the terminal dashboard, and historical backfill loading.

use clap::Subcommand;

pub mod backfill;
pub mod collect;
pub mod lakes;
pub mod status;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch readings for enabled lakes and publish conditions documents
    Collect {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        /// Collect a single lake instead of every enabled lake
        #[arg(long)]
        lake: Option<String>,
    },

    /// List lakes grouped by status, in display order
    Lakes {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,
    },

    /// Register a new lake (starts disabled, appended to its group)
    AddLake {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        /// Identifier for the new lake, e.g. "powell"
        lake_id: String,

        /// Display name, e.g. "Lake Powell"
        name: String,

        /// Branded site name, e.g. "Powell Stats"
        #[arg(long)]
        branded_name: Option<String>,

        /// Accent color for branding, e.g. "#1d4ed8"
        #[arg(long)]
        accent_color: Option<String>,
    },

    /// Move a lake to another status group (ENABLED, DISABLED, TESTING)
    SetStatus {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        lake_id: String,

        /// Destination status group
        status: String,
    },

    /// Move a lake one place up or down within its status group
    Move {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        lake_id: String,

        /// Move one place earlier in display order
        #[arg(long, conflicts_with = "down")]
        up: bool,

        /// Move one place later in display order
        #[arg(long)]
        down: bool,
    },

    /// Show a lake's current conditions and access-point status
    Status {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        lake_id: String,
    },

    /// Load historical readings from a CSV export
    Backfill {
        /// Path to the store database file
        #[arg(short, long, default_value = "lakestats.db")]
        database: String,

        /// Path to the readings CSV (lake_id,data_type,date,value)
        csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Collect { database, lake } => collect::run_collect(&database, lake.as_deref()).await,
        Command::Lakes { database } => lakes::run_list(&database),
        Command::AddLake {
            database,
            lake_id,
            name,
            branded_name,
            accent_color,
        } => lakes::run_add(
            &database,
            &lake_id,
            &name,
            branded_name.as_deref(),
            accent_color.as_deref(),
        ),
        Command::SetStatus {
            database,
            lake_id,
            status,
        } => lakes::run_set_status(&database, &lake_id, &status),
        Command::Move {
            database,
            lake_id,
            up,
            down,
        } => lakes::run_move(&database, &lake_id, up, down),
        Command::Status { database, lake_id } => status::run_status(&database, &lake_id),
        Command::Backfill { database, csv } => backfill::run_backfill(&database, &csv),
    }
}
