use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PlotPlan - garden and yard planning from the terminal
#[derive(Parser, Debug)]
#[command(name = "plotplan")]
#[command(about = "Garden and yard planning from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a plotplan.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path of the persisted plan file (overrides config)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Base URL of the garden REST backend (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current plan: location, boundary, plants, grid, history
    Status,

    /// Set or clear the plan's boundary polygon
    Boundary {
        #[command(subcommand)]
        action: BoundaryAction,
    },

    /// Place a plant in a grid cell (replaces any existing occupant)
    Plant(PlantArgs),

    /// Remove the plant in a grid cell
    Remove(RemoveArgs),

    /// Step one snapshot back in history
    Undo,

    /// Step one snapshot forward in history
    Redo,

    /// Inspect and resize the planting grid
    Grid {
        #[command(subcommand)]
        action: GridAction,
    },

    /// Resolve a free-text address to a coordinate and record it
    Geocode(GeocodeArgs),

    /// Work with backend-owned features (lawn, house, beds...)
    Features {
        #[command(subcommand)]
        action: FeatureAction,
    },

    /// Show effective configuration and where each value came from
    Config,

    /// Delete the whole plan, including the persisted file
    Reset(ResetArgs),
}

#[derive(Subcommand, Debug)]
pub enum BoundaryAction {
    /// Set the boundary from ordered lat,lng vertices (at least 3)
    Set {
        /// Vertices as "lat,lng" pairs, in drawing order
        #[arg(required = true, num_args = 1..)]
        points: Vec<String>,
    },
    /// Clear the boundary
    Clear,
}

#[derive(Parser, Debug)]
pub struct PlantArgs {
    /// Grid cell: a row-major index, or a "lat_lng" key for clipped grids
    pub cell: String,

    /// Plant name
    #[arg(long)]
    pub name: String,

    /// Catalog id of the plant
    #[arg(long, default_value = "0")]
    pub plant_id: u32,

    /// Display color
    #[arg(long, default_value = "#4caf50")]
    pub color: String,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Grid cell: a row-major index, or a "lat_lng" key for clipped grids
    pub cell: String,
}

#[derive(Subcommand, Debug)]
pub enum GridAction {
    /// Show grid dimensions and the derived cell count
    Show,
    /// Toggle grid visibility
    Toggle,
    /// Set grid dimensions directly
    Set {
        rows: usize,
        cols: usize,
    },
    /// Add one row
    AddRow,
    /// Remove one row (floors at 1)
    RemoveRow,
    /// Add one column
    AddCol,
    /// Remove one column (floors at 1)
    RemoveCol,
    /// Preview a boundary-clipped grid at a physical cell size
    Clipped {
        /// Cell size in meters
        #[arg(long, default_value = "1.0")]
        cell_size: f64,
    },
}

#[derive(Parser, Debug)]
pub struct GeocodeArgs {
    /// Free-text address
    pub address: String,

    /// Only look up; do not record the result in the plan
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum FeatureAction {
    /// List a garden's features
    List {
        #[arg(long)]
        garden_id: u64,
    },
    /// Create a feature from the plan's current boundary
    Create {
        #[arg(long)]
        garden_id: u64,
        #[arg(long)]
        user_id: u64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "#8bc34a")]
        color: String,
    },
    /// Delete a feature by id
    Delete {
        id: u64,
    },
}

#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation check
    #[arg(long)]
    pub force: bool,
}
