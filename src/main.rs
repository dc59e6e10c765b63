//! Dash Grid CLI
//!
//! Prints the layout the engine would produce for a role at a breakpoint:
//! which widgets are visible, in what order, and at what span. Useful for
//! checking deployment override files and catalog edits without a browser.
//!
//! Usage:
//!   dash-grid --role tenant_admin -p attendance.read -p analytics.view --width 1280

use std::path::PathBuf;
use std::process;

use clap::Parser;

use dash_grid::{
    layout_with_config, resolve_theme, Breakpoint, EngineConfig, LayoutTable, RoleContext,
    WidgetCatalog,
};

#[derive(Parser)]
#[command(name = "dash-grid")]
#[command(about = "Role-adaptive dashboard grid layout inspector")]
struct Cli {
    /// Raw role name as the permission subsystem reports it
    #[arg(short, long, default_value = "staff")]
    role: String,

    /// Granted permission, e.g. "attendance.read" (repeatable)
    #[arg(short, long = "permission")]
    permissions: Vec<String>,

    /// Viewport width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Breakpoint name (xs, sm, md, lg, xl, 2xl); takes precedence over --width
    #[arg(short, long)]
    breakpoint: Option<String>,

    /// Layout table override file (TOML)
    #[arg(long)]
    layout_config: Option<PathBuf>,

    /// Widget catalog file (TOML); uses the built-in catalog if omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Also print the resolved theme slots
    #[arg(long)]
    theme: bool,
}

fn main() {
    let cli = Cli::parse();

    let breakpoint = match (&cli.breakpoint, cli.width) {
        (Some(name), _) => match name.parse::<Breakpoint>() {
            Ok(bp) => bp,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        (None, Some(px)) => Breakpoint::from_width(px),
        (None, None) => Breakpoint::Md,
    };

    let table = match &cli.layout_config {
        Some(path) => match LayoutTable::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Error loading layout config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => LayoutTable::default(),
    };

    let catalog = match &cli.catalog {
        Some(path) => match WidgetCatalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => WidgetCatalog::builtin(),
    };

    let role = RoleContext::new(cli.role, cli.permissions);
    let config = EngineConfig::new().with_table(table);

    let max_columns = config.table().max_columns(role.category, breakpoint);
    println!(
        "role: {} ({})  breakpoint: {}  columns: {}",
        role.role_name, role.category, breakpoint, max_columns
    );

    if cli.theme {
        let theme = resolve_theme(role.category, config.table());
        println!(
            "theme: primary={} secondary={} critical={} animations={} compact={}",
            theme.primary, theme.secondary, theme.critical, theme.animations, theme.compact_mode
        );
    }
    println!();

    let placed = layout_with_config(catalog.widgets(), &role, breakpoint, &config);
    if placed.is_empty() {
        println!("no widgets visible for this role");
        return;
    }

    println!("{:>5}  {:>3}  {:>3}  {:>4}  {:<7} widget", "order", "row", "col", "span", "size");
    for p in &placed {
        let title = catalog
            .get(&p.id)
            .map(|w| w.title.as_str())
            .unwrap_or_default();
        println!(
            "{:>5}  {:>3}  {:>3}  {:>4}  {:<7} {}  {}",
            p.order,
            p.row(max_columns),
            p.col(max_columns),
            p.col_span,
            p.size,
            p.id,
            title
        );
    }
}
