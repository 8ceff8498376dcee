use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use plotgrid::{GridConfig, Vec2};

// Upper bound on cells listed by `cells`; larger grids are rejected before allocating.
const MAX_LISTED_CELLS: usize = 1 << 16;

#[derive(Parser, Debug)]
#[command(name = "plotgrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the padded NDC rectangle of every cell as JSON.
    Cells(CellsArgs),
    /// Map a cell-local point into NDC.
    Map(MapArgs),
    /// Print the WGSL grid functions.
    Shader(ShaderArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct GridSource {
    /// Rows (and columns) in the grid.
    #[arg(long)]
    rows: Option<f64>,

    /// Grid config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GridSource {
    fn load(&self) -> anyhow::Result<GridConfig> {
        let cfg = match (&self.config, self.rows) {
            (Some(path), _) => GridConfig::from_path(path)
                .with_context(|| format!("load grid config '{}'", path.display()))?,
            (None, Some(rows)) => GridConfig::new(rows),
            (None, None) => anyhow::bail!("one of --rows or --config is required"),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct CellsArgs {
    #[command(flatten)]
    grid: GridSource,
}

#[derive(Parser, Debug)]
struct MapArgs {
    #[command(flatten)]
    grid: GridSource,

    /// Linear cell index (0-based, row-major).
    #[arg(long)]
    index: f64,

    /// Cell-local x in [-1, 1].
    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    /// Cell-local y in [-1, 1].
    #[arg(long, allow_hyphen_values = true)]
    y: f64,

    /// Apply the config's pan/zoom before boxing.
    #[arg(long, default_value_t = false)]
    pan_zoom: bool,
}

#[derive(Parser, Debug)]
struct ShaderArgs {
    /// Bind group of the uniform block.
    #[arg(long, default_value_t = 0)]
    group: u32,

    /// Binding slot of the uniform block.
    #[arg(long, default_value_t = 0)]
    binding: u32,
}

#[derive(serde::Serialize)]
struct CellOut {
    index: usize,
    row: f64,
    col: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

#[derive(serde::Serialize)]
struct MapOut {
    x: f64,
    y: f64,
    row: f64,
    col: f64,
    clipped: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Cells(args) => cmd_cells(args),
        Command::Map(args) => cmd_map(args),
        Command::Shader(args) => cmd_shader(args),
    }
}

fn cmd_cells(args: CellsArgs) -> anyhow::Result<()> {
    let t = args.grid.load()?.to_transform()?;
    if t.cell_count() > MAX_LISTED_CELLS {
        anyhow::bail!(
            "grid has {} cells; `cells` lists at most {MAX_LISTED_CELLS}",
            t.cell_count()
        );
    }
    let cells: Vec<CellOut> = t
        .cells()
        .map(|(index, r)| {
            let rc = t.row_col(index as f64);
            CellOut {
                index,
                row: rc.row,
                col: rc.col,
                x0: r.x0,
                y0: r.y0,
                x1: r.x1,
                y1: r.y1,
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&cells)?);
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let cfg = args.grid.load()?;
    let t = cfg.to_transform()?;
    if args.index < 0.0 || args.index >= t.n_rows() * t.n_rows() {
        eprintln!(
            "warning: index {} is outside the {}x{} grid",
            args.index,
            t.n_rows(),
            t.n_rows()
        );
    }

    let mut local = Vec2::new(args.x, args.y);
    if args.pan_zoom {
        local = t.pan_zoom_grid(local);
    }
    let device = t.to_box(local, args.index);
    let rc = t.row_col(args.index);
    let out = MapOut {
        x: device.x,
        y: device.y,
        row: rc.row,
        col: rc.col,
        clipped: cfg.clip(local),
    };
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

fn cmd_shader(args: ShaderArgs) -> anyhow::Result<()> {
    print!("{}", plotgrid::grid_wgsl_at(args.group, args.binding));
    Ok(())
}
