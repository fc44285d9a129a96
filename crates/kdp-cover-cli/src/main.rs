mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kdp_cover::constants::in_to_mm;
use kdp_cover::{
    CoverConfig, CoverReport, CoverSpec, PaperStock, SpineCalculator, TextOrientation, fit_text,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kdpc", about = "Print cover and interior geometry", version)]
struct Cli {
    /// Vendor configuration JSON (defaults to KDP)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the spine width for a book
    Spine {
        /// Number of interior pages
        #[arg(short, long)]
        pages: u32,

        /// Paper color
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,

        /// Binding type
        #[arg(long, default_value = "paperback", value_enum)]
        binding: BindingArg,
    },

    /// Calculate the full cover layout
    Cover {
        /// Number of interior pages
        #[arg(short, long)]
        pages: u32,

        /// Trim size, e.g. 6x9 or 8.5x11
        #[arg(short, long, default_value = "6x9")]
        trim: String,

        /// Paper color
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,

        /// Binding type
        #[arg(long, default_value = "paperback", value_enum)]
        binding: BindingArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Write a guide template PDF
        #[arg(long)]
        template: Option<PathBuf>,

        /// Title to fit on the front cover and spine
        #[arg(long)]
        title: Option<String>,
    },

    /// Print a spine width chart for both paper colors
    Chart {
        /// Page counts to include
        #[arg(short, long, num_args = 1.., default_values_t = [24, 100, 200, 300, 400, 500, 600, 700, 800])]
        pages: Vec<u32>,

        /// Binding type
        #[arg(long, default_value = "paperback", value_enum)]
        binding: BindingArg,
    },

    /// Calculate interior page size and margins
    Interior {
        /// Number of interior pages
        #[arg(short, long)]
        pages: u32,

        /// Trim size, e.g. 6x9 or 8.5x11
        #[arg(short, long, default_value = "6x9")]
        trim: String,

        /// Interior artwork bleeds off the page
        #[arg(long)]
        bleed: bool,
    },

    /// Write the default configuration to a file
    Config {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    White,
    Cream,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    Paperback,
    Hardcover,
}

impl From<PaperArg> for kdp_cover::PaperColor {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::White => Self::White,
            PaperArg::Cream => Self::Cream,
        }
    }
}

impl From<BindingArg> for kdp_cover::BindingType {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Paperback => Self::Paperback,
            BindingArg::Hardcover => Self::Hardcover,
        }
    }
}

async fn load_calculator(path: Option<&Path>) -> Result<SpineCalculator> {
    let config = match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            CoverConfig::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => CoverConfig::default(),
    };
    Ok(SpineCalculator::new(config)?)
}

fn print_rect(label: &str, rect: &kdp_cover::Rect) {
    println!(
        "  {:<8} x={:.4} y={:.4} w={:.4} h={:.4}",
        label, rect.x, rect.y, rect.width, rect.height
    );
}

fn print_title_fit(
    label: &str,
    zone: &kdp_cover::Rect,
    title: &str,
    orientation: TextOrientation,
) {
    match fit_text(zone, title, orientation, 72.0, 6.0) {
        Some(fit) => println!(
            "  {} title: {:.1} pt at x={:.4} y={:.4}",
            label, fit.font_size_pt, fit.bounds.x, fit.bounds.y
        ),
        None => println!("  {} title: does not fit", label),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    let config_path = cli.config;

    match cli.command {
        Commands::Spine {
            pages,
            paper,
            binding,
        } => {
            let calculator = load_calculator(config_path.as_deref()).await?;
            let width = calculator.calculate_spine_width(pages, paper.into(), binding.into())?;
            println!("{:.4} in ({:.2} mm)", width, in_to_mm(width));
        }

        Commands::Cover {
            pages,
            trim,
            paper,
            binding,
            json,
            template,
            title,
        } => {
            let calculator = load_calculator(config_path.as_deref()).await?;
            let spec = CoverSpec {
                page_count: pages,
                trim_size: trim.parse()?,
                paper_stock: PaperStock::new(paper.into(), binding.into()),
            };
            let layout = calculator.calculate_layout(&spec)?;
            let report = CoverReport::from(&layout);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let g = &layout.geometry;
                println!(
                    "Cover Geometry ({} {}):",
                    spec.trim_size, spec.paper_stock.binding
                );
                println!("  Spine width: {:.4} in", g.spine_width);
                println!(
                    "  Full cover: {:.4} x {:.4} in ({:.1} x {:.1} mm)",
                    g.total_width,
                    g.total_height,
                    in_to_mm(g.total_width),
                    in_to_mm(g.total_height)
                );
                println!("  Bleed: {:.4} in", g.bleed);
                println!("Safe zones:");
                print_rect("back", &layout.back_safe);
                match &layout.spine_safe {
                    Some(spine) => print_rect("spine", spine),
                    None => println!("  spine    (no spine text)"),
                }
                print_rect("front", &layout.front_safe);
                print_rect("barcode", &layout.barcode);

                if let Some(title) = &title {
                    print_title_fit(
                        "front",
                        &layout.front_safe,
                        title,
                        TextOrientation::Horizontal,
                    );
                    if let Some(spine) = &layout.spine_safe {
                        print_title_fit("spine", spine, title, TextOrientation::Vertical);
                    }
                }
            }

            if let Some(path) = template {
                kdp_cover::write_cover_template(&layout, &path).await?;
                println!("Template → {}", path.display());
            }
        }

        Commands::Chart { pages, binding } => {
            let calculator = load_calculator(config_path.as_deref()).await?;
            let rows = calculator.spine_chart(&pages, binding.into())?;
            println!("{:>6}  {:>8}  {:>8}", "pages", "white", "cream");
            for row in rows {
                println!(
                    "{:>6}  {:>8.4}  {:>8.4}",
                    row.page_count, row.white, row.cream
                );
            }
        }

        Commands::Interior { pages, trim, bleed } => {
            let calculator = load_calculator(config_path.as_deref()).await?;
            let interior = calculator.calculate_interior(pages, trim.parse()?, bleed)?;
            println!("Interior Geometry:");
            println!(
                "  Page: {:.4} x {:.4} in",
                interior.page_width, interior.page_height
            );
            println!("  Gutter: {:.4} in", interior.gutter);
            println!("  Outside: {:.4} in", interior.outside);
            print_rect("recto", &interior.recto_live);
            print_rect("verso", &interior.verso_live);
        }

        Commands::Config { output } => {
            CoverConfig::default().save(&output).await?;
            println!("Default configuration → {}", output.display());
        }
    }

    Ok(())
}
