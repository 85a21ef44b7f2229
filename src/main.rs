use anyhow::Result;
use clap::Parser;
use punnett_icon::RenderConfig;
use std::path::PathBuf;

const DEFAULT_FONT: &str = "/Library/Fonts/Arial Bold.ttf";

#[derive(Debug, Parser)]
#[clap(
    name = "punnett-icon",
    about = "Render the Punnett-square application icon as a 1024x1024 PNG"
)]
struct Args {
    /// Font used for the glyphs inside the grid cells.
    #[clap(
        long,
        value_name = "FILE",
        env = "PUNNETT_ICON_CELL_FONT",
        default_value = DEFAULT_FONT
    )]
    cell_font: PathBuf,

    /// Font used for the row and column labels.
    #[clap(
        long,
        value_name = "FILE",
        env = "PUNNETT_ICON_HEADER_FONT",
        default_value = DEFAULT_FONT
    )]
    header_font: PathBuf,

    /// Output PNG path. An existing file is overwritten.
    #[clap(
        short,
        long,
        value_name = "FILE",
        env = "PUNNETT_ICON_OUTPUT",
        default_value = "app-icon.png"
    )]
    output: PathBuf,
}

impl From<Args> for RenderConfig {
    fn from(args: Args) -> Self {
        Self {
            cell_font: args.cell_font,
            header_font: args.header_font,
            output: args.output,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config: RenderConfig = Args::parse().into();
    punnett_icon::generate_icon(&config)?;

    Ok(())
}
