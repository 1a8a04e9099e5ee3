use clap::{Parser, Subcommand};
use icon_pad::config::{self, PadConfig};
use icon_pad::imaging::{self, PaddingFraction, RustBackend};
use icon_pad::output;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "icon-pad")]
#[command(about = "Shrink an icon and re-center it on a transparent canvas")]
#[command(long_about = "\
Shrink an icon and re-center it on a transparent canvas

The content is scaled by (1 - padding) vertically and (1 - padding) * 0.9
horizontally, resized with Lanczos3, and pasted centered on a fully
transparent canvas of the original size. Existing transparency is kept.

With no arguments, assets/app_icon.png is padded by 0.35 into
assets/app_icon_padded.png. Values from icon-pad.toml (if present) replace
those defaults; flags replace both.

Run 'icon-pad gen-config' to generate a documented icon-pad.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: icon-pad.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Icon to pad
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Where to write the padded icon (png, webp or tiff)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Fraction by which the content shrinks, 0 <= padding < 1
    #[arg(long, global = true)]
    padding: Option<PaddingFraction>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Pad the icon (the default when no subcommand is given)
    Pad,
    /// Print the planned layout without writing anything
    Check,
    /// Print a stock icon-pad.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(e.as_ref());
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        config: config_path,
        input,
        output: output_path,
        padding,
        command,
    } = cli;
    let backend = RustBackend::new();

    match command.unwrap_or(Command::Pad) {
        Command::Pad => {
            let (pad_config, padding) =
                resolve_settings(config_path.as_deref(), input, output_path, padding)?;
            let report =
                imaging::pad_image(&backend, &pad_config.input, &pad_config.output, padding)?;
            output::print_pad_output(&report);
        }
        Command::Check => {
            let (pad_config, padding) =
                resolve_settings(config_path.as_deref(), input, output_path, padding)?;
            let canvas = imaging::get_dimensions(&backend, &pad_config.input)?;
            let params = imaging::plan_pad(&pad_config.input, &pad_config.output, canvas, padding);
            output::print_check_output(&params.source, &params.output, &params.layout, padding);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve config file + flag overrides into validated settings.
fn resolve_settings(
    config_path: Option<&Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    padding: Option<PaddingFraction>,
) -> Result<(PadConfig, PaddingFraction), config::ConfigError> {
    let pad_config = resolve_config(config_path)?.with_overrides(input, output, padding);
    pad_config.validate()?;
    let padding = pad_config.padding_fraction()?;
    Ok((pad_config, padding))
}

/// Load the explicit `--config` file, or the default one if it exists.
fn resolve_config(explicit: Option<&Path>) -> Result<PadConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::read_config(path),
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_FILE)),
    }
}
