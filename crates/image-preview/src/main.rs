//! Command line front end for the image string decoder and renderers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use image_preview::icons;
use image_preview::render::{RenderOptions, SvgRenderer, TerminalRenderer};
use image_preview::{decode_with_size, encode, PixelGrid, DEFAULT_SIZE};

#[derive(Parser)]
#[command(name = "image-preview")]
#[command(version)]
#[command(about = "Decode and render pixel art image strings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image string
    Render {
        /// Image string, or `-` to read it from stdin
        image: Option<String>,

        /// Render a built-in icon instead of an image string
        #[arg(long, conflicts_with = "image")]
        icon: Option<String>,

        /// Grid side length
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Terminal)]
        format: Format,

        /// JSON file with render options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Color the terminal output
        #[arg(long)]
        color: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Decode an image string and print the grid as JSON
    Decode {
        /// Image string, or `-` to read it from stdin
        image: String,

        /// Grid side length
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Read a JSON grid and print its canonical image string
    Encode {
        /// JSON file with the grid as nested arrays, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// List the built-in icons
    Icons {
        /// Render each icon after its name
        #[arg(long)]
        preview: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Block characters for a terminal
    Terminal,
    /// Standalone SVG document
    Svg,
    /// Canonical image string
    Text,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Commands::Render {
            image,
            icon,
            size,
            format,
            options,
            color,
            output,
        } => run_render(image, icon, size, format, options, color, output),
        Commands::Decode {
            image,
            size,
            pretty,
        } => run_decode(&image, size, pretty),
        Commands::Encode { input } => run_encode(&input),
        Commands::Icons { preview } => run_icons(preview),
    }
}

fn run_render(
    image: Option<String>,
    icon: Option<String>,
    size: usize,
    format: Format,
    options_file: Option<PathBuf>,
    color: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let grid = if let Some(name) = icon {
        let icon = icons::by_name(&name)
            .with_context(|| format!("unknown icon `{name}`, try `image-preview icons`"))?;
        decode_with_size(icon.encoded(), size)
    } else if let Some(image) = image {
        decode_with_size(&read_image_arg(&image)?, size)
    } else {
        bail!("pass an image string, `-` for stdin, or --icon NAME");
    };
    debug!("decoded grid with {} lit cells", grid.lit_count());

    let options = load_options(options_file.as_deref())?;
    let rendered = match format {
        Format::Terminal => TerminalRenderer { options, color }.render(&grid),
        Format::Svg => SvgRenderer::new(options).render(&grid),
        Format::Text => encode(&grid),
    };
    write_output(&rendered, output.as_deref())
}

fn run_decode(image: &str, size: usize, pretty: bool) -> Result<()> {
    let grid = decode_with_size(&read_image_arg(image)?, size);
    let json = if pretty {
        serde_json::to_string_pretty(&grid)
    } else {
        serde_json::to_string(&grid)
    }
    .context("serializing grid")?;
    println!("{json}");
    Ok(())
}

fn run_encode(input: &str) -> Result<()> {
    let text = if input == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    let grid: PixelGrid = serde_json::from_str(&text).context("parsing grid JSON")?;
    println!("{}", encode(&grid));
    Ok(())
}

fn run_icons(preview: bool) -> Result<()> {
    let renderer = TerminalRenderer::default();
    let mut stdout = io::stdout().lock();
    for icon in icons::all() {
        writeln!(stdout, "{}", icon.name())?;
        if preview {
            write!(stdout, "{}", renderer.render(&icon.grid()))?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn load_options(path: Option<&Path>) -> Result<RenderOptions> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading options file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing options file {}", path.display()))
        }
        None => Ok(RenderOptions::default()),
    }
}

/// Reads the image string argument, with `-` standing for stdin.
fn read_image_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        // strip only line endings, leading and trailing spaces are cells
        Ok(read_stdin()?
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string())
    } else {
        Ok(arg.to_string())
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_accepts_icon_flag() {
        let cli = Cli::try_parse_from([
            "image-preview",
            "render",
            "--icon",
            "heart",
            "--format",
            "svg",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { icon, format, .. } => {
                assert_eq!(icon.as_deref(), Some("heart"));
                assert_eq!(format, Format::Svg);
            }
            _ => panic!("expected the render subcommand"),
        }
    }

    #[test]
    fn render_rejects_image_and_icon_together() {
        assert!(Cli::try_parse_from(["image-preview", "render", "9", "--icon", "heart"]).is_err());
    }

    #[test]
    fn decode_defaults_to_size_five() {
        let cli = Cli::try_parse_from(["image-preview", "decode", "09090"]).unwrap();
        match cli.command {
            Commands::Decode { size, pretty, .. } => {
                assert_eq!(size, DEFAULT_SIZE);
                assert!(!pretty);
            }
            _ => panic!("expected the decode subcommand"),
        }
    }
}
