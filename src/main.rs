//! SVGFlex CLI
//!
//! Usage:
//!   svgflex [OPTIONS] [FILE]
//!
//! Reads SVG markup from FILE (or stdin), sanitizes it and prints a
//! ready-to-embed icon snippet with the resolved size, color and
//! accessibility attributes applied.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;

use svgflex::{
    resolve_config, sanitize, Dimension, IconConfig, IconSize, ResolvedConfig,
};

#[derive(Parser)]
#[command(name = "svgflex")]
#[command(about = "Render SVG icons with configurable color and size")]
struct Cli {
    /// SVG source file (reads markup from stdin if not provided)
    input: Option<PathBuf>,

    /// Icon configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Paint color for the icon (defaults to currentColor)
    #[arg(long)]
    color: Option<String>,

    /// Icon size: a pixel number or a CSS length (defaults to 24)
    #[arg(short, long)]
    size: Option<String>,

    /// Explicit width, overrides --size (requires --height)
    #[arg(long, requires = "height")]
    width: Option<String>,

    /// Explicit height, overrides --size (requires --width)
    #[arg(long, requires = "width")]
    height: Option<String>,

    /// Additional CSS classes for the icon host
    #[arg(long)]
    class: Option<String>,

    /// Accessibility label
    #[arg(long)]
    aria_label: Option<String>,

    /// Alternative text, used when --aria-label is absent
    #[arg(long)]
    alt: Option<String>,

    /// Keep hardcoded paint colors instead of rewriting to currentColor
    #[arg(short, long)]
    keep_colors: bool,

    /// Emit an external <img> reference instead of inline markup
    #[arg(short, long)]
    external: bool,

    /// Print the sanitized markup without the host wrapper
    #[arg(short, long)]
    bare: bool,

    /// Emit the sanitized markup as a base64 data URI
    #[arg(long)]
    data_uri: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input at all and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && cli.config.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load config file, then overlay individual flags
    let mut config = match &cli.config {
        Some(path) => match IconConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => IconConfig::default(),
    };
    apply_flags(&mut config, &cli);

    let resolved = resolve_config(&config);

    if cli.external || !resolved.inline {
        println!("{}", render_external(&resolved));
        return;
    }

    // Read input
    let markup = match &config.src {
        src if !src.is_empty() => match fs::read_to_string(src) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", src, e);
                std::process::exit(1);
            }
        },
        _ => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let clean = sanitize(&markup, resolved.replace_colors);

    if cli.data_uri {
        println!("data:image/svg+xml;base64,{}", STANDARD.encode(&clean));
    } else if cli.bare {
        println!("{}", clean);
    } else {
        println!("{}", render_host(&resolved, &clean));
    }
}

/// Overlay CLI flags onto a (possibly file-loaded) icon config
fn apply_flags(config: &mut IconConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.src = input.display().to_string();
    }
    if cli.color.is_some() {
        config.color = cli.color.clone();
    }
    if let (Some(width), Some(height)) = (&cli.width, &cli.height) {
        config.size = Some(IconSize::Pair {
            width: Dimension::parse(width),
            height: Dimension::parse(height),
        });
    } else if let Some(size) = &cli.size {
        config.size = Some(IconSize::Uniform(Dimension::parse(size)));
    }
    if cli.class.is_some() {
        config.class = cli.class.clone();
    }
    if cli.aria_label.is_some() {
        config.aria_label = cli.aria_label.clone();
    }
    if cli.alt.is_some() {
        config.alt = cli.alt.clone();
    }
    if cli.keep_colors {
        config.replace_colors = Some(false);
    }
    if cli.external {
        config.inline = Some(false);
    }
}

/// Wrap sanitized markup in a host element carrying the resolved values
fn render_host(resolved: &ResolvedConfig, markup: &str) -> String {
    let class_attr = if resolved.class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, resolved.class)
    };
    let aria_attr = resolved
        .aria_label
        .as_ref()
        .map(|label| format!(r#" aria-label="{}""#, label))
        .unwrap_or_default();

    format!(
        r#"<span{class_attr} style="width: {}; height: {}; color: {};" role="img"{aria_attr}>{markup}</span>"#,
        resolved.width, resolved.height, resolved.color
    )
}

/// Build an external <img> reference for non-inline icons
fn render_external(resolved: &ResolvedConfig) -> String {
    let class_attr = if resolved.class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, resolved.class)
    };
    let alt = resolved.aria_label.as_deref().unwrap_or("");

    format!(
        r#"<img src="{}"{class_attr} style="width: {}; height: {}; color: {};" alt="{}"/>"#,
        resolved.src, resolved.width, resolved.height, resolved.color, alt
    )
}

fn print_intro() {
    println!(
        r#"SVGFlex - Render SVG icons with configurable color and size

USAGE:
    svgflex [OPTIONS] [FILE]
    cat icon.svg | svgflex [OPTIONS]

OPTIONS:
    -c, --config       Icon configuration file (TOML)
    -s, --size         Pixel number or CSS length (default 24)
        --width        Explicit width (with --height)
        --height       Explicit height (with --width)
        --color        Paint color (default currentColor)
        --class        Extra CSS classes for the host
        --aria-label   Accessibility label
        --alt          Alternative text (fallback label)
    -k, --keep-colors  Keep hardcoded paint colors
    -e, --external     Emit an <img> reference instead of inline markup
    -b, --bare         Print sanitized markup only
        --data-uri     Print the icon as a base64 data URI
    -h, --help         Print help

QUICK START:
    svgflex icons/home.svg --color '#336699' --size 32 > home.html

Scripts and inline event handlers are always stripped; hardcoded fill and
stroke colors are rewritten to currentColor unless --keep-colors is given."#
    );
}
