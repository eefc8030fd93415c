//! Widget Styler CLI
//!
//! Usage:
//!   widget-styler [OPTIONS] [CONFIG]
//!
//! Options:
//!   -t, --template <NAME>   Apply a preset before the theme
//!       --theme <THEME>     Apply the light or dark theme
//!   -p, --presets <FILE>    Additional presets (TOML format)
//!   -e, --emit <ARTIFACT>   css, reference, snippet or all (default: all)
//!   -c, --compact           Minified CSS
//!   -l, --list-templates    List available presets
//!   -h, --help              Print help

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use widget_styler::snippet::mount_point_markup;
use widget_styler::theme::resolve;
use widget_styler::{
    build_artifacts_with, CssConfig, TemplateRegistry, Theme, WidgetConfiguration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Css,
    Reference,
    Snippet,
    All,
}

#[derive(Parser)]
#[command(name = "widget-styler")]
#[command(about = "Compile chat widget settings into CSS and an integration script")]
struct Cli {
    /// Widget configuration file (TOML); defaults are used when omitted
    config: Option<PathBuf>,

    /// Apply a preset before the theme
    #[arg(short, long)]
    template: Option<String>,

    /// Apply a theme (light or dark)
    #[arg(long)]
    theme: Option<Theme>,

    /// Additional presets file (TOML format)
    #[arg(short, long)]
    presets: Option<PathBuf>,

    /// Artifact to print
    #[arg(short, long, value_enum, default_value_t = Emit::All)]
    emit: Emit,

    /// Print minified CSS
    #[arg(short, long)]
    compact: bool,

    /// List available presets and exit
    #[arg(short, long)]
    list_templates: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut registry = TemplateRegistry::builtin();
    if let Some(path) = &cli.presets {
        if let Err(e) = registry.extend_from_file(path) {
            eprintln!("Error loading presets '{}': {}", path.display(), e);
            process::exit(1);
        }
    }

    if cli.list_templates {
        for name in registry.names() {
            println!("{}", name);
        }
        return;
    }

    let config = match &cli.config {
        Some(path) => match WidgetConfiguration::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => WidgetConfiguration::default(),
    };
    let mut config = config.clamped();

    if let Some(name) = &cli.template {
        if !registry.apply(name, &mut config) {
            eprintln!("Warning: unknown template '{}' ignored", name);
        }
    }

    if let Some(theme) = cli.theme {
        resolve(theme, &config.brand_color).apply(&mut config);
    }

    let css_config = CssConfig::new().with_pretty_print(!cli.compact);
    let artifacts = match build_artifacts_with(&config, &css_config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match cli.emit {
        Emit::Css => print!("{}", artifacts.css),
        Emit::Reference => println!("{}", artifacts.stylesheet_reference),
        Emit::Snippet => print!("{}", artifacts.snippet),
        Emit::All => {
            println!("=== CSS ===");
            println!("{}", artifacts.css);
            println!("=== Stylesheet Reference ===");
            println!("{}", artifacts.stylesheet_reference);
            println!();
            println!("=== Integration Code ===");
            print!("{}", artifacts.snippet);
            if let Some(markup) = mount_point_markup(&config) {
                println!();
                println!("Add this element where the chat should appear:");
                println!("{}", markup);
            }
        }
    }
}
