use clap::{Parser, Subcommand};
use folio_gen::{config, output, site};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio-gen")]
#[command(about = "Static site generator for project portfolios")]
#[command(long_about = "\
Static site generator for project portfolios

Your filesystem is the data source. Each subdirectory of the projects root
is one portfolio entry, described by a project.yml metadata record.

Input structure:

  project_descriptions/
  ├── alpha/
  │   ├── project.yml              # name, public, featured + free-form keys
  │   └── image-400x200px.png      # Optional preview → staged as images/<slug>.png
  └── beta/
      └── project.yml
  templates/
  ├── project.html                 # One page per public project
  ├── index.html                   # Featured projects listing
  ├── portfolio.html               # All public projects
  ├── about.html                   # Canonical project (is_jicbioimage)
  ├── css/                         # Copied verbatim into the output
  └── images/                      # Copied verbatim into the output

Pages land in the output root: one <slug>.html per public project plus the
three listing pages. Paths default to project_descriptions/, templates/ and
build/, overridable in folio.toml or with --projects, --templates, --output.

Run 'folio-gen gen-config' to generate a documented folio.toml.")]
#[command(version)]
struct Cli {
    /// Projects directory (default: project_descriptions, or folio.toml)
    #[arg(long, global = true)]
    projects: Option<PathBuf>,

    /// Templates directory (default: templates, or folio.toml)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Output directory (default: build, or folio.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: stage assets → load projects → render pages
    Build,
    /// Validate project metadata without writing anything
    Check,
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A bare invocation runs a full build.
    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let config = resolve(&cli)?;
            println!("==> Building from {}", config.projects_root.display());
            let portfolio = site::build(&config)?;
            output::print_build_output(&portfolio);
            println!("==> Build complete: {}", config.output_root.display());
        }
        Command::Check => {
            let config = resolve(&cli)?;
            println!("==> Checking {}", config.projects_root.display());
            let portfolio = site::check(&config)?;
            output::print_check_output(&portfolio);
            println!("==> Projects are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Layer folio.toml in the current directory with the CLI path flags.
fn resolve(cli: &Cli) -> Result<config::BuildConfig, config::ConfigError> {
    config::resolve_config(
        Path::new("."),
        cli.projects.clone(),
        cli.templates.clone(),
        cli.output.clone(),
    )
}
