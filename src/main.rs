use chrono::Utc;
use clap::{Parser, Subcommand};
use page_forge::{config, generate, logging, output, sources};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "page-forge")]
#[command(about = "Generate a batch of cross-linked static HTML pages")]
#[command(long_about = "\
Generate a batch of cross-linked static HTML pages

Each run builds one batch of pages from keyword lists and HTML templates,
spreads them over random two-level shard directories, and links every page
to a few others from the same batch.

Source directory:

  source/
  ├── page-forge.toml      # Optional config (see `gen-config`)
  ├── test.html            # Templates named in config
  ├── test1.html
  ├── test2.html
  ├── keywords_ar.txt      # Primary keyword list, one entry per line
  └── keywords_en.txt      # Secondary keyword list

Missing templates and keyword lists are replaced by built-in defaults.

Template placeholders:
  {{TITLE}} {{DESCRIPTION}} {{KEYWORDS}} {{DATE}} {{DATE_SQL}} {{INTERNAL_LINKS}}

Run with no subcommand to generate one batch.")]
#[command(version)]
struct Cli {
    /// Directory holding templates, keyword lists and page-forge.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Directory under which shard directories are created
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    /// Seed for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Clone, Default)]
struct GenerateArgs {
    /// Pages to generate (overrides `count` from config)
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one batch of pages (the default)
    Generate(GenerateArgs),
    /// Load config, templates and keyword lists without writing anything
    Check,
    /// Print a stock page-forge.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        None => run_generate(&cli, GenerateArgs::default())?,
        Some(Command::Generate(args)) => run_generate(&cli, args.clone())?,
        Some(Command::Check) => {
            let config = config::load_config(&cli.source)?;
            let sources = sources::load_sources(&cli.source, &config);
            output::print_sources_output(&sources, &config);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run_generate(cli: &Cli, args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.source)?;
    let sources = sources::load_sources(&cli.source, &config);
    info!(
        templates = sources.templates.len(),
        "sources loaded from {}",
        cli.source.display()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let count = args.count.unwrap_or(config.count);

    let report = generate::run_cycle(
        &mut rng,
        &config,
        &sources,
        &cli.output,
        count,
        Utc::now(),
    )?;
    output::print_generate_output(&report);
    Ok(())
}
