use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use is_terminal::IsTerminal;
use linediff::artifacts::core::logging;
use linediff::artifacts::core::pager::Output;
use linediff::artifacts::diff::algorithm::Algorithm;
use linediff::artifacts::render::compress::DEFAULT_COMPRESSION_THRESHOLD;
use linediff::artifacts::render::{DEFAULT_WIDTH, Layout, RenderConfig};
use linediff::commands::diff::{DiffCommand, DiffOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "Computes a line diff between two files, pairs edited lines into \
    replacements and prints the result in a unified or side-by-side layout. \
    A path that does not exist is treated as an empty file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The old version of the file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new version of the file")]
    new: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Algorithm::Myers, help = "The diff algorithm")]
    algorithm: Algorithm,
    #[arg(short, long, value_enum, default_value_t = Layout::Unified, help = "The output layout")]
    layout: Layout,
    #[arg(short, long, env = "COLUMNS", default_value_t = DEFAULT_WIDTH, help = "Total output width")]
    width: usize,
    #[arg(short = 'n', long, help = "Show line numbers")]
    line_numbers: bool,
    #[arg(short, long, help = "Show every unchanged line")]
    expanded: bool,
    #[arg(long, help = "Wrap long lines instead of truncating them")]
    wrap: bool,
    #[arg(
        long,
        default_value_t = DEFAULT_COMPRESSION_THRESHOLD,
        help = "Collapse unchanged runs longer than this"
    )]
    threshold: usize,
    #[arg(
        short = 'U',
        long,
        default_value_t = 0,
        help = "Unchanged lines kept around a collapsed run"
    )]
    context: usize,
    #[arg(long, help = "Keep edited lines as separate deletions and insertions")]
    no_merge: bool,
    #[arg(long, help = "Print a tally of edit kinds")]
    stat: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to use colors")]
    color: ColorChoice,
    #[arg(long, help = "Write to stdout even on a terminal")]
    no_pager: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = cli.color.enabled();
    colored::control::set_override(color);

    let render = RenderConfig::default()
        .with_width(cli.width)
        .with_line_numbers(cli.line_numbers)
        .with_expanded(cli.expanded)
        .with_wrap(cli.wrap)
        .with_threshold(cli.threshold)
        .with_context(cli.context)
        .with_color(color);
    let options = DiffOptions::new(cli.algorithm, cli.layout, !cli.no_merge, cli.stat, render);

    let output = Output::select(!cli.no_pager);
    let command = DiffCommand::new(output.writer(), options);
    command.run(&cli.old, &cli.new)?;
    drop(command);

    output.finish()
}
