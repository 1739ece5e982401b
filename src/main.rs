use std::path::PathBuf;

use clap::Parser;
use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tree2dot",
    version,
    about = "Convert an indented tree dump into a Graphviz DOT digraph"
)]
struct Cli {
    /// Indented tree file; each non-blank line is one node
    input: PathBuf,

    /// DOT file to write (created or overwritten)
    output: PathBuf,

    /// Tab stop width for tab-indented lines
    #[arg(
        long,
        default_value_t = tree2dot::tree_parser::DEFAULT_TAB_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    tab_width: usize,
}

/// Too few or too many paths. These print the usage and exit normally
/// without converting anything.
fn is_argument_count_error(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TREE2DOT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("tree2dot=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_argument_count_error(e.kind()) => {
            let _ = e.print();
            return;
        }
        Err(e) => e.exit(),
    };
    init_tracing();

    let options = tree2dot::ConvertOptions {
        tab_width: cli.tab_width,
    };
    if let Err(e) = tree2dot::run(&cli.input, &cli.output, &options) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
    println!("wrote DOT file: {}", cli.output.display());
}
