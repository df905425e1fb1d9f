use clap::{ArgAction, Parser};
use cssembed_codegen::{Escaping, GenerateOptions, Target};
use cssembed_source::StyleSheet;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cssembed")]
#[command(about = "Generate a C++ string from a CSS file")]
#[command(version)]
struct Cli {
    /// The name of the C++ string variable to generate
    #[arg(value_name = "VAR_NAME")]
    variable_name: String,

    /// The path to the CSS file to read from
    input_file: PathBuf,

    /// The path to the C++ file to write to
    output_file: PathBuf,

    /// Escape quotes and backslashes in the embedded text
    #[arg(long)]
    escape: bool,

    /// Namespace enclosing the generated declaration
    #[arg(long, value_name = "NS", default_value = "Web::CSS")]
    namespace: String,

    /// Header providing StringView
    #[arg(long, value_name = "PATH", default_value = "AK/StringView.h")]
    include: String,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            target: Target {
                include: self.include.clone(),
                namespace: self.namespace.clone(),
            },
            escaping: if self.escape {
                Escaping::CppLiteral
            } else {
                Escaping::Verbatim
            },
        }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Source(#[from] cssembed_source::SourceError),

    #[error(transparent)]
    Codegen(#[from] cssembed_codegen::CodegenError),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "generation failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Read before touching the output so a bad input leaves it as it was.
    let sheet = StyleSheet::read(&cli.input_file)?;
    if sheet.is_empty() {
        tracing::warn!(
            path = %cli.input_file.display(),
            "stylesheet has no content lines, embedding an empty string"
        );
    }

    let source = cssembed_codegen::generate(&cli.variable_name, &sheet, &cli.options())?;

    std::fs::write(&cli.output_file, &source).map_err(|source| CliError::Write {
        path: cli.output_file.clone(),
        source,
    })?;

    tracing::info!(
        variable = %cli.variable_name,
        lines = sheet.lines.len(),
        comments = sheet.comment_lines(),
        output = %cli.output_file.display(),
        "generated stylesheet source"
    );
    Ok(())
}
