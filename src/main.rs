//! tirsu CLI: write text as Tir'su circular glyphs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use tirsu::config::{WriterConfig, parse_scale};
use tirsu::error::TirsuError;
use tirsu::language::{ALPHABET, LanguageError, Letter, Orientation};
use tirsu::write::{parse_text, write_tirsu};

#[derive(Parser)]
#[command(name = "tirsu", version, about = "Write text in the Tir'su script")]
struct Cli {
    /// TOML file with writer settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to an SVG document.
    Write {
        /// Output file; the extension is forced to `.svg`.
        #[arg(long, short)]
        output: PathBuf,

        /// Image scale (must be positive).
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<String>,

        /// Script convention: "y" (githyanki) or "z" (githzerai).
        #[arg(long)]
        dialect: Option<String>,

        /// Text to write. Prompted for on stdin when omitted.
        text: Vec<String>,
    },

    /// Show how text splits into letters and where each one sits.
    Letters {
        /// Script convention: "y" (githyanki) or "z" (githzerai).
        #[arg(long)]
        dialect: Option<String>,

        text: Vec<String>,
    },

    /// List the 35 letters of the alphabet.
    Alphabet,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WriterConfig::load(path)?,
        None => WriterConfig::default(),
    };

    match cli.command {
        Commands::Write {
            output,
            scale,
            dialect,
            text,
        } => {
            if let Some(s) = scale {
                config.scale = parse_scale(&s)?;
            }
            if let Some(d) = dialect {
                config.orientation = d.parse::<Orientation>()?;
            }

            let written = if text.is_empty() {
                prompt_and_write(&output, &config)?
            } else {
                write_tirsu(&output, &text.join(" "), &config)?
            };
            println!("Wrote {}", written.display());
        }

        Commands::Letters { dialect, text } => {
            if let Some(d) = dialect {
                config.orientation = d.parse::<Orientation>()?;
            }

            let document = parse_text(&text.join(" "), config.orientation)?;
            println!(
                "{} script, circle radius {:.2}",
                document.orientation().convention(),
                document.radius(config.radius_exponent)
            );
            for (row, sentence) in document.sentences().iter().enumerate() {
                println!("sentence {}:", row + 1);
                for word in sentence {
                    println!("  {word} ({} letters)", word.len());
                    for (token, angle) in word.tokens().iter().zip(word.angles()) {
                        println!("    {:<3} {:>8.2}°", token.letter.symbol(), angle.to_degrees());
                    }
                }
            }
        }

        Commands::Alphabet => {
            for (i, symbol) in ALPHABET.iter().enumerate() {
                let kind = if Letter::ALL[i].is_digraph() {
                    "digraph"
                } else {
                    "letter"
                };
                println!("{:>2}  {symbol:<3} {kind}", i + 1);
            }
        }
    }

    Ok(())
}

/// Ask for text until it contains only valid characters.
fn prompt_and_write(output: &std::path::Path, config: &WriterConfig) -> Result<PathBuf> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Text to write in Tir'su: ");
        std::io::stdout().flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            miette::bail!("no text given on stdin");
        };
        let line = line.into_diagnostic()?;

        match write_tirsu(output, &line, config) {
            Ok(path) => return Ok(path),
            Err(TirsuError::Language(err @ LanguageError::InvalidCharacters { .. })) => {
                eprintln!("{err}");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use tirsu::config::ConfigError;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_scale_reaches_validation() {
        let cli = Cli::try_parse_from(["tirsu", "write", "--output", "out", "--scale", "-1", "duj"])
            .unwrap();
        let Commands::Write { scale, text, .. } = cli.command else {
            panic!("expected the write command");
        };
        assert_eq!(scale.as_deref(), Some("-1"));
        assert_eq!(text, vec!["duj"]);
        assert!(matches!(
            parse_scale("-1"),
            Err(ConfigError::InvalidScale { scale }) if scale == -1.0
        ));
    }

    #[test]
    fn dialect_flag_parses_orientation() {
        let cli = Cli::try_parse_from(["tirsu", "letters", "--dialect", "z", "vlaakith"]).unwrap();
        let Commands::Letters { dialect, .. } = cli.command else {
            panic!("expected the letters command");
        };
        let orientation = dialect.unwrap().parse::<Orientation>().unwrap();
        assert_eq!(orientation, Orientation::Githzerai);
    }
}
