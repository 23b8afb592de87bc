/// Longplay - progress track tools
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use longplay_cli::{commands, CliConfig};
use longplay_core::{FileInfo, Point};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "longplay")]
#[command(about = "Longplay progress track: render, seek and bookmark", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./longplay.toml if present)
    #[arg(short, long, global = true, env = "LONGPLAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the track with indicator, bookmarks and hover label as SVG
    Render {
        /// Playback position in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        /// Total duration in seconds
        #[arg(long)]
        duration: f64,

        /// Pointer position in track coordinates (X,Y)
        #[arg(long, value_parser = commands::parse_point, allow_hyphen_values = true)]
        hover: Option<Point>,

        /// Write the SVG to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        file: FileArgs,
    },

    /// Resolve a pointer position to a playback time
    #[command(allow_negative_numbers = true)]
    Resolve {
        x: f64,
        y: f64,

        /// Total duration in seconds
        #[arg(long)]
        duration: f64,

        /// Coordinates are pixels of the rendered SVG
        #[arg(long)]
        screen: bool,
    },

    /// Print the track point at a progress fraction
    #[command(allow_negative_numbers = true)]
    Point {
        /// Progress in [0, 1]
        fraction: f64,
    },

    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkCommand,

        #[command(flatten)]
        file: FileArgs,
    },
}

#[derive(Subcommand)]
enum BookmarkCommand {
    /// List bookmarks
    List,
    /// Add a bookmark
    Add {
        /// Position in seconds
        time: f64,
        /// Name (default: bookmarks_MM:SS)
        #[arg(long)]
        name: Option<String>,
    },
    /// Rename the bookmark at a position
    Rename { time: f64, name: String },
    /// Remove the bookmark at a position
    Remove { time: f64 },
}

/// Audio file identity; defaults to the last opened file
#[derive(Args)]
struct FileArgs {
    /// File name
    #[arg(long, global = true)]
    file: Option<String>,

    /// File size in bytes
    #[arg(long, global = true)]
    size: Option<u64>,
}

impl FileArgs {
    fn file_info(&self) -> Option<FileInfo> {
        self.file
            .as_ref()
            .map(|name| FileInfo::new(name.clone(), self.size.unwrap_or(0)))
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "longplay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Render {
            time,
            duration,
            hover,
            output,
            file,
        } => {
            let svg = commands::render(&config, file.file_info(), time, duration, hover)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => println!("{}", svg),
            }
        }
        Commands::Resolve {
            x,
            y,
            duration,
            screen,
        } => {
            let hit = commands::resolve(&config, Point::new(x, y), duration, screen);
            println!("{}", commands::describe_match(hit.as_ref()));
        }
        Commands::Point { fraction } => {
            println!("{}", commands::point(&config, fraction));
        }
        Commands::Bookmarks { action, file } => {
            bookmarks(&config, action, file.file_info())?;
        }
    }

    Ok(())
}

fn bookmarks(
    config: &CliConfig,
    action: BookmarkCommand,
    file: Option<FileInfo>,
) -> anyhow::Result<()> {
    match action {
        BookmarkCommand::List => {
            let (file, bookmarks) = commands::list_bookmarks(config, file)?;
            print!("{}", commands::format_bookmarks(&file, &bookmarks));
        }
        BookmarkCommand::Add { time, name } => {
            match commands::add_bookmark(config, file, time, name.as_deref())? {
                Some(bookmark) => println!("Added {}", bookmark.name),
                None => println!("A bookmark already exists at {}s", time),
            }
        }
        BookmarkCommand::Rename { time, name } => {
            if commands::rename_bookmark(config, file, time, &name)? {
                println!("Renamed bookmark at {}s", time);
            } else {
                println!("Nothing renamed");
            }
        }
        BookmarkCommand::Remove { time } => {
            if commands::remove_bookmark(config, file, time)? {
                println!("Removed bookmark at {}s", time);
            } else {
                println!("No bookmark at {}s", time);
            }
        }
    }
    Ok(())
}
