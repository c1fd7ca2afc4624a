//! Command-line interface for pathfinder.
//!
//! This binary exposes the `find` entry point: shorthand filters, size and image
//! filters, ignore patterns, depth limiting and several output formats.

use clap::{Parser, ValueEnum};
#[cfg(feature = "images")]
use pathfinder::ImageFilter;
use pathfinder::{
    And, DotDirectoryFilter, FindBuilder, FindOptions, FinderError, GlobMatch, Or, SizeFilter,
    find, output,
};
use std::path::PathBuf;
use std::process::exit;

/// pathfinder: find paths with composable filters
#[derive(Parser)]
#[command(name = "pathfinder", version, about, long_about = None)]
struct Cli {
    /// Root directory (a file walks its parent directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Only directories
    #[arg(short = 'd', long = "dirs")]
    just_dirs: bool,

    /// Only regular files
    #[arg(short = 'f', long = "files")]
    just_files: bool,

    /// Regular expression matched from the start of each relative path
    #[arg(short, long)]
    regex: Option<String>,

    /// Shell wildcard pattern matched against each relative path
    #[arg(short, long)]
    glob: Option<String>,

    /// Glob patterns to ignore; matching directories are pruned (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Prune directories whose name starts with a period
    #[arg(long)]
    skip_dot_dirs: bool,

    /// Minimum file size in bytes
    #[arg(long)]
    min_size: Option<u64>,

    /// Maximum file size in bytes
    #[arg(long)]
    max_size: Option<u64>,

    /// Only image files
    #[cfg(feature = "images")]
    #[arg(long)]
    images: bool,

    /// Print absolute paths
    #[arg(short, long)]
    absolute: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Lines,
    Null,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Lines => output::OutputFormat::Lines,
            OutputFormat::Null => output::OutputFormat::Null,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Extra filters that are not shorthands; combined with AND.
    fn extra_predicate(&self) -> Option<And> {
        let mut extra = And::default();
        if self.min_size.is_some() || self.max_size.is_some() {
            let mut size = SizeFilter::new().min_bytes(self.min_size.unwrap_or(0));
            if let Some(max) = self.max_size {
                size = size.max_bytes(max);
            }
            extra.push(size);
        }
        #[cfg(feature = "images")]
        if self.images {
            extra.push(ImageFilter::new());
        }
        (!extra.children().is_empty()).then_some(extra)
    }

    fn ignore_predicate(&self) -> Result<Option<Or>, FinderError> {
        let mut ignore = Or::default();
        for pattern in &self.ignore_patterns {
            ignore.push(GlobMatch::new(pattern)?);
        }
        if self.skip_dot_dirs {
            ignore.push(DotDirectoryFilter::new());
        }
        Ok((!ignore.children().is_empty()).then_some(ignore))
    }

    #[allow(clippy::type_complexity)]
    fn into_options(
        self,
    ) -> Result<(FindOptions, OutputFormat, bool, Option<PathBuf>), FinderError> {
        let mut builder = FindBuilder::new(self.root.clone())
            .just_dirs(self.just_dirs)
            .just_files(self.just_files)
            .absolute(self.absolute);

        if let Some(ref regex) = self.regex {
            builder = builder.regex(regex.clone());
        }
        if let Some(ref glob) = self.glob {
            builder = builder.glob(glob.clone());
        }
        if let Some(extra) = self.extra_predicate() {
            builder = builder.predicate(extra);
        }
        if let Some(ignore) = self.ignore_predicate()? {
            builder = builder.ignore(ignore);
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        Ok((builder.build(), self.format, self.pretty, self.output))
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, destination) = match cli.into_options() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if has_conflicting_filters(&options) {
        eprintln!(
            "Warning: only the first of --dirs, --files, --regex, --glob and size/image filters applies"
        );
    }

    let paths = match find(options) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match destination {
        Some(file) => {
            if let Err(e) = output::write_paths_to_file(&paths, format.into(), &file, pretty) {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        None => print!("{}", output::format_paths(&paths, format.into(), pretty)),
    }
}

fn has_conflicting_filters(options: &FindOptions) -> bool {
    let shorthands = [
        options.just_dirs,
        options.just_files,
        options.regex.is_some(),
        options.glob.is_some(),
        options.predicate.is_some(),
    ];
    shorthands.iter().filter(|set| **set).count() > 1
}
