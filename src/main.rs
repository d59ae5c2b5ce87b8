//! Feature Resolver CLI
//!
//! Entry point for the `feature-resolver` command-line tool: validate
//! a schema table, compile its defaults artifact, or print the
//! resolved defaults for one edition.

use clap::{Parser, Subcommand};
use feature_resolver::{
    compile_defaults, validate_extension, validate_feature_type, CompiledDefaults, Edition,
    ExtensionField, FeatureResolver, RecordDescriptor,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "feature-resolver")]
#[command(about = "Edition-scoped feature default compiler and resolver", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the shape of a feature schema table
    Check {
        /// Path to the schema table JSON file
        #[arg(long, short = 's')]
        schema: PathBuf,
    },

    /// Compile the defaults artifact for a schema table
    Compile {
        /// Path to the schema table JSON file
        #[arg(long, short = 's')]
        schema: PathBuf,

        /// Minimum supported edition
        #[arg(long)]
        minimum: String,

        /// Maximum supported edition
        #[arg(long)]
        maximum: String,

        /// Write the artifact here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the resolved defaults for one edition
    Defaults {
        /// Path to a compiled defaults artifact
        #[arg(long, short = 'a')]
        artifact: PathBuf,

        /// Target edition
        #[arg(long, short = 'e')]
        edition: String,
    },
}

/// On-disk schema table: the root feature type plus its extension
/// fragments.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    root: RecordDescriptor,
    #[serde(default)]
    extensions: Vec<ExtensionField>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { schema } => run_check(&schema),
        Commands::Compile {
            schema,
            minimum,
            maximum,
            output,
        } => run_compile(&schema, &minimum, &maximum, output.as_deref()),
        Commands::Defaults { artifact, edition } => run_defaults(&artifact, &edition),
    }
}

fn load_schema(path: &Path) -> SchemaFile {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    };
    match serde_json::from_str(&contents) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Error parsing {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn run_check(path: &Path) {
    let schema = load_schema(path);

    if let Err(e) = validate_feature_type(&schema.root) {
        eprintln!("Invalid feature type: {}", e);
        process::exit(1);
    }
    for extension in &schema.extensions {
        if let Err(e) = validate_extension(&schema.root, extension) {
            eprintln!("Invalid extension: {}", e);
            process::exit(1);
        }
        if let Some(record) = extension.record() {
            if let Err(e) = validate_feature_type(record) {
                eprintln!("Invalid extension type: {}", e);
                process::exit(1);
            }
        }
    }

    println!(
        "ok: {} ({} fields, {} extensions)",
        schema.root.name,
        schema.root.fields.len(),
        schema.extensions.len()
    );
}

fn run_compile(path: &Path, minimum: &str, maximum: &str, output: Option<&Path>) {
    let schema = load_schema(path);

    let compiled = match compile_defaults(
        &schema.root,
        &schema.extensions,
        &Edition::from(minimum),
        &Edition::from(maximum),
    ) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("Compilation failed: {}", e);
            process::exit(1);
        }
    };

    match compiled.digest() {
        Ok(digest) => eprintln!(
            "compiled {} edition(s), digest sha256:{}",
            compiled.defaults.len(),
            digest
        ),
        Err(e) => {
            eprintln!("Error computing digest: {}", e);
            process::exit(1);
        }
    }

    match output {
        Some(out) => {
            if let Err(e) = compiled.write_to_file(out) {
                eprintln!("Error writing {}: {}", out.display(), e);
                process::exit(1);
            }
        }
        None => match compiled.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing artifact: {}", e);
                process::exit(1);
            }
        },
    }
}

fn run_defaults(path: &Path, edition: &str) {
    let compiled = match CompiledDefaults::load_from_file(path) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("Error loading {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let resolver = match FeatureResolver::create(&Edition::from(edition), &compiled) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Resolution failed: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(resolver.defaults()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing defaults: {}", e);
            process::exit(1);
        }
    }
}
