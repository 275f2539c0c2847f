//! ELM tree command-line interface

use clap::{Parser, Subcommand};
use octofhir_elmtree::DumpOptions;
use octofhir_elmtree::cli::dump::{DumpConfig, DumpTarget};
use octofhir_elmtree::cli::output::{ColorMode, OutputFormat};
use octofhir_elmtree::cli::rules::RulesConfig;
use octofhir_elmtree::cli::sections::SectionsConfig;
use octofhir_elmtree::cli::walk::WalkConfig;
use octofhir_elmtree::cli::{dump, output, rules, sections, walk};
use octofhir_elmtree::elm::DefSection;
use std::path::PathBuf;

/// ELM tree command-line tool
#[derive(Parser)]
#[command(name = "elmtree")]
#[command(author, version, about = "Inspect compiled CQL libraries (ELM JSON) as trees", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, pretty)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the library identifier and its definition sections
    Sections {
        /// ELM JSON file
        file: PathBuf,
    },

    /// List definition names of a section
    Rules {
        /// ELM JSON file
        file: PathBuf,

        /// Section to list (statements, usings, valueSets, ...)
        #[arg(short, long, default_value = "statements")]
        section: DefSection,
    },

    /// Print the built tree of a section, a rule or the identifier
    Dump {
        /// ELM JSON file
        file: PathBuf,

        /// Dump every definition of this section
        #[arg(short, long, conflicts_with_all = ["rule", "identifier"])]
        section: Option<DefSection>,

        /// Dump the statement with this name
        #[arg(short, long, conflicts_with = "identifier")]
        rule: Option<String>,

        /// Dump the library identifier
        #[arg(long)]
        identifier: bool,

        /// Spaces per depth level
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Omit field names of mapping children
        #[arg(long)]
        no_keys: bool,
    },

    /// Walk a rule and print every node in visit order
    Walk {
        /// ELM JSON file
        file: PathBuf,

        /// Statement name
        #[arg(short, long)]
        rule: String,

        /// Indent nodes by depth
        #[arg(short, long)]
        depth: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Sections { file } => sections::sections(SectionsConfig {
            file,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Rules { file, section } => rules::rules(RulesConfig {
            file,
            section,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Dump {
            file,
            section,
            rule,
            identifier,
            indent,
            no_keys,
        } => {
            let target = match (section, rule, identifier) {
                (Some(section), _, _) => DumpTarget::Section(section),
                (None, Some(rule), _) => DumpTarget::Rule(rule),
                (None, None, true) => DumpTarget::Identifier,
                (None, None, false) => DumpTarget::Section(DefSection::Statements),
            };
            let mut options = DumpOptions::default().with_indent(indent);
            if no_keys {
                options = options.without_keys();
            }
            dump::dump(DumpConfig {
                file,
                target,
                options,
                format: cli.format,
                output_file: cli.output,
            })
        }

        Commands::Walk { file, rule, depth } => walk::walk(WalkConfig {
            file,
            rule,
            depth,
            format: cli.format,
            output_file: cli.output,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
