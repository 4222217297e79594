use anyhow::Result;
use clap::{Parser, Subcommand};
use node_label::{
    node::{Node, NodeParser},
    rename::{Renamer, RenamerConfig, DEFAULT_TEMPLATE},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A proxy node classifier that renames nodes into normalized labels
#[derive(Parser)]
#[command(name = "node-label")]
#[command(about = "A proxy node classifier that renames nodes into normalized labels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename every node in a file (JSON array or JSON lines)
    Rename {
        /// Input file containing nodes
        input: PathBuf,
        /// Output file for the labels
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Label template
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
        /// Keep repeated labels as they are
        #[arg(long)]
        no_dedupe: bool,
    },
    /// Print the label of a single node
    Label {
        /// Node hostname
        #[arg(long, default_value = "")]
        hostname: String,
        /// Node remark
        #[arg(short, long)]
        remark: String,
        /// Label template
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
    },
    /// Show how a single node is classified
    Explain {
        /// Node hostname
        #[arg(long, default_value = "")]
        hostname: String,
        /// Node remark
        #[arg(short, long)]
        remark: String,
        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rename {
            input,
            output,
            template,
            no_dedupe,
        } => {
            let nodes = NodeParser::parse_file(&input)?;
            tracing::info!(count = nodes.len(), input = %input.display(), "loaded nodes");

            let config = RenamerConfig::new()
                .with_template(template)
                .with_dedupe(!no_dedupe);
            let labels = Renamer::with_config(config).rename_all(&nodes)?;

            if let Some(output_path) = output {
                NodeParser::save_to_file(&labels, &output_path)?;
                println!("Saved {} labels to {:?}", labels.len(), output_path);
            } else {
                for label in &labels {
                    println!("{}", label);
                }
            }
        }
        Commands::Label {
            hostname,
            remark,
            template,
        } => {
            let renamer = Renamer::with_config(RenamerConfig::new().with_template(template));
            println!("{}", renamer.rename(&Node::new(&hostname, &remark))?);
        }
        Commands::Explain {
            hostname,
            remark,
            json,
        } => {
            let label = Renamer::new().classify(&Node::new(&hostname, &remark))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&label)?);
            } else {
                println!("Label:      {}", label);
                println!("Provider:   {}", label.provider);
                println!("Tier:       L{}", label.tier);
                println!("Multiplier: {}", label.multiplier);
                println!("Location:   {}", label.location);
                println!("Domestic:   {}", label.domestic);
                println!("City:       {}", label.features.city.unwrap_or("-"));
                println!("Tags:       {}", label.features.tags.join(" "));
                println!("NAT hop:    {}", label.features.nat_hop.unwrap_or("-"));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
