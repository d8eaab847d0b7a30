use compatkit::{AnnotatorBuilder, Document, FailurePolicy, Node, PipelineError};
use std::env;
use std::fs;

/// A simple CLI that adds Can I Use panels to a JSON-encoded document body.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!("Adds Can I Use support panels to a document and prints the HTML.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/data-dir> <path/to/metadata.json> <path/to/body.json> [--lenient]",
            args[0]
        );
        eprintln!();
        eprintln!("The data directory must contain caniuse/data.json and caniuse/feature-<id>.json.");
        std::process::exit(1);
    }

    let data_dir = &args[1];
    let metadata_path = &args[2];
    let body_path = &args[3];
    let policy = match args.get(4).map(String::as_str) {
        Some("--lenient") => FailurePolicy::Lenient,
        Some(other) => {
            return Err(PipelineError::Config(format!("Unknown option '{other}'")));
        }
        None => FailurePolicy::Strict,
    };

    log::info!("Loading document body from {}", body_path);
    let nodes: Vec<Node> = serde_json::from_str(&fs::read_to_string(body_path)?)?;
    let mut doc = Document::from_nodes(nodes);

    let annotator = AnnotatorBuilder::new()
        .with_data_dir(data_dir)
        .with_metadata_file(metadata_path)?
        .with_failure_policy(policy)
        .build()?;

    let mut ctx = annotator.new_build();
    let report = annotator.annotate(&mut doc, &mut ctx)?;
    for error in &report.errors {
        eprintln!("error: {error}");
    }
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    println!("{}", compatkit::render_html(&doc, &ctx));
    Ok(())
}
