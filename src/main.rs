use clap::Parser;
use serde::Serialize;

use gfamem::GraphStore;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { file, json } => run_inspect(&file, json),
        Commands::Segments { file, limit } => run_segments(&file, limit),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct PathSummary {
    name: String,
    steps: usize,
    overlaps: usize,
}

#[derive(Serialize)]
struct Summary {
    file: String,
    version: Option<String>,
    segments: usize,
    links: usize,
    paths: Vec<PathSummary>,
    record_stride: usize,
    handle_size: usize,
}

fn summarize(file: &str, store: &GraphStore) -> Summary {
    Summary {
        file: file.to_owned(),
        version: store.version().map(str::to_owned),
        segments: store.segment_count(),
        links: store.link_count(),
        paths: store
            .paths()
            .iter()
            .map(|p| PathSummary {
                name: p.name.clone(),
                steps: p.steps.len(),
                overlaps: p.overlaps.len(),
            })
            .collect(),
        record_stride: gfamem::segment_record_stride(),
        handle_size: gfamem::string_handle_size(),
    }
}

fn run_inspect(file: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = gfamem::load(file)?;
    let summary = summarize(file, &store);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", summary.file);
    match &summary.version {
        Some(v) => println!("  version:  {}", v),
        None => println!("  version:  (no header)"),
    }
    println!("  segments: {}", summary.segments);
    println!("  links:    {}", summary.links);
    println!("  paths:    {}", summary.paths.len());
    for path in &summary.paths {
        println!(
            "    {}: {} steps, {} overlaps",
            path.name, path.steps, path.overlaps
        );
    }
    println!(
        "  layout:   {}-byte records (2 x {}-byte handles)",
        summary.record_stride, summary.handle_size
    );
    Ok(())
}

fn run_segments(file: &str, limit: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let store = gfamem::load(file)?;
    let count = store.segment_count();
    let shown = limit.unwrap_or(count).min(count);

    println!(
        "{:>4}  {:<16} {:>8}  {:>14}  {:>8}",
        "ix", "name", "seq len", "seq offset", "seq cap"
    );
    for ix in 0..shown {
        let name = store.segment_name(ix)?;
        let handle = store.segment_sequence_handle(ix)?;
        println!(
            "{:>4}  {:<16} {:>8}  {:>#14x}  {:>8}",
            ix, name, handle.len, handle.offset, handle.capacity
        );
    }
    if shown < count {
        println!("  ... {} more", count - shown);
    }
    Ok(())
}
