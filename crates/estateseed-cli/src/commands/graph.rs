use anyhow::Result;

use estateseed_core::schema::graph::{DependencyGraph, GraphFormat as VizFormat};

use crate::args::GraphArgs;

pub fn run(args: &GraphArgs) -> Result<()> {
    let graph = DependencyGraph::from_catalog();

    let format = match args.format {
        crate::args::GraphFormat::Mermaid => VizFormat::Mermaid,
        crate::args::GraphFormat::Dot => VizFormat::Dot,
    };

    println!("{}", graph.visualize(format));
    Ok(())
}
