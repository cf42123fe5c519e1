use dijkstra_paths::demo::{demo_graph, run_demo, DemoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DemoConfig::from_env()?;
    let graph = demo_graph()?;

    let report = run_demo(&graph, &config)?;
    println!("{}", report.render(config.format)?);

    Ok(())
}
