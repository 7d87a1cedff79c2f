use clothsim::{Scenario, ScenarioConfig};
use clothsim::{bench_substep, bench_substep_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "cloth.yaml")]
    file_name: String,

    /// Override the number of frames from the scenario
    #[arg(long)]
    frames: Option<usize>,

    /// Time substeps across grid sizes instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// With --bench: print a CSV curve over many grid sizes
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_substep_curve();
        } else {
            bench_substep();
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let frames = args.frames.unwrap_or(scenario.engine.frames);
    let start_centroid = scenario.state.centroid();

    for frame in 1..=frames {
        scenario.step_frame();

        if frame % scenario.engine.report_every == 0 || frame == frames {
            let c = scenario.state.centroid();
            info!(
                "frame {:5}  t = {:7.4}  centroid = ({:+.4}, {:+.4}, {:+.4})  max |v| = {:.4}",
                frame, scenario.t, c.x, c.y, c.z, scenario.state.max_speed()
            );
        }
    }

    let end_centroid = scenario.state.centroid();
    let vertices = scenario.vertex_buffer()?;
    info!(
        "done: {} vertices, {} triangles, centroid dropped {:.4}",
        vertices.len(),
        scenario.topology.indices.len() / 3,
        start_centroid.y - end_centroid.y
    );

    Ok(())
}
