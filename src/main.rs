//! dui-demo: replay an input script against the elements demo headlessly.
//!
//! Usage:
//!   dui-demo                              # one idle frame to demo.png
//!   dui-demo --script clicks.json -o out.png
//!   dui-demo --script clicks.json --dump  # print draw calls as JSON

use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dui::config::UiConfig;
use dui::demo::{Demo, DemoScript, ScriptFrame, run_script};
use dui::render::{RecordingSink, SoftwareCanvas};
use dui::state::UiState;

#[derive(Parser)]
#[command(name = "dui-demo")]
#[command(about = "Immediate-mode UI demo, rendered headlessly")]
struct Cli {
    /// JSON input script; without it a single idle frame is built
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Output image path (format from extension)
    #[arg(short, long, default_value = "demo.png")]
    output: PathBuf,

    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final frame's draw calls and demo state as JSON instead of
    /// writing an image
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => UiConfig::load_from(path)?,
        None => UiConfig::load(),
    };
    let script = match &cli.script {
        Some(path) => DemoScript::load(path)?,
        None => DemoScript { frames: vec![ScriptFrame::default()] },
    };

    let mut state = UiState::new(config.font);
    let mut demo = Demo::default();
    run_script(&script, &mut state, &mut demo);

    if cli.dump {
        let mut sink = RecordingSink::new();
        state.render(&mut sink);
        let out = json!({
            "demo": demo,
            "grabbed": state.grabbed_id(),
            "active": state.active_id(),
            "commands": sink.commands,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut canvas = SoftwareCanvas::new(config.width, config.height, config.background);
    state.render(&mut canvas);
    canvas.save(&cli.output)?;
    info!(output = %cli.output.display(), "done");
    Ok(())
}
