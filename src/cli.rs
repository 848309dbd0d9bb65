// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "flyby")]
#[command(about = "Animated cube-field flythrough", long_about = None)]
pub struct Cli {
    /// Built-in scene name (flythrough, ring) or path to a scene JSON file
    #[arg(long = "scene", default_value = "flythrough")]
    pub scene: String,

    /// Override the scene's per-frame path step
    #[arg(long = "step")]
    pub step: Option<f32>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
