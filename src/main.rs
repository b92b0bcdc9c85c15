use anyhow::{anyhow, Result};
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Classic walled-grid snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "33")]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value = "26")]
    height: i32,

    /// Milliseconds per simulation tick
    #[arg(long, default_value = "125")]
    tick_ms: u64,

    /// Disable sound cues
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_ms: cli.tick_ms,
        ..Default::default()
    };
    config.validate().map_err(|reason| anyhow!(reason))?;

    let mut app = App::new(config, cli.mute);
    app.run().await
}
