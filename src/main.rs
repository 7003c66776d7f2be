use shell_island::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = IslandApp::new(IslandConfig::default())?;
    app.run()
}
