use bevy::prelude::*;
use clap::Parser;
use lobby_browser_client::prelude::*;

fn main() -> anyhow::Result<()> {
    let config = ClientArgs::parse().into_config()?;

    App::new().add_plugins(ClientPlugin::new(config)).run();
    Ok(())
}
