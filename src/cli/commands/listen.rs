//! The display itself.

use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

use crate::channel::{Channel, JsonLinesChannel};
use crate::config::Config;
use crate::error::ResultExt;
use crate::present::ConsoleSink;
use crate::router::Router;
use crate::session;

use super::build_router;

/// Listen on the channel until it disconnects or the user interrupts
pub fn cmd_listen(rt: &Runtime, config: &Config, replay: Option<&Path>) -> anyhow::Result<()> {
    let sink = Arc::new(ConsoleSink::new(config.display.show_banner));
    let router = build_router(config, sink)?;
    let name = config.channel.name.clone();

    rt.block_on(async {
        info!(
            "Listening on {} (primary device {})",
            name, config.channel.primary_device_id
        );

        match replay {
            Some(path) => {
                info!("Replaying messages from {:?}", path);
                let mut channel = JsonLinesChannel::replay(name, path)
                    .await
                    .with_context(format!("opening replay file {:?}", path))?;
                serve(&mut channel, router).await
            }
            None => {
                let mut channel = JsonLinesChannel::terminal(name);
                serve(&mut channel, router).await
            }
        }
    })
}

async fn serve<C: Channel>(channel: &mut C, router: Router) -> anyhow::Result<()> {
    tokio::select! {
        result = session::run(channel, router) => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
    Ok(())
}
