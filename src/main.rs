use anyhow::Context;
use clap::{Parser, Subcommand};
use sinergi::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sinergi", version, about = "SINERGI landing page")]
struct Cli {
    /// JSON configuration file; built-in defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the landing page over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Listen address, overrides `server.listen`
        #[arg(long)]
        listen: Option<String>,
    },
    /// Print the rendered page to stdout
    Render {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        hide_top: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        hide_bottom: Option<i32>,
        #[arg(long)]
        height: Option<i32>,
        /// Print only the embed fragment, not the whole document
        #[arg(long)]
        fragment: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(p) => AppConfig::from_file(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(AppConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        #[cfg(feature = "server")]
        Command::Serve { listen } => {
            if let Some(listen) = listen {
                config.server.listen = listen;
            }
            config.validate()?;
            let page = sinergi::landing_page(&config)?;
            let served = sinergi::server::ServedPage::new(page.render());
            let server = sinergi::server::PageServer::bind(&config.server.listen, served)?;
            server.run()?;
        }
        Command::Render {
            url,
            hide_top,
            hide_bottom,
            height,
            fragment,
        } => {
            let embed = &mut config.embed;
            if let Some(url) = url {
                embed.src = url;
            }
            if let Some(v) = hide_top {
                embed.hide_top_px = v;
            }
            if let Some(v) = hide_bottom {
                embed.hide_bottom_px = v;
            }
            if let Some(v) = height {
                embed.height = v;
            }
            if let Err(e) = config.validate() {
                log::warn!("{}", e);
            }
            if fragment {
                let req = config.embed.to_request()?;
                print!("{}", sinergi::render(&req).html);
            } else {
                print!("{}", sinergi::landing_page(&config)?.render());
            }
        }
    }
    Ok(())
}
