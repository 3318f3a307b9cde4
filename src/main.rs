use anyhow::Result;
use clap::Parser;

use create_gif_rs::{BatchConverter, Config, NoopRenderer};

fn main() -> Result<()> {
    let config = Config::parse();

    let outputs = if config.noop {
        BatchConverter::new(NoopRenderer, config).convert_directory()?
    } else {
        BatchConverter::with_gif_renderer(config).convert_directory()?
    };

    for path in &outputs {
        println!("{}", path.display());
    }

    Ok(())
}
