//! Config command: print the effective configuration.

use anyhow::Result;
use shext_core::config::ShextConfig;
use shext_core::xml::{MarkupFormat, XmlCodec};

use crate::cli::ConfigFormat;

pub fn run_config(cfg: &ShextConfig, format: ConfigFormat) -> Result<()> {
    print!("{}", render_config(cfg, format)?);
    Ok(())
}

fn render_config(cfg: &ShextConfig, format: ConfigFormat) -> Result<String> {
    let out = match format {
        ConfigFormat::Toml => toml::to_string_pretty(cfg)?,
        ConfigFormat::Xml => {
            let mut xml = XmlCodec::from_config(&cfg.xml).root("config").to_markup(cfg)?;
            xml.push('\n');
            xml
        }
    };
    Ok(out)
}
