//! `render` command

use std::path::Path;

use anyhow::{Context, Result};

use taxonomy_links::config::{LoadedConfig, OutputFormat};
use taxonomy_links::infrastructure::atomic_write;
use taxonomy_links::presentation::cli::SourceArgs;
use taxonomy_links::presentation::{create_indented_links_use_case, create_renderer};

pub fn cmd_render(
    loaded: &LoadedConfig,
    source: &SourceArgs,
    format: Option<OutputFormat>,
    ascii: bool,
    output: Option<&Path>,
) -> Result<()> {
    let config = super::with_source_args(&loaded.config, source);
    let settings = config.block_settings(&super::config_hint(loaded))?;

    let use_case = create_indented_links_use_case(&config.source.vocabularies, &config)?;
    let links = use_case.execute(&settings).with_context(|| {
        format!(
            "failed to build links for vocabulary '{}'",
            settings.vocabulary
        )
    })?;

    if links.is_empty() {
        log::info!("vocabulary '{}' has nothing to render", settings.vocabulary);
    }

    let format = format.unwrap_or(config.output.format);
    let unicode = config.output.unicode && !ascii;
    let rendered = create_renderer(format, unicode).render(&links)?;

    match output {
        Some(path) => {
            atomic_write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!(
                "wrote {} items to {}",
                links.items.item_count(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
