//! Config render command implementation

use anyhow::{Context, Result};
use sc_core::{EnvSource, LegacyConfig, ProcessEnv};
use sc_jinja::TemplateRenderer;
use std::fs;
use std::path::PathBuf;

use crate::cli::{GlobalArgs, RenderArgs, RenderFormat};
use crate::context::ProjectContext;

/// Execute the config render command
pub async fn execute(args: &RenderArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let rendered = render(&ProcessEnv, args.format)?;

    if args.out.as_deref() == Some("-") {
        print!("{rendered}");
        return Ok(());
    }

    let path = match &args.out {
        Some(out) => PathBuf::from(out),
        None => project.config.config_override_path_absolute(&project.root),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, &rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", project.display_path(&path));
    Ok(())
}

/// Resolve the legacy configuration from `env` and render it as `format`
pub(crate) fn render(env: &dyn EnvSource, format: RenderFormat) -> Result<String> {
    let config = LegacyConfig::from_env(env).context("Invalid legacy configuration")?;
    match format {
        RenderFormat::Php => {
            let renderer = TemplateRenderer::new().context("Failed to load templates")?;
            renderer
                .render_legacy_config(&config)
                .context("Failed to render config_override.php")
        }
        RenderFormat::Json => {
            let mut json = serde_json::to_string_pretty(&config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[path = "config_render_test.rs"]
mod tests;
