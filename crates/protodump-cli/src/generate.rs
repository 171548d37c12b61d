//! Generate command implementation

use anyhow::{Context, Result};
use protodump_cli::codegen::{self, GeneratedFile};
use protodump_core::{GeneratorConfig, Schema};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Load the generator configuration, falling back to defaults.
pub fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {path}")),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Generate command implementation
pub fn run(schema_path: &str, config_path: Option<&str>, output: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let schema = Schema::from_file(schema_path)
        .with_context(|| format!("Failed to load schema: {schema_path}"))?;

    tracing::info!(
        "Generating {} message types from {}",
        schema.len(),
        schema_path
    );

    let files = codegen::generate(&schema, &config).context("Code generation failed")?;

    match output {
        Some(dir) => write_files(&files, Path::new(dir))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(codegen::concat(&files).as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Write one file per message into `dir`.
fn write_files(files: &[GeneratedFile], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {dir:?}"))?;

    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.content).with_context(|| format!("Failed to write {path:?}"))?;
        tracing::debug!("Wrote {}", path.display());
    }

    Ok(())
}
