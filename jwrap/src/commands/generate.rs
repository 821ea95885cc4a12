use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use jwrap_codegen::{
    generation::{FileRegistry, WriteStats},
    lower::lower,
};
use tracing::info;

use super::open_manifest;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to jwrap.toml (defaults to ./jwrap.toml)
    #[arg(short, long, default_value = "jwrap.toml")]
    pub config: PathBuf,

    /// Output directory for the package tree
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = open_manifest(&self.config);
        let lowered = lower(&manifest).wrap_err("Failed to lower manifest")?;

        let mut registry = FileRegistry::new(lowered.indent);
        for file in &lowered.files {
            registry.register_java(file);
        }
        info!(files = registry.len(), "rendered compilation units");

        if self.dry_run {
            Self::run_preview(&registry);
            return Ok(());
        }

        let stats = registry
            .write_all(&self.output)
            .wrap_err_with(|| format!("Failed to write to {}", self.output.display()))?;
        Self::print_summary(&self.output, &stats);
        Ok(())
    }

    fn run_preview(registry: &FileRegistry) {
        let files = registry.preview();

        for file in &files {
            println!("── {} ──", file.path.display());
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!(
            "{} file{} would be generated",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
    }

    fn print_summary(output: &Path, stats: &WriteStats) {
        println!("Generated: {}/", output.display());
        for path in &stats.written_paths {
            println!("  + {}", path.display());
        }
        for path in &stats.unchanged_paths {
            println!("  = {}", path.display());
        }
        println!();
        println!("{} written, {} unchanged", stats.written, stats.unchanged);
    }
}
