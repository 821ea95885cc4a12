use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use jwrap_codegen::{generation::JavaFile, lower::lower};

use super::open_manifest;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to jwrap.toml (defaults to ./jwrap.toml)
    #[arg(short, long, default_value = "jwrap.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = open_manifest(&self.config);
        let lowered = lower(&manifest).wrap_err("Validation failed")?;

        println!("✓ {} is valid\n", self.config.display());

        let count = lowered.files.len();
        println!("  {} class{}:", count, if count == 1 { "" } else { "es" });
        for file in &lowered.files {
            print!("{}", summarize(file));
        }

        Ok(())
    }
}

/// One line per class followed by its member signatures, short names
/// resolved as they will be in the generated file.
fn summarize(file: &JavaFile) -> String {
    let class = file.class();
    let imports = file.imports();

    let mut out = format!("    {} {}\n", class.kind.keyword(), class.name);
    for method in &class.methods {
        out.push_str("      ");
        out.push_str(&method.signature(&imports));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use jwrap_codegen::builder::{ClassModel, MethodModel, TypeRef};

    use super::*;

    #[test]
    fn test_summarize_lists_signatures() {
        let class = ClassModel::new("com.example.Store")
            .method(MethodModel::constructor("Store"))
            .method(
                MethodModel::new("find")
                    .returns(TypeRef::class("java.util.Optional"))
                    .arg("id", TypeRef::long())
                    .throws(TypeRef::class("java.io.IOException")),
            );

        assert_eq!(
            summarize(&JavaFile::new(class)),
            "    class com.example.Store\n      public Store()\n      public Optional find(long id) throws IOException\n"
        );
    }
}
