//! Version command implementation

use crate::cli::Output;
use crate::generator::emit::INI_RUNTIME;
use anyhow::Result;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    if output.is_quiet() {
        println!("{} {}", name, version);
        return Ok(());
    }

    output.header("🚀 inigen Version Information");
    output.key_value("Version:", &format!("{} v{}", name, version), true);

    output.category("About");
    output.key_value("Description:", description, false);
    output.key_value("Repository:", repository, false);
    output.key_value("Generates for:", INI_RUNTIME, false);

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value("Profile:", if cfg!(debug_assertions) { "debug" } else { "release" }, false);
    output.blank_line();

    Ok(())
}
