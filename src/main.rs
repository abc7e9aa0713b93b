//! make-config: build a config file from a template and key/value overrides.

use anyhow::Result;

fn main() -> Result<()> {
    make_config::cli::run()
}
