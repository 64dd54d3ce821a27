use std::fs;

use anyhow::{Context, Result};

use atlas_lib::report::Worksheet;

use crate::app::App;

pub fn run(app: &App, output: Option<&str>, key: bool) -> Result<()> {
    let mut rng = app.rng();
    let sheet = Worksheet::build(&app.catalog, &mut rng);
    let markdown = sheet.render_markdown(key);

    match output {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("Failed to write worksheet to {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
