use std::path::{Path, PathBuf};

use anyhow::{anyhow, Error};
use clap::Parser;

use manazza::pages::fragments::{list_pages, read_page_fragment, FRAGMENT_EXTENSION};
use manazza_config::Config;
use manazza_layout::{Analytics, RootLayout};

/// Render page fragment into a complete HTML document
#[derive(Parser)]
pub struct RenderPage {
    /// Path to fragment file
    path: PathBuf,
    /// Don't insert analytics collector
    #[arg(long)]
    no_analytics: bool,
}

impl RenderPage {
    fn render(&self) -> Result<String, Error> {
        let fragment = std::fs::read_to_string(&self.path)?;
        let analytics = if self.no_analytics {
            None
        } else {
            Some(Analytics::production())
        };
        let layout = RootLayout::site(analytics);
        let document = layout.render(&fragment)?;
        Ok(document)
    }

    pub fn execute(&self) -> Result<(), Error> {
        let document = self.render()?;
        println!("{document}");
        Ok(())
    }
}

/// Output directory must not overlap with source directory,
/// otherwise sources get overwritten
fn check_output_dir(output_dir: &Path, source_dir: &Path) -> Result<(), Error> {
    let output_dir = output_dir.canonicalize()?;
    let source_dir = source_dir.canonicalize()?;
    if output_dir.starts_with(&source_dir) {
        return Err(anyhow!(
            "output directory {} is inside source directory {}",
            output_dir.display(),
            source_dir.display(),
        ));
    };
    Ok(())
}

fn copy_dir(source: &Path, destination: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(destination)?;
    for maybe_entry in std::fs::read_dir(source)? {
        let entry = maybe_entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), target)?;
        };
    };
    Ok(())
}

/// Renders all pages, returns paths of written files
pub fn export_pages(
    layout: &RootLayout,
    pages_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(output_dir)?;
    check_output_dir(output_dir, pages_dir)?;
    let mut written = vec![];
    for page_name in list_pages(pages_dir)? {
        let fragment = read_page_fragment(pages_dir, &page_name)?;
        let document = layout.render(&fragment)?;
        let output_path = output_dir
            .join(format!("{page_name}.{FRAGMENT_EXTENSION}"));
        std::fs::write(&output_path, document)?;
        log::info!("exported {}", output_path.display());
        written.push(output_path);
    };
    Ok(written)
}

/// Export static site (rendered pages and static files)
#[derive(Parser)]
pub struct Export {
    output_dir: PathBuf,
}

impl Export {
    pub fn execute(
        &self,
        config: &Config,
        layout: &RootLayout,
    ) -> Result<(), Error> {
        let static_output_dir = self.output_dir.join("static");
        if let Some(ref static_dir) = config.static_dir {
            std::fs::create_dir_all(&static_output_dir)?;
            check_output_dir(&static_output_dir, static_dir)?;
        };
        let written = export_pages(layout, &config.pages_dir, &self.output_dir)?;
        if let Some(ref static_dir) = config.static_dir {
            copy_dir(static_dir, &static_output_dir)?;
        };
        println!("pages exported: {}", written.len());
        Ok(())
    }
}
