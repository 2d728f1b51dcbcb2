//! Page fragments are HTML files with page content, without document shell
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

pub const INDEX_PAGE: &str = "index";
pub const FRAGMENT_EXTENSION: &str = "html";

const PAGE_NAME_RE: &str = r"^[a-z0-9][a-z0-9-]*$";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid page name")]
    InvalidName,

    #[error("page not found")]
    NotFound,

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub fn validate_page_name(page_name: &str) -> Result<(), PageError> {
    let page_name_re = Regex::new(PAGE_NAME_RE)
        .expect("regexp should be valid");
    if !page_name_re.is_match(page_name) {
        return Err(PageError::InvalidName);
    };
    Ok(())
}

pub fn read_page_fragment(
    pages_dir: &Path,
    page_name: &str,
) -> Result<String, PageError> {
    validate_page_name(page_name)?;
    let file_name = format!("{page_name}.{FRAGMENT_EXTENSION}");
    match std::fs::read_to_string(pages_dir.join(file_name)) {
        Ok(fragment) => Ok(fragment),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            Err(PageError::NotFound)
        },
        Err(other_error) => Err(other_error.into()),
    }
}

/// Returns sorted names of all pages in directory
pub fn list_pages(pages_dir: &Path) -> Result<Vec<String>, PageError> {
    let mut page_names = vec![];
    for maybe_entry in std::fs::read_dir(pages_dir)? {
        let path = maybe_entry?.path();
        if !path.is_file() {
            continue;
        };
        if path.extension().and_then(|ext| ext.to_str()) != Some(FRAGMENT_EXTENSION) {
            continue;
        };
        let maybe_page_name = path.file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| validate_page_name(stem).is_ok());
        match maybe_page_name {
            Some(page_name) => page_names.push(page_name.to_string()),
            None => log::warn!("skipping fragment {}", path.display()),
        };
    };
    page_names.sort();
    Ok(page_names)
}

#[cfg(test)]
pub mod test_utils {
    use std::path::PathBuf;

    pub fn create_pages_dir(name: &str, pages: &[(&str, &str)]) -> PathBuf {
        let pages_dir = std::env::temp_dir()
            .join(format!("manazza-{}-{}", name, std::process::id()));
        if pages_dir.exists() {
            std::fs::remove_dir_all(&pages_dir).unwrap();
        };
        std::fs::create_dir_all(&pages_dir).unwrap();
        for (file_name, content) in pages {
            std::fs::write(pages_dir.join(file_name), content).unwrap();
        };
        pages_dir
    }
}
