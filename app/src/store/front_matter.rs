use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::{dates, Error, Result};

/// The YAML block at the top of a blog post, between two `---` lines.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Leave empty or `null` for a draft.
    #[serde(default, with = "dates::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse the front matter of `source` and return it with the rest of the
    /// document.
    pub fn parse<'a>(source: &'a str, path: &Path) -> Result<(Self, &'a str)> {
        let (yaml, body) = split_front_matter(source).ok_or_else(|| Error::Deserialize {
            error: String::from("front matter is missing"),
            path: PathBuf::from(path),
        })?;
        let front_matter = serde_yml::from_str(yaml).map_err(|error| Error::Deserialize {
            error: format!("front matter is not valid YAML: {}", error),
            path: PathBuf::from(path),
        })?;
        Ok((front_matter, body))
    }
}

fn is_boundary(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split `source` into the text between the two leading `---` lines and
/// whatever follows the closing one.
pub fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let mut lines = source.split_inclusive('\n');
    let opening = lines.next()?;
    if !is_boundary(opening) {
        return None;
    }
    let start = opening.len();
    let mut end = start;
    for line in lines {
        if is_boundary(line) {
            return Some((&source[start..end], &source[end + line.len()..]));
        }
        end += line.len();
    }
    None
}
