use std::path::{Path, PathBuf};

use crate::store::{BlogPost, Error, FrontMatter, Result};

/// Read a blog post file: front matter, then the markdown-like body.
///
/// The post id is the slug of `stem`, the file name without its extension
/// (or the directory name for `<stem>/post.md` posts).
pub fn read(path: &Path, stem: &str) -> Result<BlogPost> {
    let source = std::fs::read_to_string(path).map_err(|error| Error::IO {
        error,
        path: PathBuf::from(path),
    })?;
    let (front_matter, body) = FrontMatter::parse(&source, path)?;
    log::debug!("read post \"{}\" from {:?}", front_matter.title, path);

    Ok(BlogPost {
        id: slug::slugify(stem),
        title: front_matter.title,
        summary: front_matter.summary,
        content: body.trim().to_owned(),
        publish_date: front_matter.date,
        tags: front_matter.tags,
    })
}
