//! Site content: the models shared by the server and the browser, and (on the
//! server) the store reading them from a content directory.

pub mod dates;
#[cfg(feature = "ssr")]
pub mod errors;
#[cfg(feature = "ssr")]
mod front_matter;
mod models;
#[cfg(feature = "ssr")]
mod post;

pub use dates::format_date;
#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
#[cfg(feature = "ssr")]
pub use front_matter::{split_front_matter, FrontMatter};
pub use models::{
    compare_years, Award, Badge, BlogPost, Certificate, Contact, Cv, Education, Experience,
    Language, Profile,
};

#[cfg(feature = "ssr")]
use std::path::{Path, PathBuf};

#[cfg(feature = "ssr")]
const BLOG_DIRECTORY: &str = "blog";
#[cfg(feature = "ssr")]
const CV_PDF: &str = "cv.pdf";
#[cfg(feature = "ssr")]
const POST_FILE_NAME: &str = "post.md";

/// The content directory:
///
/// ```text
/// profile.json
/// cv.json
/// certificates.json
/// badges.json
/// cv.pdf
/// blog/0001_first_post.md
/// blog/0002_second_post/post.md
/// ```
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
    is_running_in_prod: bool,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(path: PathBuf, is_running_in_prod: bool) -> Self {
        Self {
            path,
            is_running_in_prod,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.path.join(file_name);
        let contents = std::fs::read_to_string(&path).map_err(|error| Error::IO {
            error,
            path: path.clone(),
        })?;
        serde_json::from_str(&contents).map_err(|error| Error::Deserialize {
            error: error.to_string(),
            path,
        })
    }

    pub fn profile(&self) -> Result<Profile> {
        self.read_json("profile.json")
    }

    /// The CV with its dated sections sorted most recent first.
    pub fn cv(&self) -> Result<Cv> {
        let mut cv: Cv = self.read_json("cv.json")?;
        cv.sort_most_recent_first();
        Ok(cv)
    }

    pub fn certificates(&self) -> Result<Vec<Certificate>> {
        self.read_json("certificates.json")
    }

    pub fn badges(&self) -> Result<Vec<Badge>> {
        self.read_json("badges.json")
    }

    pub fn cv_pdf(&self) -> Result<Vec<u8>> {
        let path = self.path.join(CV_PDF);
        std::fs::read(&path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound {
                    what: String::from("the CV PDF file"),
                    error: error.to_string(),
                }
            } else {
                Error::IO { error, path }
            }
        })
    }

    /// Every post of the blog directory, most recent first, drafts last.
    ///
    /// Post files are named after a number of at least four digits and end in
    /// `.md`; a post can also be a directory with a `post.md` inside. Drafts
    /// (posts without a date) are left out in production.
    pub fn posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts = vec![];

        let blog_path = self.path.join(BLOG_DIRECTORY);
        let directory = blog_path.read_dir().map_err(|error| Error::IO {
            error,
            path: blog_path.clone(),
        })?;
        for entry in directory {
            let entry = entry.map_err(|error| Error::IO {
                error,
                path: blog_path.clone(),
            })?;
            let metadata = entry.metadata().map_err(|error| Error::IO {
                error,
                path: entry.path(),
            })?;
            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                log::warn!("Invalid utf-8 filename in the store: {:?}", entry.file_name());
                continue;
            };
            let leading_digits = file_name.chars().take_while(|c| c.is_ascii_digit()).count();
            if leading_digits < 4 {
                continue;
            }
            let (path, stem) = if metadata.file_type().is_dir() {
                let path = entry.path().join(POST_FILE_NAME);
                if !path.is_file() {
                    log::warn!("Skipping {:?}: no {} inside", entry.path(), POST_FILE_NAME);
                    continue;
                }
                (path, file_name.as_str())
            } else if let Some(stem) = file_name.strip_suffix(".md") {
                (entry.path(), stem)
            } else {
                continue;
            };
            let post = post::read(&path, stem)?;
            if !self.is_running_in_prod || !post.is_draft() {
                posts.push(post);
            }
        }

        posts.sort_by(|lhs, rhs| {
            use core::cmp::Ordering;
            match (lhs.publish_date, rhs.publish_date) {
                (Some(lhd), Some(rhd)) => lhd.cmp(&rhd),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            }
            .then_with(|| rhs.id.cmp(&lhs.id))
            .reverse()
        });

        Ok(posts)
    }

    pub fn post(&self, id: &str) -> Result<BlogPost> {
        log::info!("looking up post \"{}\" in {:?}", id, self.path);
        self.posts()?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or_else(|| Error::NotFound {
                what: format!("post `{}'", id),
                error: String::from("no post with this id"),
            })
    }
}
