use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::dates;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub facebook: String,
    pub linkedin: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    /// Rotating headlines for the home page.
    #[serde(default)]
    pub headlines: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Markdown-like source, see [`crate::markdown`].
    #[serde(default)]
    pub content: String,
    /// `None` for drafts.
    #[serde(default, with = "dates::optional_date")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Whether the post shows up for a search term and an optional tag.
    ///
    /// The search term is looked up, case insensitively, in the title, the
    /// summary and the tags; an empty term matches everything. The tag must be
    /// one of the post's tags, case insensitively.
    pub fn matches(&self, search: &str, tag: Option<&str>) -> bool {
        let search = search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || self.title.to_lowercase().contains(&search)
            || self.summary.to_lowercase().contains(&search)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&search));
        let matches_tag = match tag {
            Some(tag) => {
                let tag = tag.to_lowercase();
                self.tags.iter().any(|t| t.to_lowercase() == tag)
            }
            None => true,
        };
        matches_search && matches_tag
    }

    pub fn is_draft(&self) -> bool {
        self.publish_date.is_none()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(with = "dates::date")]
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// Same shape as a [`Certificate`].
pub type Badge = Certificate;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub year: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub summary: Vec<String>,
}

impl Cv {
    pub fn sort_most_recent_first(&mut self) {
        self.education
            .sort_by(|lhs, rhs| compare_years(&lhs.year, &rhs.year).reverse());
        self.experience
            .sort_by(|lhs, rhs| compare_years(&lhs.year, &rhs.year).reverse());
        self.certificates
            .sort_by(|lhs, rhs| lhs.issue_date.cmp(&rhs.issue_date).reverse());
        self.badges
            .sort_by(|lhs, rhs| lhs.issue_date.cmp(&rhs.issue_date).reverse());
    }
}

const PRESENT: &str = "Present";

/// Compare two periods such as `2015-2019`, `2022` or `02/2021-Present` by
/// their end: `Present` is the most recent, anything else compares as text.
pub fn compare_years(lhs: &str, rhs: &str) -> Ordering {
    fn end(period: &str) -> &str {
        let mut parts = period.split('-');
        let start = parts.next().unwrap_or(period);
        parts.next().unwrap_or(start)
    }

    match (end(lhs), end(rhs)) {
        (PRESENT, PRESENT) => Ordering::Equal,
        (PRESENT, _) => Ordering::Greater,
        (_, PRESENT) => Ordering::Less,
        (lhs, rhs) => lhs.cmp(rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(title: &str, summary: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: String::from("1"),
            title: title.to_owned(),
            summary: summary.to_owned(),
            content: String::new(),
            publish_date: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn search_looks_at_title_summary_and_tags() {
        let post = post("Getting Started with Golang", "A beginner's guide", &["tutorial"]);
        assert!(post.matches("", None));
        assert!(post.matches("golang", None));
        assert!(post.matches("BEGINNER", None));
        assert!(post.matches("tuto", None));
        assert!(!post.matches("rust", None));
    }

    #[test]
    fn tag_filter_is_exact_and_case_insensitive() {
        let post = post("Next.js and Chakra UI", "", &["nextjs", "frontend"]);
        assert!(post.matches("", Some("NextJS")));
        assert!(!post.matches("", Some("next")));
        assert!(!post.matches("chakra", Some("golang")));
        assert!(post.matches("chakra", Some("frontend")));
    }

    #[test]
    fn tag_filter_lowercases_beyond_ascii() {
        let post = post("Über Rust", "", &["Übersicht", "ÉTÉ"]);
        assert!(post.matches("", Some("übersicht")));
        assert!(post.matches("", Some("été")));
        assert!(post.matches("über", Some("ÜBERSICHT")));
    }

    #[test]
    fn years_compare_by_period_end() {
        assert_eq!(compare_years("2015-2019", "2022"), Ordering::Less);
        assert_eq!(compare_years("02/2021-Present", "2013-2017"), Ordering::Greater);
        assert_eq!(compare_years("2022", "Present"), Ordering::Less);
        assert_eq!(compare_years("Present", "2020-Present"), Ordering::Equal);
        assert_eq!(compare_years("2019", "2015-2019"), Ordering::Equal);
    }

    #[test]
    fn cv_sorts_most_recent_first() {
        let mut cv: Cv = serde_json::from_value(serde_json::json!({
            "name": "Vincent",
            "title": "Full Stack Developer",
            "description": "",
            "education": [
                {"institution": "A", "degree": "BSc", "year": "2013-2017"},
                {"institution": "B", "degree": "Certificate", "year": "2022"}
            ],
            "experience": [
                {"company": "X", "position": "Tester", "year": "09/2023-11/2023"},
                {"company": "Y", "position": "Co-founder", "year": "02/2021-Present"}
            ],
            "certificates": [
                {"id": "1", "name": "HTML5", "issuer": "UMich", "issueDate": "2024-06-24"},
                {"id": "2", "name": "CSS3", "issuer": "UMich", "issueDate": "2024-07-11T00:00:00Z"}
            ]
        }))
        .unwrap();
        cv.sort_most_recent_first();
        assert_eq!(cv.education[0].institution, "B");
        assert_eq!(cv.experience[0].company, "Y");
        assert_eq!(cv.certificates[0].name, "CSS3");
    }

    #[test]
    fn blog_post_json_uses_camel_case_and_plain_dates() {
        let mut post = post("T", "S", &[]);
        post.publish_date = NaiveDate::from_ymd_opt(2023, 5, 15);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["publishDate"], "2023-05-15");
        let back: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn missing_blog_post_date_is_a_draft() {
        let post: BlogPost =
            serde_json::from_str(r#"{"id": "9", "title": "Soon"}"#).unwrap();
        assert!(post.is_draft());
        assert!(post.tags.is_empty());
    }
}
