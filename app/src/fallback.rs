//! Content shown when the real content cannot be loaded.

use chrono::NaiveDate;

use crate::store::{
    Award, Badge, BlogPost, Certificate, Contact, Cv, Education, Experience, Language, Profile,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn contact() -> Contact {
    Contact {
        email: String::from("your.email@example.com"),
        github: String::from("https://github.com/yourusername"),
        facebook: String::from("https://www.facebook.com/yourusername"),
        linkedin: String::from("https://linkedin.com/in/yourprofile"),
    }
}

pub fn profile() -> Profile {
    Profile {
        name: String::from("Vincent"),
        title: String::from("Full Stack Developer"),
        description: String::from(
            "Passionate developer with expertise in Golang, Next.js, and more.",
        ),
        skills: strings(&["Golang", "Next.js", "React", "TypeScript", "Node.js", "Docker"]),
        contact: contact(),
        headlines: strings(&["Vincent", "Full Stack Developer", "AWS Developer", "Creator"]),
    }
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: String::from("1"),
            name: String::from("AWS Certified Developer"),
            issuer: String::from("Amazon Web Services"),
            issue_date: date(2022, 1, 15),
            description: String::from("Certification for AWS cloud development"),
            image_url: String::from("/certificates/aws-developer.jpg"),
        },
        Certificate {
            id: String::from("2"),
            name: String::from("Certified Kubernetes Administrator"),
            issuer: String::from("Cloud Native Computing Foundation"),
            issue_date: date(2022, 6, 20),
            description: String::from("Certification for Kubernetes administration"),
            image_url: String::from("/certificates/cka.jpg"),
        },
    ]
}

pub fn badges() -> Vec<Badge> {
    vec![
        Badge {
            id: String::from("1"),
            name: String::from("Hacktoberfest 2022"),
            issuer: String::from("DigitalOcean"),
            issue_date: date(2022, 10, 31),
            description: String::from("Participated in Hacktoberfest 2022"),
            image_url: String::from("/badges/hacktoberfest-2022.jpg"),
        },
        Badge {
            id: String::from("2"),
            name: String::from("Google Cloud Certified"),
            issuer: String::from("Google"),
            issue_date: date(2023, 2, 15),
            description: String::from("Certified in Google Cloud Platform"),
            image_url: String::from("/badges/gcp-certified.jpg"),
        },
    ]
}

pub fn cv() -> Cv {
    let mut cv = Cv {
        name: String::from("Vincent"),
        title: String::from("Full Stack Developer"),
        description: String::from(
            "Passionate developer with expertise in Golang, Next.js, and more.",
        ),
        image_url: String::from("https://via.placeholder.com/300"),
        contact: contact(),
        education: vec![Education {
            institution: String::from("University Name"),
            degree: String::from("Bachelor of Science in Computer Science"),
            year: String::from("2015-2019"),
        }],
        experience: vec![
            Experience {
                company: String::from("Company A"),
                position: String::from("Senior Developer"),
                year: String::from("2021-Present"),
                description: String::from(
                    "Leading development of cloud-native applications using Golang and Next.js.",
                ),
            },
            Experience {
                company: String::from("Company B"),
                position: String::from("Full Stack Developer"),
                year: String::from("2019-2021"),
                description: String::from(
                    "Developed and maintained web applications using React and Node.js.",
                ),
            },
        ],
        skills: strings(&["Golang", "Next.js", "React", "TypeScript", "Node.js", "Docker"]),
        soft_skills: strings(&["Teamwork", "Problem solving", "Communication"]),
        languages: vec![Language {
            name: String::from("English"),
            proficiency: String::from("Professional working proficiency"),
        }],
        awards: vec![Award {
            name: String::from("Best Developer Award"),
            issuer: String::from("Tech Conference 2022"),
            year: String::from("2022"),
            description: String::from(
                "Recognized for outstanding contributions to open source projects",
            ),
        }],
        certificates: certificates(),
        badges: badges(),
        summary: strings(&[
            "Over 5 years of experience in web development",
            "Specialized in building scalable applications",
            "Passionate about clean code and best practices",
            "Continuous learner and technology enthusiast",
        ]),
    };
    cv.sort_most_recent_first();
    cv
}

pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: String::from("2"),
            title: String::from("Next.js and Chakra UI: A Perfect Combination"),
            summary: String::from("How to build beautiful UIs with Next.js and Chakra UI"),
            content: String::from("This is a placeholder for the blog content..."),
            publish_date: Some(date(2023, 5, 15)),
            tags: strings(&["nextjs", "chakraui", "frontend", "tutorial"]),
        },
        BlogPost {
            id: String::from("1"),
            title: String::from("Getting Started with Golang"),
            summary: String::from("A beginner's guide to Golang programming"),
            content: String::from("This is a placeholder for the blog content..."),
            publish_date: Some(date(2023, 5, 1)),
            tags: strings(&["golang", "programming", "tutorial"]),
        },
    ]
}

const GETTING_STARTED_WITH_GOLANG: &str = r#"# Getting Started with Golang

Go is an open source programming language that makes it easy to build simple, reliable, and efficient software.

## Why Go?

Go was designed at Google to solve problems with existing languages and tools while natively taking advantage of modern hardware architectures. It has gone on to become one of the fastest-growing languages in the industry.

Some key features of Go include:

- **Simplicity**: Go is designed to be simple to read, write, and maintain.
- **Efficiency**: Go compiles to machine code and has a lightweight runtime.
- **Concurrency**: Go has built-in concurrency with goroutines and channels.
- **Strong Standard Library**: Go comes with a rich standard library.

## Setting Up Your Environment

To get started with Go, you'll need to:

1. Download and install Go from [golang.org](https://golang.org)
2. Set up your GOPATH environment variable
3. Create a workspace directory structure

## Your First Go Program

Here's a simple "Hello, World!" program in Go:

```go
package main

import "fmt"

func main() {
    fmt.Println("Hello, World!")
}
```

Save this to a file named `hello.go` and run it with:

```
go run hello.go
```

## Next Steps

Now that you've written your first Go program, you can explore more advanced topics like:

- Functions and methods
- Structs and interfaces
- Error handling
- Concurrency with goroutines and channels
- Testing and benchmarking

Happy coding!"#;

/// The post shown for `id` when the real one cannot be loaded.
pub fn post(id: &str) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: String::from("Getting Started with Golang"),
        summary: String::from("A beginner's guide to Golang programming"),
        content: String::from(GETTING_STARTED_WITH_GOLANG),
        publish_date: Some(date(2023, 5, 1)),
        tags: strings(&["golang", "programming", "tutorial"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_post_renders_headers_lists_and_code() {
        let html = crate::markdown::render(&post("1").content);
        assert!(html.starts_with("<h1>Getting Started with Golang</h1>"));
        assert!(html.contains("<h2>Why Go?</h2>"));
        assert!(html.contains("<li><strong>Simplicity</strong>: Go is designed"));
        assert!(html.contains(
            "<li>Download and install Go from <a href=\"https://golang.org\">golang.org</a></li>"
        ));
        assert!(html.contains("<pre><code>go\n"));
        assert!(html.contains("<code>hello.go</code>"));
        assert!(html.ends_with("<p>Happy coding!</p>"));
    }

    #[test]
    fn fallback_profile_has_headlines() {
        assert_eq!(profile().headlines.len(), 4);
    }

    #[test]
    fn fallback_cv_is_sorted() {
        let cv = cv();
        assert_eq!(cv.experience[0].year, "2021-Present");
        assert_eq!(cv.badges[0].name, "Google Cloud Certified");
    }
}
