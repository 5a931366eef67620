use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{format_date, BlogPost, Certificate};
use crate::typewriter::{Animator, BrowserScheduler, Timing, Typewriter};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">Home</A></li>
                <li><A href="/about">About</A></li>
                <li><A href="/cv">CV</A></li>
                <li><A href="/certificates">Certificates</A></li>
                <li><A href="/badges">Badges</A></li>
                <li><A href="/blog">Blog</A></li>
            </ul>
            <ThemeToggle />
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <ul>
                <li><A href="/about">About Me</A></li>
                <li><A href="/cv">CV</A></li>
                <li><A href="/blog">All Posts</A></li>
                <li><A href="/blog?tag=golang">Golang</A></li>
                <li><A href="/blog?tag=nextjs">Next.js</A></li>
            </ul>
            <p>
                <a href="#top"><small>{"\u{2191}"} Copyright {"\u{24d2}"} Vincent. All rights reserved {"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

const THEME_STORAGE_KEY: &str = "folio-theme";

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Inverse of [`as_str`](Self::as_str), for values read back from storage.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// What the toggle button shows: the theme it switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "\u{263e}",
            Theme::Dark => "\u{2600}",
        }
    }
}

/// The theme saved by a previous toggle, else the system preference.
fn preferred_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    if let Some(theme) = stored.as_deref().and_then(Theme::from_stored) {
        return theme;
    }
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) if query.matches() => Theme::Dark,
        _ => Theme::Light,
    }
}

fn save_theme(theme: Theme) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    let Some(storage) = storage else {
        return;
    };
    if let Err(error) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("Could not save the {} theme: {:?}", theme.as_str(), error);
    }
}

/// Switches between the light and dark themes by setting `data-theme` on the
/// document element. The stylesheet does the rest.
///
/// The server always renders the light theme; once hydrated, the page picks
/// up the saved choice or the system preference. Only explicit toggles are
/// saved.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    // Effects only run in the browser.
    Effect::new(move |_| set_theme.set(preferred_theme()));
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(root) = document().document_element() {
            if let Err(error) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Could not switch to the {} theme: {:?}", theme.as_str(), error);
            }
        }
    });

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        save_theme(next);
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle theme" on:click=toggle>
            {move || theme.get().icon()}
        </button>
    }
}

/// Types, pauses on, deletes, and moves on through `texts`, forever.
///
/// Durations are in milliseconds; negative ones count as zero. A new
/// animation starts whenever `texts` changes, and the running one is torn
/// down with the component.
#[component]
pub fn TypewriterText(
    #[prop(into)] texts: Signal<Vec<String>>,
    #[prop(default = 150)] typing_speed: i64,
    #[prop(default = 50)] deleting_speed: i64,
    #[prop(default = 1000)] delay_between_texts: i64,
) -> impl IntoView {
    let (displayed, set_displayed) = signal(String::new());
    let timing = Timing::from_millis(typing_speed, deleting_speed, delay_between_texts);
    let animator = StoredValue::new_local(None::<Animator<BrowserScheduler>>);

    Effect::new(move |_| {
        let machine = Typewriter::new(texts.get(), timing);
        // An empty list of texts publishes nothing.
        set_displayed.set(String::new());
        animator.update_value(|animator| match animator {
            Some(animator) => animator.reconfigure(machine),
            None => {
                let next = Animator::new(machine, BrowserScheduler, move |text: &str| {
                    set_displayed.set(text.to_owned())
                });
                next.start();
                *animator = Some(next);
            }
        });
    });

    on_cleanup(move || {
        animator.try_update_value(|animator| {
            if let Some(animator) = animator.take() {
                animator.cancel();
            }
        });
    });

    view! { <span class="typewriter">{displayed}</span> }
}

#[component]
pub fn Tags(tags: Vec<String>) -> impl IntoView {
    view! {
        <ul class="tags">
            {tags
                .into_iter()
                .map(|tag| {
                    let url = format!("/blog?tag={}", tag);
                    view! { <li class="tag"><A href=url>{tag}</A></li> }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    let url = format!("/blog/{}", post.id);
    let date = post.publish_date.map(format_date);
    let tags: Vec<String> = post.tags.into_iter().take(3).collect();
    view! {
        <article class="card">
            <Tags tags />
            <h3><A href=url>{post.title}</A></h3>
            <p>{post.summary}</p>
            <p class="byline"><small>"Vincent \u{2022} " {date}</small></p>
        </article>
    }
}

/// A certificate or a badge.
#[component]
pub fn AchievementCard(item: Certificate) -> impl IntoView {
    view! {
        <article class="card">
            <img src=item.image_url alt=item.name.clone() />
            <h3>{item.name}</h3>
            <p class="issuer">{item.issuer}</p>
            <p class="date"><small>{format_date(item.issue_date)}</small></p>
            <p>{item.description}</p>
        </article>
    }
}
