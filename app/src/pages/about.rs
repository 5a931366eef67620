use leptos::prelude::*;
use leptos_meta::Title;

use super::{get_profile, or_fallback};
use crate::fallback;
use crate::store::{Contact, Profile};

#[component]
pub fn Index() -> impl IntoView {
    let profile = Resource::new_blocking(
        || (),
        |_| async { or_fallback("the profile", get_profile().await, fallback::profile) },
    );

    view! {
        <Title text="About Me" />
        <Suspense fallback=|| view! { <p>"Loading…"</p> }>
            {move || Suspend::new(async move {
                let profile = profile.await;
                view! { <About profile /> }
            })}
        </Suspense>
    }
}

#[component]
fn About(profile: Profile) -> impl IntoView {
    view! {
        <section class="about">
            <h1>{profile.name}</h1>
            <h2>{profile.title}</h2>
            <p>{profile.description}</p>
            <h3>"Skills"</h3>
            <ul class="skills">
                {profile
                    .skills
                    .into_iter()
                    .map(|skill| view! { <li>{skill}</li> })
                    .collect_view()}
            </ul>
            <ContactLinks contact=profile.contact />
        </section>
    }
}

/// Links for whichever contact details are filled in.
#[component]
pub fn ContactLinks(contact: Contact) -> impl IntoView {
    let mut links = vec![];
    if !contact.email.is_empty() {
        links.push((format!("mailto:{}", contact.email), "Email"));
    }
    for (url, label) in [
        (contact.github, "GitHub"),
        (contact.linkedin, "LinkedIn"),
        (contact.facebook, "Facebook"),
    ] {
        if !url.is_empty() {
            links.push((url, label));
        }
    }

    view! {
        <ul class="contact">
            {links
                .into_iter()
                .map(|(url, label)| view! { <li><a href=url rel="external">{label}</a></li> })
                .collect_view()}
        </ul>
    }
}
