use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{get_profile, or_fallback};
use crate::components::TypewriterText;
use crate::fallback;

#[component]
pub fn Index() -> impl IntoView {
    let profile = Resource::new_blocking(
        || (),
        |_| async { or_fallback("the profile", get_profile().await, fallback::profile) },
    );
    let headlines = Signal::derive(move || {
        profile
            .get()
            .map(|profile| profile.headlines)
            .unwrap_or_default()
    });

    view! {
        <Title text="Home" />
        <section class="hero">
            <h1>
                "Hi, I'm" <br />
                <TypewriterText texts=headlines typing_speed=120 deleting_speed=50 />
            </h1>
            <Suspense fallback=|| view! { <p>"Loading…"</p> }>
                {move || Suspend::new(async move {
                    let profile = profile.await;
                    view! { <p class="lead">{profile.description}</p> }
                })}
            </Suspense>
            <p class="actions">
                <A href="/about">"About Me"</A>
                <A href="/blog">"Read My Blog"</A>
            </p>
        </section>
    }
}
