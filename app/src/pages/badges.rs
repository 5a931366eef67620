use leptos::prelude::*;
use leptos_meta::Title;

use super::or_fallback;
use crate::components::AchievementCard;
use crate::fallback;
use crate::store::Badge;

#[server(prefix = "/sfn", endpoint = "badges")]
pub async fn get_badges() -> Result<Vec<Badge>, ServerFnError> {
    super::content_store()?.badges().map_err(super::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let badges = Resource::new_blocking(
        || (),
        |_| async { or_fallback("the badges", get_badges().await, fallback::badges) },
    );

    view! {
        <Title text="Badges" />
        <section class="badges">
            <h1>"Badges"</h1>
            <p class="lead">"Digital badges earned along the way."</p>
            <Suspense fallback=|| view! { <p>"Loading…"</p> }>
                {move || Suspend::new(async move {
                    let badges = badges.await;
                    view! {
                        <div class="cards">
                            {badges
                                .into_iter()
                                .map(|item| view! { <AchievementCard item /> })
                                .collect_view()}
                        </div>
                    }
                })}
            </Suspense>
        </section>
    }
}
