use leptos::prelude::*;
use leptos_meta::Title;

use super::or_fallback;
use crate::components::AchievementCard;
use crate::fallback;
use crate::store::Certificate;

#[server(prefix = "/sfn", endpoint = "certificates")]
pub async fn get_certificates() -> Result<Vec<Certificate>, ServerFnError> {
    super::content_store()?
        .certificates()
        .map_err(super::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let certificates = Resource::new_blocking(
        || (),
        |_| async {
            or_fallback(
                "the certificates",
                get_certificates().await,
                fallback::certificates,
            )
        },
    );

    view! {
        <Title text="Certificates" />
        <section class="certificates">
            <h1>"Certificates"</h1>
            <Suspense fallback=|| view! { <p>"Loading…"</p> }>
                {move || Suspend::new(async move {
                    let certificates = certificates.await;
                    view! {
                        <div class="cards">
                            {certificates
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
