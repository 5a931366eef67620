use leptos::prelude::*;
use leptos_meta::Title;

use super::about::ContactLinks;
use super::or_fallback;
use crate::components::AchievementCard;
use crate::fallback;
use crate::store::Cv;

#[server(prefix = "/sfn", endpoint = "cv")]
pub async fn get_cv() -> Result<Cv, ServerFnError> {
    super::content_store()?.cv().map_err(super::server_error)
}

const DOWNLOAD_URL: &str = "/api/cv/download";

fn list(items: Vec<String>) -> impl IntoView {
    view! { <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul> }
}

#[component]
pub fn Index() -> impl IntoView {
    let cv = Resource::new_blocking(
        || (),
        |_| async { or_fallback("the CV", get_cv().await, fallback::cv) },
    );

    view! {
        <Title text="CV" />
        <Suspense fallback=|| view! { <p>"Loading…"</p> }>
            {move || Suspend::new(async move {
                let cv = cv.await;
                view! { <Resume cv /> }
            })}
        </Suspense>
    }
}

#[component]
fn Resume(cv: Cv) -> impl IntoView {
    view! {
        <section class="cv">
            <header>
                <img src=cv.image_url alt=cv.name.clone() />
                <h1>{cv.name}</h1>
                <h2>{cv.title}</h2>
                <p>{cv.description}</p>
                <ContactLinks contact=cv.contact />
                <a class="button" href=DOWNLOAD_URL rel="external" download="cv.pdf">
                    "Download CV"
                </a>
            </header>

            <h3>"Summary"</h3>
            {list(cv.summary)}

            <h3>"Experience"</h3>
            {cv
                .experience
                .into_iter()
                .map(|job| {
                    view! {
                        <article class="entry">
                            <h4>{job.position} " at " {job.company}</h4>
                            <p class="period"><small>{job.year}</small></p>
                            <p>{job.description}</p>
                        </article>
                    }
                })
                .collect_view()}

            <h3>"Education"</h3>
            {cv
                .education
                .into_iter()
                .map(|school| {
                    view! {
                        <article class="entry">
                            <h4>{school.degree}</h4>
                            <p>{school.institution}</p>
                            <p class="period"><small>{school.year}</small></p>
                        </article>
                    }
                })
                .collect_view()}

            <h3>"Skills"</h3>
            {list(cv.skills)}

            <h3>"Soft Skills"</h3>
            {list(cv.soft_skills)}

            <h3>"Languages"</h3>
            <ul>
                {cv
                    .languages
                    .into_iter()
                    .map(|language| view! { <li>{language.name} ": " {language.proficiency}</li> })
                    .collect_view()}
            </ul>

            <h3>"Awards"</h3>
            {cv
                .awards
                .into_iter()
                .map(|award| {
                    view! {
                        <article class="entry">
                            <h4>{award.name}</h4>
                            <p>{award.issuer} " \u{2022} " {award.year}</p>
                            <p>{award.description}</p>
                        </article>
                    }
                })
                .collect_view()}

            <h3>"Certificates"</h3>
            <div class="cards">
                {cv.certificates.into_iter().map(|item| view! { <AchievementCard item /> }).collect_view()}
            </div>

            <h3>"Badges"</h3>
            <div class="cards">
                {cv.badges.into_iter().map(|item| view! { <AchievementCard item /> }).collect_view()}
            </div>
        </section>
    }
}

