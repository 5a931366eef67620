use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use super::or_fallback;
use crate::components::{PostCard, Tags};
use crate::fallback;
use crate::markdown;
use crate::store::{format_date, BlogPost};

#[server(prefix = "/sfn", endpoint = "posts")]
pub async fn get_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    super::content_store()?.posts().map_err(super::server_error)
}

#[server(prefix = "/sfn", endpoint = "post")]
pub async fn get_post(id: String) -> Result<BlogPost, ServerFnError> {
    super::content_store()?
        .post(&id)
        .map_err(super::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let query = use_query_map();
    let tag = move || query.read().get("tag").filter(|tag| !tag.is_empty());
    let (search, set_search) = signal(String::new());

    let posts = Resource::new_blocking(
        || (),
        |_| async { or_fallback("the blog posts", get_posts().await, fallback::posts) },
    );

    view! {
        <Title text="Blog" />
        <section class="blog-index">
            <h1>"Blog"</h1>
            <p class="lead">"Thoughts, tutorials, and insights about programming and technology."</p>
            <input
                type="search"
                placeholder="Search posts…"
                prop:value=search
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            {move || {
                tag()
                    .map(|tag| {
                        view! {
                            <p class="tag-filter">
                                "Filtered by tag: " <span class="tag">{tag}</span> " "
                                <A href="/blog">"Clear filter"</A>
                            </p>
                        }
                    })
            }}
            <Suspense fallback=|| view! { <p>"Loading…"</p> }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    move || {
                        let tag = tag();
                        let shown: Vec<BlogPost> = posts
                            .iter()
                            .filter(|post| post.matches(&search.get(), tag.as_deref()))
                            .cloned()
                            .collect();
                        if shown.is_empty() {
                            Either::Left(view! { <p>"No posts found matching your criteria."</p> })
                        } else {
                            Either::Right(view! {
                                <div class="cards">
                                    {shown.into_iter().map(|post| view! { <PostCard post /> }).collect_view()}
                                </div>
                            })
                        }
                    }
                })}
            </Suspense>
        </section>
    }
}

#[component]
pub fn Post() -> impl IntoView {
    let params = use_params_map();

    let post = Resource::new_blocking(
        move || params.read().get("id").unwrap_or_default(),
        |id| async move {
            let result = get_post(id.clone()).await;
            or_fallback("the blog post", result, || fallback::post(&id))
        },
    );

    view! {
        <Suspense fallback=|| view! { <p>"Loading…"</p> }>
            {move || Suspend::new(async move {
                let post = post.await;
                view! { <FullPost post /> }
            })}
        </Suspense>
    }
}

#[component]
fn FullPost(post: BlogPost) -> impl IntoView {
    let html = markdown::render(&post.content);
    let date = post
        .publish_date
        .map(format_date)
        .unwrap_or_else(|| String::from("Draft"));

    view! {
        <Title text=post.title.clone() />
        <section class="blog-post">
            <A href="/blog">"\u{2190} Back to Blog"</A>
            <h1>{post.title}</h1>
            <Tags tags=post.tags />
            <p class="lead">{post.summary}</p>
            <p class="byline"><small>"Vincent \u{2022} " {date}</small></p>
            <article class="blog-content" inner_html=html></article>
        </section>
    }
}
