pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod fallback;
pub mod markdown;
pub mod pages;
pub mod store;
pub mod typewriter;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};

use crate::components::{Footer, NavBar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Personal portfolio and blog: profile, CV, certificates, badges and posts about programming."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("My Portfolio")
            } else {
                format!("{} | My Portfolio", text)
            }
        }/>

        // The content is mostly static, render it fully on the server.
        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=pages::home::Index ssr=SsrMode::Async />
                    <Route path=StaticSegment("about") view=pages::about::Index ssr=SsrMode::Async />
                    <Route path=StaticSegment("cv") view=pages::cv::Index ssr=SsrMode::Async />
                    <Route
                        path=StaticSegment("certificates")
                        view=pages::certificates::Index
                        ssr=SsrMode::Async
                    />
                    <Route path=StaticSegment("badges") view=pages::badges::Index ssr=SsrMode::Async />
                    <Route path=StaticSegment("blog") view=pages::blog::Index ssr=SsrMode::Async />
                    <Route
                        path=(StaticSegment("blog"), ParamSegment("id"))
                        view=pages::blog::Post
                        ssr=SsrMode::Async
                    />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
