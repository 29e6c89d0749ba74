//! Root Layout
//!
//! Document shell (language, fonts, body font) and page metadata around
//! the single route.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Body, Html, Link, Meta, Title};
use leptos_router::{components::*, path};
use nema_core::meta::{fonts, SiteMeta};

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <SiteHead meta=SiteMeta::nema() />
        <Router>
            <Routes fallback=|| view! { <p class="p-16 text-center text-gray-400">"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Everything that lands in `<head>`, plus the `<html>`/`<body>` attributes
#[component]
fn SiteHead(meta: SiteMeta) -> impl IntoView {
    let open_graph = meta
        .open_graph_tags()
        .into_iter()
        .map(|(property, content)| view! { <Meta property=property content=content /> })
        .collect_view();
    let twitter = meta
        .twitter_tags()
        .into_iter()
        .map(|(name, content)| view! { <Meta name=name content=content /> })
        .collect_view();

    view! {
        <Html {..} lang=meta.lang />
        <Body {..} style=format!("font-family: {}", fonts::BODY) />

        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        {open_graph}
        {twitter}
        <Link rel="canonical" href=meta.url />

        // Fonts
        <Link rel="preconnect" href=fonts::PRECONNECT />
        <Link rel="preconnect" href=fonts::PRECONNECT_STATIC crossorigin="anonymous" />
        <Link rel="stylesheet" href=fonts::STYLESHEET />
    }
}
