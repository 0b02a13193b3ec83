mod modal;
mod portfolio;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/hadex-portfolio.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-[#0b1020] text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <SiteMetaTags />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Title, description and link-preview tags for crawlers.
#[component]
fn SiteMetaTags() -> impl IntoView {
    let image_width = SITE.image_width.to_string();
    let image_height = SITE.image_height.to_string();
    view! {
        <Title text=SITE.title />
        <Meta name="description" content=SITE.description />

        <Meta property="og:title" content=SITE.title />
        <Meta property="og:description" content=SITE.og_description />
        <Meta property="og:url" content=SITE.url />
        <Meta property="og:site_name" content=SITE.site_name />
        <Meta property="og:image" content=SITE.image />
        <Meta property="og:image:width" content=image_width />
        <Meta property="og:image:height" content=image_height />
        <Meta property="og:image:alt" content=SITE.image_alt />
        <Meta property="og:locale" content=SITE.locale />
        <Meta property="og:type" content=SITE.og_type />

        <Meta name="twitter:card" content=SITE.twitter_card />
        <Meta name="twitter:title" content=SITE.title />
        <Meta name="twitter:description" content=SITE.twitter_description />
        <Meta name="twitter:image" content=SITE.image />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-white/70">"There's nothing here."</p>
            <a href="/" class="text-cyan-400 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}
