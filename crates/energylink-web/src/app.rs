use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DashboardPage, InvoicesPage};

/// Full HTML document served for every route.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="EnergyLink royalty revenue dashboard and invoice viewer" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
                <link rel="stylesheet" href="/pkg/energylink-web.css" />
                <script src="https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js"></script>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="EnergyLink Viewer" />
        <Router>
            <header class="topbar">
                <span class="brand">"EnergyLink Viewer"</span>
                <nav class="tabs">
                    <A href="/" exact=true>"Dashboard"</A>
                    <A href="/invoices">"Invoices"</A>
                </nav>
            </header>
            <main class="content">
                <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/invoices") view=InvoicesPage />
                </Routes>
            </main>
        </Router>
    }
}
