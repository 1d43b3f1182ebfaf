//! Breadcrumb path bar.
//!
//! Displays the path of the loaded listing with clickable segments.
//! Crumb derivation lives in [`crate::core::breadcrumb_trail`]; this
//! component only renders what it returns.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::breadcrumb_trail;

stylance::import_crate_style!(css, "src/components/browser/breadcrumbs.module.css");

/// Path bar shown above the listing.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::breadcrumbs>
            {move || {
                let crumbs = ctx.browser.session.with(|session| {
                    let path = session
                        .listing()
                        .map(|listing| listing.path.as_slice())
                        .unwrap_or(&[]);
                    breadcrumb_trail(path)
                });

                let views: Vec<_> = crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };
                        let show_separator = idx > 0;

                        view! {
                            <>
                                {show_separator.then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {match crumb.target {
                                    Some(target) => view! {
                                        <CrumbLink
                                            icon=icon
                                            label=crumb.label
                                            on_click=move || target.clone().push()
                                        />
                                    }.into_any(),
                                    None => view! {
                                        <CrumbCurrent icon=icon label=crumb.label />
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect();

                views.collect_view()
            }}
        </nav>
    }
}

/// Clickable crumb navigating to an ancestor folder.
#[component]
fn CrumbLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::segment
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) crumb naming the folder on screen.
#[component]
fn CrumbCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
