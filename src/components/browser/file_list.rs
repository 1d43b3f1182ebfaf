//! File list component for the browser view.
//!
//! Displays the loaded listing in list format, folders before files, each
//! group in the order the backend sent. Folder rows navigate; file rows
//! carry a download link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{AppRoute, FolderEntry};

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Folders first, then files; within each group backend order is kept
    let entries = Signal::derive(move || {
        ctx.browser.session.with(|session| {
            session
                .listing()
                .map(|listing| {
                    listing
                        .folders
                        .iter()
                        .chain(listing.files.iter())
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <div class=css::list role="grid" aria-label="Folder contents">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerAction></span>
            </div>
            <For
                each=move || entries.get()
                key=|entry| entry.id.clone()
                children=move |entry| {
                    view! { <FileListItem entry=entry /> }
                }
            />
        </div>
    }
}

#[component]
fn FileListItem(entry: FolderEntry) -> impl IntoView {
    let is_folder = entry.folder;
    let icon = if is_folder { ic::FOLDER } else { ic::FILE };
    let entry_id = entry.id.clone();

    // Folder rows navigate into the folder; file rows do nothing on click
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_folder {
            AppRoute::Folder {
                id: entry_id.clone(),
            }
            .push();
        }
    };

    let item_class = if is_folder {
        format!("{} {}", css::listItem, css::listItemNav)
    } else {
        css::listItem.to_string()
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameDir)
    } else {
        format!("{} {}", css::name, css::nameFile)
    };

    let download = (!is_folder).then(|| api::download_url(&entry.id));

    view! {
        <div class=item_class on:click=handle_click role="row">
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{entry.name.clone()}</span>
            <span class=css::action>
                {match download {
                    Some(href) => view! {
                        <a
                            class=css::downloadLink
                            href=href
                            title="Download"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <Icon icon=ic::DOWNLOAD />
                        </a>
                    }.into_any(),
                    None => view! {
                        <span class=css::chevron aria-hidden="true">
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </span>
                    }.into_any(),
                }}
            </span>
        </div>
    }
}
