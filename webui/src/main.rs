use dioxus::prelude::*;

use dioxus_router::prelude::*;
use web_sys::console;

use sicherung::api::BackupApi;
use sicherung::checksum::ChecksumModal as ChecksumState;
use sicherung::error::http_error_to_human;
use sicherung::state::PanelState;
use sicherung::store::BackupCommand;
use sicherung::types::{BackupRecord, ServerId};

mod api;
mod ui_utils;
mod widgets;
use api::PanelApi;
use ui_utils::fmt_bytes;
use widgets::{btn_style, ChecksumModal, CreateBackupButton, FlashMessageRender};

/// Flash key of the backup list itself.
const BACKUPS_LIST: &str = "backups";

// ----- Routing -----
#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/server/:id/backups")]
    Backups { id: String },
}

pub fn main() {
    console_error_panic_hook::set_once();
    dioxus_web::launch::launch(app, vec![], Default::default());
}

fn app() -> Element {
    rsx! {
        div { // root wrapper
            div { class: "app-header",
                div { class: "container",
                    div { class: "brand", span { "Sicherung" } }
                }
            }
            Router::<Route> {}
            // Toast container for notifications
            div { id: "toasts", class: "toast-container" }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { style: panel_style(),
            h2 { "Backups" }
            p { "Open /server/<id>/backups to manage the backups of a server." }
        }
    }
}

// ----- Backups: Liste, Erstellen, Checksumme -----
#[component]
fn Backups(id: String) -> Element {
    let mut panel = use_context_provider(|| Signal::new(PanelState::new(ServerId::new(id.clone()))));
    let api = use_context_provider(|| PanelApi);
    let mut loading = use_signal(|| true);
    let mut checksum = use_signal(ChecksumState::default);

    // initial laden
    use_effect(move || {
        let server = panel.peek().server.clone();
        spawn(async move {
            match api.list_backups(&server).await {
                Ok(items) => {
                    let mut state = panel.write();
                    state.flashes.clear(Some(BACKUPS_LIST));
                    state.dispatch(BackupCommand::Set(items));
                }
                Err(e) => {
                    console::error_1(&format!("failed to load backups: {:?}", e).into());
                    panel.write().flashes.add_error(BACKUPS_LIST, http_error_to_human(&e));
                }
            }
            loading.set(false);
        });
    });

    let items: Vec<BackupRecord> = panel.read().backups.items().to_vec();

    rsx! {
        section { style: panel_style(),
            div { style: "display:flex;justify-content:space-between;align-items:center;gap:12px;",
                h2 { style: "margin:0;", "Backups" }
                CreateBackupButton {}
            }
            FlashMessageRender { by_key: BACKUPS_LIST.to_string() }
            { loading.read().to_owned().then(|| rsx!(span { class: "spinner", "" })) }
            { (!*loading.read() && items.is_empty()).then(|| rsx!{
                p { style: "color:#9aa0a6;", "There are no backups stored for this server." }
            }) }
            table { style: table_style(),
                tbody {
                    { items.into_iter().map(|backup| {
                        let size = if backup.is_completed() { fmt_bytes(backup.bytes) } else { "—".to_string() };
                        let created = backup.created_at.format("%Y-%m-%d %H:%M").to_string();
                        let hash = backup.sha256_hash.clone();
                        rsx!{
                            tr { key: "{backup.uuid}",
                                td { style: "padding:6px;", "{backup.name}" }
                                td { style: "padding:6px;color:#9aa0a6;", "{size}" }
                                td { style: "padding:6px;color:#9aa0a6;", "{created}" }
                                td { style: "padding:6px;text-align:right;",
                                    { match hash {
                                        Some(hash) if backup.is_completed() => rsx!{
                                            button { class: "btn", style: btn_style(),
                                                onclick: move |_| checksum.write().show(hash.clone()),
                                                "Checksum"
                                            }
                                        },
                                        _ => rsx!{ span { style: "color:#6b7280;font-size:12px;", "in progress" } },
                                    } }
                                }
                            }
                        }
                    }) }
                }
            }
        }
        { checksum.read().view().map(|view| view.checksum.to_string()).map(|value| rsx!{
            ChecksumModal { checksum: value, on_dismissed: move |_| checksum.write().dismiss() }
        }) }
    }
}

// ----- Styles & Helfer -----
fn panel_style() -> &'static str {
    "max-width:1200px;margin:20px auto;padding:16px;background:#0b0c10;color:#e5e7eb;border:1px solid #222533;border-radius:12px;display:flex;flex-direction:column;gap:12px;"
}

fn table_style() -> &'static str {
    "width:100%;border-collapse:collapse;margin-top:8px;background:#0f1117;border:1px solid #222533;border-radius:8px;"
}
