//! Backup widgets of the server page.
//!
//! The components only render and forward events. State transitions live in
//! `sicherung::flow`, shared data in the `PanelState` signal provided by the
//! page.

use dioxus::events::FormData;
use dioxus::prelude::*;
use web_sys::console;

use sicherung::api::BackupApi;
use sicherung::checksum;
use sicherung::error::SubmitRejected;
use sicherung::flash::{FlashKind, BACKUPS_CREATE};
use sicherung::flow::CreateBackupFlow;
use sicherung::state::PanelState;
use sicherung::validation::FIELD_NAME;

use crate::api::PanelApi;
use crate::ui_utils::show_toast;

const IGNORED_HINT: &str = "Enter the files or folders to ignore while generating this backup. Leave blank to use \
    the contents of the .pteroignore file in the root of the server directory if present. \
    Wildcard matching of files and folders is supported in addition to negating a rule by \
    prefixing the path with an exclamation point.";

/// Dialog chrome: backdrop, close button and an optional spinner overlay.
#[component]
pub fn Modal(show_spinner: bool, on_dismissed: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { style: "position:fixed;top:0;left:0;width:100vw;height:100vh;padding:16px;display:flex;align-items:center;justify-content:center;background:rgba(6,10,18,0.78);backdrop-filter:blur(2px);z-index:2000;",
            div { style: "position:relative;background:#0f1117;border:1px solid #1f2937;border-radius:16px;padding:24px;max-width:640px;width:100%;color:#e5e7eb;box-shadow:0 18px 34px rgba(0,0,0,0.45);display:flex;flex-direction:column;gap:16px;max-height:90vh;overflow:auto;",
                div { style: "display:flex;justify-content:flex-end;",
                    button { class: "btn", style: btn_style(), disabled: show_spinner,
                        onclick: move |_| on_dismissed.call(()),
                        "Close"
                    }
                }
                {children}
                { show_spinner.then(|| rsx!{
                    div { style: "position:absolute;inset:0;display:flex;align-items:center;justify-content:center;background:rgba(15,17,23,0.7);border-radius:16px;",
                        span { class: "spinner" }
                    }
                }) }
            }
        }
    }
}

/// Renders the flash messages stored under `by_key`.
#[component]
pub fn FlashMessageRender(by_key: String) -> Element {
    let panel = use_context::<Signal<PanelState>>();
    let messages: Vec<_> = panel.read().flashes.by_key(&by_key).cloned().collect();

    rsx! {
        { messages.into_iter().map(|m| {
            let style = match m.kind {
                FlashKind::Error => "padding:10px;background:#331414;border:1px solid #7f1d1d;border-radius:8px;color:#fca5a5;font-size:13px;",
                FlashKind::Warning => "padding:10px;background:#332a14;border:1px solid #7f5f1d;border-radius:8px;color:#fcd34d;font-size:13px;",
                _ => "padding:10px;background:#172031;border:1px solid #22304b;border-radius:8px;color:#93c5fd;font-size:13px;",
            };
            let title = m.title().to_string();
            rsx!{
                div { role: "alert", style: "{style}",
                    strong { style: "margin-right:6px;", "{title}" }
                    "{m.message}"
                }
            }
        }) }
    }
}

/// Read-only display of a precomputed checksum.
#[component]
pub fn ChecksumModal(checksum: String, on_dismissed: EventHandler<()>) -> Element {
    let view = checksum::render(&checksum);
    rsx! {
        Modal { show_spinner: false, on_dismissed: on_dismissed,
            h3 { style: "margin:0 0 12px 0;font-size:20px;", "{view.title}" }
            p { style: "margin:0;font-size:13px;", "{view.lead}" }
            pre { style: "margin:8px 0 0 0;font-size:13px;padding:8px;background:#111827;border:1px solid #1f2937;border-radius:6px;",
                code { style: "display:block;font-family:monospace;word-break:break-all;white-space:pre-wrap;", "{view.checksum}" }
            }
        }
    }
}

/// "Create backup" button plus the dialog it opens.
#[component]
pub fn CreateBackupButton() -> Element {
    let mut panel = use_context::<Signal<PanelState>>();
    let api = use_context::<PanelApi>();
    let server = panel.peek().server.clone();
    let mut flow = use_signal(move || CreateBackupFlow::new(server));

    let open = move |_: Event<MouseData>| {
        let effects = flow.write().open();
        panel.write().apply_all(effects);
    };

    let dismiss = move |_: ()| {
        let effects = flow.write().dismiss();
        panel.write().apply_all(effects);
    };

    let submit = move |_: Event<MouseData>| {
        let started = flow.write().submit();
        match started {
            Ok((ticket, effects)) => {
                panel.write().apply_all(effects);
                spawn(async move {
                    let result = api.create_backup(&ticket.server, &ticket.request).await;
                    let created = result.is_ok();
                    let effects = flow.write().settle(result);
                    panel.write().apply_all(effects);
                    if created {
                        show_toast("Backup started");
                    }
                });
            }
            // Field errors are rendered from the flow state
            Err(SubmitRejected::Invalid(_)) => {}
            Err(other) => console::warn_1(&format!("backup submit ignored: {}", other).into()),
        }
    };

    let current = flow.read();
    let submitting = current.is_submitting();
    let name_error = current.field_error(FIELD_NAME).map(|s| s.to_string());
    let values = current.values().cloned();
    drop(current);
    let textarea_style = format!("{}height:8rem;font-family:monospace;", input_style());

    rsx! {
        { values.map(|values| rsx!{
            Modal { show_spinner: submitting, on_dismissed: dismiss,
                FlashMessageRender { by_key: BACKUPS_CREATE.to_string() }
                h2 { style: "margin:0;font-size:22px;", "Create server backup" }
                div { style: "display:flex;flex-direction:column;gap:6px;",
                    label { r#for: "backup-name", style: "color:#9aa0a6;font-size:13px;", "Backup name" }
                    input {
                        id: "backup-name",
                        class: "form-control",
                        value: "{values.name}",
                        style: input_style(),
                        oninput: move |e: Event<FormData>| flow.write().set_name(e.value()),
                    }
                    { name_error.map(|err| rsx!{ span { style: "color:#fca5a5;font-size:12px;", "{err}" } }) }
                    span { style: "color:#6b7280;font-size:12px;", "If provided, the name that should be used to reference this backup." }
                }
                div { style: "display:flex;flex-direction:column;gap:6px;",
                    label { r#for: "backup-ignored", style: "color:#9aa0a6;font-size:13px;", "Ignored Files & Directories" }
                    textarea {
                        id: "backup-ignored",
                        class: "form-control",
                        value: "{values.ignored}",
                        style: "{textarea_style}",
                        oninput: move |e: Event<FormData>| flow.write().set_ignored(e.value()),
                    }
                    span { style: "color:#6b7280;font-size:12px;", "{IGNORED_HINT}" }
                }
                div { style: "display:flex;justify-content:flex-end;",
                    button { class: "btn btn-primary", style: btn_primary_style(), disabled: submitting, onclick: submit,
                        "Start backup"
                    }
                }
            }
        }) }
        button { class: "btn btn-primary", style: btn_primary_style(), onclick: open, "Create backup" }
    }
}

pub fn btn_style() -> &'static str {
    "background:#1f2937;color:#e5e7eb;border:1px solid #374151;border-radius:8px;padding:6px 10px;cursor:pointer;"
}

pub fn btn_primary_style() -> &'static str {
    "background:#2563eb;color:#fff;border:none;border-radius:8px;padding:6px 10px;cursor:pointer;"
}

fn input_style() -> &'static str {
    "background:#1f2937;color:#e5e7eb;border:1px solid #374151;border-radius:8px;padding:8px;"
}
