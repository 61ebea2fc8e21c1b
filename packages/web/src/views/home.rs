//! Application list view (the `home` route).

use api::{Application, CreateApplication, ListPage};
use dioxus::prelude::*;

use crate::client::use_services;
use crate::Route;

const PAGE_SIZE: u32 = 20;

#[component]
pub fn Home() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut status_filter = use_signal(String::new);
    let mut selected: Signal<Vec<String>> = use_signal(Vec::new);
    let mut batch_status = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let options = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            async move {
                services
                    .applications
                    .get_options()
                    .await
                    .ok()
                    .and_then(|envelope| envelope.into_data())
                    .map(|options| options.status_option)
                    .unwrap_or_default()
            }
        })
    };

    let mut applications = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            let status = status_filter();
            async move {
                services
                    .applications
                    .list(Some(status.as_str()), Some(PAGE_SIZE), Some(0))
                    .await
                    .map(|envelope| envelope.into_data().unwrap_or_default())
                    .map_err(|e| e.to_string())
            }
        })
    };

    let handle_create = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let services = services.clone();
            spawn(async move {
                let body = CreateApplication::new(company().trim(), position().trim());
                match services.applications.create(&body).await {
                    Ok(_) => {
                        company.set(String::new());
                        position.set(String::new());
                        error.set(None);
                        applications.restart();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_batch_delete = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn(async move {
                let ids = selected();
                if ids.is_empty() {
                    return;
                }
                match services.applications.batch_delete(&ids).await {
                    Ok(_) => {
                        selected.set(Vec::new());
                        applications.restart();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_batch_status = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn(async move {
                let ids = selected();
                let status = batch_status();
                if ids.is_empty() || status.is_empty() {
                    return;
                }
                match services.applications.batch_update_status(&ids, &status).await {
                    Ok(_) => {
                        selected.set(Vec::new());
                        applications.restart();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_logout = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn(async move {
                if let Err(e) = services.auth.logout().await {
                    tracing::warn!("Logout request failed: {e}");
                }
                if let Err(e) = services.factory().sessions().clear().await {
                    tracing::warn!("Failed to clear session: {e}");
                }
                nav.replace(Route::Auth {});
            });
        }
    };

    let delete_one = move |id: String| {
        let services = services.clone();
        spawn(async move {
            match services.applications.delete(&id).await {
                Ok(_) => applications.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let status_options = options.read().clone().unwrap_or_default();

    rsx! {
        section {
            class: "home",

            header {
                h1 { "Applications" }
                button { onclick: handle_logout, "Log out" }
            }

            if let Some(msg) = error() {
                p { class: "error", "{msg}" }
            }

            form {
                class: "create",
                onsubmit: handle_create,
                input {
                    placeholder: "Company",
                    value: "{company}",
                    oninput: move |evt| company.set(evt.value()),
                }
                input {
                    placeholder: "Position",
                    value: "{position}",
                    oninput: move |evt| position.set(evt.value()),
                }
                button { r#type: "submit", "Add" }
            }

            div {
                class: "toolbar",
                select {
                    value: "{status_filter}",
                    onchange: move |evt| status_filter.set(evt.value()),
                    option { value: "", "All statuses" }
                    for status in status_options.iter() {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }
                select {
                    value: "{batch_status}",
                    onchange: move |evt| batch_status.set(evt.value()),
                    option { value: "", "Set status..." }
                    for status in status_options.iter() {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }
                button { onclick: handle_batch_status, "Apply to selected" }
                button { onclick: handle_batch_delete, "Delete selected" }
            }

            match &*applications.read() {
                None => rsx! { p { class: "muted", "Loading..." } },
                Some(Err(msg)) => rsx! { p { class: "error", "{msg}" } },
                Some(Ok(page)) => rsx! {
                    ApplicationTable {
                        page: page.clone(),
                        selected,
                        on_delete: delete_one,
                    }
                },
            }
        }
    }
}

#[component]
fn ApplicationTable(
    page: ListPage<Application>,
    selected: Signal<Vec<String>>,
    on_delete: EventHandler<String>,
) -> Element {
    let count = page.data_count;
    rsx! {
        p { class: "muted", "{count} applications" }
        table {
            thead {
                tr {
                    th {}
                    th { "Company" }
                    th { "Position" }
                    th { "Status" }
                    th { "Applied" }
                    th {}
                }
            }
            tbody {
                for app in page.data.into_iter().filter(|app| !app.is_deleted()) {
                    ApplicationRow {
                        key: "{app.id}",
                        app: app.clone(),
                        selected,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationRow(
    app: Application,
    selected: Signal<Vec<String>>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut selected = selected;
    let id = app.id.clone();
    let is_selected = selected.read().contains(&id);
    let applied = app
        .applied_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let status = app.status.clone().unwrap_or_default();
    let company = app.company_name.clone();
    let position = app.position_title.clone();

    let toggle_id = id.clone();
    rsx! {
        tr {
            td {
                input {
                    r#type: "checkbox",
                    checked: is_selected,
                    onchange: move |_| {
                        let mut ids = selected.write();
                        match ids.iter().position(|s| s == &toggle_id) {
                            Some(pos) => {
                                ids.remove(pos);
                            }
                            None => ids.push(toggle_id.clone()),
                        }
                    },
                }
            }
            td {
                if let Some(url) = app.job_url.clone() {
                    a { href: "{url}", target: "_blank", "{company}" }
                } else {
                    "{company}"
                }
            }
            td { "{position}" }
            td { "{status}" }
            td { "{applied}" }
            td {
                button { onclick: move |_| on_delete.call(id.clone()), "Delete" }
            }
        }
    }
}
