use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::{PageControls, SearchBox};
use crate::hooks::{
    use_form, use_pagination, use_toast, Field, FetchFn, PaginationOptions, Rule,
};
use crate::models::{Lead, LeadInput};
use crate::services::MarketingService;
use crate::utils::dates::format_optional_date;

#[function_component(LeadListPage)]
pub fn lead_list_page() -> Html {
    let service = use_memo((), |_| MarketingService::new());
    let toast = use_toast();
    let search = use_state(String::new);

    let fetch: FetchFn<Lead> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_leads(&params).await })
        })
    };

    let filters = if search.is_empty() {
        vec![]
    } else {
        vec![("search".to_string(), (*search).clone())]
    };
    let pager = use_pagination(fetch, filters, PaginationOptions::default());

    let on_search = {
        let search = search.clone();
        let pager = pager.clone();
        Callback::from(move |term: String| {
            search.set(term);
            pager.refresh();
        })
    };

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |lead: Lead| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete lead {}?", lead.full_name()))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let service = service.clone();
            let toast = toast.clone();
            let pager = pager.clone();
            spawn_local(async move {
                match service.delete_lead(lead.id).await {
                    Ok(()) => {
                        toast.success("Lead deleted");
                        pager.reload();
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let on_created = {
        let pager = pager.clone();
        Callback::from(move |_| pager.refresh())
    };

    let rows = pager
        .items()
        .iter()
        .map(|lead| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let lead = lead.clone();
                Callback::from(move |_| on_delete.emit(lead.clone()))
            };
            html! {
                <tr key={lead.id}>
                    <td>{ lead.full_name() }</td>
                    <td>{ &lead.email }</td>
                    <td>{ &lead.source }</td>
                    <td>{ &lead.status }</td>
                    <td>{ format_optional_date(&lead.followup_date) }</td>
                    <td class="row-actions">
                        <button class="btn-link danger" onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let on_retry = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.reload())
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h2>{"Leads"}</h2>
            </div>

            <LeadCaptureForm on_created={on_created} />

            <SearchBox placeholder="Search leads..." on_search={on_search} />

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Source"}</th>
                        <th>{"Status"}</th>
                        <th>{"Follow-up"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="6" class="table-loading">{"Loading..."}</td></tr>
                    } else {
                        { rows }
                    }
                </tbody>
            </table>

            <PageControls
                page={pager.page()}
                total_pages={pager.total_pages()}
                page_size={pager.page_size()}
                loading={pager.loading()}
                on_page={Callback::from({ let pager = pager.clone(); move |p| pager.go_to_page(p) })}
                on_page_size={Callback::from({ let pager = pager.clone(); move |s| pager.set_items_per_page(s) })}
            />
        </section>
    }
}

/// Inline quick-capture row: front-desk staff add walk-ins without leaving
/// the list.
#[derive(Properties, PartialEq)]
struct LeadCaptureFormProps {
    on_created: Callback<()>,
}

#[function_component(LeadCaptureForm)]
fn lead_capture_form(props: &LeadCaptureFormProps) -> Html {
    let service = use_memo((), |_| MarketingService::new());
    let toast = use_toast();
    let saving = use_state(|| false);

    let form = use_form(vec![
        Field::new("first_name", "First name", vec![Rule::Required]),
        Field::new("last_name", "Last name", vec![Rule::Required]),
        Field::new("email", "Email", vec![Rule::Required, Rule::Email]),
        Field::new("interest", "Interest", vec![]),
    ]);

    let onsubmit = {
        let service = service.clone();
        let toast = toast.clone();
        let form = form.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let input = LeadInput {
                first_name: form.value("first_name"),
                last_name: form.value("last_name"),
                email: form.value("email"),
                phone: String::new(),
                source: "walk_in".to_string(),
                interest: form.value("interest"),
            };

            let service = service.clone();
            let toast = toast.clone();
            let form = form.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            saving.set(true);
            spawn_local(async move {
                let result = service.create_lead(&input).await;
                saving.set(false);
                match result {
                    Ok(lead) => {
                        toast.success(format!("Lead {} captured", lead.full_name()));
                        form.reset();
                        on_created.emit(());
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    html! {
        <form class="inline-form" {onsubmit}>
            <input
                type="text"
                placeholder="First name"
                value={form.value("first_name")}
                oninput={form.oninput("first_name")}
                onblur={form.onblur("first_name")}
            />
            <input
                type="text"
                placeholder="Last name"
                value={form.value("last_name")}
                oninput={form.oninput("last_name")}
                onblur={form.onblur("last_name")}
            />
            <input
                type="email"
                placeholder="Email"
                value={form.value("email")}
                oninput={form.oninput("email")}
                onblur={form.onblur("email")}
            />
            <input
                type="text"
                placeholder="Interested in..."
                value={form.value("interest")}
                oninput={form.oninput("interest")}
            />
            <button type="submit" class="btn-primary" disabled={*saving}>
                { if *saving { "Adding..." } else { "Add lead" } }
            </button>
        </form>
    }
}
