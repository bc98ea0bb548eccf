use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, use_toast, FetchFn, PaginationOptions};
use crate::models::Feedback;
use crate::services::QualityService;
use crate::utils::dates::format_date;

#[function_component(FeedbackListPage)]
pub fn feedback_list_page() -> Html {
    let service = use_memo((), |_| QualityService::new());
    let toast = use_toast();

    let fetch: FetchFn<Feedback> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_feedback(&params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let on_resolve = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |feedback: Feedback| {
            let service = service.clone();
            let toast = toast.clone();
            let pager = pager.clone();
            spawn_local(async move {
                match service.update_feedback_status(feedback.id, "resolved").await {
                    Ok(_) => {
                        toast.success("Feedback marked resolved");
                        pager.reload();
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let rows = pager
        .items()
        .iter()
        .map(|feedback| {
            let resolve = if feedback.status == "resolved" {
                html! {}
            } else {
                let on_resolve = on_resolve.clone();
                let feedback = feedback.clone();
                let onclick = Callback::from(move |_| on_resolve.emit(feedback.clone()));
                html! { <button class="btn-link" {onclick}>{"Resolve"}</button> }
            };
            let rating = feedback
                .rating
                .map(|r| format!("{}/5", r))
                .unwrap_or_else(|| "—".to_string());
            html! {
                <tr key={feedback.id}>
                    <td>{ &feedback.subject }</td>
                    <td>{ &feedback.category }</td>
                    <td>{ rating }</td>
                    <td>{ feedback.submitted_by.clone().unwrap_or_else(|| "anonymous".to_string()) }</td>
                    <td>{ format_date(&feedback.created_at) }</td>
                    <td>{ &feedback.status }</td>
                    <td class="row-actions">{ resolve }</td>
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
                <h2>{"Feedback"}</h2>
            </div>

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Subject"}</th>
                        <th>{"Category"}</th>
                        <th>{"Rating"}</th>
                        <th>{"From"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="7" class="table-loading">{"Loading..."}</td></tr>
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
