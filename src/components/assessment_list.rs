use std::rc::Rc;

use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, FetchFn, PaginationOptions};
use crate::models::Assessment;
use crate::services::QualityService;

#[function_component(AssessmentListPage)]
pub fn assessment_list_page() -> Html {
    let service = use_memo((), |_| QualityService::new());

    let fetch: FetchFn<Assessment> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_assessments(&params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let rows = pager
        .items()
        .iter()
        .map(|assessment| {
            html! {
                <tr key={assessment.id}>
                    <td>{ &assessment.title }</td>
                    <td>{ &assessment.description }</td>
                    <td>{ &assessment.status }</td>
                    <td>{ assessment.response_count }</td>
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
                <h2>{"Quality assessments"}</h2>
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
                        <th>{"Title"}</th>
                        <th>{"Description"}</th>
                        <th>{"Status"}</th>
                        <th>{"Responses"}</th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="4" class="table-loading">{"Loading..."}</td></tr>
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
