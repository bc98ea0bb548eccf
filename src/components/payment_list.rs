use std::rc::Rc;

use yew::prelude::*;

use crate::components::pagination::{PageControls, SearchBox};
use crate::hooks::{use_pagination, FetchFn, PaginationOptions};
use crate::models::Payment;
use crate::services::FinanceService;
use crate::utils::dates::format_date;

#[function_component(PaymentListPage)]
pub fn payment_list_page() -> Html {
    let service = use_memo((), |_| FinanceService::new());
    let search = use_state(String::new);
    let status = use_state(String::new);

    let fetch: FetchFn<Payment> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_payments(&params).await })
        })
    };

    let mut filters = Vec::new();
    if !search.is_empty() {
        filters.push(("search".to_string(), (*search).clone()));
    }
    if !status.is_empty() {
        filters.push(("status".to_string(), (*status).clone()));
    }
    let pager = use_pagination(fetch, filters, PaginationOptions::default());

    let on_search = {
        let search = search.clone();
        let pager = pager.clone();
        Callback::from(move |term: String| {
            search.set(term);
            pager.refresh();
        })
    };

    let on_status_change = {
        let status = status.clone();
        let pager = pager.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_unchecked_into::<web_sys::HtmlSelectElement>()
                .value();
            status.set(value);
            pager.refresh();
        })
    };

    let rows = pager
        .items()
        .iter()
        .map(|payment| {
            html! {
                <tr key={payment.id}>
                    <td>{ payment.invoice_number.clone().unwrap_or_else(|| format!("#{}", payment.invoice)) }</td>
                    <td>{ payment.student_name.clone().unwrap_or_else(|| "—".to_string()) }</td>
                    <td class="amount">{ &payment.amount }</td>
                    <td>{ &payment.payment_method }</td>
                    <td>{ format_date(&payment.payment_date) }</td>
                    <td>{ &payment.status }</td>
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
                <h2>{"Payments"}</h2>
                <select class="filter-select" onchange={on_status_change}>
                    <option value="" selected={status.is_empty()}>{"All statuses"}</option>
                    { for ["pending", "completed", "failed", "refunded"].iter().map(|s| html! {
                        <option value={*s} selected={*status == *s}>{ *s }</option>
                    }) }
                </select>
            </div>

            <SearchBox placeholder="Search payments..." on_search={on_search} />

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Invoice"}</th>
                        <th>{"Student"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Method"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
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
