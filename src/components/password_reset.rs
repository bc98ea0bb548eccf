use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_auth, use_form, use_toast, Field, Rule};
use crate::routes::{navigate, Route};
use crate::utils::query;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let form = use_form(vec![Field::new(
        "email",
        "Email",
        vec![Rule::Required, Rule::Email],
    )]);

    let onsubmit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let email = form.value("email");
            let auth = auth.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match auth.request_password_reset(&email).await {
                    Ok(()) => {
                        toast.info("If that address is registered, a reset link is on its way");
                        navigate(Route::Login);
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Reset your password"}</h1>
                    <p>{"Enter your account email and we'll send a reset link."}</p>
                </div>

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            value={form.value("email")}
                            oninput={form.oninput("email")}
                            onblur={form.onblur("email")}
                        />
                        if let Some(error) = form.error("email") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <button type="submit" class="btn-primary" disabled={auth.loading()}>
                        {"Send reset link"}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Landing page of the emailed link; the token travels in the query string.
#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let token = use_memo((), |_| {
        let parsed = query::parse_query(&query::current_search());
        query::get_param(&parsed, "token").unwrap_or_default().to_string()
    });

    let form = use_form(vec![
        Field::new("password", "New password", vec![Rule::Required, Rule::MinLen(8)]),
        Field::new("confirm", "Password confirmation", vec![Rule::Required]),
    ]);

    let onsubmit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();
        let token = token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }
            if form.value("password") != form.value("confirm") {
                toast.error("Passwords do not match");
                return;
            }
            if token.is_empty() {
                toast.error("This reset link is invalid, request a new one");
                return;
            }

            let auth = auth.clone();
            let toast = toast.clone();
            let token = (*token).clone();
            let password = form.value("password");
            spawn_local(async move {
                match auth.confirm_password_reset(&token, &password).await {
                    Ok(()) => {
                        toast.success("Password updated, sign in with the new one");
                        navigate(Route::Login);
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Choose a new password"}</h1>
                </div>

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="password">{"New password"}</label>
                        <input
                            type="password"
                            id="password"
                            value={form.value("password")}
                            oninput={form.oninput("password")}
                            onblur={form.onblur("password")}
                        />
                        if let Some(error) = form.error("password") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="confirm">{"Confirm password"}</label>
                        <input
                            type="password"
                            id="confirm"
                            value={form.value("confirm")}
                            oninput={form.oninput("confirm")}
                            onblur={form.onblur("confirm")}
                        />
                        if let Some(error) = form.error("confirm") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <button type="submit" class="btn-primary" disabled={auth.loading()}>
                        {"Update password"}
                    </button>
                </form>
            </div>
        </div>
    }
}
