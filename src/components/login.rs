use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_form, use_toast, Field, Rule};
use crate::models::Credentials;
use crate::routes::{navigate, Route};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let remember_ref = use_node_ref();

    let form = use_form(vec![
        Field::new("identifier", "Email or username", vec![Rule::Required]),
        Field::new("password", "Password", vec![Rule::Required]),
    ]);

    let onsubmit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();
        let remember_ref = remember_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let remember = remember_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);
            let credentials =
                Credentials::password(form.value("identifier"), form.value("password"), remember);

            let auth = auth.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match auth.login(credentials).await {
                    Ok(user) => {
                        toast.success(format!("Welcome back, {}", user.display_name()));
                        navigate(Route::Dashboard);
                    }
                    Err(_) => {
                        // The inline error under the form is enough here.
                    }
                }
            });
        })
    };

    let on_forgot = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(Route::ForgotPassword);
    });
    let on_register = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(Route::Register);
    });

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"LinguaAdmin"}</h1>
                    <p>{"School administration console"}</p>
                </div>

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="identifier">{"Email or username"}</label>
                        <input
                            type="text"
                            id="identifier"
                            value={form.value("identifier")}
                            oninput={form.oninput("identifier")}
                            onblur={form.onblur("identifier")}
                        />
                        if let Some(error) = form.error("identifier") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
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

                    <label class="form-checkbox">
                        <input type="checkbox" ref={remember_ref} />
                        {"Remember me"}
                    </label>

                    if let Some(error) = auth.error() {
                        <div class="form-error">{ &error.message }</div>
                    }

                    <button type="submit" class="btn-primary" disabled={auth.loading()}>
                        { if auth.loading() { "Signing in..." } else { "Sign in" } }
                    </button>

                    <div class="auth-footer">
                        <a href={Route::ForgotPassword.path()} onclick={on_forgot}>
                            {"Forgot password?"}
                        </a>
                        <a href={Route::Register.path()} onclick={on_register}>
                            {"Create an account"}
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
