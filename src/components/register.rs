use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_auth, use_form, use_toast, Field, Rule};
use crate::models::RegisterRequest;
use crate::routes::{navigate, Route};

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let form = use_form(vec![
        Field::new("full_name", "Full name", vec![Rule::Required]),
        Field::new("email", "Email", vec![Rule::Required, Rule::Email]),
        Field::new("password", "Password", vec![Rule::Required, Rule::MinLen(8)]),
        Field::new("confirm", "Password confirmation", vec![Rule::Required]),
    ]);

    let onsubmit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }
            if form.value("password") != form.value("confirm") {
                toast.error("Passwords do not match");
                return;
            }

            let request = RegisterRequest::from_signup(
                &form.value("full_name"),
                &form.value("email"),
                &form.value("password"),
            );

            let auth = auth.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match auth.register(request).await {
                    Ok(()) => {
                        toast.success("Account created, you can sign in now");
                        navigate(Route::Login);
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let on_back = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(Route::Login);
    });

    let text_field = |name: &'static str, label: &str, kind: &str| {
        html! {
            <div class="form-group">
                <label for={name}>{ label }</label>
                <input
                    type={kind.to_string()}
                    id={name}
                    value={form.value(name)}
                    oninput={form.oninput(name)}
                    onblur={form.onblur(name)}
                />
                if let Some(error) = form.error(name) {
                    <span class="field-error">{ error }</span>
                }
            </div>
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Create your account"}</h1>
                </div>

                <form class="auth-form" {onsubmit}>
                    { text_field("full_name", "Full name", "text") }
                    { text_field("email", "Email", "email") }
                    { text_field("password", "Password", "password") }
                    { text_field("confirm", "Confirm password", "password") }

                    <button type="submit" class="btn-primary" disabled={auth.loading()}>
                        { if auth.loading() { "Creating..." } else { "Create account" } }
                    </button>

                    <div class="auth-footer">
                        <a href={Route::Login.path()} onclick={on_back}>{"Back to sign in"}</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
