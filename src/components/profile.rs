use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_auth, use_form, use_toast, Field, Rule};
use crate::models::ProfileUpdate;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let form = use_form(vec![
        Field::new("first_name", "First name", vec![Rule::Required]),
        Field::new("last_name", "Last name", vec![]),
        Field::new("phone_number", "Phone number", vec![]),
    ]);

    // Prefill once from the signed-in user.
    {
        let form = form.clone();
        let user = auth.user().cloned();
        use_effect_with((), move |_| {
            if let Some(user) = user {
                form.set_values(&[
                    ("first_name", user.first_name),
                    ("last_name", user.last_name),
                    ("phone_number", user.phone_number),
                ]);
            }
            || ()
        });
    }

    let onsubmit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let update = ProfileUpdate {
                first_name: Some(form.value("first_name")),
                last_name: Some(form.value("last_name")),
                phone_number: Some(form.value("phone_number")),
                address: None,
            };

            let auth = auth.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match auth.update_profile(update).await {
                    Ok(_) => toast.success("Profile updated"),
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let email = auth.user().map(|u| u.email.clone()).unwrap_or_default();
    let role = auth
        .user()
        .map(|u| u.role.as_str().to_string())
        .unwrap_or_default();

    html! {
        <section class="page">
            <h2>{"My profile"}</h2>
            <p class="page-subtitle">{ format!("{} · {}", email, role) }</p>

            <form class="profile-form" {onsubmit}>
                <div class="form-group">
                    <label for="first_name">{"First name"}</label>
                    <input
                        type="text"
                        id="first_name"
                        value={form.value("first_name")}
                        oninput={form.oninput("first_name")}
                        onblur={form.onblur("first_name")}
                    />
                    if let Some(error) = form.error("first_name") {
                        <span class="field-error">{ error }</span>
                    }
                </div>

                <div class="form-group">
                    <label for="last_name">{"Last name"}</label>
                    <input
                        type="text"
                        id="last_name"
                        value={form.value("last_name")}
                        oninput={form.oninput("last_name")}
                    />
                </div>

                <div class="form-group">
                    <label for="phone_number">{"Phone number"}</label>
                    <input
                        type="tel"
                        id="phone_number"
                        value={form.value("phone_number")}
                        oninput={form.oninput("phone_number")}
                    />
                </div>

                <button type="submit" class="btn-primary" disabled={auth.loading()}>
                    { if auth.loading() { "Saving..." } else { "Save changes" } }
                </button>
            </form>
        </section>
    }
}
