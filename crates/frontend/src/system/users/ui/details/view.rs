use super::view_model::UserDetailsViewModel;
use crate::shared::api_client::ApiClient;
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifier;
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserDetails(
    user: Option<User>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let vm = UserDetailsViewModel::new(user.as_ref());
    let title = if vm.is_edit_mode() { "Edit Member" } else { "Register Member" };

    let submit = move || vm.save_command(client, notifier, on_saved);

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            footer=move || view! {
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=vm.saving
                    >
                        {if vm.is_edit_mode() { "Save Changes" } else { "Register" }}
                    </Button>
                </Flex>
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="user-name">"Full Name"</label>
                    <input
                        type="text"
                        id="user-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="user-username">"Username"</label>
                    <input
                        type="text"
                        id="user-username"
                        autocomplete="off"
                        prop:value=move || vm.form.get().username
                        on:input=move |ev| vm.form.update(|f| f.username = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="user-password">
                        {if vm.is_edit_mode() { "New Password (leave blank to keep)" } else { "Password" }}
                    </label>
                    <input
                        type="password"
                        id="user-password"
                        autocomplete="new-password"
                        prop:value=move || vm.form.get().password
                        on:input=move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="user-role">"Access Level"</label>
                    <select
                        id="user-role"
                        prop:value=move || vm.form.get().role.as_str()
                        on:change=move |ev| {
                            let role = UserRole::parse(&event_target_value(&ev));
                            vm.form.update(|f| f.role = role);
                        }
                    >
                        {UserRole::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="user-active"
                        prop:checked=move || vm.form.get().is_active
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|f| f.is_active = checked);
                        }
                    />
                    <label for="user-active">"Account active"</label>
                </div>
            </div>
        </Modal>
    }
}
