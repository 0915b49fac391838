//! Organization profile (read-only, from `/config`) and the signed-in
//! member's display name and password.

use crate::layout::global_context::use_app_context;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{Badge, BadgeVariant, PageHeader, TextField};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::{icon, Icon};
use crate::shared::mutation::Mutation;
use crate::shared::notify::use_notifier;
use crate::system::config::use_config;
use crate::system::users::api;
use contracts::system::users::ProfileUpdate;
use leptos::prelude::*;
use thaw::*;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// A blank password keeps the current one.
    pub fn validate(&self) -> Result<ProfileUpdate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Display name is required".into());
        }
        let password = if self.password.is_empty() {
            None
        } else if self.password != self.confirm_password {
            return Err("Passwords do not match".into());
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Min {} characters required", MIN_PASSWORD_LEN));
        } else {
            Some(self.password.clone())
        };
        Ok(ProfileUpdate {
            name: name.to_string(),
            password,
        })
    }
}

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();
    let ctx = use_app_context();

    let initial_name = ctx.current_user.with_untracked(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let form = RwSignal::new(ProfileForm {
        name: initial_name,
        ..Default::default()
    });
    let saving = RwSignal::new(false);

    let config_field = move |get: fn(&contracts::system::config::AppConfig) -> Option<String>| {
        Signal::derive(move || {
            config
                .config()
                .and_then(|c| get(&c))
                .unwrap_or_else(|| "-".to_string())
        })
    };
    let expiry = Signal::derive(move || {
        format_date_opt(config.config().and_then(|c| c.subscription_expiry).as_deref())
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let update = match form.with_untracked(ProfileForm::validate) {
            Ok(update) => update,
            Err(message) => {
                notifier.error(message);
                return;
            }
        };
        let name = update.name.clone();
        Mutation::new(notifier, "Security settings updated", "Failed to update profile")
            .with_busy(saving)
            .run(api::update_profile(client, update), move |_| {
                form.update(|f| {
                    f.password.clear();
                    f.confirm_password.clear();
                });
                ctx.current_user.update(|u| {
                    if let Some(u) = u.as_mut() {
                        u.name = name;
                    }
                });
            });
    };

    view! {
        <div class="page">
            <PageHeader title="System Settings" subtitle="Organization profile and personal security".to_string()>
                <Badge variant=BadgeVariant::Success>"System Online"</Badge>
            </PageHeader>

            <div class="sheet-grid">
                <section class="sheet-card">
                    <h3 class="sheet-card__title">"Entity Details"</h3>
                    <InfoRow label="Company" value=Signal::derive(move || config.company_name()) />
                    <InfoRow label="Address" value=config_field(|c| c.company_address.clone()) />
                    <InfoRow label="Phone" value=config_field(|c| c.company_phone.clone()) />
                    <InfoRow label="Email" value=config_field(|c| c.company_email.clone()) />
                    <InfoRow label="License Expiry" value=expiry />
                </section>

                <section class="sheet-card">
                    <h3 class="sheet-card__title">
                        {icon(Icon::Lock)}
                        " Profile & Security"
                    </h3>
                    <p class="hint">
                        {move || ctx.current_user.with(|u| u.as_ref().map(|u| format!("@{}", u.username)).unwrap_or_default())}
                    </p>
                    <TextField
                        label="Display Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        required=true
                    />
                    <TextField
                        label="New Password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                        input_type="password"
                        placeholder="Leave blank to keep the current one"
                    />
                    <TextField
                        label="Confirm Password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.confirm_password = v))
                        input_type="password"
                    />
                    <Flex justify=FlexJustify::End>
                        <Button appearance=ButtonAppearance::Primary disabled=saving on_click=save>
                            "Update Profile Settings"
                        </Button>
                    </Flex>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, password: &str, confirm: &str) -> ProfileForm {
        ProfileForm {
            name: name.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_blank_password_keeps_current() {
        let update = form(" Ayesha ", "", "").validate().unwrap();
        assert_eq!(update.name, "Ayesha");
        assert_eq!(update.password, None);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(form("A", "secret1", "secret2").validate(), Err("Passwords do not match".into()));
        assert_eq!(form("A", "abc", "abc").validate(), Err("Min 6 characters required".into()));
        assert_eq!(form("A", "secret1", "secret1").validate().unwrap().password.as_deref(), Some("secret1"));
        assert!(form("  ", "", "").validate().is_err());
    }
}
