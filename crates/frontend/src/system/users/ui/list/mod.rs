use crate::shared::api_client::ApiClient;
use crate::shared::components::{
    Badge, BadgeSize, BadgeVariant, ConfirmationModal, EmptyState, PageHeader, StatCard,
};
use crate::shared::icons::{icon, Icon};
use crate::shared::mutation::{failure_message, Mutation};
use crate::shared::notify::{use_notifier, ToastKind};
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;
use contracts::system::users::{count_active, User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn role_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Developer => BadgeVariant::Dark,
        UserRole::Admin => BadgeVariant::Info,
        UserRole::User => BadgeVariant::Default,
    }
}

/// Which form, if any, is open.
#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(User),
}

#[component]
#[allow(non_snake_case)]
pub fn UsersPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let editor = RwSignal::new(Editor::Closed);
    let pending_delete = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_users(client).await {
                Ok(rows) => users.set(rows),
                Err(err) => {
                    if let Some(message) = failure_message(&err, "Failed to load team data") {
                        notifier.error(message);
                    }
                }
            }
            loading.set(false);
        });
    };
    load();

    let on_saved = Callback::new(move |_| {
        editor.set(Editor::Closed);
        load();
    });
    let on_close = Callback::new(move |_| editor.set(Editor::Closed));

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        Mutation::new(notifier, "Access revoked successfully", "Failed to remove user")
            .announce_as(ToastKind::Info)
            .with_busy(deleting)
            .run(api::delete_user(client, id), move |_| {
                pending_delete.set(None);
                load();
            });
    });

    let active_count = Signal::derive(move || Some(users.with(|u| count_active(u)).to_string()));
    let total_count = Signal::derive(move || Some(users.with(Vec::len).to_string()));

    view! {
        <div class="page">
            <PageHeader title="Team Directory" subtitle="Manage access levels and system operators".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                    {icon(Icon::Plus)}
                    " Add New Member"
                </Button>
            </PageHeader>

            <div class="stat-row">
                <StatCard label="Members" icon_kind=Icon::Users value=total_count />
                <StatCard label="Active" icon_kind=Icon::Check value=active_count />
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="page-loader"><Spinner /></div> }.into_any()
                } else if users.with(Vec::is_empty) {
                    view! { <EmptyState is_filtering=false /> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || users.get()
                                key=|user| (user.id.clone(), user.name.clone(), user.role, user.is_active)
                                children=move |user| {
                                    let id = user.id.clone();
                                    let for_edit = user.clone();
                                    view! {
                                        <div class="user-card">
                                            <div class="user-card__head">
                                                <div class="user-card__avatar">
                                                    {user.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                                                </div>
                                                <div>
                                                    <div class="user-card__name">{user.name.clone()}</div>
                                                    <div class="user-card__username">{format!("@{}", user.username)}</div>
                                                </div>
                                            </div>
                                            <div class="user-card__badges">
                                                <Badge variant=role_variant(user.role) size=BadgeSize::Sm>
                                                    {user.role.label()}
                                                </Badge>
                                                <Badge
                                                    variant=if user.is_active { BadgeVariant::Success } else { BadgeVariant::Warning }
                                                    size=BadgeSize::Sm
                                                >
                                                    {if user.is_active { "Active" } else { "Inactive" }}
                                                </Badge>
                                            </div>
                                            <div class="user-card__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                                >
                                                    {icon(Icon::Edit)}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(id.clone()))
                                                >
                                                    {icon(Icon::Trash)}
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || match editor.get() {
                Editor::Closed => None,
                Editor::New => Some(view! { <UserDetails user=None on_saved=on_saved on_close=on_close /> }.into_any()),
                Editor::Edit(user) => Some(view! { <UserDetails user=Some(user) on_saved=on_saved on_close=on_close /> }.into_any()),
            }}

            <ConfirmationModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Revoke access"
                message=Signal::derive(|| "This member will no longer be able to sign in. Continue?".to_string())
                on_confirm=confirm_delete
                on_close=Callback::new(move |_| pending_delete.set(None))
                busy=deleting
                confirm_label="Revoke"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_variant() {
        assert_eq!(role_variant(UserRole::Developer), BadgeVariant::Dark);
        assert_eq!(role_variant(UserRole::User), BadgeVariant::Default);
    }
}
