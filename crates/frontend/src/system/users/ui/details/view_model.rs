use crate::shared::api_client::ApiClient;
use crate::shared::mutation::Mutation;
use crate::shared::notify::Notifier;
use crate::system::users::api;
use contracts::system::users::{User, UserDto, UserRole};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            password: String::new(),
            role: UserRole::User,
            is_active: true,
        }
    }
}

impl UserForm {
    /// Password is never prefilled; leaving it blank on edit keeps the old one.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            password: String::new(),
            role: user.role,
            is_active: user.is_active,
        }
    }

    pub fn validate(&self, is_edit: bool) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.username.trim().contains(char::is_whitespace) {
            return Err("Username cannot contain spaces".into());
        }
        if !is_edit && self.password.is_empty() {
            return Err("Password is required for new members".into());
        }
        Ok(())
    }

    pub fn to_dto(&self) -> UserDto {
        UserDto {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            role: self.role,
            is_active: self.is_active,
        }
    }
}

/// ViewModel for the member form
#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserForm>,
    pub editing_id: StoredValue<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsViewModel {
    pub fn new(user: Option<&User>) -> Self {
        Self {
            form: RwSignal::new(user.map(UserForm::from_user).unwrap_or_default()),
            editing_id: StoredValue::new(user.map(|u| u.id.clone())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with_value(Option::is_some)
    }

    /// Validate, then create or update. `on_saved` runs only on success.
    pub fn save_command(&self, client: ApiClient, notifier: Notifier, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        let is_edit = self.is_edit_mode();
        if let Err(message) = form.validate(is_edit) {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);

        let dto = form.to_dto();
        match self.editing_id.get_value() {
            Some(id) => Mutation::new(notifier, "Member profile updated", "Operation failed")
                .with_busy(self.saving)
                .run(api::update_user(client, id, dto), move |_| on_saved.run(())),
            None => Mutation::new(notifier, "New member registered", "Operation failed")
                .with_busy(self.saving)
                .run(api::create_user(client, dto), move |_| on_saved.run(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            name: "Ayesha Khan".into(),
            username: "ayesha".into(),
            password: "secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_member_defaults() {
        let form = UserForm::default();
        assert_eq!(form.role, UserRole::User);
        assert!(form.is_active);
    }

    #[test]
    fn test_password_required_on_create_only() {
        let form = UserForm {
            password: String::new(),
            ..filled()
        };
        assert!(form.validate(false).is_err());
        assert!(form.validate(true).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let form = UserForm {
            name: "  ".into(),
            ..filled()
        };
        assert_eq!(form.validate(false), Err("Full name is required".into()));
        let form = UserForm {
            username: "a b".into(),
            ..filled()
        };
        assert!(form.validate(false).is_err());
    }

    #[test]
    fn test_blank_password_omitted_from_dto() {
        let form = UserForm {
            password: String::new(),
            ..filled()
        };
        assert!(form.to_dto().password.is_none());
        assert_eq!(filled().to_dto().password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_from_user_never_prefills_password() {
        let user = User {
            id: "7".into(),
            name: "Bilal".into(),
            username: "bilal".into(),
            role: UserRole::Admin,
            is_active: false,
            created_at: None,
        };
        let form = UserForm::from_user(&user);
        assert!(form.password.is_empty());
        assert_eq!(form.role, UserRole::Admin);
        assert!(!form.is_active);
    }
}
