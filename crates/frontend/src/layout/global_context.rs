use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

/// Every screen of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Articles,
    NewArticle,
    EditArticle(String),
    ArticleSheet(String),
    Users,
    Options,
    Settings,
}

impl Page {
    /// Entries of the sidebar, in display order.
    pub const NAVIGATION: [Page; 5] = [Page::Dashboard, Page::Articles, Page::Users, Page::Options, Page::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Articles => "Articles",
            Page::NewArticle => "New Article",
            Page::EditArticle(_) => "Edit Article",
            Page::ArticleSheet(_) => "Article",
            Page::Users => "Team",
            Page::Options => "Options",
            Page::Settings => "Settings",
        }
    }

    /// Sidebar entry highlighted while this page is open.
    pub fn section(&self) -> Page {
        match self {
            Page::NewArticle | Page::EditArticle(_) | Page::ArticleSheet(_) => Page::Articles,
            other => other.clone(),
        }
    }

    /// Team administration is reserved to developer accounts.
    pub fn requires_developer(&self) -> bool {
        matches!(self, Page::Users)
    }

    /// Value of the `page` query parameter.
    pub fn to_key(&self) -> String {
        match self {
            Page::Dashboard => "dashboard".into(),
            Page::Articles => "articles".into(),
            Page::NewArticle => "articles/new".into(),
            Page::EditArticle(id) => format!("articles/{}/edit", id),
            Page::ArticleSheet(id) => format!("articles/{}", id),
            Page::Users => "users".into(),
            Page::Options => "options".into(),
            Page::Settings => "settings".into(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let parts: Vec<&str> = key.trim_matches('/').split('/').collect();
        match parts.as_slice() {
            ["dashboard"] | [""] => Some(Page::Dashboard),
            ["articles"] => Some(Page::Articles),
            ["articles", "new"] => Some(Page::NewArticle),
            ["articles", id, "edit"] if !id.is_empty() => Some(Page::EditArticle(id.to_string())),
            ["articles", id] if !id.is_empty() => Some(Page::ArticleSheet(id.to_string())),
            ["users"] => Some(Page::Users),
            ["options"] => Some(Page::Options),
            ["settings"] => Some(Page::Settings),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    /// Profile of the signed-in member, once `/auth/me` answered.
    pub current_user: RwSignal<Option<User>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
            current_user: RwSignal::new(None),
        }
    }

    /// Restores the page from `?page=` and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get(PAGE_PARAM).and_then(|key| Page::from_key(key)) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.page.with(Page::to_key);
            let query_string =
                serde_qs::to_string(&HashMap::from([(PAGE_PARAM.to_string(), key)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.to_key());
        self.page.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user.with(|u| u.as_ref().map(|u| u.role))
    }

    /// Admins and developers see team figures on the dashboard.
    pub fn can_manage_team(&self) -> bool {
        self.role().is_some_and(UserRole::can_manage_team)
    }

    pub fn is_developer(&self) -> bool {
        self.role() == Some(UserRole::Developer)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys() {
        let pages = [
            Page::Dashboard,
            Page::Articles,
            Page::NewArticle,
            Page::EditArticle("64f1".into()),
            Page::ArticleSheet("64f1".into()),
            Page::Users,
            Page::Options,
            Page::Settings,
        ];
        for page in pages {
            assert_eq!(Page::from_key(&page.to_key()), Some(page));
        }
        assert_eq!(Page::from_key("reports"), None);
        assert_eq!(Page::from_key("articles//edit"), None);
    }

    #[test]
    fn test_section() {
        assert_eq!(Page::EditArticle("1".into()).section(), Page::Articles);
        assert_eq!(Page::Options.section(), Page::Options);
        assert!(Page::Users.requires_developer());
        assert!(!Page::Articles.requires_developer());
    }
}
