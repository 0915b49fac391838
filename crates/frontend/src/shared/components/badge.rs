use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Info,
    Danger,
    Dark,
}

impl BadgeVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge--default",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Info => "badge--info",
            BadgeVariant::Danger => "badge--danger",
            BadgeVariant::Dark => "badge--dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

impl BadgeSize {
    fn class_name(self) -> &'static str {
        match self {
            BadgeSize::Sm => "badge--sm",
            BadgeSize::Md => "badge--md",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<BadgeVariant>,
    #[prop(optional)] size: BadgeSize,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {} {}", variant.get().unwrap_or_default().class_name(), size.class_name())>
            {children()}
        </span>
    }
}
