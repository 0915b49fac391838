//! Tenant configuration (`GET /config`) and the option catalog
//! (`GET /options`) with its unified mutation payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub company_phone: Option<String>,
    #[serde(default)]
    pub company_email: Option<String>,
    #[serde(default)]
    pub subscription_expiry: Option<String>,
}

impl AppConfig {
    /// Parses `subscriptionExpiry` as RFC 3339 or a bare `YYYY-MM-DD`
    /// (midnight UTC).
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        let raw = self.subscription_expiry.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    /// An unparseable or missing expiry never expires the tenant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry().is_some_and(|expiry| now > expiry)
    }
}

/// Rate categories keep the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateCategories(pub Vec<(String, Vec<String>)>);

impl RateCategories {
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn titles(&self, category: &str) -> &[String] {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, titles)| titles.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Serialize for RateCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, titles) in &self.0 {
            map.serialize_entry(name, titles)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RateCategories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RateCategories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of rate category to titles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, titles)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((name, titles));
                }
                Ok(RateCategories(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsCatalog {
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rate_categories: RateCategories,
}

impl OptionsCatalog {
    pub fn values(&self, list: &OptionList) -> &[String] {
        match list {
            OptionList::Seasons => &self.seasons,
            OptionList::Sizes => &self.sizes,
            OptionList::Categories => &self.categories,
            OptionList::Rate(category) => self.rate_categories.titles(category),
        }
    }

    /// Fixed lists first, then one list per rate category.
    pub fn lists(&self) -> Vec<OptionList> {
        let mut lists = vec![OptionList::Seasons, OptionList::Sizes, OptionList::Categories];
        lists.extend(
            self.rate_categories
                .names()
                .into_iter()
                .map(OptionList::Rate),
        );
        lists
    }
}

/// Removes duplicates, keeping first occurrences in order.
pub fn distinct(values: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

/// Target list of an option mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionList {
    Seasons,
    Sizes,
    Categories,
    Rate(String),
}

impl OptionList {
    /// `type` segment of `/options/{type}[/{category}]`.
    pub fn type_key(&self) -> &'static str {
        match self {
            OptionList::Seasons => "seasons",
            OptionList::Sizes => "sizes",
            OptionList::Categories => "categories",
            OptionList::Rate(_) => "rateCategories",
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            OptionList::Rate(category) => Some(category),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            OptionList::Seasons => "Seasons".into(),
            OptionList::Sizes => "Sizes".into(),
            OptionList::Categories => "Categories".into(),
            OptionList::Rate(category) => {
                let mut chars = category.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionAction {
    Add,
    Update,
    Delete,
}

impl OptionAction {
    pub fn past_tense(self) -> &'static str {
        match self {
            OptionAction::Add => "added",
            OptionAction::Update => "updated",
            OptionAction::Delete => "deleted",
        }
    }
}

/// Body of the unified option mutation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionMutation {
    pub value: String,
    pub index: Option<usize>,
    pub category: Option<String>,
    pub action: OptionAction,
}

impl OptionMutation {
    pub fn new(list: &OptionList, action: OptionAction, value: &str, index: Option<usize>) -> Self {
        let value = match action {
            OptionAction::Delete => String::new(),
            OptionAction::Add | OptionAction::Update => value.trim().to_string(),
        };
        Self {
            value,
            index,
            category: list.category().map(str::to_string),
            action,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.action {
            OptionAction::Add if self.value.is_empty() => Err("Value is required".into()),
            OptionAction::Update if self.value.is_empty() => Err("Value is required".into()),
            OptionAction::Update | OptionAction::Delete if self.index.is_none() => {
                Err("No entry selected".into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_parsing() {
        let config = AppConfig {
            subscription_expiry: Some("2025-06-30".into()),
            ..Default::default()
        };
        let before = Utc.with_ymd_and_hms(2025, 6, 29, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 1).unwrap();
        assert!(!config.is_expired_at(before));
        assert!(config.is_expired_at(after));

        let config = AppConfig {
            subscription_expiry: Some("2025-06-30T18:00:00+05:00".into()),
            ..Default::default()
        };
        assert_eq!(config.expiry(), Some(Utc.with_ymd_and_hms(2025, 6, 30, 13, 0, 0).unwrap()));
    }

    #[test]
    fn test_garbage_expiry_never_expires() {
        let config = AppConfig {
            subscription_expiry: Some("soon".into()),
            ..Default::default()
        };
        assert!(!config.is_expired_at(Utc::now()));
        assert!(!AppConfig::default().is_expired_at(Utc::now()));
    }

    #[test]
    fn test_rate_categories_keep_server_order() {
        let catalog: OptionsCatalog = serde_json::from_str(
            r#"{
                "seasons": ["Summer", "Winter"],
                "rateCategories": {"work": ["Embroidery"], "fabric": ["Lawn", "Cotton"], "labor": []}
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.rate_categories.names(), vec!["work", "fabric", "labor"]);
        assert_eq!(catalog.values(&OptionList::Rate("fabric".into())).len(), 2);
        assert!(catalog.values(&OptionList::Rate("dyeing".into())).is_empty());
        assert_eq!(catalog.lists().len(), 6);
        assert!(catalog.sizes.is_empty());
    }

    #[test]
    fn test_mutation_payload() {
        let list = OptionList::Rate("fabric".into());
        let add = OptionMutation::new(&list, OptionAction::Add, "  Chiffon ", None);
        assert_eq!(add.value, "Chiffon");
        assert_eq!(add.category.as_deref(), Some("fabric"));
        assert!(add.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&add).unwrap(),
            serde_json::json!({"value": "Chiffon", "index": null, "category": "fabric", "action": "add"})
        );

        let delete = OptionMutation::new(&OptionList::Sizes, OptionAction::Delete, "M", Some(2));
        assert_eq!(delete.value, "");
        assert!(delete.category.is_none());
        assert!(delete.validate().is_ok());
    }

    #[test]
    fn test_mutation_validation() {
        let blank = OptionMutation::new(&OptionList::Seasons, OptionAction::Add, "   ", None);
        assert!(blank.validate().is_err());
        let no_index = OptionMutation::new(&OptionList::Seasons, OptionAction::Update, "Fall", None);
        assert!(no_index.validate().is_err());
        let delete = OptionMutation::new(&OptionList::Seasons, OptionAction::Delete, "", None);
        assert!(delete.validate().is_err());
    }

    #[test]
    fn test_labels_and_distinct() {
        assert_eq!(OptionList::Rate("accessory".into()).label(), "Accessory");
        assert_eq!(OptionList::Sizes.type_key(), "sizes");
        assert_eq!(OptionList::Rate("x".into()).type_key(), "rateCategories");
        let values = vec!["S".to_string(), "M".to_string(), "S".to_string()];
        assert_eq!(distinct(&values), vec!["S", "M"]);
    }
}
