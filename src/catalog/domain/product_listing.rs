use super::component::is_zero;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The top-level catalog entry representing a partner's product.
///
/// An empty `id` means the listing has not been created remotely yet, and
/// `cert_projects` holds the component IDs last reported as attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub org_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<DateTime<Utc>>,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub listing_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Descriptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ListingContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cert_projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<Legal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_resources: Vec<LinkedResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_aliases: Vec<SearchAlias>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functional_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_start_configuration: Option<QuickStartConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl ProductListing {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Strips every field that ties this listing to a backend entity.
    pub fn sanitize(&mut self) {
        self.cert_projects.clear();
        self.creation_date = None;
        self.last_update_date = None;
        self.id.clear();
        self.org_id = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub long: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingContact {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub contact_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legal {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub license_agreement_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub privacy_policy_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedResource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub question: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAlias {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStartConfiguration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}
