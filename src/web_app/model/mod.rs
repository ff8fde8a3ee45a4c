// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON of the lost-and-found REST service and are
// used unchanged on both sides of the Leptos server-function boundary.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::web_app::error::FinderError;

/// Whether an item was lost or found
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    /// Path segment of the report endpoint (`/items/lost`, `/items/found`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost Item",
            ItemType::Found => "Found Item",
        }
    }

    /// Background/foreground colours of the placeholder image
    fn placeholder_colors(&self) -> (&'static str, &'static str) {
        match self {
            ItemType::Lost => ("FCA5A5", "ffffff"),
            ItemType::Found => ("99F6E4", "333"),
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(ItemType::Lost),
            "found" => Ok(ItemType::Found),
            other => Err(FinderError::InvalidRequest(format!("unknown item type `{}`", other))),
        }
    }
}

/// Item identifier. The service sends either a string or a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Number(n) => ItemId(n.to_string()),
        })
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// The user who posted an item
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedBy {
    #[serde(default)]
    pub name: String,
}

/// A lost or found item as returned by the service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(alias = "_id")]
    pub id: ItemId,
    pub item_type: ItemType,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub posted_by: Option<PostedBy>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Item {
    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.item_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    pub fn poster_name(&self) -> &str {
        self.posted_by
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn posted_on(&self) -> String {
        self.created_at.format("%d %b %Y").to_string()
    }

    /// Rewrite a relative `imageURL` against the service's static-file base
    pub fn resolve_image(mut self, asset_base: &str) -> Self {
        if let Some(path) = self.image_url.take() {
            let resolved = if path.starts_with("http://") || path.starts_with("https://") {
                path
            } else if path.starts_with('/') {
                format!("{}{}", asset_base.trim_end_matches('/'), path)
            } else {
                format!("{}/{}", asset_base.trim_end_matches('/'), path)
            };
            self.image_url = Some(resolved);
        }
        self
    }

    /// Image to render: the item's own picture or a coloured placeholder
    pub fn image_src(&self) -> String {
        match &self.image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => {
                let (bg, fg) = self.item_type.placeholder_colors();
                format!(
                    "https://placehold.co/400x300/{}/{}?text={}",
                    bg,
                    fg,
                    utf8_percent_encode(&self.item_name, NON_ALPHANUMERIC)
                )
            }
        }
    }
}

/// One page of the listing endpoints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total_items_count: u32,
}

impl ItemPage {
    pub fn resolve_images(mut self, asset_base: &str) -> Self {
        self.items = self
            .items
            .into_iter()
            .map(|item| item.resolve_image(asset_base))
            .collect();
        self
    }
}

/// Type filter of the browse view; `All` is the sentinel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl TypeFilter {
    pub fn matches(&self, item_type: ItemType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Lost => item_type == ItemType::Lost,
            TypeFilter::Found => item_type == ItemType::Found,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Lost => "Lost",
            TypeFilter::Found => "Found",
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Lost => write!(f, "lost"),
            TypeFilter::Found => write!(f, "found"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(TypeFilter::All),
            other => other.parse::<ItemType>().map(TypeFilter::from),
        }
    }
}

impl From<ItemType> for TypeFilter {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Lost => TypeFilter::Lost,
            ItemType::Found => TypeFilter::Found,
        }
    }
}

/// Which listing endpoint a list view reads from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListScope {
    /// `GET /items`
    #[default]
    All,
    /// `GET /items/my-items`, needs a session
    Mine,
}

impl ListScope {
    pub fn path(&self) -> &'static str {
        match self {
            ListScope::All => "items",
            ListScope::Mine => "items/my-items",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, ListScope::Mine)
    }

    /// Only the public listing offers search and type filters
    pub fn searchable(&self) -> bool {
        matches!(self, ListScope::All)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListScope::All => "Browse All Items",
            ListScope::Mine => "Your Posted Items",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ListScope::All => "No items match your search or filter criteria.",
            ListScope::Mine => "You have not posted any items yet.",
        }
    }

    pub fn end_message(&self) -> &'static str {
        match self {
            ListScope::All => "You've reached the end of the list!",
            ListScope::Mine => "You've reached the end of your posted items!",
        }
    }
}

/// Profile of the logged-in user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), FinderError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("phone number", &self.phone_number)?;
        require("password", &self.password)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// `{ "message": ... }` reply of the auth and report endpoints
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn text_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Optional picture attached to a report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A lost/found report as submitted by the forms
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    pub item_type: ItemType,
    pub item_name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    #[serde(default)]
    pub image: Option<ImageUpload>,
}

impl ReportItem {
    pub fn new(item_type: ItemType) -> Self {
        ReportItem {
            item_type,
            item_name: String::new(),
            description: String::new(),
            location: String::new(),
            contact: String::new(),
            image: None,
        }
    }

    /// Name, description and location are mandatory; contact is optional
    pub fn validate(&self) -> Result<(), FinderError> {
        require("item name", &self.item_name)?;
        require("description", &self.description)?;
        require("location", &self.location)
    }
}

fn require(field: &str, value: &str) -> Result<(), FinderError> {
    if value.trim().is_empty() {
        Err(FinderError::InvalidRequest(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

pub const OTP_LENGTH: usize = 6;

/// State of the six-cell one-time-passcode input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpEntry {
    cells: [Option<char>; OTP_LENGTH],
}

impl OtpEntry {
    /// Put `value` into cell `index`.
    ///
    /// Returns the cell that should receive focus next, or `None` when the
    /// input was rejected (not a single digit) or focus stays put.
    pub fn input(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= OTP_LENGTH {
            return None;
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.cells[index] = None;
                None
            }
            (Some(c), None) if c.is_ascii_digit() => {
                self.cells[index] = Some(c);
                (index + 1 < OTP_LENGTH).then_some(index + 1)
            }
            _ => None,
        }
    }

    /// Backspace on an empty cell moves focus to the previous one
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if index > 0 && index < OTP_LENGTH && self.cells[index].is_none() {
            Some(index - 1)
        } else {
            None
        }
    }

    pub fn cell(&self, index: usize) -> String {
        self.cells
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    /// The full code once every cell holds a digit
    pub fn code(&self) -> Option<String> {
        self.cells.iter().copied().collect::<Option<String>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item() -> Item {
        Item {
            id: ItemId::from("66a1"),
            item_type: ItemType::Lost,
            item_name: "Car Keys".to_string(),
            description: "Silver keyring with a red tag".to_string(),
            location: "Cafeteria".to_string(),
            posted_by: Some(PostedBy { name: "Asha".to_string() }),
            created_at: Utc.with_ymd_and_hms(2024, 5, 3, 9, 30, 0).unwrap(),
            image_url: None,
            contact: None,
        }
    }

    #[test]
    fn test_item_type_roundtrip_strings() {
        assert_eq!("lost".parse::<ItemType>().unwrap(), ItemType::Lost);
        assert_eq!("Found".parse::<ItemType>().unwrap(), ItemType::Found);
        assert!("stolen".parse::<ItemType>().is_err());
        assert_eq!(ItemType::Found.to_string(), "found");
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(ItemType::Lost.badge_label(), "Lost Item");
        assert_eq!(ItemType::Found.badge_label(), "Found Item");
    }

    #[test]
    fn test_item_deserializes_service_json() {
        let json = r#"{
            "_id": "66a1",
            "itemType": "found",
            "itemName": "Laptop",
            "description": "Grey company laptop",
            "location": "Meeting Room C",
            "postedBy": { "name": "Ravi" },
            "createdAt": "2024-05-03T09:30:00.000Z",
            "imageURL": "/uploads/laptop.jpg"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from("66a1"));
        assert_eq!(item.item_type, ItemType::Found);
        assert_eq!(item.poster_name(), "Ravi");
        assert_eq!(item.image_url.as_deref(), Some("/uploads/laptop.jpg"));
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let json = r#"{"id": 42, "itemType": "lost", "itemName": "Watch",
                       "createdAt": "2024-01-01T00:00:00Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from("42"));
        assert_eq!(item.poster_name(), "Unknown");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let item = sample_item();
        assert!(item.matches_search("keys"));
        assert!(item.matches_search("red tag"));
        assert!(item.matches_search(""));
        assert!(!item.matches_search("laptop"));
    }

    #[test]
    fn test_resolve_image_against_asset_base() {
        let mut item = sample_item();
        item.image_url = Some("/uploads/keys.png".to_string());
        let item = item.resolve_image("http://localhost:5000/");
        assert_eq!(item.image_src(), "http://localhost:5000/uploads/keys.png");

        let mut item = sample_item();
        item.image_url = Some("https://cdn.example.com/a.png".to_string());
        let item = item.resolve_image("http://localhost:5000");
        assert_eq!(item.image_src(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_placeholder_image_uses_type_colors() {
        let item = sample_item();
        assert_eq!(
            item.image_src(),
            "https://placehold.co/400x300/FCA5A5/ffffff?text=Car%20Keys"
        );
    }

    #[test]
    fn test_posted_on_format() {
        assert_eq!(sample_item().posted_on(), "03 May 2024");
    }

    #[test]
    fn test_type_filter_parsing_and_matching() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!("LOST".parse::<TypeFilter>().unwrap(), TypeFilter::Lost);
        assert!("misc".parse::<TypeFilter>().is_err());
        assert!(TypeFilter::All.matches(ItemType::Found));
        assert!(TypeFilter::Lost.matches(ItemType::Lost));
        assert!(!TypeFilter::Lost.matches(ItemType::Found));
        assert_eq!(TypeFilter::default(), TypeFilter::All);
    }

    #[test]
    fn test_list_scope_paths() {
        assert_eq!(ListScope::All.path(), "items");
        assert_eq!(ListScope::Mine.path(), "items/my-items");
        assert!(ListScope::Mine.requires_session());
        assert!(ListScope::All.searchable());
        assert!(!ListScope::Mine.searchable());
    }

    #[test]
    fn test_register_request_uses_camel_case() {
        let req = RegisterRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "9999999999".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["phoneNumber"], "9999999999");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_report_validation() {
        let mut report = ReportItem::new(ItemType::Found);
        assert!(report.validate().is_err());
        report.item_name = "Umbrella".to_string();
        report.description = "Black".to_string();
        report.location = "Lobby".to_string();
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_api_message_fallback() {
        assert_eq!(ApiMessage::default().text_or("done"), "done");
        let msg = ApiMessage { message: Some("OTP sent".to_string()) };
        assert_eq!(msg.text_or("done"), "OTP sent");
    }

    #[test]
    fn test_otp_entry_accepts_digits_and_advances() {
        let mut otp = OtpEntry::default();
        assert_eq!(otp.input(0, "4"), Some(1));
        assert_eq!(otp.input(1, "x"), None);
        assert_eq!(otp.cell(1), "");
        assert_eq!(otp.input(1, "12"), None);
        for (i, d) in ["2", "9", "0", "1"].iter().enumerate() {
            otp.input(i + 1, d);
        }
        assert_eq!(otp.code(), None);
        assert_eq!(otp.input(5, "7"), None);
        assert_eq!(otp.code().as_deref(), Some("429017"));
    }

    #[test]
    fn test_otp_entry_backspace_moves_back_only_from_empty_cell() {
        let mut otp = OtpEntry::default();
        otp.input(0, "1");
        otp.input(1, "2");
        assert_eq!(otp.backspace(1), None);
        otp.input(1, "");
        assert_eq!(otp.backspace(1), Some(0));
        assert_eq!(otp.backspace(0), None);
    }
}
