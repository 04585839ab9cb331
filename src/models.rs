//! Frontend Models
//!
//! Data structures matching the catalog REST payloads.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = u32;

/// Group shown for items without a group tag
pub const DEFAULT_GROUP: &str = "General";

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
}

impl Item {
    /// Group label used for filtering and the sidebar.
    ///
    /// Missing, empty and whitespace-only groups all collapse into `"General"`.
    pub fn effective_group(&self) -> &str {
        match self.group.as_deref().map(str::trim) {
            Some(group) if !group.is_empty() => group,
            _ => DEFAULT_GROUP,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Image read from the file input, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub filename: String,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
}

/// POST /api/items body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
}

/// Raw add-item form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub group: String,
    /// Name of the chosen image file, for the file input label
    pub image_name: Option<String>,
}

/// Editable text field of the add-item form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Description,
    Group,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    EmptyName,
    InvalidPrice(String),
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::EmptyName => write!(f, "Name is required"),
            DraftError::InvalidPrice(raw) => write!(f, "Invalid price: {:?}", raw),
        }
    }
}

impl std::error::Error for DraftError {}

impl ItemDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Description => self.description = value,
            DraftField::Group => self.group = value,
        }
    }

    /// Validate the form and build the request body.
    pub fn to_request(&self, image: Option<ImageUpload>) -> Result<CreateItemRequest, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice(self.price.clone()));
        }

        let group = Some(self.group.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        let (image, image_filename) = match image {
            Some(upload) => (Some(upload.data_uri), Some(upload.filename)),
            None => (None, None),
        };

        Ok(CreateItemRequest {
            name: name.to_string(),
            price,
            description: self.description.trim().to_string(),
            group,
            image,
            image_filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price: price.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_group_defaults() {
        let mut item = Item {
            id: 1,
            name: "Card".to_string(),
            price: 1.0,
            description: None,
            group: None,
            image_filename: None,
        };
        assert_eq!(item.effective_group(), "General");
        item.group = Some("  ".to_string());
        assert_eq!(item.effective_group(), "General");
        item.group = Some("Sports".to_string());
        assert_eq!(item.effective_group(), "Sports");
    }

    #[test]
    fn test_item_deserializes_without_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"id":3,"name":"Card C","price":1.5}"#).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.price, 1.5);
        assert!(item.group.is_none());
        assert!(item.image_filename.is_none());

        let item: Item = serde_json::from_str(
            r#"{"id":4,"name":"Stamp","price":2,"description":null,"image_filename":"1_a.png"}"#,
        )
        .unwrap();
        assert_eq!(item.image_filename.as_deref(), Some("1_a.png"));
        assert_eq!(item.description(), None);
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(draft("  ", "1").to_request(None), Err(DraftError::EmptyName));
        assert!(matches!(draft("A", "abc").to_request(None), Err(DraftError::InvalidPrice(_))));
        assert!(matches!(draft("A", "-1").to_request(None), Err(DraftError::InvalidPrice(_))));
        assert!(matches!(draft("A", "inf").to_request(None), Err(DraftError::InvalidPrice(_))));

        let req = draft(" Card A ", "5").to_request(None).unwrap();
        assert_eq!(req.name, "Card A");
        assert_eq!(req.price, 5.0);
        assert_eq!(req.group, None);
    }

    #[test]
    fn test_request_omits_absent_fields() {
        let req = draft("Card B", "10").to_request(None).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Card B", "price": 10.0, "description": ""}));
    }

    #[test]
    fn test_request_carries_image_and_group() {
        let mut d = draft("Card A", "5");
        d.group = "Sports".to_string();
        let upload = ImageUpload {
            filename: "a.png".to_string(),
            data_uri: "data:image/png;base64,AAAA".to_string(),
        };
        let json = serde_json::to_value(d.to_request(Some(upload)).unwrap()).unwrap();
        assert_eq!(json["group"], "Sports");
        assert_eq!(json["image"], "data:image/png;base64,AAAA");
        assert_eq!(json["image_filename"], "a.png");
    }
}
