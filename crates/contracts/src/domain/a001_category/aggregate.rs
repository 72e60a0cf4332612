use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории, выданный удалённым API
///
/// The API is free to send either a JSON string or a JSON number; both are
/// kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Category id must not be empty".into());
        }
        Ok(CategoryId::new(trimmed))
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => CategoryId(s),
            RawId::Signed(n) => CategoryId(n.to_string()),
            RawId::Unsigned(n) => CategoryId(n.to_string()),
        })
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Категория (подкатегория туров) в том виде, в каком её хранит API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCategory")]
pub struct Category {
    pub id: CategoryId,

    /// Listed by the API as `type` on write and `name` on read
    pub name: String,

    pub image: String,
}

/// Wire shape of a record: either key of each pair may be present, or both
#[derive(Deserialize)]
struct RawCategory {
    id: Option<CategoryId>,
    #[serde(rename = "_id")]
    mongo_id: Option<CategoryId>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    image: String,
}

impl TryFrom<RawCategory> for Category {
    type Error = String;

    fn try_from(raw: RawCategory) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.mongo_id)
            .ok_or_else(|| "Category record has neither `id` nor `_id`".to_string())?;

        Ok(Self {
            id: CategoryId::from_string(id.value())?,
            name: raw.name.or(raw.kind).unwrap_or_default(),
            image: raw.image,
        })
    }
}

/// Envelope returned by `POST /subcat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryResponse {
    pub subcategory: Category,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Editable fields of the category form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryField {
    Type,
    Image,
}

impl CategoryField {
    /// Wire and input name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryField::Type => "type",
            CategoryField::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryField::Type => "Category",
            CategoryField::Image => "Image",
        }
    }
}

/// DTO для создания/обновления категории: тело `POST /subcat` и `PUT /subcat/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "type")]
    pub name: String,
    pub image: String,
}

impl CategoryDto {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Pre-fill the form from a record that is being edited
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            image: category.image.clone(),
        }
    }

    pub fn field(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Type => &self.name,
            CategoryField::Image => &self.image,
        }
    }

    pub fn set_field(&mut self, field: CategoryField, value: String) {
        match field {
            CategoryField::Type => self.name = value,
            CategoryField::Image => self.image = value,
        }
    }
}
