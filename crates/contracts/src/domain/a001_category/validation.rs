//! Declarative validation of the category form
//!
//! Every field has an ordered list of rules; evaluation stops at the first
//! rule that fails for that field, so each field carries at most one message.

use std::collections::BTreeMap;

use url::Url;

use super::aggregate::{CategoryDto, CategoryField};

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Characters that never appear in an image path accepted by the form
const FORBIDDEN_PATH_CHARS: [char; 7] = [':', '?', '#', '\\', '<', '>', '"'];

/// Single validation rule
#[derive(Clone, Copy)]
pub enum Rule {
    /// Value must be non-empty
    Required,
    /// Value must satisfy `test`, otherwise `message` is reported
    Pattern {
        test: fn(&str) -> bool,
        message: &'static str,
    },
}

impl Rule {
    /// Returns the error message when `value` violates the rule
    pub fn check(&self, field: CategoryField, value: &str) -> Option<String> {
        match self {
            Rule::Required => value
                .is_empty()
                .then(|| format!("{} is required", field.label())),
            Rule::Pattern { test, message } => (!test(value)).then(|| (*message).to_string()),
        }
    }
}

/// Rules of one field, evaluated in order
#[derive(Clone, Copy)]
pub struct FieldSchema {
    pub field: CategoryField,
    pub rules: &'static [Rule],
}

pub const CATEGORY_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: CategoryField::Type,
        rules: &[
            Rule::Required,
            Rule::Pattern {
                test: starts_with_letter,
                message: "Category must start with a letter",
            },
        ],
    },
    FieldSchema {
        field: CategoryField::Image,
        rules: &[
            Rule::Required,
            Rule::Pattern {
                test: is_image_reference,
                message: "Image must be an http(s) URL or a path to a .jpg, .jpeg or .png file",
            },
        ],
    },
];

/// Ошибки формы: по одному сообщению на поле плюс общее сообщение
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<CategoryField, String>,
    global: Option<String>,
}

impl FormErrors {
    /// Errors holding only a form-wide message
    pub fn global_only(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            global: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.global.is_none()
    }

    pub fn field(&self, field: CategoryField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    pub fn set_field(&mut self, field: CategoryField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.global = None;
    }

    /// Field errors in field order
    pub fn iter_fields(&self) -> impl Iterator<Item = (CategoryField, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Evaluate `schema` against `dto`
pub fn validate_with(schema: &[FieldSchema], dto: &CategoryDto) -> FormErrors {
    let mut errors = FormErrors::default();
    for entry in schema {
        let value = dto.field(entry.field);
        if let Some(message) = entry
            .rules
            .iter()
            .find_map(|rule| rule.check(entry.field, value))
        {
            errors.set_field(entry.field, message);
        }
    }
    errors
}

/// Validate the category form with the standard schema
pub fn validate(dto: &CategoryDto) -> FormErrors {
    validate_with(CATEGORY_SCHEMA, dto)
}

pub fn starts_with_letter(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// `http`/`https` URL with a host, or a path to a `.jpg`/`.jpeg`/`.png` file
pub fn is_image_reference(value: &str) -> bool {
    is_web_url(value) || is_image_path(value)
}

fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

fn is_image_path(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_control() || FORBIDDEN_PATH_CHARS.contains(&c))
    {
        return false;
    }

    let file_name = value.rsplit('/').next().unwrap_or(value);
    match file_name.rsplit_once('.') {
        Some((stem, extension)) => {
            !stem.is_empty()
                && IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| extension.eq_ignore_ascii_case(known))
        }
        None => false,
    }
}
