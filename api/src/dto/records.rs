use chrono::{DateTime, Utc};
use cmei_core::{NewAviso, NewCalendarioEvento, NewChild};
use cmei_shared::Pagination;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAvisoRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub target_classroom: Option<String>,
}

impl From<CreateAvisoRequest> for NewAviso {
    fn from(request: CreateAvisoRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            target_classroom: request.target_classroom,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChildRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub birth_date: DateTime<Utc>,
    #[validate(length(min = 1, max = 50))]
    pub classroom: String,
}

impl From<CreateChildRequest> for NewChild {
    fn from(request: CreateChildRequest) -> Self {
        Self {
            name: request.name,
            birth_date: request.birth_date,
            classroom: request.classroom,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LinkParentRequest {
    pub parent_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventoRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub recurrence: Option<String>,
}

impl From<CreateEventoRequest> for NewCalendarioEvento {
    fn from(request: CreateEventoRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            all_day: request.all_day,
            recurrence: request.recurrence,
        }
    }
}

/// Query string of the routine and health listings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecordListQuery {
    #[serde(default)]
    pub child_id: Option<i64>,
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl RecordListQuery {
    pub fn pagination(&self) -> Pagination {
        let defaults = Pagination::default();
        Pagination::new(
            self.skip.unwrap_or(defaults.skip),
            self.limit.unwrap_or(defaults.limit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_list_query_defaults_and_clamps() {
        let query = RecordListQuery {
            child_id: None,
            skip: None,
            limit: None,
        };
        assert_eq!(query.pagination(), Pagination::default());

        let query = RecordListQuery {
            child_id: Some(3),
            skip: Some(5),
            limit: Some(500),
        };
        assert_eq!(query.pagination(), Pagination::new(5, 100));
    }

    #[test]
    fn test_create_aviso_request_rejects_blank_title() {
        let request = CreateAvisoRequest {
            title: String::new(),
            content: "Reunião de pais".to_string(),
            target_classroom: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
