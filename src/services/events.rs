//! Event listings: home page rails, browsing, search and detail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::{segment, with_query};
use super::{Page, ServiceContext, fixtures};
use crate::error::ServiceError;
use crate::executor::RequestDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    /// Lowest ticket price, in minor units.
    pub price_cents: u64,
    pub currency: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub tickets_available: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    pub fn is_sold_out(&self) -> bool {
        self.tickets_available == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

/// Browse filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub category: Option<String>,
    pub city: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            category: None,
            city: None,
            page: 1,
            page_size: 12,
        }
    }
}

/// Free-text search with optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub category: Option<String>,
    pub city: Option<String>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    fn matches(&self, event: &Event) -> bool {
        let needle = self.q.trim().to_lowercase();
        let text_hit = needle.is_empty()
            || [&event.title, &event.venue, &event.city, &event.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        text_hit && filter_hit(event, self.category.as_deref(), self.city.as_deref())
    }
}

fn filter_hit(event: &Event, category: Option<&str>, city: Option<&str>) -> bool {
    category.is_none_or(|c| event.category.eq_ignore_ascii_case(c))
        && city.is_none_or(|c| event.city.eq_ignore_ascii_case(c))
}

#[derive(Debug, Clone)]
pub struct EventService {
    ctx: ServiceContext,
}

impl EventService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Events promoted on the home page.
    pub async fn featured(&self) -> Result<Vec<Event>, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/events/featured").mock(move || async move {
            latency.wait().await;
            Ok(fixtures::catalogue()
                .into_iter()
                .filter(|e| e.featured)
                .collect())
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn list(&self, query: EventQuery) -> Result<Page<Event>, ServiceError> {
        let path = with_query(
            "/events",
            &[
                ("category", query.category.clone()),
                ("city", query.city.clone()),
                ("page", Some(query.page.to_string())),
                ("pageSize", Some(query.page_size.to_string())),
            ],
        );
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get(path).mock(move || async move {
            latency.wait().await;
            let matching: Vec<Event> = fixtures::catalogue()
                .into_iter()
                .filter(|e| filter_hit(e, query.category.as_deref(), query.city.as_deref()))
                .collect();
            Ok(Page::paginate(&matching, query.page, query.page_size))
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn search(&self, query: SearchQuery) -> Result<Vec<Event>, ServiceError> {
        let path = with_query(
            "/events/search",
            &[
                ("q", Some(query.q.trim().to_string())),
                ("category", query.category.clone()),
                ("city", query.city.clone()),
            ],
        );
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get(path).mock(move || async move {
            latency.wait().await;
            Ok(fixtures::catalogue()
                .into_iter()
                .filter(|e| query.matches(e))
                .collect())
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn detail(&self, id: &str) -> Result<Event, ServiceError> {
        let latency = self.ctx.latency;
        let owned = id.to_string();
        let descriptor =
            RequestDescriptor::get(format!("/events/{}", segment(id))).mock(move || async move {
                latency.wait().await;
                fixtures::find_event(&owned).ok_or_else(|| ServiceError::mock(404, "Event not found"))
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/events/categories").mock(move || async move {
            latency.wait().await;
            Ok(fixtures::categories())
        });
        self.ctx.executor.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::mock_context;

    fn service() -> EventService {
        EventService::new(mock_context())
    }

    #[tokio::test]
    async fn featured_only_returns_promoted_events() {
        let events = service().featured().await.unwrap();
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| e.featured));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let svc = service();
        let by_city = svc.search(SearchQuery::new("LISBON")).await.unwrap();
        assert_eq!(by_city.len(), 2);

        let mut filtered = SearchQuery::new("lisbon");
        filtered.category = Some("sports".into());
        let hits = svc.search(filtered).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "evt-1005");
        assert!(hits[0].is_sold_out());

        assert!(svc.search(SearchQuery::new("opera")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_filters_and_paginates() {
        let page = service()
            .list(EventQuery {
                city: Some("vienna".into()),
                page_size: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].city, "Vienna");
    }

    #[tokio::test]
    async fn unknown_event_is_404() {
        let err = service().detail("evt-404").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Event not found");
        assert_eq!(service().detail("evt-1003").await.unwrap().category, "conference");
    }

    #[tokio::test]
    async fn categories_are_listed() {
        assert_eq!(service().categories().await.unwrap().len(), 6);
    }
}
