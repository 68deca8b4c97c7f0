//! Context handed to the admin assistant chatbot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analytics::{DashboardStats, EventSales, dashboard_from, mock_sales};
use super::{ServiceContext, fixtures};
use crate::error::ServiceError;
use crate::executor::RequestDescriptor;

const TOP_EVENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotContext {
    pub generated_at: DateTime<Utc>,
    pub stats: DashboardStats,
    pub top_events: Vec<EventSales>,
    pub upcoming_events: Vec<String>,
}

impl ChatbotContext {
    /// Plain-text summary suitable as a system prompt preamble.
    pub fn summary(&self) -> String {
        let top: Vec<&str> = self.top_events.iter().map(|e| e.title.as_str()).collect();
        format!(
            "{} tickets sold for {:.2} total across {} active events. Top sellers: {}. Upcoming: {}.",
            self.stats.tickets_sold,
            self.stats.total_revenue_cents as f64 / 100.0,
            self.stats.active_events,
            if top.is_empty() { "none".to_string() } else { top.join(", ") },
            if self.upcoming_events.is_empty() {
                "none".to_string()
            } else {
                self.upcoming_events.join(", ")
            },
        )
    }
}

#[derive(Debug, Clone)]
pub struct ChatbotService {
    ctx: ServiceContext,
}

impl ChatbotService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn context(&self) -> Result<ChatbotContext, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/admin/chatbot/context").mock(move || async move {
            latency.wait().await;
            let now = Utc::now();
            let mut top_events = mock_sales();
            let stats = dashboard_from(&top_events);
            top_events.truncate(TOP_EVENTS);
            Ok(ChatbotContext {
                generated_at: now,
                stats,
                top_events,
                upcoming_events: fixtures::catalogue()
                    .into_iter()
                    .filter(|e| e.starts_at > now)
                    .map(|e| e.title)
                    .collect(),
            })
        });
        self.ctx.executor.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::mock_context;

    #[tokio::test]
    async fn context_lists_top_three_sellers() {
        let ctx = ChatbotService::new(mock_context()).context().await.unwrap();
        assert_eq!(ctx.top_events.len(), TOP_EVENTS);
        assert!(ctx.summary().contains("Top sellers:"));
    }

    #[tokio::test]
    async fn top_sellers_never_exceed_reported_totals() {
        let service = ChatbotService::new(mock_context());
        for _ in 0..50 {
            let ctx = service.context().await.unwrap();
            let tickets: u64 = ctx.top_events.iter().map(|e| e.tickets_sold).sum();
            let revenue: u64 = ctx.top_events.iter().map(|e| e.revenue_cents).sum();
            assert!(tickets <= ctx.stats.tickets_sold, "{ctx:?}");
            assert!(revenue <= ctx.stats.total_revenue_cents, "{ctx:?}");
        }
    }
}
