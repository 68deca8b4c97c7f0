//! Admin dashboard analytics.
//!
//! The mock dashboard is randomized, so two calls may differ.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ServiceContext, fixtures};
use crate::error::ServiceError;
use crate::executor::RequestDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue_cents: u64,
    pub tickets_sold: u64,
    pub active_events: u32,
    pub new_users: u32,
    /// Share of visits that ended in a booking, 0.0-1.0.
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSales {
    pub event_id: String,
    pub title: String,
    pub tickets_sold: u64,
    pub revenue_cents: u64,
}

pub(crate) fn mock_sales() -> Vec<EventSales> {
    let mut rng = rand::thread_rng();
    let mut sales: Vec<EventSales> = fixtures::catalogue()
        .into_iter()
        .map(|e| {
            let sold = rng.gen_range(0..=500u64);
            EventSales {
                revenue_cents: sold * e.price_cents,
                event_id: e.id,
                title: e.title,
                tickets_sold: sold,
            }
        })
        .collect();
    sales.sort_by(|a, b| b.revenue_cents.cmp(&a.revenue_cents));
    sales
}

/// Dashboard totals summed from `sales`, so both always agree.
pub(crate) fn dashboard_from(sales: &[EventSales]) -> DashboardStats {
    let mut rng = rand::thread_rng();
    let active = fixtures::catalogue()
        .iter()
        .filter(|e| !e.is_sold_out())
        .count();
    DashboardStats {
        total_revenue_cents: sales.iter().map(|s| s.revenue_cents).sum(),
        tickets_sold: sales.iter().map(|s| s.tickets_sold).sum(),
        active_events: u32::try_from(active).unwrap_or(u32::MAX),
        new_users: rng.gen_range(20..=400),
        conversion_rate: rng.gen_range(0.01..0.12),
    }
}

pub(crate) fn mock_dashboard() -> DashboardStats {
    dashboard_from(&mock_sales())
}

#[derive(Debug, Clone)]
pub struct AnalyticsService {
    ctx: ServiceContext,
}

impl AnalyticsService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor =
            RequestDescriptor::get("/admin/analytics/dashboard").mock(move || async move {
                latency.wait().await;
                Ok(mock_dashboard())
            });
        self.ctx.executor.execute(descriptor).await
    }

    /// Per-event sales, highest revenue first.
    pub async fn sales_by_event(&self) -> Result<Vec<EventSales>, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/admin/analytics/sales").mock(move || async move {
            latency.wait().await;
            Ok(mock_sales())
        });
        self.ctx.executor.execute(descriptor).await
    }
}
