//! Deterministic mock data backing the mock producers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::{Category, Event};
use super::users::{NotificationSettings, Role, UserProfile};

const CURRENCY: &str = "USD";

fn at(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    category: &str,
    venue: &str,
    city: &str,
    starts_at: i64,
    price_cents: u64,
    tickets_available: u32,
    featured: bool,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} live at {venue}, {city}."),
        category: category.to_string(),
        venue: venue.to_string(),
        city: city.to_string(),
        starts_at: at(starts_at),
        price_cents,
        currency: CURRENCY.to_string(),
        image_url: Some(format!("https://images.example.com/events/{id}.jpg")),
        tickets_available,
        featured,
    }
}

/// The full mock event catalogue, ordered by start time.
pub(crate) fn catalogue() -> Vec<Event> {
    vec![
        event("evt-1001", "Neon Nights Festival", "music", "Harbor Arena", "Lisbon", 1_793_800_800, 8_900, 1_200, true),
        event("evt-1002", "Symphony Under the Stars", "music", "Parkside Amphitheatre", "Vienna", 1_794_405_600, 6_500, 450, true),
        event("evt-1003", "Tech Frontiers Summit", "conference", "Expo Hall B", "Berlin", 1_795_010_400, 24_900, 300, false),
        event("evt-1004", "Stand-up Saturday", "comedy", "The Laugh Cellar", "Dublin", 1_795_615_200, 2_500, 80, false),
        event("evt-1005", "City Derby Final", "sports", "Riverside Stadium", "Lisbon", 1_796_220_000, 12_000, 0, true),
        event("evt-1006", "Modern Dance Showcase", "theatre", "Royal Playhouse", "Vienna", 1_796_824_800, 4_800, 150, false),
        event("evt-1007", "Street Food Carnival", "food", "Old Town Square", "Prague", 1_797_429_600, 1_500, 2_000, false),
    ]
}

pub(crate) fn find_event(id: &str) -> Option<Event> {
    catalogue().into_iter().find(|e| e.id == id)
}

pub(crate) fn categories() -> Vec<Category> {
    [
        ("music", "Music"),
        ("conference", "Conferences"),
        ("comedy", "Comedy"),
        ("sports", "Sports"),
        ("theatre", "Theatre"),
        ("food", "Food & Drink"),
    ]
    .into_iter()
    .map(|(slug, name)| Category {
        slug: slug.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Mock account for `email`; addresses starting with `admin` get the admin role.
pub(crate) fn user_for(email: &str) -> UserProfile {
    let local = email.split('@').next().unwrap_or(email);
    let role = if local.starts_with("admin") {
        Role::Admin
    } else {
        Role::Customer
    };
    let mut name: String = local.replace(['.', '_', '-'], " ");
    if let Some(first) = name.get(0..1) {
        name = first.to_uppercase() + &name[1..];
    }
    UserProfile {
        id: Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes()),
        name,
        email: email.to_string(),
        phone: None,
        role,
        avatar_url: None,
        created_at: at(1_767_225_600),
    }
}

pub(crate) fn demo_user() -> UserProfile {
    let mut user = user_for("alex.morgan@example.com");
    user.phone = Some("+15550100".to_string());
    user
}

pub(crate) fn notification_settings() -> NotificationSettings {
    NotificationSettings {
        email_notifications: true,
        sms_notifications: false,
        marketing_emails: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique_and_categories_known() {
        let events = catalogue();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
        let slugs: Vec<String> = categories().into_iter().map(|c| c.slug).collect();
        assert!(events.iter().all(|e| slugs.contains(&e.category)));
    }

    #[test]
    fn user_for_is_stable_and_assigns_roles() {
        let a = user_for("admin@example.com");
        assert_eq!(a.role, Role::Admin);
        assert_eq!(a.id, user_for("admin@example.com").id);
        let c = user_for("jamie_lee@example.com");
        assert_eq!(c.role, Role::Customer);
        assert_eq!(c.name, "Jamie lee");
    }
}
