//! Catalog pages: home highlights, treatments with category filter, pricing.
//!
//! Every read degrades to an empty list on failure; the page simply shows nothing.

use crate::domain::{Testimonial, Treatment, TreatmentWithPricing};
use crate::ports::ClinicStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Featured treatments shown on the home page.
pub const HOME_FEATURED_TREATMENTS: usize = 6;
/// Featured testimonials shown on the home page.
pub const HOME_FEATURED_TESTIMONIALS: usize = 3;

/// Category selection on the treatments page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "all";

    /// Maps a category option (as produced by [`categories`]) back to a filter.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Category(c) => c,
        }
    }

    pub fn matches(&self, treatment: &Treatment) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => treatment.category == *c,
        }
    }
}

/// Category options: `"all"` then each distinct category in first-appearance order.
pub fn categories(treatments: &[Treatment]) -> Vec<String> {
    let mut out = vec![CategoryFilter::ALL_LABEL.to_string()];
    for t in treatments {
        if !out[1..].contains(&t.category) {
            out.push(t.category.clone());
        }
    }
    out
}

pub fn filter_treatments<'a>(
    treatments: &'a [Treatment],
    filter: &CategoryFilter,
) -> Vec<&'a Treatment> {
    treatments.iter().filter(|t| filter.matches(t)).collect()
}

/// Data behind the home page.
#[derive(Debug, Default)]
pub struct HomeContent {
    pub featured_treatments: Vec<Treatment>,
    pub testimonials: Vec<Testimonial>,
}

/// Catalog service. Read-only views over the store.
pub struct CatalogService {
    store: Arc<dyn ClinicStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Featured treatments and testimonials. Each query fails independently.
    pub async fn home(&self) -> HomeContent {
        let featured_treatments = self
            .store
            .featured_treatments(HOME_FEATURED_TREATMENTS)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "featured treatments unavailable");
                Vec::new()
            });
        let testimonials = self
            .store
            .featured_testimonials(HOME_FEATURED_TESTIMONIALS)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "testimonials unavailable");
                Vec::new()
            });
        HomeContent {
            featured_treatments,
            testimonials,
        }
    }

    /// All treatments, featured first.
    pub async fn treatments(&self) -> Vec<Treatment> {
        match self.store.treatments().await {
            Ok(rows) => {
                info!(count = rows.len(), "loaded treatments");
                rows
            }
            Err(e) => {
                warn!(error = %e, "treatments unavailable");
                Vec::new()
            }
        }
    }

    /// Treatments with embedded pricing rows, featured first.
    pub async fn pricing(&self) -> Vec<TreatmentWithPricing> {
        match self.store.treatments_with_pricing().await {
            Ok(rows) => {
                info!(count = rows.len(), "loaded pricing");
                rows
            }
            Err(e) => {
                warn!(error = %e, "pricing unavailable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::domain::Pricing;

    fn treatment(id: &str, category: &str, featured: bool) -> Treatment {
        Treatment {
            id: id.into(),
            name: format!("Treatment {id}"),
            description: String::new(),
            category: category.into(),
            featured,
            icon: "Activity".into(),
            created_at: None,
        }
    }

    fn price(id: &str, treatment_id: &str, from: f64) -> Pricing {
        Pricing {
            id: id.into(),
            treatment_id: treatment_id.into(),
            price_from: from,
            price_to: None,
            currency: "INR".into(),
            created_at: None,
        }
    }

    fn sample() -> Vec<Treatment> {
        vec![
            treatment("1", "orthodontics", true),
            treatment("2", "cosmetic", false),
            treatment("3", "orthodontics", false),
            treatment("4", "surgery", true),
        ]
    }

    #[test]
    fn test_categories_all_first_then_first_appearance() {
        assert_eq!(
            categories(&sample()),
            vec!["all", "orthodontics", "cosmetic", "surgery"]
        );
        assert_eq!(categories(&[]), vec!["all"]);
    }

    #[test]
    fn test_filter_by_category_shows_only_matches() {
        let rows = sample();
        let filtered = filter_treatments(&rows, &CategoryFilter::from_label("orthodontics"));
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(filtered.iter().all(|t| t.category == "orthodontics"));
    }

    #[test]
    fn test_filter_all_shows_everything() {
        let rows = sample();
        assert_eq!(filter_treatments(&rows, &CategoryFilter::All).len(), 4);
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let rows = sample();
        assert!(filter_treatments(&rows, &CategoryFilter::from_label("pediatric")).is_empty());
    }

    #[tokio::test]
    async fn test_treatments_featured_first() {
        let store = Arc::new(InMemoryStore::new().with_treatments(sample()));
        let service = CatalogService::new(store);
        let ids: Vec<String> = service
            .treatments()
            .await
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["1", "4", "2", "3"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_lists_empty() {
        let store = Arc::new(InMemoryStore::new().with_treatments(sample()));
        store.set_failing(true);
        let service = CatalogService::new(store);

        assert!(service.treatments().await.is_empty());
        assert!(service.pricing().await.is_empty());
        let home = service.home().await;
        assert!(home.featured_treatments.is_empty());
        assert!(home.testimonials.is_empty());
    }

    #[tokio::test]
    async fn test_pricing_uses_first_row_per_treatment() {
        let store = Arc::new(
            InMemoryStore::new()
                .with_treatments(sample())
                .with_pricing(vec![price("a", "2", 10000.0), price("b", "2", 12000.0)]),
        );
        let service = CatalogService::new(store);
        let rows = service.pricing().await;

        let cosmetic = rows.iter().find(|r| r.treatment.id == "2").unwrap();
        assert_eq!(cosmetic.primary_pricing().unwrap().id, "a");
        let surgery = rows.iter().find(|r| r.treatment.id == "4").unwrap();
        assert!(surgery.primary_pricing().is_none());
    }

    #[tokio::test]
    async fn test_home_limits_featured() {
        let many: Vec<Treatment> = (0..10)
            .map(|i| treatment(&i.to_string(), "general", true))
            .collect();
        let store = Arc::new(InMemoryStore::new().with_treatments(many));
        let service = CatalogService::new(store);
        let home = service.home().await;
        assert_eq!(home.featured_treatments.len(), HOME_FEATURED_TREATMENTS);
    }

    fn testimonial(id: &str, featured: bool) -> Testimonial {
        Testimonial {
            id: id.into(),
            patient_name: format!("Patient {id}"),
            treatment: "Implants".into(),
            rating: 5,
            review: "Painless and quick.".into(),
            featured,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_home_testimonials_featured_only_and_limited() {
        let testimonials = vec![
            testimonial("a", false),
            testimonial("b", true),
            testimonial("c", true),
            testimonial("d", false),
            testimonial("e", true),
            testimonial("f", true),
        ];
        let store = Arc::new(InMemoryStore::new().with_testimonials(testimonials));
        let service = CatalogService::new(store);

        let home = service.home().await;

        assert_eq!(home.testimonials.len(), HOME_FEATURED_TESTIMONIALS);
        let ids: Vec<&str> = home.testimonials.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "e"]);
        assert!(home.testimonials.iter().all(|t| t.featured));
    }
}
