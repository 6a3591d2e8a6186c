//! Domain entities. Pure data structures for the clinic catalog, forms and chat.
//!
//! Store records are read as-is; nothing here normalizes or validates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A treatment offered by the clinic (`treatments` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    /// Icon name as stored (lucide icon identifier in the hosted data).
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A price range linked to a treatment (`pricing` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub id: String,
    pub treatment_id: String,
    pub price_from: f64,
    pub price_to: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Pricing {
    /// `₹4,000 - ₹8,000`, or a single amount when there is no distinct non-zero upper bound.
    /// Amounts are always shown in rupees.
    pub fn display(&self) -> String {
        match self.price_to {
            Some(to) if to != 0.0 && to != self.price_from => format!(
                "₹{} - ₹{}",
                group_thousands(self.price_from),
                group_thousands(to)
            ),
            _ => format!("₹{}", group_thousands(self.price_from)),
        }
    }
}

/// Formats an amount with comma thousands separators; fractions keep up to two digits.
pub fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac != 0 {
        let digits = format!("{frac:02}");
        grouped.push('.');
        grouped.push_str(digits.trim_end_matches('0'));
    }
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Treatment with its embedded pricing rows, as returned by `select=*,pricing(*)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentWithPricing {
    #[serde(flatten)]
    pub treatment: Treatment,
    #[serde(default)]
    pub pricing: Vec<Pricing>,
}

impl TreatmentWithPricing {
    /// Only the first pricing row is ever shown.
    pub fn primary_pricing(&self) -> Option<&Pricing> {
        self.pricing.first()
    }
}

/// A frequently asked question (`faqs` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A patient review (`testimonials` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub patient_name: String,
    pub treatment: String,
    pub rating: u8,
    pub review: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Row written to `contact_submissions`. Write-once; never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Row written to `appointments`. Write-once; never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRequest {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub treatment_type: String,
    pub message: Option<String>,
}

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        f.write_str(s)
    }
}

/// One turn of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Model parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing(from: f64, to: Option<f64>) -> Pricing {
        Pricing {
            id: "p1".into(),
            treatment_id: "t1".into(),
            price_from: from,
            price_to: to,
            currency: "INR".into(),
            created_at: None,
        }
    }

    #[test]
    fn test_pricing_display_range() {
        assert_eq!(pricing(4000.0, Some(8000.0)).display(), "₹4,000 - ₹8,000");
    }

    #[test]
    fn test_pricing_display_single_when_no_upper_bound() {
        assert_eq!(pricing(95000.0, None).display(), "₹95,000");
    }

    #[test]
    fn test_pricing_display_single_when_bounds_equal() {
        assert_eq!(pricing(25000.0, Some(25000.0)).display(), "₹25,000");
    }

    #[test]
    fn test_pricing_display_single_when_upper_bound_zero() {
        assert_eq!(pricing(4000.0, Some(0.0)).display(), "₹4,000");
    }

    #[test]
    fn test_pricing_display_ignores_currency_code() {
        let mut row = pricing(1500.0, Some(3000.0));
        row.currency = "USD".into();
        assert_eq!(row.display(), "₹1,500 - ₹3,000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(4000.5), "4,000.5");
        assert_eq!(group_thousands(-1500.0), "-1,500");
    }

    #[test]
    fn test_treatment_with_pricing_deserializes_embedded_rows() {
        let json = r#"{
            "id": "t1",
            "name": "Root Canal Treatment",
            "description": "Painless RCT",
            "category": "endodontics",
            "featured": true,
            "icon": "Activity",
            "created_at": "2024-05-01T10:00:00.123456+00:00",
            "pricing": [
                {"id": "p1", "treatment_id": "t1", "price_from": 4000, "price_to": 8000, "currency": "INR", "created_at": null},
                {"id": "p2", "treatment_id": "t1", "price_from": 9000, "price_to": null, "currency": "INR"}
            ]
        }"#;
        let row: TreatmentWithPricing = serde_json::from_str(json).unwrap();
        assert_eq!(row.treatment.name, "Root Canal Treatment");
        assert!(row.treatment.created_at.is_some());
        assert_eq!(row.pricing.len(), 2);
        assert_eq!(row.primary_pricing().unwrap().id, "p1");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::assistant("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(Role::System.to_string(), "system");
    }

    #[test]
    fn test_contact_submission_blank_phone_is_null() {
        let sub = ContactSubmission {
            name: "A".into(),
            email: "a@b.c".into(),
            phone: None,
            subject: "S".into(),
            message: "M".into(),
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert!(json["phone"].is_null());
    }
}
