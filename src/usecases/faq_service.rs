//! FAQ page: ordered listing, grouping by category and the single-open accordion.

use crate::domain::Faq;
use crate::ports::ClinicStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Accordion state. At most one entry is open at a time.
///
/// Opening an entry closes whichever was open; toggling the open entry closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

/// One FAQ row with its position in the page-wide list.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry<'a> {
    pub index: usize,
    pub faq: &'a Faq,
    pub open: bool,
}

/// FAQs sharing a category, ascending display order.
#[derive(Debug, Clone)]
pub struct FaqGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<FaqEntry<'a>>,
}

/// The FAQ page: the fetched list plus accordion state.
#[derive(Debug, Default)]
pub struct FaqBoard {
    faqs: Vec<Faq>,
    accordion: Accordion,
}

impl FaqBoard {
    /// Entries are ordered by `order_index`; ties keep their fetched order.
    pub fn new(mut faqs: Vec<Faq>) -> Self {
        faqs.sort_by_key(|f| f.order_index);
        Self {
            faqs,
            accordion: Accordion::default(),
        }
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    pub fn accordion(&self) -> Accordion {
        self.accordion
    }

    /// Toggle the entry at `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index < self.faqs.len() {
            self.accordion.toggle(index);
        }
    }

    /// Groups in order of first appearance.
    pub fn groups(&self) -> Vec<FaqGroup<'_>> {
        let mut groups: Vec<FaqGroup<'_>> = Vec::new();
        for (index, faq) in self.faqs.iter().enumerate() {
            let entry = FaqEntry {
                index,
                faq,
                open: self.accordion.is_open(index),
            };
            match groups.iter_mut().find(|g| g.category == faq.category) {
                Some(group) => group.entries.push(entry),
                None => groups.push(FaqGroup {
                    category: &faq.category,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}

/// FAQ service. Loads the list for the page.
pub struct FaqService {
    store: Arc<dyn ClinicStore>,
}

impl FaqService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Fresh board with every entry closed. Empty when the store is unavailable.
    pub async fn board(&self) -> FaqBoard {
        match self.store.faqs().await {
            Ok(rows) => {
                info!(count = rows.len(), "loaded faqs");
                FaqBoard::new(rows)
            }
            Err(e) => {
                warn!(error = %e, "faqs unavailable");
                FaqBoard::default()
            }
        }
    }
}
