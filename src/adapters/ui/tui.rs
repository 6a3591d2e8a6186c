//! Implements InputPort. Inquire-based kiosk menu over the clinic use cases.
//!
//! Esc on any prompt goes back one level; Esc or Ctrl-C on the main menu quits.

use crate::adapters::ui::progress::with_spinner;
use crate::adapters::ui::render;
use crate::domain::DomainError;
use crate::domain::clinic::APPOINTMENT_SLOTS;
use crate::ports::InputPort;
use crate::usecases::catalog_service::{categories, filter_treatments};
use crate::usecases::contact_service::looks_like_email;
use crate::usecases::{
    AppointmentForm, CatalogService, CategoryFilter, ChatService, ContactForm, ContactService,
    FaqService, FormOutcome,
};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::error::CustomUserError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::{Validation, ValueRequiredValidator};
use inquire::{Confirm, DateSelect, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Applies the teal prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::DarkCyan));
    inquire::set_global_render_config(config);
}

/// Kiosk pages reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    About,
    Treatments,
    Pricing,
    DentalTourism,
    Faqs,
    Contact,
    Appointment,
    Chat,
    Quit,
}

impl Page {
    const ALL: [Page; 10] = [
        Page::Home,
        Page::About,
        Page::Treatments,
        Page::Pricing,
        Page::DentalTourism,
        Page::Faqs,
        Page::Contact,
        Page::Appointment,
        Page::Chat,
        Page::Quit,
    ];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Treatments => "Treatments",
            Page::Pricing => "Pricing",
            Page::DentalTourism => "Dental Tourism",
            Page::Faqs => "FAQs",
            Page::Contact => "Contact Us",
            Page::Appointment => "Book Appointment",
            Page::Chat => "Chat with our assistant",
            Page::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Option in a list prompt that may carry a position (`None` = back).
struct Choice {
    index: Option<usize>,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

const BACK_LABEL: &str = "← Back";

/// Esc and Ctrl-C both mean "back"; anything else is a UI failure.
fn skippable<T>(result: Result<Option<T>, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn email_validator(input: &str) -> Result<Validation, CustomUserError> {
    if looks_like_email(input) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Please enter a valid email address".into()))
    }
}

fn print_page(body: &str) {
    let mut lines = body.lines();
    if let Some(title) = lines.next() {
        println!("\n{}", title.cyan().bold());
    }
    for line in lines {
        println!("{line}");
    }
}

fn print_notice(outcome: &FormOutcome) {
    match outcome {
        FormOutcome::Submitted(notice) => println!("\n{}\n", notice.green()),
        FormOutcome::Failed(notice) => println!("\n{}\n", notice.red()),
        FormOutcome::Incomplete(fields) => println!(
            "\n{}\n",
            format!("Please fill in: {}", fields.join(", ")).yellow()
        ),
    }
}

/// Asks for one text field, pre-filled with `initial`. `None` when the visitor backs out.
fn ask(
    label: &str,
    initial: &str,
    required: bool,
    email: bool,
) -> Result<Option<String>, DomainError> {
    let mut prompt = Text::new(label).with_initial_value(initial);
    if required {
        prompt = prompt.with_validator(ValueRequiredValidator::new("This field is required"));
    }
    if email {
        prompt = prompt.with_validator(email_validator);
    }
    skippable(prompt.prompt_skippable())
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Arc<CatalogService>,
    faqs: Arc<FaqService>,
    contact: Arc<ContactService>,
    chat: Arc<ChatService>,
}

impl TuiInputPort {
    pub fn new(
        catalog: Arc<CatalogService>,
        faqs: Arc<FaqService>,
        contact: Arc<ContactService>,
        chat: Arc<ChatService>,
    ) -> Self {
        Self {
            catalog,
            faqs,
            contact,
            chat,
        }
    }

    async fn show_home(&self) {
        let content = with_spinner("Loading...", self.catalog.home()).await;
        print_page(&render::home(&content));
    }

    async fn show_treatments(&self) -> Result<(), DomainError> {
        let treatments = with_spinner("Loading treatments...", self.catalog.treatments()).await;
        let options = categories(&treatments);
        let mut filter = CategoryFilter::All;

        loop {
            print_page(&render::treatments(
                &filter_treatments(&treatments, &filter),
                &filter,
            ));

            let mut choices: Vec<Choice> = options
                .iter()
                .enumerate()
                .map(|(i, c)| Choice {
                    index: Some(i),
                    label: render::capitalize(c),
                })
                .collect();
            choices.push(Choice {
                index: None,
                label: BACK_LABEL.to_string(),
            });
            let cursor = options
                .iter()
                .position(|c| c == filter.label())
                .unwrap_or(0);

            let picked = skippable(
                Select::new("Filter by category", choices)
                    .with_starting_cursor(cursor)
                    .prompt_skippable(),
            )?;
            match picked.and_then(|c| c.index) {
                Some(i) => filter = CategoryFilter::from_label(&options[i]),
                None => return Ok(()),
            }
        }
    }

    async fn show_pricing(&self) {
        let rows = with_spinner("Loading pricing...", self.catalog.pricing()).await;
        print_page(&render::pricing(&rows));
    }

    async fn show_faqs(&self) -> Result<(), DomainError> {
        let mut board = with_spinner("Loading FAQs...", self.faqs.board()).await;
        if board.is_empty() {
            print_page(&render::faqs(&board));
            return Ok(());
        }

        let mut cursor = 0;
        loop {
            print_page(&render::faqs(&board));

            let mut choices: Vec<Choice> = board
                .groups()
                .iter()
                .flat_map(|g| g.entries.iter())
                .map(|e| Choice {
                    index: Some(e.index),
                    label: format!("{} {}", if e.open { "▾" } else { "▸" }, e.faq.question),
                })
                .collect();
            choices.push(Choice {
                index: None,
                label: BACK_LABEL.to_string(),
            });

            let picked = skippable(
                Select::new("Select a question to expand or collapse", choices)
                    .with_starting_cursor(cursor)
                    .with_page_size(12)
                    .prompt_skippable(),
            )?;
            let Some(index) = picked.and_then(|c| c.index) else {
                return Ok(());
            };
            board.toggle(index);
            // The grouped order differs from the fetched order; keep the cursor on the same row.
            cursor = board
                .groups()
                .iter()
                .flat_map(|g| g.entries.iter())
                .position(|e| e.index == index)
                .unwrap_or(0);
        }
    }

    async fn show_contact(&self) -> Result<(), DomainError> {
        print_page(&render::contact_info());
        println!("\n{}", "Send Us a Message".cyan().bold());

        let mut form = ContactForm::default();
        loop {
            let Some(name) = ask("Full Name *", &form.name, true, false)? else {
                return Ok(());
            };
            form.name = name;
            let Some(email) = ask("Email Address *", &form.email, true, true)? else {
                return Ok(());
            };
            form.email = email;
            let Some(phone) = ask("Phone Number", &form.phone, false, false)? else {
                return Ok(());
            };
            form.phone = phone;
            let Some(subject) = ask("Subject *", &form.subject, true, false)? else {
                return Ok(());
            };
            form.subject = subject;
            let Some(message) = ask("Message *", &form.message, true, false)? else {
                return Ok(());
            };
            form.message = message;

            let outcome = with_spinner("Sending...", self.contact.submit(&mut form)).await;
            print_notice(&outcome);
            if matches!(outcome, FormOutcome::Submitted(_)) {
                return Ok(());
            }
            let retry = skippable(
                Confirm::new("Edit and send again?")
                    .with_default(true)
                    .prompt_skippable(),
            )?;
            if retry != Some(true) {
                return Ok(());
            }
        }
    }

    async fn show_appointment(&self) -> Result<(), DomainError> {
        println!("\n{}", "Book an Appointment".cyan().bold());
        let treatments = with_spinner("Loading treatments...", self.catalog.treatments()).await;
        let treatment_names: Vec<String> = treatments.into_iter().map(|t| t.name).collect();
        let today = chrono::Local::now().date_naive();

        let mut form = AppointmentForm::default();
        loop {
            let Some(name) = ask("Patient Name *", &form.patient_name, true, false)? else {
                return Ok(());
            };
            form.patient_name = name;
            let Some(email) = ask("Email Address *", &form.email, true, true)? else {
                return Ok(());
            };
            form.email = email;
            let Some(phone) = ask("Phone Number *", &form.phone, true, false)? else {
                return Ok(());
            };
            form.phone = phone;

            let Some(date) = skippable(
                DateSelect::new("Preferred Date *")
                    .with_min_date(today)
                    .with_starting_date(form.preferred_date.unwrap_or(today))
                    .prompt_skippable(),
            )?
            else {
                return Ok(());
            };
            form.preferred_date = Some(date);

            let slots: Vec<String> = APPOINTMENT_SLOTS.iter().map(|s| s.to_string()).collect();
            let slot_cursor = slots
                .iter()
                .position(|s| *s == form.preferred_time)
                .unwrap_or(0);
            let Some(time) = skippable(
                Select::new("Preferred Time *", slots)
                    .with_starting_cursor(slot_cursor)
                    .prompt_skippable(),
            )?
            else {
                return Ok(());
            };
            form.preferred_time = time;

            let treatment = if treatment_names.is_empty() {
                ask("Treatment Type *", &form.treatment_type, true, false)?
            } else {
                let cursor = treatment_names
                    .iter()
                    .position(|n| *n == form.treatment_type)
                    .unwrap_or(0);
                skippable(
                    Select::new("Treatment Type *", treatment_names.clone())
                        .with_starting_cursor(cursor)
                        .prompt_skippable(),
                )?
            };
            let Some(treatment) = treatment else {
                return Ok(());
            };
            form.treatment_type = treatment;

            let Some(message) = ask("Message", &form.message, false, false)? else {
                return Ok(());
            };
            form.message = message;

            let outcome =
                with_spinner("Sending...", self.contact.request_appointment(&mut form)).await;
            print_notice(&outcome);
            if matches!(outcome, FormOutcome::Submitted(_)) {
                return Ok(());
            }
            let retry = skippable(
                Confirm::new("Edit and send again?")
                    .with_default(true)
                    .prompt_skippable(),
            )?;
            if retry != Some(true) {
                return Ok(());
            }
        }
    }

    async fn show_chat(&self) -> Result<(), DomainError> {
        println!("\n{}", "Dental Assistant".cyan().bold());
        for turn in self.chat.transcript().await {
            println!("{}", render::chat_turn(&turn));
        }

        loop {
            let input = skippable(
                Text::new("You:")
                    .with_placeholder("Ask about our dental services...")
                    .with_help_message("Esc to return to the menu")
                    .prompt_skippable(),
            )?;
            let Some(input) = input else {
                return Ok(());
            };

            // Input stays closed until the reply (or fallback) arrives.
            match with_spinner("Assistant is typing...", self.chat.send(&input)).await {
                Ok(Some(reply)) => println!("{}", render::chat_turn(&reply)),
                Ok(None) => {}
                Err(DomainError::ChatBusy) => println!("{}", "Please wait for the reply.".yellow()),
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let picked = skippable(
                Select::new("Where would you like to go?", Page::ALL.to_vec())
                    .with_page_size(Page::ALL.len())
                    .prompt_skippable(),
            )?;
            let page = picked.unwrap_or(Page::Quit);
            info!(page = %page, "page opened");

            match page {
                Page::Home => self.show_home().await,
                Page::About => print_page(&render::about()),
                Page::Treatments => self.show_treatments().await?,
                Page::Pricing => self.show_pricing().await,
                Page::DentalTourism => print_page(&render::dental_tourism()),
                Page::Faqs => self.show_faqs().await?,
                Page::Contact => self.show_contact().await?,
                Page::Appointment => self.show_appointment().await?,
                Page::Chat => self.show_chat().await?,
                Page::Quit => {
                    println!("\n{}\n", render::footer().dim());
                    return Ok(());
                }
            }
        }
    }
}
