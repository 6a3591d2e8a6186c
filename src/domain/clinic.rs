//! Fixed clinic content: contact details, static page copy and the assistant prompt.

pub const CLINIC_NAME: &str = "Aurobindo Dental Hospital";
pub const TAGLINE: &str = "Your trusted partner in dental health and smile transformation for over 15 years";

pub const ADDRESS_LINES: [&str; 3] = [
    "Flat 503, 5th Floor, MVS Heights",
    "Vinayaka Nagar, Khanamet, Madhapur",
    "Hyderabad - 500081, Telangana, India",
];

/// First number is the one quoted in fallback messages.
pub const PHONES: [&str; 3] = ["9866937777", "9032018887", "9347294612"];
pub const EMAIL: &str = "aurobindodental@gmail.com";

pub const HOURS: [&str; 3] = [
    "Mon-Sat: 9:00 AM - 8:00 PM",
    "Sun: 10:00 AM - 2:00 PM",
    "Emergency: 24/7",
];

/// A titled block of copy (value, benefit, process step).
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline figures shown on the home page.
pub const STATS: [(&str, &str); 4] = [
    ("Happy Patients", "10,000+"),
    ("Years Experience", "15+"),
    ("Success Rate", "98%"),
    ("Certified Dentists", "100%"),
];

pub const ABOUT_STORY: [&str; 3] = [
    "Aurobindo Dental Hospital was founded with a simple yet powerful vision: to make \
     world-class dental care accessible and affordable to everyone. Located in the heart \
     of Madhapur, Hyderabad, we have been serving our community with dedication and \
     excellence for over 15 years.",
    "Our state-of-the-art facility combines cutting-edge technology with compassionate \
     care, ensuring that every patient receives the highest standard of treatment in a \
     comfortable and welcoming environment. From routine check-ups to complex procedures, \
     we handle every case with precision and care.",
    "What sets us apart is our commitment to affordable pricing without compromising on \
     quality. Our transparent pricing model and flexible payment options make premium \
     dental treatments accessible to all.",
];

pub const ACHIEVEMENTS: [&str; 6] = [
    "10,000+ Successful Treatments",
    "15+ Years of Excellence",
    "98% Patient Satisfaction",
    "State-of-the-Art Facility",
    "Certified & Experienced Team",
    "Comprehensive Treatment Options",
];

pub const VALUES: [Highlight; 4] = [
    Highlight {
        title: "Patient-Centric Care",
        description: "Your comfort and satisfaction are our top priorities. We provide personalized treatment plans tailored to your unique needs.",
    },
    Highlight {
        title: "Excellence in Service",
        description: "With 15+ years of experience, our certified dentists deliver exceptional results using the latest techniques and technology.",
    },
    Highlight {
        title: "Affordable Quality",
        description: "We believe everyone deserves access to quality dental care. Our competitive pricing makes premium treatments accessible.",
    },
    Highlight {
        title: "Experienced Team",
        description: "Our highly skilled and compassionate team is dedicated to providing you with the best possible dental experience.",
    },
];

pub const MISSION: &str = "To provide exceptional dental care that combines advanced technology, \
     experienced expertise, and compassionate service, making quality dental treatments \
     accessible and affordable for everyone.";

pub const TOURISM_BENEFITS: [Highlight; 6] = [
    Highlight {
        title: "Cost Savings",
        description: "Save up to 60% on dental treatments compared to Western countries while receiving world-class care.",
    },
    Highlight {
        title: "Expert Care",
        description: "Our experienced dentists with 15+ years of expertise ensure the highest quality treatment.",
    },
    Highlight {
        title: "Advanced Technology",
        description: "State-of-the-art equipment and latest techniques for optimal treatment outcomes.",
    },
    Highlight {
        title: "Quick Turnaround",
        description: "Efficient scheduling and treatment plans designed to minimize your travel time.",
    },
    Highlight {
        title: "Travel Assistance",
        description: "Help with travel arrangements, accommodation, and local transportation.",
    },
    Highlight {
        title: "Quality Assurance",
        description: "International standards of hygiene and sterilization with guaranteed results.",
    },
];

/// A dental tourism package.
#[derive(Debug, Clone, Copy)]
pub struct TourismPackage {
    pub title: &'static str,
    pub duration: &'static str,
    pub treatments: &'static [&'static str],
    pub ideal_for: &'static str,
}

pub const TOURISM_PACKAGES: [TourismPackage; 3] = [
    TourismPackage {
        title: "Smile Makeover",
        duration: "7-10 Days",
        treatments: &["Teeth Whitening", "Dental Veneers", "Cosmetic Bonding", "Follow-up Care"],
        ideal_for: "Perfect for complete smile transformation",
    },
    TourismPackage {
        title: "Implant Package",
        duration: "10-14 Days",
        treatments: &[
            "Dental Implants",
            "Crown Placement",
            "Bone Grafting (if needed)",
            "Post-op Care",
        ],
        ideal_for: "Comprehensive implant solution",
    },
    TourismPackage {
        title: "Orthodontic Care",
        duration: "Multiple Visits",
        treatments: &[
            "Braces/Aligners Setup",
            "Progress Monitoring",
            "Adjustment Sessions",
            "Final Retainers",
        ],
        ideal_for: "Long-term teeth alignment",
    },
];

pub const TOURISM_PROCESS: [Highlight; 6] = [
    Highlight {
        title: "Initial Consultation",
        description: "Contact us with your dental needs. Share X-rays and photos for preliminary assessment.",
    },
    Highlight {
        title: "Treatment Plan",
        description: "Receive detailed treatment plan, timeline, and cost estimate tailored to your needs.",
    },
    Highlight {
        title: "Travel Arrangements",
        description: "We assist with visa information, flight bookings, and accommodation arrangements.",
    },
    Highlight {
        title: "Treatment Phase",
        description: "Undergo your dental treatment in our modern facility with expert care.",
    },
    Highlight {
        title: "Recovery & Tourism",
        description: "Recover comfortably while exploring Hyderabad's rich culture and attractions.",
    },
    Highlight {
        title: "Follow-up Care",
        description: "Receive post-treatment guidance and ongoing support even after returning home.",
    },
];

pub const PRICING_BENEFITS: [&str; 6] = [
    "Transparent Pricing",
    "No Hidden Costs",
    "Flexible Payment Options",
    "Insurance Accepted",
    "Quality Guaranteed",
    "Expert Care",
];

pub const PRICING_NOTES: [Highlight; 4] = [
    Highlight {
        title: "Transparent Pricing",
        description: "All prices are clearly communicated before treatment begins with no hidden costs.",
    },
    Highlight {
        title: "Flexible Payment",
        description: "We offer convenient payment plans and accept most major insurance providers.",
    },
    Highlight {
        title: "Price Range",
        description: "Final costs may vary based on individual case complexity and specific treatment requirements.",
    },
    Highlight {
        title: "Free Consultation",
        description: "Schedule a consultation to get a personalized treatment plan and accurate cost estimate.",
    },
];

/// Slots offered by the appointment form.
pub const APPOINTMENT_SLOTS: [&str; 8] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "04:00 PM", "06:00 PM", "07:00 PM",
];

pub const CHAT_GREETING: &str = "Hello! I'm your Aurobindo Dental Hospital assistant. I can help you with information about our treatments, services, pricing, and appointments. How can I assist you today?";

/// Assistant turn used when the completion carries no text.
pub const CHAT_EMPTY_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

/// Assistant turn used when the completion request fails.
pub fn chat_fallback_reply() -> String {
    format!(
        "I apologize, but I'm having trouble connecting right now. Please try again or call us at {} for immediate assistance.",
        PHONES[0]
    )
}

/// Published price list quoted to the assistant.
const PROMPT_PRICE_LIST: [(&str, &str); 10] = [
    ("Invisible Aligners", "₹95,000"),
    ("Dental Braces", "₹35,000-50,000"),
    ("Root Canal Treatment", "₹4,000-8,000"),
    ("Wisdom Tooth Removal", "₹4,000-8,000"),
    ("Dental Implants", "₹25,000-45,000"),
    ("Teeth Whitening", "₹10,000-15,000"),
    ("Dentures", "₹25,000-40,000"),
    ("Dental Crowns", "₹5,000-12,000"),
    ("Cosmetic Dentistry", "₹15,000-50,000"),
    ("Ceramic Braces", "₹40,000-55,000"),
];

/// System prompt that scopes the assistant to clinic topics. Advisory only.
pub fn assistant_system_prompt() -> String {
    let price_list: String = PROMPT_PRICE_LIST
        .iter()
        .map(|(name, price)| format!("- {name} ({price})\n"))
        .collect();

    format!(
        "You are a helpful medical assistant for {CLINIC_NAME} in Hyderabad, India. You can ONLY answer questions about:

1. Dental treatments and procedures (root canal, implants, braces, teeth whitening, etc.)
2. Hospital services and facilities
3. Appointment booking and clinic hours
4. Treatment pricing and payment options
5. Dental health tips and oral hygiene
6. Location and contact information
7. Dental tourism services

Hospital Information:
- Location: Flat 503, 5th Floor, MVS Heights, Vinayaka Nagar, Khanamet, Madhapur, Hyderabad-500081
- Phone: {phones}
- Email: {EMAIL}
- Hours: Mon-Sat 9 AM - 8 PM, Sun 10 AM - 2 PM
- Experience: 15+ years in dental care

Available Treatments:
{price_list}
IMPORTANT RULES:
- If asked about non-medical or non-hospital topics, politely decline and redirect to dental/hospital topics
- Be professional, friendly, and empathetic
- Keep responses concise and helpful
- Encourage booking appointments for detailed consultations
- Never provide medical diagnosis - recommend in-person consultation for specific cases",
        phones = PHONES.join(", "),
    )
}
