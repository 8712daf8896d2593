// SPDX-License-Identifier: MPL-2.0
//! Catalog fixtures rendered by the screens.
//!
//! In-memory fixtures standing in for a CMS feed. Screen chrome (labels,
//! buttons, notifications) is localized through Fluent; catalog entries are
//! editorial content and stay as authored.

use chrono::NaiveDate;

// =============================================================================
// Courses
// =============================================================================

/// Course category used by the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCategory {
    Safety,
    Leadership,
    Skills,
    Compliance,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 4] = [
        CourseCategory::Safety,
        CourseCategory::Leadership,
        CourseCategory::Skills,
        CourseCategory::Compliance,
    ];

    /// The i18n key for the category label.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            CourseCategory::Safety => "category-safety",
            CourseCategory::Leadership => "category-leadership",
            CourseCategory::Skills => "category-skills",
            CourseCategory::Compliance => "category-compliance",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub title: &'static str,
    pub category: CourseCategory,
    pub description: &'static str,
    pub duration: &'static str,
}

#[must_use]
pub fn courses() -> &'static [Course] {
    &[
        Course {
            title: "Occupational Health and Safety Essentials",
            category: CourseCategory::Safety,
            description: "Hazard identification, incident reporting and the legal duties of every employee.",
            duration: "2 days",
        },
        Course {
            title: "First Aid Level 1",
            category: CourseCategory::Safety,
            description: "Primary emergency care for workplace responders, with practical assessment.",
            duration: "3 days",
        },
        Course {
            title: "Fire Marshal Training",
            category: CourseCategory::Safety,
            description: "Evacuation planning, extinguisher handling and fire risk walkdowns.",
            duration: "1 day",
        },
        Course {
            title: "Leadership Development Programme",
            category: CourseCategory::Leadership,
            description: "Coaching-led programme for first-time managers moving from peer to leader.",
            duration: "6 weeks",
        },
        Course {
            title: "Supervisory Skills for Team Leaders",
            category: CourseCategory::Leadership,
            description: "Delegation, feedback and shift handover discipline for working supervisors.",
            duration: "2 days",
        },
        Course {
            title: "Professional Business Communication",
            category: CourseCategory::Skills,
            description: "Clear written and spoken communication for client-facing staff.",
            duration: "2 days",
        },
        Course {
            title: "Project Management Fundamentals",
            category: CourseCategory::Skills,
            description: "Scoping, scheduling and stakeholder reporting on small projects.",
            duration: "3 days",
        },
        Course {
            title: "POPIA Compliance in Practice",
            category: CourseCategory::Compliance,
            description: "Handling personal information lawfully across HR, sales and support.",
            duration: "1 day",
        },
        Course {
            title: "Skills Development Facilitator Certification",
            category: CourseCategory::Compliance,
            description: "Workplace skills plans, annual training reports and SETA liaison.",
            duration: "5 days",
        },
    ]
}

// =============================================================================
// Schedule
// =============================================================================

/// Venue for a scheduled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Johannesburg,
    CapeTown,
    Durban,
    Online,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Johannesburg,
        Location::CapeTown,
        Location::Durban,
        Location::Online,
    ];

    /// The i18n key for the venue label.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Location::Johannesburg => "location-johannesburg",
            Location::CapeTown => "location-cape-town",
            Location::Durban => "location-durban",
            Location::Online => "location-online",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub course: &'static str,
    pub date: NaiveDate,
    pub location: Location,
    pub price: &'static str,
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[must_use]
pub fn sessions() -> Vec<Session> {
    vec![
        Session {
            course: "Occupational Health and Safety Essentials",
            date: day(2026, 9, 8),
            location: Location::Johannesburg,
            price: "R3,450",
        },
        Session {
            course: "First Aid Level 1",
            date: day(2026, 9, 15),
            location: Location::Durban,
            price: "R2,900",
        },
        Session {
            course: "Leadership Development Programme",
            date: day(2026, 9, 21),
            location: Location::CapeTown,
            price: "R12,800",
        },
        Session {
            course: "Professional Business Communication",
            date: day(2026, 10, 6),
            location: Location::Online,
            price: "R2,150",
        },
        Session {
            course: "Fire Marshal Training",
            date: day(2026, 10, 13),
            location: Location::Johannesburg,
            price: "R1,950",
        },
        Session {
            course: "Project Management Fundamentals",
            date: day(2026, 10, 20),
            location: Location::CapeTown,
            price: "R4,600",
        },
        Session {
            course: "POPIA Compliance in Practice",
            date: day(2026, 11, 3),
            location: Location::Online,
            price: "R1,800",
        },
        Session {
            course: "Supervisory Skills for Team Leaders",
            date: day(2026, 11, 10),
            location: Location::Durban,
            price: "R3,200",
        },
    ]
}

// =============================================================================
// Resources
// =============================================================================

/// FAQ grouping used by the category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqCategory {
    Courses,
    Payments,
    Certification,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 3] = [
        FaqCategory::Courses,
        FaqCategory::Payments,
        FaqCategory::Certification,
    ];

    /// The i18n key for the tab label.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            FaqCategory::Courses => "faq-category-courses",
            FaqCategory::Payments => "faq-category-payments",
            FaqCategory::Certification => "faq-category-certification",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

#[must_use]
pub fn faq_items() -> &'static [FaqItem] {
    &[
        FaqItem {
            category: FaqCategory::Courses,
            question: "Are your courses available in-house?",
            answer: "Yes. Any public course can be run at your premises for groups of eight or more, with content tailored to your industry.",
        },
        FaqItem {
            category: FaqCategory::Courses,
            question: "What happens if I miss a session?",
            answer: "You can join the same module on the next public date at no extra cost, subject to seat availability.",
        },
        FaqItem {
            category: FaqCategory::Courses,
            question: "Do you offer online delivery?",
            answer: "Selected courses run as live virtual classrooms. Look for the Online venue on the schedule page.",
        },
        FaqItem {
            category: FaqCategory::Payments,
            question: "Which payment methods do you accept?",
            answer: "EFT and purchase orders from registered companies. Payment is due before the course start date.",
        },
        FaqItem {
            category: FaqCategory::Payments,
            question: "What is your cancellation policy?",
            answer: "Cancellations made ten or more working days before the start date receive a full refund; later cancellations can transfer to a future date.",
        },
        FaqItem {
            category: FaqCategory::Certification,
            question: "Are your certificates accredited?",
            answer: "All programmes are aligned to the relevant SETA unit standards, and certificates carry the accreditation number.",
        },
        FaqItem {
            category: FaqCategory::Certification,
            question: "How long is a certificate valid?",
            answer: "Safety certifications are valid for two years; professional development certificates do not expire.",
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct Promotion {
    pub name: &'static str,
    pub details: &'static str,
}

#[must_use]
pub fn promotions() -> &'static [Promotion] {
    &[
        Promotion {
            name: "Early Bird Special",
            details: "Save 15% on all course fees when you book and pay 30 days before the course start date. Applies to all public scheduled courses.",
        },
        Promotion {
            name: "Group Training Discount",
            details: "Groups of 3-5 people get 15% off, groups of 6-10 get 20% off, and groups of 11 or more get 25% off.",
        },
        Promotion {
            name: "Student Discount",
            details: "Full-time students with a valid student card qualify for 20% off all courses. Proof of enrollment is required at booking.",
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct DownloadItem {
    pub title: &'static str,
    pub file_size: &'static str,
}

#[must_use]
pub fn downloads() -> &'static [DownloadItem] {
    &[
        DownloadItem {
            title: "2026 Course Catalogue",
            file_size: "2.4 MB",
        },
        DownloadItem {
            title: "Public Schedule Calendar",
            file_size: "640 KB",
        },
        DownloadItem {
            title: "Learnership Application Form",
            file_size: "310 KB",
        },
        DownloadItem {
            title: "Corporate Training Brochure",
            file_size: "1.8 MB",
        },
    ]
}

// =============================================================================
// Home
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[must_use]
pub fn hero_slides() -> &'static [HeroSlide] {
    &[
        HeroSlide {
            title: "Training that sticks",
            subtitle: "Accredited workplace programmes delivered by practitioners, not presenters.",
        },
        HeroSlide {
            title: "Learnerships with a pipeline",
            subtitle: "Structured 12-month programmes combining classroom learning with placement.",
        },
        HeroSlide {
            title: "Safety culture, built in",
            subtitle: "From induction to incident command, one provider for the whole safety ladder.",
        },
    ]
}

// =============================================================================
// Insights
// =============================================================================

/// Insight grouping used by the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightCategory {
    Leadership,
    Industry,
    Learning,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 3] = [
        InsightCategory::Leadership,
        InsightCategory::Industry,
        InsightCategory::Learning,
    ];

    /// The i18n key for the chip label.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            InsightCategory::Leadership => "insight-category-leadership",
            InsightCategory::Industry => "insight-category-industry",
            InsightCategory::Learning => "insight-category-learning",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpotlightItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: InsightCategory,
}

#[must_use]
pub fn spotlight_items() -> &'static [SpotlightItem] {
    &[
        SpotlightItem {
            title: "Why supervisors make or break safety programmes",
            summary: "Incident data from 40 client sites shows the first-line supervisor is the single strongest predictor of near-miss reporting.",
            category: InsightCategory::Leadership,
        },
        SpotlightItem {
            title: "The 2026 skills levy changes, explained",
            summary: "What the revised grant thresholds mean for your workplace skills plan submission this cycle.",
            category: InsightCategory::Industry,
        },
        SpotlightItem {
            title: "Blended learning that actually blends",
            summary: "Our facilitators on sequencing virtual theory with on-site practicals without losing either audience.",
            category: InsightCategory::Learning,
        },
        SpotlightItem {
            title: "From learnership to permanent hire",
            summary: "Three alumni on the habits that turned their placements into offers.",
            category: InsightCategory::Learning,
        },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct PressItem {
    pub outlet: &'static str,
    pub headline: &'static str,
}

#[must_use]
pub fn press_items() -> &'static [PressItem] {
    &[
        PressItem {
            outlet: "Business Day",
            headline: "Training provider doubles learnership intake despite downturn",
        },
        PressItem {
            outlet: "Engineering News",
            headline: "Safety training moves on-site as plants cut travel budgets",
        },
        PressItem {
            outlet: "HR Future",
            headline: "What the best corporate academies do differently",
        },
    ]
}

// =============================================================================
// Chat scripts
// =============================================================================

/// Scripted reply pools for the chat assistant, keyed by topic.
pub mod chat_replies {
    pub const COURSE: &[&str] = &[
        "We offer a wide range of courses including Safety Training, Leadership Development, and Skills Development programmes. Which area interests you most?",
        "Our courses are industry-certified and available both online and in-person. Would you like me to send you our course catalogue?",
        "We have courses starting every month. What type of training are you looking for?",
    ];

    pub const LEARNERSHIP: &[&str] = &[
        "Our learnership programmes are designed to provide practical skills and qualifications, with programmes in Business, Technology and Management.",
        "Learnerships combine theoretical learning with practical work experience. Would you like to know about specific requirements?",
        "We're currently accepting applications for the next learnership intake. I can help you with the application process!",
    ];

    pub const PRICING: &[&str] = &[
        "Course prices vary by programme and duration, and we offer group discounts and corporate packages. Which course are you interested in?",
        "We have flexible payment options available. Would you like a detailed quote for specific courses?",
        "Pricing depends on the course type and delivery method. I can put together a customized quote - what's your training budget?",
    ];

    pub const DEFAULT: &[&str] = &[
        "Thank you for your message! I'm here to help with any questions about our training programmes.",
        "That's a great question! Let me connect you with one of our training specialists for detailed information.",
        "I'd be happy to help you with that. Can you tell me more about what you're looking for?",
        "Thanks for reaching out! Our team will get back to you shortly with more information.",
        "Would you like to schedule a consultation call with one of our advisors?",
    ];

    /// Quick replies offered before the visitor types a first message.
    pub const QUICK_REPLIES: &[&str] = &[
        "I want to know about courses",
        "How do I apply for a learnership?",
        "What are your prices?",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_course_category_has_a_course() {
        for category in CourseCategory::ALL {
            assert!(
                courses().iter().any(|c| c.category == category),
                "no course for {:?}",
                category
            );
        }
    }

    #[test]
    fn every_faq_category_has_items() {
        for category in FaqCategory::ALL {
            assert!(faq_items().iter().any(|f| f.category == category));
        }
    }

    #[test]
    fn session_dates_are_real_dates() {
        for session in sessions() {
            assert!(session.date > NaiveDate::default(), "{}", session.course);
        }
    }

    #[test]
    fn sessions_reference_catalog_courses() {
        for session in sessions() {
            assert!(
                courses().iter().any(|c| c.title == session.course),
                "unknown course {}",
                session.course
            );
        }
    }

    #[test]
    fn fixtures_are_non_empty() {
        assert!(!hero_slides().is_empty());
        assert!(!spotlight_items().is_empty());
        assert!(press_items().len() > 1, "ticker needs at least two items");
        assert!(!promotions().is_empty());
        assert!(!downloads().is_empty());
    }
}
