//! HRMS product deployment

use std::sync::Arc;

use url::Url;

use super::{DEFAULT_REPLY, GREETING_REPLY, GREETINGS, Variant, VariantConfig};
use crate::matcher::KeywordRule;
use crate::microbots::{Microbot, MicrobotRegistry};
use crate::topics::TopicCatalog;

pub(super) const BASE_URL: &str = "https://globaltechsoftwaresolutions.cloud/";

const COMPANY_KEYWORDS: &[&str] = &[
    "company", "price", "product", "service", "support", "info", "details", "help", "what",
    "who", "tell", "hrms", "employee", "payroll", "attendance", "leave", "salary", "biometric",
    "task", "feature", "contact", "blog",
];

pub(super) fn config(base_url: Url) -> VariantConfig {
    VariantConfig {
        variant: Variant::Hrms,
        // Same site layout as the company deployment.
        topics: Arc::new(TopicCatalog::new(base_url, super::company::topics())),
        microbots: microbots(),
        company_keywords: KeywordRule::new("hrms", COMPANY_KEYWORDS),
        greetings: GREETINGS.to_vec(),
        greeting_reply: GREETING_REPLY,
        default_reply: DEFAULT_REPLY,
        buttons: Vec::new(),
        button_guidance: "",
    }
}

fn microbots() -> MicrobotRegistry {
    MicrobotRegistry::new(vec![
        Microbot::text(
            "CompanyNameBot",
            &["global tech software solutions", "global tech", "global tech software"],
            COMPANY_CARD,
        ),
        Microbot::text(
            "PricingBot",
            &["price", "pricing", "cost", "plan", "subscription", "quote", "per employee"],
            PRICING,
        ),
        Microbot::text(
            "HRMSBot",
            &[
                "hrms", "human resource", "employee management", "payroll", "attendance", "leave",
                "salary", "biometric", "task management",
            ],
            HRMS,
        ),
        Microbot::text(
            "SupportBot",
            &[
                "support", "help", "contact", "email", "phone", "issue", "problem", "troubleshoot",
                "assistance", "global tech software solutions", "global tech", "global tech software",
            ],
            SUPPORT,
        ),
        Microbot::text(
            "AboutBot",
            &["about", "company", "overview", "mission", "vision", "founder", "history", "story"],
            ABOUT,
        ),
        Microbot::text(
            "BlogBot",
            &["blog", "article", "news", "update", "post", "read", "write"],
            BLOG,
        ),
    ])
}

const COMPANY_CARD: &str = "🏢 Global Tech Software Solutions - HRMS

📧 Email: hrglobaltechsoftwaresolutions@gmail.com
📞 Phone: +91 98442 81875
📍 Address: No 10, 4th Floor, Gaduniya Complex, Ramaiah Layout, Vidyaranyapura, Bangalore - 560097

Our support team is available Monday to Friday, 9:00 AM to 6:00 PM IST.
For urgent issues, please call our helpline number.";

const PRICING: &str = "💼 HRMS Pricing

We offer flexible pricing based on employee headcount and the modules you choose. Every plan includes:
• Employee management, attendance & leave, payroll and task modules
• Unlimited admin and manager accounts
• Mobile access for all employees
• Regular updates and new features
• Data backup and security
• Technical support and onboarding

No hidden costs - one transparent subscription fee. Custom pricing is available for large organisations.
Contact hrglobaltechsoftwaresolutions@gmail.com for a quote.";

const HRMS: &str = "Our HRMS (Human Resource Management System) offers comprehensive solutions:

📊 Employee Management
• Add, update, remove employees
• Manage roles, departments & salaries
• Secure storage of employee documents

⏰ Attendance & Leave
• Face recognition check-in/check-out
• Biometric integration
• Selfie & location-based attendance
• Automated attendance reports
• Leave approval workflow
• Real-time attendance data

💰 Payroll Management
• Automatic salary calculations
• Complete payroll solution
• Digital salary slips (PDF generation)
• Automated PF, ESI calculation
• Salary history & deductions

📋 Task Management
• Assign tasks to employees
• Track status & progress
• Daily/weekly reporting

Contact our support team for a personalized demo!";

const SUPPORT: &str = "📧 Support Contact Information:

• Email: hrglobaltechsoftwaresolutions@gmail.com
• Phone: +91 98442 81875
• Address: No 10, 4th Floor, Gaduniya Complex, Ramaiah Layout, Vidyaranyapura, Bangalore - 560097

Our support team is available Monday to Friday, 9:00 AM to 6:00 PM IST.
For urgent issues, please call our helpline number.";

const ABOUT: &str = "Global Tech Software Solutions - HRMS

Founded in 2025, we are dedicated to revolutionizing human resources management for businesses of all sizes.

Our Mission: To provide intuitive, powerful software solutions that transform how companies manage their most valuable asset - their people.

Core Values:
✓ Innovation - Developing forward-thinking solutions
✓ Integrity - Building trust through transparency
✓ Efficiency - Simplifying complex processes

Leadership Team:
• Sharan Patil - CEO & Founder (8+ years in HR technology)
• Mani Bharadwaj - Tech Lead (Expert in scalable platforms)";

const BLOG: &str = "📚 Our Latest Blog Posts:

1. \"The Ultimate Guide to HRMS\" - Learn how HRMS transforms human resource management
2. \"Benefits of Implementing HRMS\" - Discover efficiency and accuracy improvements
3. \"AI Automation in HR\" - See how AI streamlines HR tasks

Visit our website to read these articles and more!
https://globaltechsoftwaresolutions.cloud/blogs";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_outranks_hrms() {
        let bot = microbots()
            .select("what are your hrms pricing plans")
            .map(Microbot::name);
        assert_eq!(bot, Some("PricingBot"));
    }

    #[test]
    fn test_hrms_outranks_support() {
        let bot = microbots().select("help with payroll").map(Microbot::name);
        assert_eq!(bot, Some("HRMSBot"));
    }
}
