//! General company site deployment

use std::sync::Arc;

use url::Url;

use super::buttons::{HRMS_SYSTEM, SCHOOL_SYSTEM};
use super::{DEFAULT_REPLY, GREETING_REPLY, GREETINGS, Variant, VariantConfig};
use crate::matcher::KeywordRule;
use crate::microbots::{Microbot, MicrobotRegistry};
use crate::topics::{Topic, TopicCatalog, TopicEntry};

pub(super) const BASE_URL: &str = "https://globaltechsoftwaresolutions.com/";

const COMPANY_KEYWORDS: &[&str] = &[
    "company", "price", "product", "service", "support", "info", "details", "help", "what",
    "who", "tell", "software", "web", "mobile", "cloud", "seo", "marketing", "client",
    "contact", "blog",
];

pub(super) fn config(base_url: Url) -> VariantConfig {
    VariantConfig {
        variant: Variant::Company,
        topics: Arc::new(TopicCatalog::new(base_url, topics())),
        microbots: microbots(),
        company_keywords: KeywordRule::new("company", COMPANY_KEYWORDS),
        greetings: GREETINGS.to_vec(),
        greeting_reply: GREETING_REPLY,
        default_reply: DEFAULT_REPLY,
        buttons: vec![HRMS_SYSTEM, SCHOOL_SYSTEM],
        button_guidance: "Please select either 'HRMS System' or 'SCHOOL System' for more information.",
    }
}

pub(super) fn topics() -> Vec<TopicEntry> {
    vec![
        TopicEntry::new(Topic::About, "about")
            .keywords(&["about", "overview", "history", "mission", "vision", "team", "founder", "story"])
            .paths(&["about"])
            .local_file("about.html"),
        TopicEntry::new(Topic::Contact, "contact")
            .keywords(&["contact", "email", "phone", "address", "location", "hours", "support", "call", "reach"])
            .paths(&["contact"])
            .local_file("contact.html"),
        TopicEntry::new(Topic::Blog, "blogs")
            .keywords(&["blog", "article", "news", "update", "post", "read", "write"])
            .paths(&["blog", "news"])
            .local_file("blogs.html"),
        TopicEntry::new(Topic::Service, "")
            .keywords(&["product", "service", "offering"])
            .paths(&["service", "product"]),
    ]
}

fn microbots() -> MicrobotRegistry {
    MicrobotRegistry::new(vec![
        Microbot::text(
            "CompanyNameBot",
            &["global tech software solutions", "global tech", "global tech software"],
            COMPANY_CARD,
        ),
        Microbot::text(
            "ServicesBot",
            &["service", "software", "development", "web", "mobile", "application", "app", "solution", "technology"],
            SERVICES,
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
        Microbot::text(
            "SEOBot",
            &["seo", "search engine optimization", "ranking", "visibility", "organic traffic", "keywords", "google ranking"],
            SEO,
        ),
        Microbot::text(
            "SEMBot",
            &["sem", "search engine marketing", "ppc", "paid advertising", "google ads", "bing ads", "pay per click"],
            SEM,
        ),
        Microbot::text(
            "SocialMediaBot",
            &["social media", "facebook", "instagram", "linkedin", "twitter", "social marketing", "engagement"],
            SOCIAL_MEDIA,
        ),
        Microbot::text(
            "ClientsBot",
            &["client", "customer", "clients", "testimonial", "case study"],
            CLIENTS,
        ),
    ])
}

const COMPANY_CARD: &str = "🏢 Global Tech Software Solutions

📧 Email: tech@globaltechsoftwaresolutions.com
📞 Phone: +91 98442 81875
📍 Address: No 10, 4th Floor, Gaduniya Complex, Ramaiah Layout, Vidyaranyapura, Bangalore - 560097

Our support team is available Monday to Friday, 9:00 AM to 6:00 PM IST.
For urgent issues, please call our helpline number.";

const SERVICES: &str = "Our company offers comprehensive software development services:

🌐 Web Development
• Custom web applications
• E-commerce platforms
• Content management systems
• Responsive website design

📱 Mobile App Development
• Native iOS and Android apps
• Cross-platform solutions
• Mobile UI/UX design
• App maintenance & updates

☁️ Cloud Solutions
• Cloud migration services
• Infrastructure setup & management
• Scalable cloud architectures
• Security & compliance

🔧 Technology Expertise
• Frontend: React, Vue.js, Angular
• Backend: Node.js, Python, Java
• Mobile: React Native, Flutter, Swift, Kotlin
• Databases: MySQL, PostgreSQL, MongoDB

Visit our website to learn more: https://globaltechsoftwaresolutions.com/
Contact our team for a consultation on your project!";

const SUPPORT: &str = "📧 Support Contact Information:

• Email: tech@globaltechsoftwaresolutions.com
• Phone: +91 98442 81875
• Address: No 10, 4th Floor, Gaduniya Complex, Ramaiah Layout, Vidyaranyapura, Bangalore - 560097

Our support team is available Monday to Friday, 9:00 AM to 6:00 PM IST.
For urgent issues, please call our helpline number.";

const ABOUT: &str = "Global Tech Software Solutions

Founded in 2025, we are a leading software development company dedicated to delivering innovative technology solutions for businesses worldwide.

Our Mission: To empower businesses with cutting-edge software solutions that drive growth and efficiency.

Core Values:
✓ Innovation - Developing forward-thinking solutions
✓ Quality - Delivering robust and reliable software
✓ Customer Focus - Understanding and meeting client needs
✓ Excellence - Striving for the highest standards

Leadership Team:
• Sharan Patil - CEO & Founder (10+ years in software development)
• Mani Bharadwaj - Tech Lead (Expert in scalable platforms)";

const BLOG: &str = "📚 Our Latest Blog Posts:

1. \"Modern Web Development Trends in 2025\" - Explore the latest technologies shaping web development
2. \"Mobile App vs. Web App: Which is Right for Your Business?\" - A comprehensive comparison
3. \"Cloud Migration Best Practices\" - Essential tips for moving your infrastructure to the cloud

Visit our website to read these articles and more!
https://globaltechsoftwaresolutions.com/";

const SEO: &str = "📈 Search Engine Optimization (SEO) Services:

🔍 Comprehensive SEO Strategy
• Keyword research & analysis
• On-page optimization
• Technical SEO auditing
• Content optimization

📊 Performance Tracking
• Rank tracking
• Traffic analysis
• Conversion rate optimization
• Monthly performance reports

🎯 Results-Oriented Approach
• Improved search rankings
• Increased organic traffic
• Higher conversion rates
• Enhanced online visibility

Learn more at: https://globaltechsoftwaresolutions.com/seo";

const SEM: &str = "📣 Search Engine Marketing (SEM) Services:

🎯 Targeted Advertising Campaigns
• Google Ads management
• Bing Ads optimization
• PPC campaign setup
• Keyword bidding strategies

💰 Cost-Effective Solutions
• Budget optimization
• ROI-focused campaigns
• Click fraud protection
• Conversion tracking

📈 Performance Analytics
• Real-time campaign monitoring
• Detailed performance reports
• A/B testing
• Continuous optimization

Learn more at: https://globaltechsoftwaresolutions.com/sem";

const SOCIAL_MEDIA: &str = "📱 Social Media Marketing Services:

📢 Strategic Social Media Management
• Platform-specific content creation
• Community engagement
• Brand awareness campaigns
• Influencer partnerships

📈 Growth & Engagement
• Follower growth strategies
• Content calendar planning
• Engagement optimization
• Viral content creation

📊 Analytics & Reporting
• Performance tracking
• Audience insights
• ROI measurement
• Monthly progress reports

Learn more at: https://globaltechsoftwaresolutions.com/social-media";

const CLIENTS: &str = "👥 Our Valued Clients:

We've successfully partnered with businesses across various industries including:
• E-commerce & Retail
• Healthcare & Pharmaceuticals
• Financial Services
• Education & EdTech
• Manufacturing & Logistics

🏆 Client Success Stories
• Increased online visibility by 300%
• Reduced customer acquisition costs by 40%
• Improved conversion rates by 60%

🤝 Partnership Benefits
• Dedicated account managers
• Transparent communication
• Regular progress updates
• 24/7 support

Learn more at: https://globaltechsoftwaresolutions.com/clients";
