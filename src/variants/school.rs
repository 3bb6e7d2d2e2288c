//! School ERP product deployment

use std::sync::Arc;

use url::Url;

use super::buttons::SCHOOL_SYSTEM;
use super::{DEFAULT_REPLY, GREETING_REPLY, GREETINGS, Variant, VariantConfig};
use crate::matcher::KeywordRule;
use crate::microbots::{Microbot, MicrobotRegistry};
use crate::topics::{Topic, TopicCatalog, TopicEntry};

pub(super) const BASE_URL: &str = "https://school.globaltechsoftwaresolutions.cloud/";

const COMPANY_KEYWORDS: &[&str] = &[
    "school", "company", "education", "student", "teacher", "faculty", "academic", "learning",
    "institution", "management", "system", "software", "erp", "attendance", "grade", "exam",
    "timetable", "library", "fees", "payment", "parent", "portal", "activity", "event",
];

pub(super) fn config(base_url: Url) -> VariantConfig {
    VariantConfig {
        variant: Variant::School,
        topics: Arc::new(TopicCatalog::new(base_url, topics())),
        microbots: microbots(),
        company_keywords: KeywordRule::new("school", COMPANY_KEYWORDS),
        greetings: GREETINGS.to_vec(),
        greeting_reply: GREETING_REPLY,
        default_reply: DEFAULT_REPLY,
        buttons: vec![SCHOOL_SYSTEM],
        button_guidance: "Please select 'SCHOOL System' for more information.",
    }
}

fn topics() -> Vec<TopicEntry> {
    vec![
        TopicEntry::new(Topic::About, "about")
            .keywords(&["about", "overview", "history", "mission", "vision", "team", "founder", "story"])
            .paths(&["about"])
            .local_file("about.html"),
        TopicEntry::new(Topic::Contact, "contact")
            .keywords(&["contact", "email", "phone", "address", "location", "hours", "support", "call", "reach"])
            .paths(&["contact"])
            .local_file("contact.html"),
        TopicEntry::new(Topic::Activities, "activities")
            .keywords(&["activity", "event", "program", "function", "celebration", "outing", "field trip"])
            .paths(&["activities", "events"])
            .local_file("activities.html"),
        TopicEntry::new(Topic::Academics, "nav_features/academics")
            .keywords(&["academic", "curriculum", "subject", "course", "syllabus", "study", "learning", "education"])
            .paths(&["academics", "curriculum"])
            .local_file("academics.html"),
        TopicEntry::new(Topic::Students, "nav_features/students")
            .keywords(&["student", "pupil", "learner", "enrollment", "admission", "scholarship"])
            .paths(&["students", "pupils"])
            .local_file("students.html"),
        TopicEntry::new(Topic::Faculty, "nav_features/faculty")
            .keywords(&["faculty", "teacher", "professor", "instructor", "staff", "educator"])
            .paths(&["faculty", "teachers"])
            .local_file("faculty.html"),
        TopicEntry::new(Topic::Blog, "")
            .keywords(&["blog", "article", "news", "update", "post", "read", "write"])
            .paths(&["blog", "news"]),
        TopicEntry::new(Topic::Service, "")
            .keywords(&["product", "service", "offering"])
            .paths(&["service", "product"]),
    ]
}

fn microbots() -> MicrobotRegistry {
    MicrobotRegistry::new(vec![
        Microbot::text(
            "SchoolERPBot",
            &["erp system", "smart school", "school erp", "educational platform", "school management", "digital management platform"],
            "Smart School ERP is a comprehensive digital management platform designed to revolutionize educational institutions. \
             It integrates all essential school operations including attendance tracking, grade management, timetable scheduling, \
             fee collection, document management, parent-teacher communication, and administrative workflows into a single, \
             user-friendly system. Our cloud-based solution ensures seamless access from anywhere, anytime, making school \
             management efficient and transparent.",
        ),
        Microbot::text(
            "TeacherSupportBot",
            &["teacher", "teaching", "faculty", "instructor", "educator", "professor", "paperwork", "administrative tasks", "attendance marking", "grade books"],
            "Teachers benefit tremendously through automated attendance marking with biometric integration, digital grade books \
             with instant report generation, smart timetable management, online assignment submission and grading, student \
             performance analytics, document issuance capabilities, and direct messaging with parents. The system reduces \
             paperwork by 80%, saves 2-3 hours daily, and enables teachers to focus more on teaching rather than administrative tasks.",
        ),
        Microbot::text(
            "ParentPortalBot",
            &["parent", "mom", "dad", "guardian", "family", "child", "academic journey", "progress report", "attendance alert", "grade notification"],
            "Parents get comprehensive access to their child's academic journey through real-time attendance alerts, instant \
             grade notifications, detailed progress reports, fee payment history and online payment options, homework and \
             assignment tracking, school circulars and announcements, direct communication with teachers, exam schedules \
             and results, and digital document downloads. Parents receive instant SMS/email notifications for important updates.",
        ),
        Microbot::text(
            "SecurityBot",
            &["security", "secure", "data protection", "privacy", "encryption", "gdpr", "iso 27001", "safe", "audit log"],
            "Security is our top priority. We implement bank-level 256-bit SSL encryption, GDPR-compliant data protection, \
             regular security audits, role-based access control, secure cloud hosting with automatic backups, two-factor \
             authentication for admin accounts, and detailed audit logs. Our system is ISO 27001 certified and complies \
             with educational data privacy regulations. Data is stored in secure, geographically distributed servers.",
        ),
        Microbot::text(
            "CustomizationBot",
            &["custom", "customize", "customization", "specific needs", "unique requirements", "workflow", "philosophy", "grading system", "attendance policy"],
            "Absolutely! Our ERP is highly customizable to match your institution's unique requirements. We can customize \
             grading systems (GPA, percentage, marks), attendance policies, fee structures and payment plans, report card \
             formats, timetable templates, curriculum frameworks, examination patterns, and organizational hierarchy. We \
             work closely with your team to ensure the system aligns perfectly with your existing workflows and educational philosophy.",
        ),
        Microbot::text(
            "SupportTrainingBot",
            &["support", "training", "help", "assistance", "technical support", "webinar", "tutorial", "account manager", "on-site training"],
            "We offer comprehensive support including 24/7 dedicated support team via phone, email, and chat, on-site \
             training during implementation, detailed video tutorials and documentation, regular webinars for new features, \
             dedicated account manager for each school, rapid response time (under 2 hours for critical issues), and annual \
             system health checks. Our support team understands educational workflows and provides context-aware assistance.",
        ),
        Microbot::text(
            "AttendanceBot",
            &["attendance", "present", "absent", "biometric", "rfid", "barcode", "check-in", "absenteeism", "sms alert"],
            "Our attendance system supports multiple methods: biometric integration (face recognition and barcode), RFID card \
             scanning, mobile app-based check-in, manual marking with geo-location verification, and automated SMS alerts \
             to parents for absent students. Teachers can mark attendance in under 30 seconds for entire classes, generate \
             monthly/annual attendance reports, identify patterns of absenteeism, and integrate with leave management systems.",
        ),
        Microbot::text(
            "FinancialManagementBot",
            &["financial", "finance", "fee", "payment", "money", "gst", "budget", "expense", "scholarship", "discount", "payment gateway"],
            "The system includes comprehensive fee management with customizable fee structures, online payment integration \
             with multiple payment gateways, automated fee reminders and receipts, scholarship and discount management, \
             expense tracking and budget planning, financial reporting and analytics, GST compliance for Indian schools, \
             and multi-campus financial consolidation. Parents can pay fees through UPI, credit cards, net banking, or wallet apps.",
        ),
        Microbot::text(
            "DocumentManagementBot",
            &["document", "certificate", "report card", "id card", "admit card", "receipt", "award", "audit trail", "digitally signed"],
            "Our digital document system allows schools to issue and manage student certificates (conduct, transfer, study, \
             bonafide), mark sheets and report cards, ID cards and admit cards, fee receipts and payment records, achievement \
             certificates and awards, and other official documents. Documents can be generated automatically, digitally signed, \
             and shared via email or downloaded. The system maintains a complete audit trail of all issued documents.",
        ),
        Microbot::text(
            "MultiCampusBot",
            &["campus", "branch", "multiple", "multi-campus", "inter-campus", "centralized", "unified database", "branch-level control"],
            "Yes, our ERP is designed for multi-campus operations. Features include centralized administration with branch-level \
             controls, unified student database across campuses, inter-campus transfer capabilities, consolidated reporting for \
             management, branch-specific fee structures and policies, shared resources management, and standardized processes \
             across all locations while maintaining local autonomy where needed.",
        ),
        Microbot::text(
            "MobileAppBot",
            &["mobile", "app", "ios", "android", "push notification", "offline", "gps", "qr code", "smartphone", "photo upload"],
            "Our mobile apps (iOS and Android) provide push notifications for important updates, offline access to timetables \
             and assignments, QR code-based attendance marking, instant photo/document uploads, GPS-based check-in for staff \
             and students, real-time chat with teachers and parents, exam result notifications, fee payment processing, and \
             access to digital ID cards. The apps work seamlessly even with low internet connectivity.",
        ),
        Microbot::text(
            "ExaminationBot",
            &["exam", "examination", "test", "grade", "grading", "mark", "report card", "result", "question paper", "grade analysis"],
            "The examination module supports multiple exam types (unit tests, mid-terms, finals), customizable grading schemes \
             and mark distribution, automated report card generation, grade analysis and comparison tools, exam scheduling and \
             hall allocation, digital question paper management, online examination capabilities, and statistical analysis of \
             results. Teachers can input grades via mobile or web, and parents receive instant notifications when results are published.",
        ),
        Microbot::text(
            "InfrastructureBot",
            &["infrastructure", "hardware", "requirement", "server", "internet", "biometric", "printer", "computer", "cloud-based"],
            "Being cloud-based, minimal infrastructure is needed. Requirements include: basic computers with internet access \
             for admin staff, optional biometric devices for attendance, barcode/QR printers for ID cards, and stable internet \
             connection (minimum 2 Mbps). No servers or IT infrastructure is required at your end. The system works on desktop \
             browsers, tablets, and mobile phones. We handle all maintenance, updates, and security patches.",
        ),
        Microbot::text(
            "PricingBot",
            &["price", "pricing", "cost", "fee", "plan", "subscription", "annual", "hidden cost", "transparent", "user account"],
            "We offer flexible pricing based on student strength and features selected. Plans include: all core modules \
             (attendance, grades, fees, communication), unlimited user accounts (students, parents, teachers, staff), \
             mobile apps for all users, regular updates and new features, data backup and security, technical support, and \
             training. No hidden costs - one transparent annual fee. Custom pricing available for large institutions with special requirements.",
        ),
        Microbot::text(
            "ImplementationBot",
            &["implementation", "implement", "process", "duration", "week", "migration", "configuration", "training", "onboarding", "go-live"],
            "Implementation typically takes 2-4 weeks depending on school size. Process includes: requirement analysis and \
             customization planning (3-5 days), data migration from existing systems (5-7 days), system configuration and \
             testing (7-10 days), user training for staff and teachers (3-5 days), parent onboarding and orientation (2-3 days), \
             and go-live with support team assistance. We provide a dedicated implementation manager throughout the process.",
        ),
        Microbot::text(
            "IntegrationBot",
            &["integration", "integrate", "existing system", "tally", "quickbooks", "paytm", "api", "gateway", "government portal"],
            "Yes, we support extensive integrations including: biometric attendance devices, accounting software (Tally, \
             QuickBooks), payment gateways (Paytm, PhonePe, Razorpay), SMS gateways for notifications, email service providers, \
             government education portals, learning management systems, and HR management software. We also provide API access \
             for custom integrations with your existing systems.",
        ),
        Microbot::text(
            "ActivitiesBot",
            &["activity", "event", "program", "celebration", "outing", "field trip"],
            "Our school organizes various activities and events throughout the year to enhance the learning experience of \
             students. These include cultural programs, sports events, science fairs, field trips, and other educational \
             outings that help students develop skills beyond academics.",
        ),
        Microbot::text(
            "AcademicsBot",
            &["academic", "curriculum", "subject", "course", "syllabus", "study"],
            "We offer comprehensive academic programs covering a wide range of subjects and curricula tailored to meet \
             educational standards. Our academic framework includes detailed syllabi, structured courses, and innovative \
             teaching methodologies to ensure holistic development of students.",
        ),
        Microbot::text(
            "StudentsBot",
            &["student", "pupil", "learner", "enrollment", "admission", "scholarship"],
            "Our student management system streamlines enrollment processes, tracks academic progress, manages student \
             records, and facilitates communication between educators and families. We support comprehensive student \
             information management from admission to graduation.",
        ),
        Microbot::text(
            "FacultyBot",
            &["faculty", "teacher", "professor", "instructor", "staff", "educator"],
            "Our faculty management system helps educational institutions efficiently manage teacher information, track \
             professional development, facilitate communication, and optimize resource allocation. The system supports \
             faculty scheduling, performance evaluation, and professional growth tracking.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_for(message: &str) -> Option<&'static str> {
        microbots().select(message).map(Microbot::name)
    }

    #[test]
    fn test_declared_priority() {
        assert_eq!(bot_for("what are your hrms pricing plans"), Some("PricingBot"));
        // TeacherSupportBot is declared before FacultyBot and shares its keywords.
        assert_eq!(bot_for("our faculty"), Some("TeacherSupportBot"));
        // "fee" belongs to FinancialManagementBot, declared before PricingBot.
        assert_eq!(bot_for("fee structure"), Some("FinancialManagementBot"));
    }

    #[test]
    fn test_about_questions_fall_through() {
        assert_eq!(bot_for("tell me about your company"), None);
    }
}
