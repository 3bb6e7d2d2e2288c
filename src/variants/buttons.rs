//! Product overview replies for the `/button` endpoint

use super::ButtonReply;

pub(super) const HRMS_SYSTEM: ButtonReply = ButtonReply {
    label: "hrms system",
    reply: "🏢 HRMS (Human Resource Management System)

Our comprehensive HRMS solution offers:

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

💰 Payroll Management
• Automatic salary calculations
• Complete payroll solution
• Digital salary slips (PDF generation)
• Automated PF, ESI calculation

📋 Task Management
• Assign tasks to employees
• Track status & progress
• Daily/weekly reporting

Contact our HRMS team at hrglobaltechsoftwaresolutions@gmail.com for a personalized demo!",
};

pub(super) const SCHOOL_SYSTEM: ButtonReply = ButtonReply {
    label: "school system",
    reply: "🏫 SCHOOL Management System

Our innovative SCHOOL Management System provides:

📚 Student Information System
• Student profiles and academic records
• Attendance tracking
• Grade management
• Parent communication portal

👨‍🏫 Staff Management
• Teacher profiles and schedules
• Performance evaluation
• Leave management
• Payroll integration

📅 Academic Calendar
• Event scheduling
• Exam timetables
• Holiday management
• Resource allocation

📈 Reporting & Analytics
• Student performance reports
• Attendance analytics
• Financial reports
• Custom dashboard

Contact our SCHOOL team for a demonstration of how we can transform your educational institution!",
};
