//! Title relevance index
//!
//! A static catalogue of canonical job titles plus keyword -> title-set
//! special mappings. Free-text scoring alone over-matches (a nursing query
//! would admit any posting whose summary mentions "care"), so the related
//! titles produced here feed the mandatory title gate in the query planner:
//! a gating condition, not a scoring boost.

use once_cell::sync::Lazy;

/// Canonical job titles, ordered; lowercase comparisons are done on demand.
static CANONICAL_TITLES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Engineering
        "Software Engineer",
        "Senior Software Engineer",
        "Staff Software Engineer",
        "Frontend Developer",
        "Backend Developer",
        "Full Stack Developer",
        "Mobile Developer",
        "DevOps Engineer",
        "Site Reliability Engineer",
        "QA Engineer",
        "Security Engineer",
        "Embedded Systems Engineer",
        "Data Engineer",
        "Machine Learning Engineer",
        // Data
        "Data Scientist",
        "Data Analyst",
        "Business Intelligence Analyst",
        // Design
        "Product Designer",
        "UX Designer",
        "UI Designer",
        "Graphic Designer",
        // Product & management
        "Product Manager",
        "Project Manager",
        "Engineering Manager",
        "Program Manager",
        // Healthcare
        "Registered Nurse",
        "Nurse Practitioner",
        "Licensed Practical Nurse",
        "Physician",
        "Medical Assistant",
        "Physical Therapist",
        "Pharmacist",
        "Dental Hygienist",
        // Business & operations
        "Account Executive",
        "Sales Development Representative",
        "Business Development Manager",
        "Marketing Manager",
        "Content Marketing Specialist",
        "Financial Analyst",
        "Accountant",
        "Bookkeeper",
        "Human Resources Manager",
        "Recruiter",
        "Talent Acquisition Specialist",
        "Customer Support Specialist",
        "Administrative Assistant",
        "Operations Manager",
        // Legal & education
        "Attorney",
        "Paralegal",
        "Teacher",
        "Instructional Designer",
        // Logistics & services
        "Warehouse Associate",
        "Delivery Driver",
        "Chef",
        "Line Cook",
    ]
});

/// Broad domain keyword -> fixed subset of canonical titles.
static SPECIAL_MAPPINGS: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "engineering",
            &[
                "Software Engineer",
                "Senior Software Engineer",
                "Staff Software Engineer",
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
                "DevOps Engineer",
                "Site Reliability Engineer",
                "QA Engineer",
                "Security Engineer",
                "Embedded Systems Engineer",
                "Data Engineer",
                "Machine Learning Engineer",
            ][..],
        ),
        (
            "healthcare",
            &[
                "Registered Nurse",
                "Nurse Practitioner",
                "Licensed Practical Nurse",
                "Physician",
                "Medical Assistant",
                "Physical Therapist",
                "Pharmacist",
                "Dental Hygienist",
            ][..],
        ),
        (
            "data",
            &[
                "Data Scientist",
                "Data Analyst",
                "Data Engineer",
                "Machine Learning Engineer",
                "Business Intelligence Analyst",
            ][..],
        ),
        (
            "design",
            &[
                "Product Designer",
                "UX Designer",
                "UI Designer",
                "Graphic Designer",
                "Instructional Designer",
            ][..],
        ),
        (
            "sales",
            &[
                "Account Executive",
                "Sales Development Representative",
                "Business Development Manager",
            ][..],
        ),
        (
            "finance",
            &["Financial Analyst", "Accountant", "Bookkeeper"][..],
        ),
        (
            "legal",
            &["Attorney", "Paralegal"][..],
        ),
        (
            "logistics",
            &["Warehouse Associate", "Delivery Driver", "Operations Manager"][..],
        ),
    ]
});

/// Canonical titles considered relevant to the raw query.
///
/// Union of three match strategies, deduplicated:
/// 1. direct: a title's lowercased form contains the whole lowercased query
/// 2. keyword: a title contains any whitespace-separated query keyword of
///    length >= 3
/// 3. special mapping: the query contains a broad domain keyword with a fixed
///    title set
///
/// Empty or non-matching queries yield an empty set.
pub fn related_titles(query: &str) -> Vec<&'static str> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let mut related: Vec<&'static str> = Vec::new();
    let mut push = |title: &'static str| {
        if !related.contains(&title) {
            related.push(title);
        }
    };

    let keywords: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|k| k.len() >= 3)
        .collect();

    for &title in CANONICAL_TITLES.iter() {
        let title_lower = title.to_lowercase();
        if title_lower.contains(&query_lower) {
            push(title);
            continue;
        }
        if keywords.iter().any(|k| title_lower.contains(k)) {
            push(title);
        }
    }

    for (keyword, titles) in SPECIAL_MAPPINGS.iter() {
        if query_lower.contains(keyword) {
            for &title in *titles {
                push(title);
            }
        }
    }

    related
}
