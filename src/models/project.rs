//! The project catalog.
//!
//! Two static lists: rich summaries for the portfolio listing, and detail
//! references resolving a project id to its markdown resource. Lookup is
//! exact and case-sensitive.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Declarative display data for one portfolio entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Static image path, carried for parity with the web listing
    pub image: String,
    pub technologies: Vec<String>,
    pub date: NaiveDate,
    /// Route of the detail page
    pub url: String,
}

/// Resolves a navigation id to the markdown resource to fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub markdown_file: String,
}

/// Exact-match lookup in the detail catalog.
pub fn find_detail(id: &str) -> Option<&'static ProjectDetail> {
    PROJECT_DETAILS.iter().find(|project| project.id == id)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Catalog dates are compile-time constants; an invalid one is a bug.
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Portfolio listing entries.
pub static PROJECT_SUMMARIES: Lazy<Vec<ProjectSummary>> = Lazy::new(|| {
    vec![
        ProjectSummary {
            id: "angular-todo-app".to_string(),
            title: "Angular Todo Application".to_string(),
            description: "A modern todo application built with Angular 20, featuring dark/light mode, local storage persistence, and responsive design.".to_string(),
            image: "/assets/images/angular-todo.jpg".to_string(),
            technologies: vec![
                "Angular".to_string(),
                "TypeScript".to_string(),
                "SCSS".to_string(),
                "RxJS".to_string(),
            ],
            date: date(2024, 1, 15),
            url: "/project/angular-todo-app".to_string(),
        },
        ProjectSummary {
            id: "react-dashboard".to_string(),
            title: "React Analytics Dashboard".to_string(),
            description: "A comprehensive analytics dashboard with real-time data visualization, built with React and Chart.js.".to_string(),
            image: "/assets/images/react-dashboard.jpg".to_string(),
            technologies: vec![
                "React".to_string(),
                "Chart.js".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            date: date(2023, 11, 20),
            url: "/project/react-dashboard".to_string(),
        },
        ProjectSummary {
            id: "vue-ecommerce".to_string(),
            title: "Vue.js E-commerce Platform".to_string(),
            description: "A full-stack e-commerce solution with payment integration, user authentication, and admin panel.".to_string(),
            image: "/assets/images/vue-ecommerce.jpg".to_string(),
            technologies: vec![
                "Vue.js".to_string(),
                "Express.js".to_string(),
                "PostgreSQL".to_string(),
                "Stripe".to_string(),
            ],
            date: date(2023, 9, 10),
            url: "/project/vue-ecommerce".to_string(),
        },
    ]
});

/// Detail references for every project with a markdown page.
pub static PROJECT_DETAILS: Lazy<Vec<ProjectDetail>> = Lazy::new(|| {
    vec![
        ProjectDetail {
            id: "angular-todo-app".to_string(),
            title: "Angular Todo Application".to_string(),
            markdown_file: "angular-todo-app.md".to_string(),
        },
        ProjectDetail {
            id: "react-dashboard".to_string(),
            title: "React Analytics Dashboard".to_string(),
            markdown_file: "react-dashboard.md".to_string(),
        },
        ProjectDetail {
            id: "vue-ecommerce".to_string(),
            title: "Vue.js E-commerce Platform".to_string(),
            markdown_file: "vue-ecommerce.md".to_string(),
        },
    ]
});
