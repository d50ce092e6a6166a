//! Demo fixtures for the `seed` command.

use chrono::{TimeZone, Utc};

use crate::fields::{Priority, Status};
use crate::project::Project;
use crate::task::{Comment, Task};

fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

/// A small portfolio of sample projects, the first one pre-populated with
/// tasks in every column.
pub fn sample_projects() -> Vec<Project> {
    let tasks = vec![
        Task {
            id: "1".to_string(),
            title: "User Authentication System".to_string(),
            description: "As a user, I want to be able to sign up and log in securely so that I can access my personalized dashboard.".to_string(),
            status: Status::Todo,
            priority: Priority::High,
            assignee: None,
            reporter: "John Doe".to_string(),
            comments: vec![Comment {
                id: "1".to_string(),
                content: "This should include OAuth integration with Google and GitHub.".to_string(),
                author: "Tech Lead".to_string(),
                created_at: day(2024, 1, 15),
            }],
            created_at: day(2024, 1, 10),
            updated_at: day(2024, 1, 15),
            story_points: Some(8),
            outcome: None,
        },
        Task {
            id: "2".to_string(),
            title: "Dashboard Analytics Widget".to_string(),
            description: "Create an interactive analytics dashboard that shows user engagement metrics and performance data.".to_string(),
            status: Status::Progress,
            priority: Priority::Medium,
            assignee: Some("Mike Chen".to_string()),
            reporter: "Sarah Johnson".to_string(),
            comments: vec![
                Comment {
                    id: "1".to_string(),
                    content: "Working on the chart integration.".to_string(),
                    author: "Mike Chen".to_string(),
                    created_at: day(2024, 1, 20),
                },
                Comment {
                    id: "2".to_string(),
                    content: "Please make sure to include responsive design for small terminals.".to_string(),
                    author: "UI Designer".to_string(),
                    created_at: day(2024, 1, 21),
                },
            ],
            created_at: day(2024, 1, 12),
            updated_at: day(2024, 1, 21),
            story_points: Some(5),
            outcome: None,
        },
        Task {
            id: "3".to_string(),
            title: "API Documentation".to_string(),
            description: "Document all REST API endpoints with examples and proper authentication headers.".to_string(),
            status: Status::Review,
            priority: Priority::Low,
            assignee: Some("Tech Lead".to_string()),
            reporter: "Tech Lead".to_string(),
            comments: Vec::new(),
            created_at: day(2024, 1, 8),
            updated_at: day(2024, 1, 22),
            story_points: Some(3),
            outcome: None,
        },
        Task {
            id: "4".to_string(),
            title: "Mobile App Setup".to_string(),
            description: "Set up the initial mobile project structure with navigation and basic components.".to_string(),
            status: Status::Done,
            priority: Priority::Urgent,
            assignee: Some("Alex Rodriguez".to_string()),
            reporter: "Product Manager".to_string(),
            comments: vec![Comment {
                id: "1".to_string(),
                content: "Project setup completed successfully! Ready for feature development.".to_string(),
                author: "Alex Rodriguez".to_string(),
                created_at: day(2024, 1, 18),
            }],
            created_at: day(2024, 1, 5),
            updated_at: day(2024, 1, 18),
            story_points: Some(13),
            outcome: Some("Project structure with navigation and basic components completed".to_string()),
        },
        Task {
            id: "5".to_string(),
            title: "Payment Integration".to_string(),
            description: "Integrate a payment provider for subscription management and one-time purchases.".to_string(),
            status: Status::Todo,
            priority: Priority::High,
            assignee: None,
            reporter: "Product Manager".to_string(),
            comments: Vec::new(),
            created_at: day(2024, 1, 14),
            updated_at: day(2024, 1, 14),
            story_points: Some(8),
            outcome: None,
        },
    ];

    vec![
        Project {
            id: "1".to_string(),
            name: "Task Management Platform".to_string(),
            key: "TMP".to_string(),
            description: "A comprehensive task management and project tracking platform for teams.".to_string(),
            tasks,
            created_at: day(2024, 1, 1),
        },
        Project {
            id: "2".to_string(),
            name: "E-commerce Website".to_string(),
            key: "ECW".to_string(),
            description: "Modern e-commerce platform with advanced analytics and user management.".to_string(),
            tasks: Vec::new(),
            created_at: day(2024, 1, 2),
        },
        Project {
            id: "3".to_string(),
            name: "Mobile Banking App".to_string(),
            key: "MBA".to_string(),
            description: "Secure mobile banking application with biometric authentication.".to_string(),
            tasks: Vec::new(),
            created_at: day(2024, 1, 3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_well_formed() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 3);

        let mut keys: Vec<String> = projects.iter().map(|p| p.key.to_lowercase()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), projects.len());

        // The seeded board covers every column.
        let seeded = &projects[0];
        for status in Status::ALL {
            assert!(!seeded.tasks_with_status(status).is_empty());
        }
    }
}
