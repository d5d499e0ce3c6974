use crate::domain::project::{Project, ProjectStatus, ProjectType};
use crate::domain::types::{CustomerId, ProjectId};
use crate::fixtures::date;

#[allow(clippy::type_complexity)]
const SEEDS: [(
    i32,
    i32,
    &str,
    ProjectType,
    ProjectStatus,
    f64,
    u8,
    (i32, u32, u32),
    Option<(i32, u32, u32)>,
); 6] = [
    (
        1,
        1,
        "Bürogebäude Friedrichstraße",
        ProjectType::NewBuild,
        ProjectStatus::InProgress,
        850_000.0,
        45,
        (2024, 1, 15),
        Some((2024, 12, 20)),
    ),
    (
        2,
        1,
        "Sanierung Altbau Prenzlauer Berg",
        ProjectType::Renovation,
        ProjectStatus::Completed,
        230_000.0,
        100,
        (2023, 4, 3),
        Some((2023, 11, 30)),
    ),
    (
        3,
        2,
        "Einfamilienhaus Blankenese",
        ProjectType::NewBuild,
        ProjectStatus::Planning,
        420_000.0,
        5,
        (2024, 6, 1),
        None,
    ),
    (
        4,
        3,
        "Wartung Umspannwerk Nord",
        ProjectType::Maintenance,
        ProjectStatus::InProgress,
        95_000.0,
        60,
        (2024, 2, 12),
        Some((2024, 8, 31)),
    ),
    (
        5,
        3,
        "Energieberatung Verwaltungsgebäude",
        ProjectType::Consulting,
        ProjectStatus::OnHold,
        18_000.0,
        20,
        (2024, 3, 4),
        None,
    ),
    (
        6,
        1,
        "Tiefgarage Friedrichstraße",
        ProjectType::NewBuild,
        ProjectStatus::Planning,
        310_000.0,
        0,
        (2024, 9, 1),
        None,
    ),
];

/// The static project fixture, ids `1..=6`.
pub fn fixture_projects() -> Vec<Project> {
    SEEDS
        .iter()
        .filter_map(
            |&(id, customer_id, name, project_type, status, budget, progress, start, end)| {
                Some(Project {
                    id: ProjectId::new(id).ok()?,
                    customer_id: CustomerId::new(customer_id).ok()?,
                    name: name.to_string(),
                    description: None,
                    project_type,
                    status,
                    budget,
                    progress,
                    start_date: date(start.0, start.1, start.2),
                    end_date: end.map(|(year, month, day)| date(year, month, day)),
                })
            },
        )
        .collect()
}
