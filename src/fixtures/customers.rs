use crate::domain::customer::{Customer, CustomerStatus, CustomerType};
use crate::domain::types::CustomerId;
use crate::fixtures::timestamp;

struct Seed {
    id: i32,
    name: &'static str,
    company: Option<&'static str>,
    email: &'static str,
    phone: &'static str,
    city: &'static str,
    customer_type: CustomerType,
    status: CustomerStatus,
    revenue: f64,
    projects_count: u32,
    created: (i32, u32, u32),
    last_contact: Option<(i32, u32, u32)>,
}

const SEEDS: [Seed; 5] = [
    Seed {
        id: 1,
        name: "Anna Schmidt",
        company: Some("Schmidt Immobilien GmbH"),
        email: "anna.schmidt@schmidt-immobilien.de",
        phone: "+49 30 1234567",
        city: "Berlin",
        customer_type: CustomerType::Business,
        status: CustomerStatus::Active,
        revenue: 125_000.0,
        projects_count: 3,
        created: (2023, 3, 14),
        last_contact: Some((2024, 5, 2)),
    },
    Seed {
        id: 2,
        name: "Thomas Weber",
        company: None,
        email: "thomas.weber@example.de",
        phone: "+49 40 7654321",
        city: "Hamburg",
        customer_type: CustomerType::Private,
        status: CustomerStatus::Active,
        revenue: 48_500.0,
        projects_count: 1,
        created: (2023, 6, 2),
        last_contact: Some((2024, 4, 18)),
    },
    Seed {
        id: 3,
        name: "Stadtwerke München",
        company: Some("Stadtwerke München"),
        email: "einkauf@swm.example.de",
        phone: "+49 89 2345678",
        city: "München",
        customer_type: CustomerType::Public,
        status: CustomerStatus::Active,
        revenue: 310_000.0,
        projects_count: 2,
        created: (2022, 11, 21),
        last_contact: Some((2024, 5, 10)),
    },
    Seed {
        id: 4,
        name: "Julia Fischer",
        company: Some("Fischer Architekten"),
        email: "j.fischer@fischer-architekten.de",
        phone: "+49 221 3456789",
        city: "Köln",
        customer_type: CustomerType::Business,
        status: CustomerStatus::Lead,
        revenue: 0.0,
        projects_count: 0,
        created: (2024, 2, 8),
        last_contact: None,
    },
    Seed {
        id: 5,
        name: "Michael Wagner",
        company: None,
        email: "m.wagner@example.de",
        phone: "+49 69 4567890",
        city: "Frankfurt",
        customer_type: CustomerType::Private,
        status: CustomerStatus::Inactive,
        revenue: 12_800.0,
        projects_count: 0,
        created: (2022, 7, 30),
        last_contact: Some((2023, 9, 12)),
    },
];

/// The static customer fixture, ids `1..=5`.
pub fn fixture_customers() -> Vec<Customer> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let id = CustomerId::new(seed.id).ok()?;
            let (year, month, day) = seed.created;
            Some(Customer {
                id,
                name: seed.name.to_string(),
                company: seed.company.map(str::to_string),
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                city: seed.city.to_string(),
                customer_type: seed.customer_type,
                status: seed.status,
                revenue: seed.revenue,
                projects_count: seed.projects_count,
                created_at: timestamp(year, month, day, 9),
                last_contact: seed
                    .last_contact
                    .map(|(year, month, day)| timestamp(year, month, day, 14)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_sequential() {
        let ids: Vec<i32> = fixture_customers().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
