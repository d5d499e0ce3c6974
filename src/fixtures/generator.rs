//! Synthetic customers for filling long listings.

use chrono::{DateTime, Days, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::customer::{Customer, CustomerStatus, CustomerType};
use crate::domain::types::CustomerId;
use crate::fixtures::timestamp;

const FIRST_NAMES: [&str; 8] = [
    "Lukas", "Sophie", "Jonas", "Marie", "Felix", "Lena", "Paul", "Hannah",
];
const LAST_NAMES: [&str; 6] = ["Becker", "Hoffmann", "Schulz", "Koch", "Richter", "Wolf"];
const CITIES: [&str; 8] = [
    "Berlin",
    "Hamburg",
    "München",
    "Köln",
    "Frankfurt",
    "Stuttgart",
    "Düsseldorf",
    "Leipzig",
];
const TYPES: [CustomerType; 3] = [
    CustomerType::Private,
    CustomerType::Business,
    CustomerType::Public,
];
const STATUSES: [CustomerStatus; 3] = [
    CustomerStatus::Active,
    CustomerStatus::Lead,
    CustomerStatus::Inactive,
];

/// Produces customers as a pure function of an index.
///
/// Name, city, type and status cycle through fixed lists. Revenue, phone and
/// project count come from an RNG seeded with `seed + index`, so a generator
/// yields the same record for the same index, while generators created with
/// different seeds differ in those numeric fields.
#[derive(Clone, Debug)]
pub struct MockCustomerGenerator {
    seed: u64,
    first_id: CustomerId,
}

impl MockCustomerGenerator {
    pub fn new(seed: u64, first_id: CustomerId) -> Self {
        Self { seed, first_id }
    }

    /// Generator with a fresh random seed, used once per server run.
    pub fn from_entropy(first_id: CustomerId) -> Self {
        Self::new(rand::random(), first_id)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self, index: usize) -> Customer {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));

        let first_name = FIRST_NAMES[index % FIRST_NAMES.len()];
        let last_name = LAST_NAMES[(index / FIRST_NAMES.len()) % LAST_NAMES.len()];
        let customer_type = TYPES[index % TYPES.len()];
        let status = STATUSES[index % STATUSES.len()];

        let company = match customer_type {
            CustomerType::Private => None,
            CustomerType::Business => Some(format!("{last_name} & Partner GmbH")),
            CustomerType::Public => Some(format!("Gemeinde {}", CITIES[index % CITIES.len()])),
        };
        let revenue = match status {
            CustomerStatus::Lead => 0.0,
            _ => (rng.random_range(5_000.0..450_000.0_f64) / 100.0).round() * 100.0,
        };

        Customer {
            id: self.first_id.offset(index),
            name: format!("{first_name} {last_name}"),
            company,
            email: format!(
                "{}.{}{}@example.de",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                index
            ),
            phone: format!(
                "+49 {} {}",
                rng.random_range(30..=99),
                rng.random_range(1_000_000..=9_999_999)
            ),
            city: CITIES[index % CITIES.len()].to_string(),
            customer_type,
            status,
            revenue,
            projects_count: rng.random_range(0..=6),
            created_at: created_at(index),
            last_contact: (status != CustomerStatus::Lead).then(|| created_at(index + 30)),
        }
    }

    /// Customers for indices `0..count`.
    pub fn generate_many(&self, count: usize) -> Vec<Customer> {
        (0..count).map(|index| self.generate(index)).collect()
    }
}

fn created_at(index: usize) -> DateTime<Utc> {
    let base = timestamp(2023, 1, 2, 10);
    base.checked_add_days(Days::new(index as u64 * 7))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u64) -> MockCustomerGenerator {
        MockCustomerGenerator::new(seed, CustomerId::new(6).expect("valid id"))
    }

    #[test]
    fn same_index_yields_same_customer() {
        let generator = generator(42);
        assert_eq!(generator.generate(7), generator.generate(7));
    }

    #[test]
    fn cycling_fields_do_not_depend_on_seed() {
        let a = generator(1).generate(7);
        let b = generator(2).generate(7);
        assert_eq!(a.city, b.city);
        assert_eq!(a.customer_type, b.customer_type);
        assert_eq!(a.status, b.status);
        assert_eq!(a.city, "Leipzig");
        assert_eq!(a.customer_type, CustomerType::Business);
        assert_eq!(a.status, CustomerStatus::Lead);
    }

    #[test]
    fn ids_follow_the_fixture() {
        let customers = generator(3).generate_many(20);
        assert_eq!(customers.len(), 20);
        assert_eq!(customers[0].id.get(), 6);
        assert_eq!(customers[19].id.get(), 25);
    }

    #[test]
    fn leads_have_no_revenue() {
        for customer in generator(9).generate_many(12) {
            if customer.status == CustomerStatus::Lead {
                assert_eq!(customer.revenue, 0.0);
                assert!(customer.last_contact.is_none());
            } else {
                assert!(customer.revenue >= 5_000.0);
            }
        }
    }
}
