// crates/dinerdb-core/src/store/customer.rs
use super::Store;
use crate::model::{Customer, Id};
use crate::order::sorted_by;
use crate::traits::Insert;

impl Insert<Customer> for Store<Customer> {
    fn add(&mut self, record: Customer) -> bool {
        self.add_keyed(record)
    }
}

impl Store<Customer> {
    /// All customers, ascending id.
    pub fn customers(&self) -> Vec<Customer> {
        self.all()
    }

    pub fn customer(&self, id: Id) -> Option<&Customer> {
        self.get(id)
    }

    pub fn customers_by_id(&self, subset: &[Customer]) -> Vec<Customer> {
        sorted_by(subset, Customer::cmp_by_id)
    }

    /// All customers by last name, first name, then id.
    pub fn customers_by_name(&self) -> Vec<Customer> {
        sorted_by(self.records(), Customer::cmp_by_name)
    }

    pub fn sort_customers_by_name(&self, subset: &[Customer]) -> Vec<Customer> {
        sorted_by(subset, Customer::cmp_by_name)
    }

    /// Customers whose first or last name contains every word of `term`,
    /// ordered by name. A blank term finds nothing.
    pub fn customers_containing(&self, term: &str) -> Vec<Customer> {
        self.search(term, Customer::cmp_by_name)
    }
}
