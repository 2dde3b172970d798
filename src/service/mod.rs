//! CustomerService: the domain layer between HTTP handlers and the store.

mod customer;
pub use customer::CustomerService;
