pub mod countries;
pub mod enrichment;
pub mod exchange;
pub mod news;
pub mod random_user;
pub mod upstream;
