mod inventory_generator;
pub mod pager;

pub use inventory_generator::{
    normalize_chart_hostname, normalize_container_hostname, Classification, InventoryGenerator,
};
pub use pager::{query_all, DEFAULT_PAGE_SIZE, MAX_PAGES};
