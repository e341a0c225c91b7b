pub mod use_stores;
