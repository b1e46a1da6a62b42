pub mod manifest;
pub mod normalizer;
pub mod store;

#[cfg(test)]
mod manifest_tests;
#[cfg(test)]
mod store_tests;
