pub mod authenticate;
pub mod dependency_bundle;

#[cfg(test)]
pub(crate) mod test_support;
