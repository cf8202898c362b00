pub mod date_ops;

#[cfg(test)]
pub(crate) mod test_ops;
