#[cfg(test)]
mod common;






#[cfg(test)]
mod test_table_store;
