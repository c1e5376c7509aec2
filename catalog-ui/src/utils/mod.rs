pub mod render;
#[cfg(test)]
pub mod test_server;
