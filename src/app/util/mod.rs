pub mod janitor;
pub mod reqwest;
pub mod time;

#[cfg(test)]
pub mod testing;
