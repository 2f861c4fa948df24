use anyhow::{anyhow, Result};
use std::str::FromStr;

pub fn parse_number<T: FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid {} value '{}'", name, value))
}
