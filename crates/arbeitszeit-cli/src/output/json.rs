use arbeitszeit_core::error::ArbeitszeitError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), ArbeitszeitError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
