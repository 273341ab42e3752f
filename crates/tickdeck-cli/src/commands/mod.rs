pub mod chance;
pub mod config;
pub mod draw;
pub mod groups;
pub mod pick;
pub mod race;
pub mod timer;

/// Print a serializable result as one JSON line.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
