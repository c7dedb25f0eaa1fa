use std::fs;
use std::path::Path;

use crate::output::OutputResult;
use crate::venue::Venue;

/// Writes the venue dataset to a CSV file
///
/// The header row comes from the `Venue` field names; absent optional
/// fields serialize as empty cells, which the map frontend tolerates.
/// Creates the parent directory when it does not exist yet.
pub fn write_csv(path: &Path, venues: &[Venue]) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for venue in venues {
        writer.serialize(venue)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} venues to {}", venues.len(), path.display());
    Ok(())
}
