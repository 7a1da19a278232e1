use serde::Serialize;
use std::io::Write;

/// Serializes `data` as csv records, with a header row derived from `T`.
pub fn dump_data_to_csv<T: Serialize, W: Write>(data: &[T], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
