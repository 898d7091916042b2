use pgs::Result;

use csv::Writer;

use serde::Serialize;

/// Serializes every record into one CSV string, headers included
pub fn write_records<T: Serialize>(records: impl IntoIterator<Item = T>) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    for record in records {
        writer.serialize(record)?;
    }

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
