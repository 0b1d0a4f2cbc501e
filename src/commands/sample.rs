use crate::core::TaskCollection;
use anyhow::Result;
use std::io::Write;

/// Write the sample collection as pretty JSON, usable as `report` input.
pub fn write_sample<W: Write>(mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(&TaskCollection::sample())?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{parse_tasks, InputFormat};

    #[test]
    fn test_sample_output_reloads() {
        let mut buf = Vec::new();
        write_sample(&mut buf).unwrap();

        let tasks = parse_tasks(&String::from_utf8(buf).unwrap(), InputFormat::Json).unwrap();
        assert_eq!(tasks, TaskCollection::sample());
    }
}
