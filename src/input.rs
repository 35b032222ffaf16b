use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tracing::{debug, warn};

use crate::convert::NameRow;

/// Load the ranked-names CSV at `path` into memory.
///
/// The header row is required; the `rank` and `name` columns are located by
/// header name and every other column is dropped. A missing column or blank
/// cell becomes `None` on the row, to be handled by the conversion policies
/// downstream rather than rejected here.
pub fn load_rows(path: &Path) -> Result<Vec<NameRow>> {
    let file =
        File::open(path).with_context(|| format!("opening input CSV {}", path.display()))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("reading CSV header from {}", path.display()))?;
    let rank_idx = headers.iter().position(|h| h.trim() == "rank");
    let name_idx = headers.iter().position(|h| h.trim() == "name");
    if name_idx.is_none() {
        warn!(path = %path.display(), "input CSV has no 'name' column, every row will be skipped");
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("parsing CSV record in {}", path.display()))?;
        rows.push(NameRow {
            rank: rank_idx.and_then(|i| record.get(i)).map(str::to_string),
            name: name_idx.and_then(|i| record.get(i)).map(str::to_string),
        });
    }

    debug!(rows = rows.len(), "loaded input CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn picks_rank_and_name_columns_and_drops_the_rest() -> Result<()> {
        let tmp = csv_file(
            "rank,name,alt_spellings,n_sum\n\
             1,Anna,Ana,120\n\
             2,Mary,,80\n",
        )?;

        let rows = load_rows(tmp.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank.as_deref(), Some("1"));
        assert_eq!(rows[0].name.as_deref(), Some("Anna"));
        assert_eq!(rows[1].name.as_deref(), Some("Mary"));
        Ok(())
    }

    #[test]
    fn missing_rank_column_yields_none_ranks() -> Result<()> {
        let tmp = csv_file("name\nAnna\nMary\n")?;

        let rows = load_rows(tmp.path())?;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.rank.is_none()));
        assert_eq!(rows[0].name.as_deref(), Some("Anna"));
        Ok(())
    }

    #[test]
    fn structurally_broken_csv_is_an_error() -> Result<()> {
        // Second record has fewer fields than the header.
        let tmp = csv_file("rank,name\n1,Anna\n2\n")?;
        assert!(load_rows(tmp.path()).is_err());
        Ok(())
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let err = load_rows(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().contains("opening input CSV"));
    }

    #[test]
    fn non_ascii_names_pass_through() -> Result<()> {
        let tmp = csv_file("rank,name\n1,Zoë\n2,Åsa\n")?;

        let rows = load_rows(tmp.path())?;
        assert_eq!(rows[0].name.as_deref(), Some("Zoë"));
        assert_eq!(rows[1].name.as_deref(), Some("Åsa"));
        Ok(())
    }
}
