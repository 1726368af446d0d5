use std::{io::Read, path::Path};

use crate::autocomplete::{self, Autocomplete};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {0}: {1}")]
    Term(u64, autocomplete::Error),
    #[error("line {0}: {1}")]
    Validation(u64, String),
}

/// Register terms from a CSV file of `term[,count]` rows.
/// Returns the number of rows imported.
pub fn import_csv(file_path: &Path, ac: &Autocomplete) -> Result<usize, ImportError> {
    log::info!("importing terms from {} ...", file_path.display());

    let file = std::fs::File::open(file_path)?;
    let n = import_reader(file, ac)?;

    log::info!("finished. imported {} terms", n);
    Ok(n)
}

fn import_reader<R: Read>(r: R, ac: &Autocomplete) -> Result<usize, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(r);

    let mut n = 0;
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let term = record.get(0).unwrap_or_default();
        if term.trim().is_empty() {
            continue;
        }

        let count = match record.get(1).map(str::trim) {
            None | Some("") => 1,
            Some(c) => c.parse::<u64>().map_err(|_| {
                ImportError::Validation(line, format!("invalid count '{}'", c))
            })?,
        };

        ac.register_weighted(term, count)
            .map_err(|e| ImportError::Term(line, e))?;
        n += 1;
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_rows() {
        let ac = Autocomplete::default();
        let data = "# seed\ncursor,2\ncurly\ncurrent,3\n\nCursor,1\n";

        let n = import_reader(data.as_bytes(), &ac).unwrap();
        assert_eq!(n, 4);

        let out = ac.autocomplete("cur", None, None);
        let got: Vec<(&str, u64)> = out.iter().map(|s| (s.term.as_str(), s.count)).collect();
        assert_eq!(got, vec![("cursor", 3), ("current", 3), ("curly", 1)]);
    }

    #[test]
    fn rejects_bad_count() {
        let ac = Autocomplete::default();

        let err = import_reader("ok\nbad,abc\n".as_bytes(), &ac).unwrap_err();
        assert!(matches!(err, ImportError::Validation(2, _)), "{err}");

        let err = import_reader("zero,0\n".as_bytes(), &ac).unwrap_err();
        assert!(matches!(err, ImportError::Term(1, _)), "{err}");
    }

    #[test]
    fn imports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.csv");
        std::fs::write(&path, "alpha\nbeta,4\n").unwrap();

        let ac = Autocomplete::default();
        assert_eq!(import_csv(&path, &ac).unwrap(), 2);
        assert_eq!(ac.get("BETA").map(|s| s.count), Some(4));

        assert!(matches!(
            import_csv(&dir.path().join("missing.csv"), &ac),
            Err(ImportError::Io(_))
        ));
    }
}
