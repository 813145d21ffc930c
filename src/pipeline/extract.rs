use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::pipeline::StageReport;
use crate::utils::fs as ufs;

/// Source-format → plain text conversion
pub trait TextExtractor {
    /// Extension (without dot) of the files this extractor reads
    fn extension(&self) -> &str;
    /// Full text of one document
    fn extract(&self, path: &Path) -> Result<String>;
}

/// PDF text extraction backed by `pdf-extract`
#[cfg(feature = "pdf")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

#[cfg(feature = "pdf")]
impl TextExtractor for PdfExtractor {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        pdf_extract::extract_text(path).map_err(|e| Error::Extract {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Convert every matching file of `source_dir` into `<stem>.txt` under `text_dir`
pub fn run_extract<E>(extractor: &E, source_dir: &Path, text_dir: &Path) -> Result<StageReport>
where
    E: TextExtractor + ?Sized,
{
    ufs::ensure_dir(text_dir)?;
    let files = ufs::list_files(source_dir, extractor.extension())?;
    let mut report = StageReport::new("extract");

    for path in &files {
        let text = match extractor.extract(path) {
            Ok(text) => text,
            Err(e) => {
                report.record_failure(e);
                continue;
            }
        };
        let out = text_dir.join(format!("{}.txt", ufs::file_stem(path)));
        match fs::write(&out, text) {
            Ok(()) => {
                report.processed += 1;
                info!(file = %ufs::file_name(path), "extracted text");
            }
            Err(source) => report.record_failure(Error::Persist { path: out, source }),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats `.src` files as already-extracted text, failing on empty ones
    struct Echo;

    impl TextExtractor for Echo {
        fn extension(&self) -> &str {
            "src"
        }

        fn extract(&self, path: &Path) -> Result<String> {
            let text = fs::read_to_string(path).map_err(|source| Error::SourceRead {
                path: path.to_path_buf(),
                source,
            })?;
            if text.is_empty() {
                return Err(Error::Extract { path: path.to_path_buf(), message: "no pages".into() });
            }
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn writes_one_text_file_per_source() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("pdf");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("MD_Acme_2019.src"), "page one\npage two\n").unwrap();
        fs::write(src.join("empty.src"), "").unwrap();
        fs::write(src.join("ignored.txt"), "nope").unwrap();
        let out = root.path().join("text");

        let report = run_extract(&Echo, &src, &out).unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], Error::Extract { .. }));
        assert_eq!(
            fs::read_to_string(out.join("MD_Acme_2019.txt")).unwrap(),
            "PAGE ONE\nPAGE TWO\n"
        );
        assert!(!out.join("empty.txt").exists());
        assert!(!out.join("ignored.txt").exists());
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn pdf_extractor_reports_broken_files() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("pdf");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("broken.pdf"), b"not a pdf").unwrap();
        let report = run_extract(&PdfExtractor, &src, &root.path().join("text")).unwrap();
        assert_eq!(report.processed, 0);
        assert_eq!(report.failures.len(), 1);
    }
}
