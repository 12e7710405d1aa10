//! SVG input checks for files and pasted text

use crate::error::ImportError;
use std::fs;
use std::path::Path;

/// Read an SVG file. The name must end in `.svg`.
pub fn from_file(path: &Path) -> Result<String, ImportError> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "svg");
    if !is_svg {
        return Err(ImportError::NotSvgFile(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| ImportError::Io(path.to_path_buf(), e))?;
    tracing::debug!("loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Accept pasted text that looks like SVG.
pub fn from_paste(text: &str) -> Result<String, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    if !text.contains("<svg") {
        return Err(ImportError::MissingSvgTag);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_paste() {
        assert!(matches!(from_paste("   \n"), Err(ImportError::Empty)));
        assert!(matches!(from_paste("<html/>"), Err(ImportError::MissingSvgTag)));
        assert_eq!(from_paste("<svg/>").unwrap(), "<svg/>");
    }

    #[test]
    fn test_from_file_requires_svg_extension() {
        let result = from_file(&PathBuf::from("icon.png"));
        assert!(matches!(result, Err(ImportError::NotSvgFile(_))));
    }

    #[test]
    fn test_from_file_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(&path, "<svg/>").unwrap();
        assert_eq!(from_file(&path).unwrap(), "<svg/>");

        let missing = dir.path().join("missing.svg");
        assert!(matches!(from_file(&missing), Err(ImportError::Io(..))));
    }
}
