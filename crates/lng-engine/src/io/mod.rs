use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::{IoError, ResourceError},
    languages,
    store::Store,
};

pub const RESOURCE_EXTENSION: &str = "lng";

/// A language with a resource file in the resources directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableLanguage {
    /// Native display name, or the code when the language is unknown.
    pub name: String,
    /// Code as it appears in the file name.
    pub code: String,
}

/// Read a resource file and return its content
pub fn read_resource(relative_path: &RelativePath, resources_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(resources_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and load a resource file in one go
pub fn load_file(path: &Path) -> Result<Store, ResourceError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()).into());
    }
    let text = fs::read_to_string(path).map_err(IoError::Io)?;
    crate::load(&text).map_err(|source| ResourceError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for `.lng` files directly inside the resources directory
pub fn scan_resource_files(resources_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_resources_dir(resources_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(resources_root).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext.eq_ignore_ascii_case(RESOURCE_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Languages that have a resource file, sorted by display name
pub fn available_languages(resources_root: &Path) -> Result<Vec<AvailableLanguage>, IoError> {
    let mut available: Vec<AvailableLanguage> = scan_resource_files(resources_root)?
        .iter()
        .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
        .map(|code| AvailableLanguage {
            name: languages::full_name(&code).to_string(),
            code,
        })
        .collect();

    available.sort_by_key(|lang| lang.name.to_lowercase());
    Ok(available)
}

pub fn validate_resources_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidResourcesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_resources_dir};
    use pretty_assertions::assert_eq;

    const GERMAN: &str = "!!! === $ $ ;\n=== hello\nHallo\n";

    #[test]
    fn test_scan_finds_only_lng_files() {
        // Given a resources directory with mixed file types
        let dir = create_test_resources_dir();
        create_test_file(&dir, "de_DE.lng", GERMAN);
        create_test_file(&dir, "fr.LNG", GERMAN);
        create_test_file(&dir, "notes.txt", "not a resource");
        std::fs::create_dir(dir.path().join("nested.lng")).unwrap();

        // When scanning
        let files = scan_resource_files(dir.path()).unwrap();

        // Then only resource files are listed
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["de_DE.lng", "fr.LNG"]);
    }

    #[test]
    fn test_available_languages_sorted_by_name() {
        let dir = create_test_resources_dir();
        create_test_file(&dir, "ru_RU.lng", GERMAN);
        create_test_file(&dir, "de.lng", GERMAN);
        create_test_file(&dir, "zz_custom.lng", GERMAN);
        create_test_file(&dir, "en_US.lng", GERMAN);

        let langs = available_languages(dir.path()).unwrap();

        assert_eq!(
            langs,
            vec![
                AvailableLanguage {
                    name: "Deutsch".into(),
                    code: "de".into(),
                },
                AvailableLanguage {
                    name: "English (United States)".into(),
                    code: "en_US".into(),
                },
                AvailableLanguage {
                    name: "Pусский язык".into(),
                    code: "ru_RU".into(),
                },
                AvailableLanguage {
                    name: "zz_custom".into(),
                    code: "zz_custom".into(),
                },
            ]
        );
    }

    #[test]
    fn test_handle_invalid_resources_directory() {
        let result = scan_resource_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidResourcesDir(_))));
    }

    #[test]
    fn test_read_resource_success() {
        let dir = create_test_resources_dir();
        create_test_file(&dir, "de_DE.lng", GERMAN);

        let content = read_resource(RelativePath::new("de_DE.lng"), dir.path()).unwrap();
        assert_eq!(content, GERMAN);
    }

    #[test]
    fn test_read_resource_not_found() {
        let dir = create_test_resources_dir();
        let result = read_resource(RelativePath::new("xx.lng"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_file_resolves_strings() {
        let dir = create_test_resources_dir();
        let path = create_test_file(&dir, "de_DE.lng", GERMAN);

        let store = load_file(&path).unwrap();
        assert_eq!(store.lookup("hello").unwrap(), "Hallo");
    }

    #[test]
    fn test_load_file_reports_path_on_error() {
        let dir = create_test_resources_dir();
        let path = create_test_file(&dir, "broken.lng", "=== hello\nHallo\n");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ResourceError::Load { .. }));
        assert!(err.to_string().contains("broken.lng"));
    }
}
