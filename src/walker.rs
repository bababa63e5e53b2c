//! 폴더 탐색 모듈
//!
//! 루트 폴더 아래의 대상 텍스트 파일을 지연(lazy) 방식으로 찾아냅니다.

use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, StripError};

/// 기본 대상 확장자 목록
pub const TARGET_EXTENSIONS: &[&str] = &[
    ".js", ".css", ".html", ".example", ".md", ".mmd", ".py", ".yaml", ".yml", ".sh", ".txt",
    ".h", ".cpp",
];

/// 탐색에서 제외할 폴더 이름
pub const EXCLUDED_DIR: &str = "node_modules";

/// 파일 이름 접미사(확장자) 집합
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// 새 확장자 집합 생성 (입력 순서 유지)
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// 파일 이름이 확장자 중 하나로 끝나는지 확인 (대소문자 구분)
    ///
    /// # Examples
    /// ```
    /// use strip_whitespace::walker::ExtensionSet;
    ///
    /// let set = ExtensionSet::default();
    /// assert!(set.matches("README.md"));
    /// assert!(set.matches(".env.example"));
    /// assert!(!set.matches("main.rs"));
    /// ```
    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(TARGET_EXTENSIONS.iter().copied())
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extensions.join(", "))
    }
}

/// 대상 파일 탐색기
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    extensions: ExtensionSet,
    excluded_dir: String,
}

impl Walker {
    /// 기본 확장자와 제외 폴더로 탐색기 생성
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: ExtensionSet::default(),
            excluded_dir: EXCLUDED_DIR.to_string(),
        }
    }

    /// 확장자 집합 설정
    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    /// 제외 폴더 이름 설정 (빈 문자열이면 아무것도 제외하지 않음)
    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dir = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// 폴더 경로에 제외 이름이 포함되어 있는지 확인
    ///
    /// 경로 문자열 전체에 대한 부분 문자열 검사이므로 루트 자체도 대상입니다.
    pub fn is_excluded(&self, dir: &Path) -> bool {
        !self.excluded_dir.is_empty() && dir.to_string_lossy().contains(&self.excluded_dir)
    }

    /// 대상 파일 경로를 순회하는 지연 이터레이터
    ///
    /// 읽을 수 없는 항목은 `StripError::Traversal`로 전달되고 탐색은 계속됩니다.
    /// 순서는 파일 시스템 열거 순서를 따르며 정렬되지 않습니다.
    pub fn entries(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(move |entry| {
                !(entry.file_type().is_dir() && self.is_excluded(entry.path()))
            })
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    // 파일 심볼릭 링크는 포함, 폴더 링크는 따라가지 않음
                    let is_target = entry.path().is_file()
                        && self
                            .extensions
                            .matches(&entry.file_name().to_string_lossy());
                    is_target.then(|| Ok(entry.into_path()))
                }
                Err(err) => Some(Err(StripError::from(err))),
            })
    }

    /// 탐색 에러를 무시하고 대상 파일 경로만 반환
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries().filter_map(|entry| entry.ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "content\n").unwrap();
        path
    }

    fn sorted_names(walker: &Walker) -> Vec<String> {
        let mut names: Vec<String> = walker
            .files()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_default_extensions() {
        let set = ExtensionSet::default();
        assert_eq!(set.len(), 13);
        for name in [
            "a.js", "a.css", "a.html", "a.example", "a.md", "a.mmd", "a.py", "a.yaml", "a.yml",
            "a.sh", "a.txt", "a.h", "a.cpp",
        ] {
            assert!(set.matches(name), "{name} should match");
        }
    }

    #[test]
    fn test_extension_is_suffix_match() {
        let set = ExtensionSet::default();
        assert!(!set.matches("a.rs"));
        assert!(!set.matches("a.MD"));
        assert!(!set.matches("a.md.bak"));
        assert!(!set.matches("Makefile"));
        // .hpp는 .h로 끝나지 않음
        assert!(!set.matches("a.hpp"));
    }

    #[test]
    fn test_extension_display() {
        let set = ExtensionSet::new([".md", ".txt"]);
        assert_eq!(set.to_string(), ".md, .txt");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![".md", ".txt"]);
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "notes.txt");
        create_file(temp_dir.path(), "main.rs");
        create_file(temp_dir.path(), "style.css");

        let walker = Walker::new(temp_dir.path());
        assert_eq!(sorted_names(&walker), vec!["notes.txt", "style.css"]);
    }

    #[test]
    fn test_walk_recurses_all_depths() {
        let temp_dir = TempDir::new().unwrap();
        let deep = temp_dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        create_file(temp_dir.path(), "root.md");
        create_file(&deep, "deep.py");

        let walker = Walker::new(temp_dir.path());
        assert_eq!(sorted_names(&walker), vec!["deep.py", "root.md"]);
    }

    #[test]
    fn test_walk_skips_excluded_dir() {
        let temp_dir = TempDir::new().unwrap();
        let modules = temp_dir.path().join("node_modules").join("pkg");
        fs::create_dir_all(&modules).unwrap();
        create_file(&modules, "index.js");
        create_file(temp_dir.path(), "app.js");

        let walker = Walker::new(temp_dir.path());
        assert_eq!(sorted_names(&walker), vec!["app.js"]);
    }

    #[test]
    fn test_excluded_name_is_substring_match() {
        let temp_dir = TempDir::new().unwrap();
        let vendored = temp_dir.path().join("old_node_modules_copy");
        fs::create_dir(&vendored).unwrap();
        create_file(&vendored, "lib.js");

        let walker = Walker::new(temp_dir.path());
        assert!(walker.files().next().is_none());
    }

    #[test]
    fn test_file_named_like_excluded_dir_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "node_modules.txt");

        let walker = Walker::new(temp_dir.path());
        assert_eq!(sorted_names(&walker), vec!["node_modules.txt"]);
    }

    #[test]
    fn test_empty_excluded_dir_excludes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let modules = temp_dir.path().join("node_modules");
        fs::create_dir(&modules).unwrap();
        create_file(&modules, "index.js");

        let walker = Walker::new(temp_dir.path()).with_excluded_dir("");
        assert_eq!(sorted_names(&walker), vec!["index.js"]);
    }

    #[test]
    fn test_custom_extensions() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "lib.rs");
        create_file(temp_dir.path(), "notes.txt");

        let walker = Walker::new(temp_dir.path()).with_extensions(ExtensionSet::new([".rs"]));
        assert_eq!(sorted_names(&walker), vec!["lib.rs"]);
    }

    #[test]
    fn test_directories_with_matching_names_are_not_yielded() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("docs.md")).unwrap();

        let walker = Walker::new(temp_dir.path());
        assert!(walker.files().next().is_none());
    }

    #[test]
    fn test_missing_root_yields_traversal_error() {
        let temp_dir = TempDir::new().unwrap();
        let walker = Walker::new(temp_dir.path().join("missing"));

        let entries: Vec<_> = walker.entries().collect();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], Err(StripError::Traversal { .. })));
    }
}
