#[cfg(test)]
pub mod test {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    use crate::file::FileSource;

    /// A shared credentials file mixing header styles, comments and quoting.
    pub const CREDENTIALS: &str = "\
# Default credentials
[default]
aws_access_key_id = YOUR_AWS_ACCESS_KEY_ID
aws_secret_access_key = \"YOUR_AWS_SECRET_ACCESS_KEY\"

[project1]
aws_access_key_id=ANOTHER_AWS_ACCESS_KEY_ID
aws_secret_access_key='ANOTHER_AWS_SECRET_ACCESS_KEY'
region = ap-southeast-2

[profile project2]
was = 🦜
key = 🔑
";

    /// A config file whose `default` profile conflicts with [`CREDENTIALS`].
    pub const CONFIG: &str = "\
[default]
aws_access_key_id = CONFIG_ACCESS_KEY_ID
region = us-west-2

# passthrough values
some_other_config = FRAUD

more_other_config = MONEY

[profile project2]
now = 🔮
default_region = eu-north-1
";

    /// In-memory [`FileSource`] that records every read.
    #[derive(Default)]
    pub struct MemoryFiles {
        files: HashMap<PathBuf, String>,
        pub reads: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFiles {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }
    }

    impl FileSource for MemoryFiles {
        fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn read_text(&self, path: &Path) -> io::Result<String> {
            self.reads.borrow_mut().push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    /// [`FileSource`] that fails the test if it is touched at all.
    pub struct ForbiddenFiles;

    impl FileSource for ForbiddenFiles {
        fn exists(&self, path: &Path) -> bool {
            panic!("unexpected exists({})", path.display());
        }

        fn read_text(&self, path: &Path) -> io::Result<String> {
            panic!("unexpected read_text({})", path.display());
        }
    }

    #[test]
    fn memory_files_records_reads() {
        let files = MemoryFiles::new().with("/a", "x = 1");
        assert!(files.exists(Path::new("/a")));
        assert!(!files.exists(Path::new("/b")));
        assert_eq!(files.read_text(Path::new("/a")).unwrap(), "x = 1");
        assert_eq!(files.reads.borrow().len(), 1);
    }
}
