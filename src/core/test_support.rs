use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

type SharedBytes = Rc<RefCell<Vec<u8>>>;

/// 記憶體內的 Storage，供單元測試使用
#[derive(Clone, Default)]
pub struct MockStorage {
    files: Rc<RefCell<HashMap<PathBuf, SharedBytes>>>,
    dirs: Rc<RefCell<HashSet<PathBuf>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, data: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.into(), Rc::new(RefCell::new(data.to_vec())));
    }

    pub fn get_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|bytes| bytes.borrow().clone())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    pub fn file_names_in(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir.as_ref()))
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    fn not_found(path: &Path) -> EtlError {
        EtlError::file_access(
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such file in mock storage"),
        )
    }
}

struct SharedWriter(SharedBytes);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Storage for MockStorage {
    fn open_reader(&self, path: &Path) -> Result<Box<dyn Read>> {
        let data = self.read_file(path)?;
        Ok(Box::new(Cursor::new(data)))
    }

    fn create_writer(&self, path: &Path) -> Result<Box<dyn Write>> {
        let bytes: SharedBytes = Rc::new(RefCell::new(Vec::new()));
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), Rc::clone(&bytes));
        Ok(Box::new(SharedWriter(bytes)))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.get_file(path).ok_or_else(|| Self::not_found(path))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.insert(path, data);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}
