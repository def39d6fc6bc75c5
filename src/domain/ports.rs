use crate::utils::error::Result;

pub trait Storage {
    /// `Ok(None)` when nothing has been written at `path` yet.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn verbose(&self) -> bool;
}
