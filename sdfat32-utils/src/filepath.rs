use std::io;

use sdfat32::error::{Error, OperationError};
use sdfat32::Directory;
use sdfat32::FileOrDirectory;

/// Resolve slash separated 8.3 names starting from `dir`
pub fn open<IO>(mut dir: Directory<IO>, path: &str) -> Result<FileOrDirectory<IO>, Error<io::Error>>
where
    IO: sdfat32::io::IO<Error = io::Error>,
{
    let path = path.trim().trim_matches('/');
    if path.is_empty() {
        return Ok(FileOrDirectory::Directory(dir));
    }
    let mut names = path.split('/').peekable();
    while let Some(name) = names.next() {
        let entry = dir.find(name)?.ok_or(Error::Operation(OperationError::NotFound))?;
        dir = match dir.open(&entry) {
            FileOrDirectory::Directory(dir) => dir,
            file if names.peek().is_none() => return Ok(file),
            FileOrDirectory::File(_) => return Err(OperationError::NotFound.into()),
        };
    }
    Ok(FileOrDirectory::Directory(dir))
}
