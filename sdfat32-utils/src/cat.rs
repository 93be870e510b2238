use std::io;
use std::io::Write;

use sdfat32::error::{Error as FAT32Error, OperationError};
use sdfat32::io::std::FileIO;
use sdfat32::{FileOrDirectory, FAT32};

use super::Error;

pub fn cat(fat32: &FAT32<FileIO>, ordinal: u32) -> Result<(), Error> {
    let entry = fat32.find_file_by_ordinal(ordinal)?;
    let mut file = match fat32.open(&entry) {
        FileOrDirectory::File(file) => file,
        FileOrDirectory::Directory(_) => return Err(Error::String("Is a directory")),
    };
    let mut stdout = io::stdout().lock();
    let mut buf = [0u8; 512];
    loop {
        let size = match file.read(&mut buf) {
            Ok(size) => size,
            Err(FAT32Error::Operation(OperationError::EOF)) => break,
            Err(e) => return Err(e.into()),
        };
        stdout.write_all(&buf[..size]).map_err(Error::Stdout)?;
    }
    stdout.flush().map_err(Error::Stdout)
}
