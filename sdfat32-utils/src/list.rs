use chrono::NaiveDateTime;
use sdfat32::io::std::FileIO;
use sdfat32::{FileOrDirectory, FAT32};

use super::filepath::open;
use super::Error;

pub fn list(fat32: &FAT32<FileIO>, path: &str) -> Result<(), Error> {
    let directory = match open(fat32.root_directory(), path)? {
        FileOrDirectory::File(_) => return Err(Error::String("Not a directory")),
        FileOrDirectory::Directory(dir) => dir,
    };
    let mut ordinal = 0;
    directory.walk(|entry| -> Option<()> {
        ordinal += 1;
        let attrs = entry.attributes();
        print!("{:4} ", ordinal);
        print!("{}", if attrs.directory() { "d" } else { "-" });
        print!("{}", if attrs.read_only() { "r" } else { "-" });
        print!("{}", if attrs.system() { "s" } else { "-" });
        print!("{}", if attrs.hidden() { "h" } else { "-" });
        print!("{}", if attrs.archive() { "a" } else { "-" });
        print!(" {:10}", entry.file_size());
        match NaiveDateTime::try_from(entry.modified()) {
            Ok(datetime) => print!(" {}", datetime.format("%Y-%m-%d %H:%M:%S")),
            Err(_) => print!(" {:19}", "-"),
        }
        match attrs.directory() {
            true => println!(" {}/", entry.filename()),
            false => println!(" {}", entry.filename()),
        }
        None
    })?;
    Ok(())
}
