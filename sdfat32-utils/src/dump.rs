use pretty_hex::PrettyHex;
use sdfat32::io::std::FileIO;
use sdfat32::FAT32;

use super::Error;

pub fn dump(fat32: &FAT32<FileIO>, sector: u32) -> Result<(), Error> {
    let mut block = [0u8; 512];
    fat32.read_block(sector.into(), &mut block)?;
    println!("{:?}", block.hex_dump());
    Ok(())
}
