use sdfat32::io::std::FileIO;
use sdfat32::FAT32;

use super::Error;

pub fn info(fat32: &FAT32<FileIO>) -> Result<(), Error> {
    let partition = fat32.partition();
    let volume = fat32.descriptor();
    println!("Partition type      {:#04x}", partition.type_code);
    println!("Partition start     {}", partition.start);
    println!("Partition sectors   {}", partition.num_sectors);
    println!("Volume label        {}", fat32.volume_label());
    println!("Serial number       {:04X}-{:04X}", fat32.serial_number() >> 16, fat32.serial_number() & 0xFFFF);
    println!("FAT start           {}", volume.fat_start);
    println!("Sectors per FAT     {}", volume.sectors_per_fat);
    println!("Data start          {}", volume.data_start);
    println!("Sectors per cluster {}", volume.sectors_per_cluster);
    println!("Cluster count       {}", volume.cluster_count);
    println!("Root cluster        {}", volume.root_cluster);
    println!("Files in root       {}", fat32.count_files()?);
    Ok(())
}
