pub mod init;
pub mod losses;
