pub mod contact;
pub mod home;
pub mod team;
